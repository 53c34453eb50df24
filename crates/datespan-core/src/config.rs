//! Static configuration for a date range input.

use chrono::NaiveDate;

const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(d) => d,
        None => panic!("invalid built-in date"),
    }
}

/// Earliest selectable day when no minimum is configured.
pub const DEFAULT_MIN_DATE: NaiveDate = ymd(1900, 1, 1);

/// Latest selectable day when no maximum is configured.
pub const DEFAULT_MAX_DATE: NaiveDate = ymd(2100, 12, 31);

/// Default parse/render pattern.
pub const DEFAULT_FORMAT: &str = "%Y-%m-%d";

/// Configuration for a date range input, immutable per transition.
///
/// `min_date > max_date` is not validated; classification then reports every
/// day as out of range.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct InputConfig {
    /// strftime-style pattern used to parse and render field text.
    pub format: String,
    /// Earliest selectable day (inclusive).
    pub min_date: NaiveDate,
    /// Latest selectable day (inclusive).
    pub max_date: NaiveDate,
    /// Whether start and end may be the same day.
    pub allow_single_day_range: bool,
    /// Text a blurred field shows for a committed unparseable entry.
    pub invalid_message: String,
    /// Text a blurred field shows for a committed out-of-bounds entry.
    pub out_of_range_message: String,
    /// Open the calendar popover when a field gains focus.
    pub open_on_focus: bool,
    /// Ignore all events.
    pub disabled: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_FORMAT.to_string(),
            min_date: DEFAULT_MIN_DATE,
            max_date: DEFAULT_MAX_DATE,
            allow_single_day_range: false,
            invalid_message: "Invalid date".to_string(),
            out_of_range_message: "Out of range".to_string(),
            open_on_focus: true,
            disabled: false,
        }
    }
}

impl InputConfig {
    /// Create a configuration with all defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the parse/render pattern (builder).
    #[must_use]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    /// Set the inclusive selectable bounds (builder).
    #[must_use]
    pub fn with_bounds(mut self, min: NaiveDate, max: NaiveDate) -> Self {
        self.min_date = min;
        self.max_date = max;
        self
    }

    /// Allow start and end to fall on the same day (builder).
    #[must_use]
    pub fn with_allow_single_day_range(mut self, allow: bool) -> Self {
        self.allow_single_day_range = allow;
        self
    }

    /// Set the invalid-entry display message (builder).
    #[must_use]
    pub fn with_invalid_message(mut self, message: impl Into<String>) -> Self {
        self.invalid_message = message.into();
        self
    }

    /// Set the out-of-range display message (builder).
    #[must_use]
    pub fn with_out_of_range_message(mut self, message: impl Into<String>) -> Self {
        self.out_of_range_message = message.into();
        self
    }

    /// Control whether focus opens the popover (builder).
    #[must_use]
    pub fn with_open_on_focus(mut self, open: bool) -> Self {
        self.open_on_focus = open;
        self
    }

    /// Enable or disable the whole input (builder).
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}
