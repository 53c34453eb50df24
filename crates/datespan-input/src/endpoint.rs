//! Per-boundary reconciliation state.

use std::ops::{Index, IndexMut};

use datespan_core::{Boundary, DateValue, InputConfig, RangeCheck, classify, format_date};

/// One boundary's state: committed value, in-flight text, focus flag.
///
/// `raw_text` exists exactly while the field has focus: it is seeded on
/// focus gain and retired on blur, so a blurred endpoint always derives its
/// text from `value`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Endpoint {
    /// Committed value.
    pub value: DateValue,
    /// Text being edited, present while focused.
    pub raw_text: Option<String>,
    /// Whether the field currently has focus.
    pub focused: bool,
}

impl Endpoint {
    /// The text the field should display right now.
    ///
    /// Focused: the raw text, untouched, so the machine never fights the
    /// user's keystrokes. Blurred: derived purely from `value` — formatted
    /// day, empty, or one of the configured error messages.
    #[must_use]
    pub fn display_text(&self, config: &InputConfig) -> String {
        if self.focused {
            return self.raw_text.clone().unwrap_or_default();
        }
        derived_text(self.value, config)
    }

    /// The text an edit session starts from when the field gains focus.
    ///
    /// A concrete day seeds its formatted text (even out of range, so the
    /// user can correct it); absent and committed-invalid values seed empty.
    #[must_use]
    pub(crate) fn seed_text(&self, config: &InputConfig) -> String {
        format_date(self.value.day(), &config.format)
    }
}

/// The blurred-field derivation: `value` and config in, display text out.
#[must_use]
pub(crate) fn derived_text(value: DateValue, config: &InputConfig) -> String {
    match value {
        DateValue::Absent => String::new(),
        DateValue::Invalid => config.invalid_message.clone(),
        DateValue::Day(d) => match classify(d, config.min_date, config.max_date) {
            RangeCheck::InRange => format_date(Some(d), &config.format),
            RangeCheck::OutOfRange => config.out_of_range_message.clone(),
        },
    }
}

/// Both endpoints, selected by [`Boundary`] instead of a runtime key name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct EndpointPair {
    /// The start (left) endpoint.
    pub start: Endpoint,
    /// The end (right) endpoint.
    pub end: Endpoint,
}

impl EndpointPair {
    /// The committed days as a plain pair.
    #[must_use]
    pub fn days(&self) -> (Option<chrono::NaiveDate>, Option<chrono::NaiveDate>) {
        (self.start.value.day(), self.end.value.day())
    }
}

impl Index<Boundary> for EndpointPair {
    type Output = Endpoint;

    fn index(&self, boundary: Boundary) -> &Endpoint {
        match boundary {
            Boundary::Start => &self.start,
            Boundary::End => &self.end,
        }
    }
}

impl IndexMut<Boundary> for EndpointPair {
    fn index_mut(&mut self, boundary: Boundary) -> &mut Endpoint {
        match boundary {
            Boundary::Start => &mut self.start,
            Boundary::End => &mut self.end,
        }
    }
}
