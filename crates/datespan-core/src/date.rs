//! Typed date values and boundary conversion.

use chrono::{DateTime, NaiveDate, TimeZone};

/// The committed start/end pair. `None` means the boundary has no date.
pub type DateRange = (Option<NaiveDate>, Option<NaiveDate>);

/// The committed value of one endpoint.
///
/// `Invalid` records that a field was blurred with text that does not parse
/// under the configured format; the field then displays the configured
/// invalid message until the user edits it again. Keeping the sentinel as a
/// variant (rather than a magic date) makes the three display outcomes a
/// plain pattern match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum DateValue {
    /// No date selected.
    #[default]
    Absent,
    /// A concrete calendar day.
    Day(NaiveDate),
    /// Unparseable text was committed.
    Invalid,
}

impl DateValue {
    /// The concrete day, if any.
    #[must_use]
    pub const fn day(self) -> Option<NaiveDate> {
        match self {
            Self::Day(d) => Some(d),
            Self::Absent | Self::Invalid => None,
        }
    }

    /// Whether this value holds a concrete day.
    #[must_use]
    pub const fn is_day(self) -> bool {
        matches!(self, Self::Day(_))
    }
}

impl From<Option<NaiveDate>> for DateValue {
    fn from(day: Option<NaiveDate>) -> Self {
        match day {
            Some(d) => Self::Day(d),
            None => Self::Absent,
        }
    }
}

/// Normalize a host timestamp to its local calendar day.
///
/// Timezone handling happens here, at the conversion boundary. Everything
/// downstream compares plain days and never sees a timezone.
#[must_use]
pub fn to_day<Tz: TimeZone>(moment: &DateTime<Tz>) -> NaiveDate {
    moment.naive_local().date()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone as _};

    #[test]
    fn default_is_absent() {
        assert_eq!(DateValue::default(), DateValue::Absent);
    }

    #[test]
    fn day_extraction() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(DateValue::Day(d).day(), Some(d));
        assert_eq!(DateValue::Absent.day(), None);
        assert_eq!(DateValue::Invalid.day(), None);
    }

    #[test]
    fn from_option_round_trips() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(DateValue::from(Some(d)), DateValue::Day(d));
        assert_eq!(DateValue::from(None), DateValue::Absent);
    }

    #[test]
    fn to_day_uses_local_calendar_day() {
        // 23:30 on the 15th at UTC-5 is still the 15th locally, even though
        // it is already the 16th in UTC.
        let tz = FixedOffset::west_opt(5 * 3600).unwrap();
        let moment = tz.with_ymd_and_hms(2024, 3, 15, 23, 30, 0).unwrap();
        assert_eq!(to_day(&moment), NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
    }
}
