//! Text ⇄ date conversion and range classification.
//!
//! Field text is interpreted under an strftime-style pattern. The parse
//! outcome is three-way: empty text is "no date", never a parse failure.
//! Bounds checks are inclusive and day-granular.

use chrono::NaiveDate;
use chrono::format::{Item, StrftimeItems};

/// Outcome of interpreting field text under a format pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parse {
    /// Zero-length text: no date, not an error.
    Empty,
    /// Text that does not parse under the pattern.
    Invalid,
    /// A successfully parsed day.
    Ok(NaiveDate),
}

/// Day-granularity bounds check result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeCheck {
    /// Within `[min, max]`.
    InRange,
    /// Before `min` or after `max`.
    OutOfRange,
}

/// Interpret `text` under `format`.
///
/// The empty check is strictly zero-length: whitespace-only text is not
/// empty, and will fail to parse. Surrounding whitespace on otherwise valid
/// text is tolerated.
#[must_use]
pub fn parse(text: &str, format: &str) -> Parse {
    if text.is_empty() {
        return Parse::Empty;
    }
    match NaiveDate::parse_from_str(text.trim(), format) {
        Ok(d) => Parse::Ok(d),
        Err(_) => Parse::Invalid,
    }
}

/// Classify `day` against inclusive `[min, max]` bounds.
///
/// `min > max` is not validated; it degenerates to every day being out of
/// range.
#[must_use]
pub fn classify(day: NaiveDate, min: NaiveDate, max: NaiveDate) -> RangeCheck {
    if day < min || day > max {
        RangeCheck::OutOfRange
    } else {
        RangeCheck::InRange
    }
}

/// Render a day under `pattern`. An absent day renders to the empty string.
///
/// A malformed pattern also renders to the empty string rather than
/// panicking inside chrono's `Display` path.
#[must_use]
pub fn format_date(day: Option<NaiveDate>, pattern: &str) -> String {
    let Some(day) = day else {
        return String::new();
    };
    let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return String::new();
    }
    day.format_with_items(items.into_iter()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const FMT: &str = "%Y-%m-%d";

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn empty_text_is_empty_not_invalid() {
        assert_eq!(parse("", FMT), Parse::Empty);
    }

    #[test]
    fn whitespace_only_is_invalid() {
        assert_eq!(parse("   ", FMT), Parse::Invalid);
    }

    #[test]
    fn valid_text_parses() {
        assert_eq!(parse("2024-03-15", FMT), Parse::Ok(day(2024, 3, 15)));
    }

    #[test]
    fn surrounding_whitespace_tolerated() {
        assert_eq!(parse(" 2024-03-15 ", FMT), Parse::Ok(day(2024, 3, 15)));
    }

    #[test]
    fn garbage_is_invalid() {
        assert_eq!(parse("not-a-date", FMT), Parse::Invalid);
        assert_eq!(parse("2024-13-40", FMT), Parse::Invalid);
        assert_eq!(parse("2024-03-15x", FMT), Parse::Invalid);
    }

    #[test]
    fn alternate_pattern() {
        assert_eq!(parse("03/15/2024", "%m/%d/%Y"), Parse::Ok(day(2024, 3, 15)));
        assert_eq!(parse("2024-03-15", "%m/%d/%Y"), Parse::Invalid);
    }

    #[test]
    fn bounds_are_inclusive() {
        let min = day(2024, 1, 1);
        let max = day(2024, 12, 31);
        assert_eq!(classify(min, min, max), RangeCheck::InRange);
        assert_eq!(classify(max, min, max), RangeCheck::InRange);
        assert_eq!(classify(day(2023, 12, 31), min, max), RangeCheck::OutOfRange);
        assert_eq!(classify(day(2025, 1, 1), min, max), RangeCheck::OutOfRange);
    }

    #[test]
    fn inverted_bounds_reject_everything() {
        let min = day(2024, 12, 31);
        let max = day(2024, 1, 1);
        assert_eq!(classify(day(2024, 6, 15), min, max), RangeCheck::OutOfRange);
        assert_eq!(classify(min, min, max), RangeCheck::OutOfRange);
        assert_eq!(classify(max, min, max), RangeCheck::OutOfRange);
    }

    #[test]
    fn absent_formats_to_empty() {
        assert_eq!(format_date(None, FMT), "");
    }

    #[test]
    fn malformed_pattern_formats_to_empty() {
        assert_eq!(format_date(Some(day(2024, 3, 15)), "%Q"), "");
    }

    proptest! {
        #[test]
        fn prop_empty_iff_zero_length(text in ".{0,16}") {
            let outcome = parse(&text, FMT);
            prop_assert_eq!(outcome == Parse::Empty, text.is_empty());
        }

        #[test]
        fn prop_format_parse_round_trips(offset in 0u64..73_048) {
            // 1900-01-01 plus up to ~200 years, spanning leap days and
            // century boundaries.
            let d = day(1900, 1, 1)
                .checked_add_days(chrono::Days::new(offset))
                .unwrap();
            let text = format_date(Some(d), FMT);
            prop_assert_eq!(parse(&text, FMT), Parse::Ok(d));
        }

        #[test]
        fn prop_round_trip_alt_pattern(offset in 0u64..73_048) {
            let d = day(1900, 1, 1)
                .checked_add_days(chrono::Days::new(offset))
                .unwrap();
            let text = format_date(Some(d), "%m/%d/%Y");
            prop_assert_eq!(parse(&text, "%m/%d/%Y"), Parse::Ok(d));
        }
    }
}
