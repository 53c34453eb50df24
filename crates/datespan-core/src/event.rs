//! Canonical event and effect types.
//!
//! The range input consumes [`InputEvent`]s from its collaborators (two text
//! fields, a calendar picker, a popover host) and answers each one with zero
//! or more [`Effect`]s for the embedder to deliver. All types derive `Clone`
//! and `PartialEq` for use in tests and pattern matching.

use std::fmt;

use chrono::NaiveDate;

use crate::date::DateRange;

/// Which end of the range an event or error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum Boundary {
    /// The start (left) field.
    Start,
    /// The end (right) field.
    End,
}

impl Boundary {
    /// The opposite boundary.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Start => Self::End,
            Self::End => Self::Start,
        }
    }
}

/// Canonical input event consumed by the range input state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A text field gained focus.
    Focus(Boundary),

    /// A text field lost focus.
    Blur(Boundary),

    /// A text field's content changed; carries the complete new text.
    TextChange(Boundary, String),

    /// The calendar picker emitted a full two-ended selection.
    CalendarPick {
        /// Selected start day, if any.
        start: Option<NaiveDate>,
        /// Selected end day, if any.
        end: Option<NaiveDate>,
    },

    /// The popover host asked to close.
    PopoverClose,

    /// Explicit popover toggle, e.g. a calendar icon button.
    PopoverToggle,
}

/// A notification the embedder should deliver after a transition.
///
/// Effects are the machine's only outbound channel. A transition that moves
/// internal bookkeeping (focus, raw text, the popover flag) without
/// committing anything produces none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// A committed, valid change to the range.
    Changed(DateRange),
    /// A blur committed text that is not a usable date.
    Error(InputError),
}

/// Why a committed edit was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// The text does not parse under the configured format.
    InvalidFormat(Boundary),
    /// The day parses but falls outside the configured bounds.
    OutOfRange(Boundary, NaiveDate),
    /// The day orders against the other endpoint's committed day.
    Overlapping(Boundary, NaiveDate),
}

impl InputError {
    /// The boundary the error refers to.
    #[must_use]
    pub const fn boundary(self) -> Boundary {
        match self {
            Self::InvalidFormat(b) | Self::OutOfRange(b, _) | Self::Overlapping(b, _) => b,
        }
    }

    /// The offending day, when the text parsed at all.
    #[must_use]
    pub const fn day(self) -> Option<NaiveDate> {
        match self {
            Self::InvalidFormat(_) => None,
            Self::OutOfRange(_, d) | Self::Overlapping(_, d) => Some(d),
        }
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = |b: Boundary| match b {
            Boundary::Start => "start",
            Boundary::End => "end",
        };
        match self {
            Self::InvalidFormat(b) => write!(f, "{} date is not a valid date", side(*b)),
            Self::OutOfRange(b, d) => write!(f, "{} date {d} is out of range", side(*b)),
            Self::Overlapping(b, d) => {
                write!(f, "{} date {d} overlaps the other endpoint", side(*b))
            }
        }
    }
}

impl std::error::Error for InputError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_other_flips() {
        assert_eq!(Boundary::Start.other(), Boundary::End);
        assert_eq!(Boundary::End.other(), Boundary::Start);
    }

    #[test]
    fn error_accessors() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(InputError::InvalidFormat(Boundary::Start).day(), None);
        assert_eq!(InputError::OutOfRange(Boundary::End, d).day(), Some(d));
        assert_eq!(InputError::Overlapping(Boundary::End, d).boundary(), Boundary::End);
    }

    #[test]
    fn error_display() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(
            InputError::InvalidFormat(Boundary::Start).to_string(),
            "start date is not a valid date"
        );
        assert_eq!(
            InputError::OutOfRange(Boundary::End, d).to_string(),
            "end date 2024-03-15 is out of range"
        );
    }
}
