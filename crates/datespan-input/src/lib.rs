#![forbid(unsafe_code)]

//! Headless date-range input.
//!
//! [`DateRangeInput`] is the reconciliation state machine behind a start/end
//! date pair edited through two text fields and a calendar popover. It owns
//! no rendering: the text fields, the popover host, and the calendar grid
//! are external collaborators that feed it [`InputEvent`]s and read back
//! display strings, the popover flag, and the resolved range. Each event
//! answers with zero or more [`Effect`]s for the embedder to deliver.
//!
//! # Example
//!
//! ```
//! use datespan_core::{Boundary, Effect, InputConfig, InputEvent};
//! use datespan_input::DateRangeInput;
//!
//! let mut input = DateRangeInput::new(InputConfig::default());
//!
//! input.handle_event(&InputEvent::Focus(Boundary::Start), None);
//! let effects = input.handle_event(
//!     &InputEvent::TextChange(Boundary::Start, "2024-03-15".into()),
//!     None,
//! );
//! assert!(matches!(effects.as_slice(), [Effect::Changed(_)]));
//! assert!(input.popover_open());
//! ```

pub mod endpoint;
pub mod input;
pub mod state;

pub use endpoint::{Endpoint, EndpointPair};
pub use input::DateRangeInput;
pub use state::RangeState;

pub use datespan_core::{
    Boundary, DateRange, DateValue, Effect, InputConfig, InputError, InputEvent,
};
