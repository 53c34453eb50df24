//! The value store: everything a range input remembers between events.

use crate::endpoint::EndpointPair;

/// Complete mutable state of one range input instance.
///
/// Updated only inside [`crate::DateRangeInput::handle_event`]; each event
/// applies one merged transition, so no partial state is ever observable
/// between fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct RangeState {
    /// Both endpoints.
    pub endpoints: EndpointPair,
    /// Whether the calendar popover is open.
    pub popover_open: bool,
}
