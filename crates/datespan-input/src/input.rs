#![forbid(unsafe_code)]

//! The date-range input state machine.
//!
//! [`DateRangeInput`] reconciles two free-text fields with two committed
//! date values, a controlled/uncontrolled ownership mode, and the calendar
//! popover's open flag. Collaborators feed it [`InputEvent`]s; every event
//! is one atomic transition that answers with the [`Effect`]s the embedder
//! should deliver.
//!
//! Ownership is derived per transition: the embedder passes the externally
//! owned pair (or `None`) into [`DateRangeInput::handle_event`], so the mode
//! is never cached and may change between transitions. While controlled, the
//! machine echoes the external pair into its value store and suppresses its
//! own value writes; raw-text and focus bookkeeping stay local so the field
//! remains responsive while the embedder round-trips the new value.

use chrono::NaiveDate;

use datespan_core::{
    Boundary, DateRange, DateValue, Effect, InputConfig, InputError, InputEvent, Parse,
    RangeCheck, classify, format_date, parse,
};

use crate::endpoint::derived_text;
use crate::state::RangeState;

/// Headless state machine for a start/end date pair edited through two text
/// fields backed by a calendar popover.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateRangeInput {
    config: InputConfig,
    state: RangeState,
}

impl DateRangeInput {
    /// Create an input with the given configuration and no dates selected.
    #[must_use]
    pub fn new(config: InputConfig) -> Self {
        Self {
            config,
            state: RangeState::default(),
        }
    }

    /// Seed the committed pair, for uncontrolled use (builder).
    #[must_use]
    pub fn with_default_range(mut self, range: DateRange) -> Self {
        self.state.endpoints.start.value = range.0.into();
        self.state.endpoints.end.value = range.1.into();
        self
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &InputConfig {
        &self.config
    }

    /// Replace the configuration.
    pub fn set_config(&mut self, config: InputConfig) {
        self.config = config;
    }

    /// Complete current state.
    #[must_use]
    pub fn state(&self) -> &RangeState {
        &self.state
    }

    /// Whether the calendar popover is open.
    #[must_use]
    pub fn popover_open(&self) -> bool {
        self.state.popover_open
    }

    /// The pair the calendar picker should highlight.
    #[must_use]
    pub fn resolved_range(&self) -> DateRange {
        self.state.endpoints.days()
    }

    /// The text one field should display right now.
    #[must_use]
    pub fn display_text(&self, boundary: Boundary) -> String {
        self.state.endpoints[boundary].display_text(&self.config)
    }

    /// Placeholder for an empty blurred field, derived from the bounds: the
    /// start field hints at `min_date`, the end field at `max_date`.
    #[must_use]
    pub fn placeholder_text(&self, boundary: Boundary) -> String {
        let bound = match boundary {
            Boundary::Start => self.config.min_date,
            Boundary::End => self.config.max_date,
        };
        format_date(Some(bound), &self.config.format)
    }

    /// Apply one event as a single merged transition.
    ///
    /// `external` is the externally owned pair when the embedder controls
    /// the value, `None` when this instance owns it. Returns the effects the
    /// embedder should deliver; bookkeeping-only transitions return none.
    pub fn handle_event(
        &mut self,
        event: &InputEvent,
        external: Option<DateRange>,
    ) -> Vec<Effect> {
        if self.config.disabled {
            return Vec::new();
        }

        let controlled = external.is_some();
        if let Some((start, end)) = external {
            // Controlled: the authoritative values echo from the embedder on
            // every transition.
            self.state.endpoints.start.value = start.into();
            self.state.endpoints.end.value = end.into();
        }

        let effects = match event {
            InputEvent::Focus(boundary) => self.on_focus(*boundary),
            InputEvent::Blur(boundary) => self.on_blur(*boundary, controlled),
            InputEvent::TextChange(boundary, text) => {
                self.on_text_change(*boundary, text, controlled)
            }
            InputEvent::CalendarPick { start, end } => self.on_pick(*start, *end),
            InputEvent::PopoverClose => {
                self.state.popover_open = false;
                Vec::new()
            }
            InputEvent::PopoverToggle => {
                self.state.popover_open = !self.state.popover_open;
                Vec::new()
            }
        };

        #[cfg(feature = "tracing")]
        self.trace_transition(Self::event_operation_name(event), &effects);

        effects
    }

    /// Focus gain: start an edit session seeded from the committed value.
    fn on_focus(&mut self, boundary: Boundary) -> Vec<Effect> {
        let seed = self.state.endpoints[boundary].seed_text(&self.config);
        let ep = &mut self.state.endpoints[boundary];
        if !ep.focused {
            ep.focused = true;
            ep.raw_text = Some(seed);
        }
        if self.config.open_on_focus {
            self.state.popover_open = true;
        }
        Vec::new()
    }

    /// Keystroke: record the literal text, and commit live once it parses
    /// in range.
    fn on_text_change(&mut self, boundary: Boundary, text: &str, controlled: bool) -> Vec<Effect> {
        let parsed = parse(text, &self.config.format);
        let (min, max) = (self.config.min_date, self.config.max_date);

        {
            // A change on an unfocused field starts an edit session.
            let ep = &mut self.state.endpoints[boundary];
            ep.focused = true;
            ep.raw_text = Some(text.to_owned());
        }

        match parsed {
            Parse::Empty => {
                // Clearing the field is a valid terminal state, not an
                // error, and is not announced.
                if !controlled {
                    self.state.endpoints[boundary].value = DateValue::Absent;
                }
                Vec::new()
            }
            Parse::Ok(d) if classify(d, min, max) == RangeCheck::InRange => {
                if !controlled {
                    self.state.endpoints[boundary].value = DateValue::Day(d);
                }
                vec![Effect::Changed(self.range_with(boundary, Some(d)))]
            }
            // Invalid or out of range: keep the text, leave the value alone
            // until it becomes valid or the field blurs.
            Parse::Ok(_) | Parse::Invalid => Vec::new(),
        }
    }

    /// Focus loss: reconcile the final text against the committed value.
    ///
    /// The "did the text change" comparison is strictly per-endpoint,
    /// against this endpoint's own derived display string.
    fn on_blur(&mut self, boundary: Boundary, controlled: bool) -> Vec<Effect> {
        if !self.state.endpoints[boundary].focused {
            return Vec::new();
        }
        let text = {
            let ep = &mut self.state.endpoints[boundary];
            ep.focused = false;
            ep.raw_text.take().unwrap_or_default()
        };
        let prior = self.state.endpoints[boundary].value;
        let (min, max) = (self.config.min_date, self.config.max_date);

        if text == derived_text(prior, &self.config) {
            // Nothing new to commit. An in-range day that was committed live
            // still gets its ordering check here.
            if let DateValue::Day(d) = prior {
                if classify(d, min, max) == RangeCheck::InRange {
                    if let Some(err) = self.overlap(boundary, d) {
                        return vec![Effect::Error(err)];
                    }
                }
            }
            return Vec::new();
        }

        match parse(&text, &self.config.format) {
            Parse::Empty => {
                if !controlled {
                    self.state.endpoints[boundary].value = DateValue::Absent;
                }
                if prior == DateValue::Absent {
                    Vec::new()
                } else {
                    vec![Effect::Changed(self.range_with(boundary, None))]
                }
            }
            Parse::Invalid => {
                // Commit the garbage so the blurred field falls back to the
                // configured invalid message.
                if !controlled {
                    self.state.endpoints[boundary].value = DateValue::Invalid;
                }
                vec![Effect::Error(InputError::InvalidFormat(boundary))]
            }
            Parse::Ok(d) => match classify(d, min, max) {
                RangeCheck::OutOfRange => {
                    if !controlled {
                        self.state.endpoints[boundary].value = DateValue::Day(d);
                    }
                    vec![Effect::Error(InputError::OutOfRange(boundary, d))]
                }
                RangeCheck::InRange => {
                    if !controlled {
                        self.state.endpoints[boundary].value = DateValue::Day(d);
                    }
                    match self.overlap(boundary, d) {
                        Some(err) => vec![Effect::Error(err)],
                        None => vec![Effect::Changed(self.range_with(boundary, Some(d)))],
                    }
                }
            },
        }
    }

    /// Calendar pick: an authoritative two-ended selection overwrites both
    /// endpoints atomically. Any endpoint mid-edit has its text recomputed
    /// from the new value. The popover is left as-is, and no effects are
    /// emitted: the embedder observes the pick event itself.
    fn on_pick(&mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Vec<Effect> {
        self.state.endpoints.start.value = start.into();
        self.state.endpoints.end.value = end.into();
        for boundary in [Boundary::Start, Boundary::End] {
            let seed = self.state.endpoints[boundary].seed_text(&self.config);
            let ep = &mut self.state.endpoints[boundary];
            if ep.focused {
                ep.raw_text = Some(seed);
            }
        }
        Vec::new()
    }

    /// The committed pair with `boundary` replaced by `day`. Equals the
    /// stored pair after an uncontrolled write; in controlled mode this is
    /// the proposed pair the embedder should adopt.
    fn range_with(&self, boundary: Boundary, day: Option<NaiveDate>) -> DateRange {
        let (mut start, mut end) = self.state.endpoints.days();
        match boundary {
            Boundary::Start => start = day,
            Boundary::End => end = day,
        }
        (start, end)
    }

    /// Ordering check against the other endpoint's committed day.
    ///
    /// `start > end` always overlaps; `start == end` overlaps only when
    /// single-day ranges are disallowed.
    fn overlap(&self, boundary: Boundary, day: NaiveDate) -> Option<InputError> {
        let other = self.state.endpoints[boundary.other()].value.day()?;
        let (start, end) = match boundary {
            Boundary::Start => (day, other),
            Boundary::End => (other, day),
        };
        let overlapping = if self.config.allow_single_day_range {
            start > end
        } else {
            start >= end
        };
        overlapping.then(|| InputError::Overlapping(boundary, day))
    }

    #[cfg(feature = "tracing")]
    fn trace_transition(&self, operation: &'static str, effects: &[Effect]) {
        let _span = tracing::debug_span!(
            "daterange.transition",
            operation,
            effects = effects.len(),
            start_focused = self.state.endpoints.start.focused,
            end_focused = self.state.endpoints.end.focused,
            popover_open = self.state.popover_open,
        )
        .entered();
    }

    #[cfg(feature = "tracing")]
    fn event_operation_name(event: &InputEvent) -> &'static str {
        match event {
            InputEvent::Focus(_) => "focus",
            InputEvent::Blur(_) => "blur",
            InputEvent::TextChange(..) => "text_change",
            InputEvent::CalendarPick { .. } => "calendar_pick",
            InputEvent::PopoverClose => "popover_close",
            InputEvent::PopoverToggle => "popover_toggle",
        }
    }
}
