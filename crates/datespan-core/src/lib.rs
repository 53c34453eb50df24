#![forbid(unsafe_code)]

//! Core types for the datespan date-range input.
//!
//! This crate carries everything below the widget itself: the typed date
//! values an endpoint can commit, the text parser/formatter that converts
//! between field text and dates under a configurable pattern, the inclusive
//! day-granular bounds check, the static configuration, and the canonical
//! event/effect vocabulary the state machine speaks.

pub mod config;
pub mod date;
pub mod event;
pub mod parse;

pub use config::InputConfig;
pub use date::{DateRange, DateValue, to_day};
pub use event::{Boundary, Effect, InputError, InputEvent};
pub use parse::{Parse, RangeCheck, classify, format_date, parse};
