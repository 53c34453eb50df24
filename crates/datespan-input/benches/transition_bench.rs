//! Benchmarks for the reconciliation state machine.
//!
//! Run with: cargo bench -p datespan-input

use chrono::NaiveDate;
use criterion::{Criterion, criterion_group, criterion_main};
use datespan_core::{Boundary, InputConfig, InputEvent};
use datespan_input::DateRangeInput;
use std::hint::black_box;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn config() -> InputConfig {
    InputConfig::new()
        .with_bounds(day(2024, 1, 1), day(2024, 12, 31))
        .with_allow_single_day_range(true)
}

/// One full edit session: focus, every keystroke prefix, blur.
fn typing_session(input: &mut DateRangeInput, boundary: Boundary, text: &str) {
    input.handle_event(&InputEvent::Focus(boundary), None);
    for n in 1..=text.len() {
        let event = InputEvent::TextChange(boundary, text[..n].to_string());
        black_box(input.handle_event(&event, None));
    }
    black_box(input.handle_event(&InputEvent::Blur(boundary), None));
}

fn bench_typing_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("input/typing_session");

    group.bench_function("valid", |b| {
        b.iter(|| {
            let mut input = DateRangeInput::new(config());
            typing_session(&mut input, Boundary::Start, "2024-03-15");
            typing_session(&mut input, Boundary::End, "2024-03-20");
            black_box(input.resolved_range())
        })
    });

    group.bench_function("garbage", |b| {
        b.iter(|| {
            let mut input = DateRangeInput::new(config());
            typing_session(&mut input, Boundary::Start, "not-a-date");
            black_box(input.display_text(Boundary::Start))
        })
    });

    group.finish();
}

fn bench_calendar_pick(c: &mut Criterion) {
    let mut group = c.benchmark_group("input/calendar_pick");
    let event = InputEvent::CalendarPick {
        start: Some(day(2024, 5, 1)),
        end: Some(day(2024, 5, 7)),
    };

    group.bench_function("pick", |b| {
        let mut input = DateRangeInput::new(config());
        b.iter(|| black_box(input.handle_event(&event, None)))
    });

    group.finish();
}

fn bench_display_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("input/display_text");
    let input = DateRangeInput::new(config())
        .with_default_range((Some(day(2024, 3, 15)), Some(day(2024, 3, 20))));

    group.bench_function("derived", |b| {
        b.iter(|| {
            (
                black_box(input.display_text(Boundary::Start)),
                black_box(input.display_text(Boundary::End)),
            )
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_typing_session,
    bench_calendar_pick,
    bench_display_text,
);

criterion_main!(benches);
