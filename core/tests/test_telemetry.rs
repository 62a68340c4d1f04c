use std::time::Duration;

use hexalpha_core::telemetry::{
    Stage, StageTimes, TranscodeCounters, TranscodeSnapshot, TranscodeTimer,
};

#[test]
fn counters_accumulate() {
    let mut c = TranscodeCounters::default();
    c.add_line(4);
    c.add_pair(2);
    c.add_pair(2);
    c.add_wrap();
    c.add_line(2);
    c.add_pair(2);
    c.add_terminator();

    assert_eq!(c.lines_in, 2);
    assert_eq!(c.bytes_in, 6);
    assert_eq!(c.pairs, 3);
    assert_eq!(c.lines_wrapped, 1);
    assert_eq!(c.bytes_out, 8);
}

#[test]
fn stage_times_accumulate_per_stage() {
    let mut times = StageTimes::default();
    times.add(Stage::Encode, Duration::from_micros(400));
    times.add(Stage::Encode, Duration::from_micros(100));
    times.add(Stage::Decode, Duration::from_micros(250));

    assert_eq!(times.get(Stage::Encode), Duration::from_micros(500));
    assert_eq!(times.get(Stage::Decode), Duration::from_micros(250));
    assert_eq!(times.total(), Duration::from_micros(750));
    assert!(times.has_all(&[Stage::Encode, Stage::Decode]));
    assert!((times.get_ms(Stage::Encode) - 0.5).abs() < f64::EPSILON);
    assert_eq!(times.iter().count(), 2);
}

#[test]
fn snapshot_copies_counters_and_timings() {
    let mut counters = TranscodeCounters::default();
    counters.add_line(8);
    counters.add_pair(2);
    counters.add_pair(2);
    counters.add_pair(2);
    counters.add_pair(2);

    let mut timer = TranscodeTimer::new();
    timer.add_stage_time(Stage::Encode, Duration::from_micros(42));
    timer.finish();

    let snap = TranscodeSnapshot::from(&counters, &timer);
    assert_eq!(snap.lines_in, 1);
    assert_eq!(snap.pairs, 4);
    assert_eq!(snap.bytes_in, 8);
    assert_eq!(snap.bytes_out, 8);
    assert!(snap.throughput_bytes_per_sec >= 0.0);
    assert_eq!(snap.total_stage_time(), Duration::from_micros(42));
}

#[test]
fn timer_elapsed_is_monotonic() {
    let mut timer = TranscodeTimer::new();
    let before = timer.elapsed();
    timer.finish();
    let frozen = timer.elapsed();
    assert!(frozen >= before);
    // After finish() the reading is frozen.
    assert_eq!(timer.elapsed(), frozen);
}

#[test]
fn snapshot_serializes_to_json() {
    let counters = TranscodeCounters::default();
    let mut timer = TranscodeTimer::new();
    timer.add_stage_time(Stage::Decode, Duration::from_millis(1));
    timer.finish();

    let snap = TranscodeSnapshot::from(&counters, &timer);
    let json = serde_json::to_string(&snap).unwrap();
    assert!(json.contains("\"pairs\":0"));
    assert!(json.contains("Decode"));
}
