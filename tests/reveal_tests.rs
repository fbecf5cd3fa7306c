// Host-side tests for text reveal effects.

use folio_core::reveal::*;
use folio_core::{ConfigError, TaskStatus};
use std::time::Duration;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

#[test]
fn typewriter_shows_one_char_per_delay() {
    let mut tw = Typewriter::new("hello", ms(100));
    assert_eq!(tw.advance(ms(0)), Some("h"));
    assert_eq!(tw.advance(ms(50)), None);
    assert_eq!(tw.advance(ms(100)), Some("he"));
    assert_eq!(tw.next_due(ms(150)), Some(ms(50)));
    assert_eq!(tw.advance(ms(10_000)), Some("hello"));
    assert!(tw.is_complete());
    assert_eq!(tw.next_due(ms(10_000)), None);
    assert_eq!(tw.advance(ms(20_000)), None);
}

#[test]
fn typewriter_reaches_full_text_under_jittered_timers() {
    let text = "Hi, I'm a portfolio";
    let mut tw = Typewriter::new(text, ms(120));
    let mut now = ms(0);
    let jitter = [3, 250, 0, 119, 121, 400, 7, 60];
    let mut i = 0;
    while !tw.is_complete() {
        if let Some(v) = tw.advance(now) {
            assert!(text.starts_with(v), "not a prefix: {v:?}");
        }
        now += ms(jitter[i % jitter.len()]);
        i += 1;
        assert!(i < 1_000);
    }
    assert_eq!(tw.visible(), text);
}

#[test]
fn typewriter_edge_cases() {
    let mut empty = Typewriter::new("", ms(100));
    assert!(empty.is_complete());
    assert_eq!(empty.advance(ms(0)), None);

    let mut instant = Typewriter::new("abc", Duration::ZERO);
    assert_eq!(instant.advance(ms(0)), Some("abc"));

    let fresh = Typewriter::new("abc", ms(120));
    assert_eq!(fresh.next_due(ms(5)), Some(Duration::ZERO));
}

#[test]
fn local_progress_hits_segment_boundaries() {
    let r = SegmentReveal::new("abcd", SplitMode::Chars);
    assert_eq!(r.len(), 4);
    assert_eq!(r.local_progress(0, 0.0), 0.0);
    assert_eq!(r.local_progress(0, 0.25), 1.0);
    assert_eq!(r.local_progress(1, 0.25), 0.0);
    assert!(approx(r.local_progress(2, 0.625), 0.5));
    assert_eq!(r.local_progress(3, 1.0), 1.0);
    assert_eq!(r.local_progress(9, 1.0), 0.0);
}

#[test]
fn local_progress_is_monotonic() {
    let r = SegmentReveal::new("reveal me slowly", SplitMode::Chars);
    for i in 0..r.len() {
        let mut prev = 0.0;
        for step in 0..=200 {
            let p = step as f32 / 200.0;
            let v = r.local_progress(i, p);
            assert!(v >= prev, "segment {i} went backwards at {p}");
            assert!((0.0..=1.0).contains(&v));
            prev = v;
        }
    }
}

#[test]
fn apply_depends_only_on_progress() {
    let r = SegmentReveal::new("one two three", SplitMode::Words);
    let first = r.apply(0.4);
    let _ = r.apply(0.9);
    let _ = r.apply(0.0);
    assert_eq!(r.apply(0.4), first);
    assert_eq!(first.len(), 3);
}

#[test]
fn window_remaps_global_progress() {
    let r = SegmentReveal::new("abcd", SplitMode::Chars)
        .with_window(0.2, 0.6)
        .expect("valid window");
    assert!(r.apply(0.1).iter().all(|s| approx(s.opacity, SegmentStyle::at(0.0).opacity)));
    assert_eq!(r.local_progress(0, 0.2), 0.0);
    assert_eq!(r.local_progress(3, 0.6), 1.0);
    assert_eq!(r.local_progress(3, 0.9), 1.0);
}

#[test]
fn invalid_windows_are_rejected() {
    for (start, end) in [(0.5, 0.5), (-0.1, 0.5), (0.2, 1.2), (0.7, 0.3)] {
        let r = SegmentReveal::new("abc", SplitMode::Chars).with_window(start, end);
        assert!(matches!(r, Err(ConfigError::BadWindow { .. })));
    }
}

#[test]
fn split_modes_parse() {
    assert_eq!(SplitMode::parse("words"), Some(SplitMode::Words));
    assert_eq!(SplitMode::parse(" chars "), Some(SplitMode::Chars));
    assert_eq!(SplitMode::parse("lines"), None);
    assert_eq!(SegmentReveal::new("a  b", SplitMode::Words).len(), 2);
}

#[test]
fn ring_layout_spreads_glyphs_evenly() {
    let ring = ring_layout("abcd");
    let angles: Vec<f32> = ring.iter().map(|g| g.angle_deg).collect();
    assert_eq!(angles, [0.0, 90.0, 180.0, 270.0]);
    assert_eq!(ring[1].css_transform(5.0), "rotate(90.000deg) translateY(-5ch)");
    assert!(ring_layout("").is_empty());
}

#[test]
fn stagger_delay_grows_linearly() {
    assert_eq!(stagger_delay(0, ms(50)), Duration::ZERO);
    assert_eq!(stagger_delay(3, ms(50)), ms(150));
}

#[test]
fn oversized_delays_saturate() {
    let huge = Duration::from_secs(u64::MAX / 2);
    assert_eq!(stagger_delay(usize::MAX, huge), Duration::MAX);

    let mut tw = Typewriter::new("ab", Duration::MAX);
    assert_eq!(tw.advance(ms(10)), Some("a"));
    assert_eq!(tw.next_due(ms(10)), Some(Duration::MAX - ms(10)));
    assert_eq!(tw.advance(ms(20)), None);
}

#[test]
fn scramble_settles_left_to_right_and_never_unlocks() {
    let mut s = ScrambleText::new("ab c", 1).with_settle_step(ms(10));
    assert_eq!(s.update(ms(0)), TaskStatus::Continue);
    // whitespace never scrambles
    assert!(s.segments()[2].locked);
    assert_eq!(s.segments()[2].display, " ");

    s.update(ms(10));
    assert!(s.segments()[0].locked);
    assert_eq!(s.segments()[0].display, "a");
    assert!(!s.segments()[1].locked);

    for t in [15, 19, 20, 30] {
        s.update(ms(t));
        assert_eq!(s.segments()[0].display, "a");
    }
    assert!(s.segments()[1].locked);
    assert_eq!(s.update(ms(40)), TaskStatus::Idle);
    assert!(s.is_settled());
    assert_eq!(s.text(), "ab c");
}
