// Host-side tests for the marquee track and paged carousel.

use folio_core::carousel::*;
use std::time::Duration;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn measured_track(config: MarqueeConfig) -> MarqueeTrack {
    let mut t = MarqueeTrack::new(config);
    t.measure(&[100.0, 100.0, 100.0], 0.0, 250.0);
    t
}

#[test]
fn pager_controls_follow_index_at_both_ends() {
    let mut p = Pager::new(4);
    assert_eq!(
        p.controls(),
        PagerControls {
            prev_enabled: false,
            next_enabled: true
        }
    );
    assert!(p.next());
    assert!(p.next());
    assert!(p.next());
    assert_eq!(p.index(), 3);
    assert!(!p.controls().next_enabled);
    assert!(p.controls().prev_enabled);
    assert!(!p.next());
    assert_eq!(p.index(), 3);
    assert_eq!(p.counter(), "4 / 4");
}

#[test]
fn pager_never_leaves_bounds() {
    let mut p = Pager::new(4);
    assert!(!p.prev());
    assert_eq!(p.index(), 0);
    assert!(p.go_to(10));
    assert_eq!(p.index(), 3);
    assert!(!p.go_to(3));
    assert!(p.go_to(0));
    assert_eq!(p.counter(), "1 / 4");
}

#[test]
fn empty_pager_is_inert() {
    let mut p = Pager::new(0);
    assert!(p.is_empty());
    assert_eq!(p.counter(), "0 / 0");
    assert!(!p.go_to(2));
    assert!(!p.next());
    assert!(!p.prev());
    assert_eq!(
        p.controls(),
        PagerControls {
            prev_enabled: false,
            next_enabled: false
        }
    );
}

#[test]
fn autoplay_advances_pauses_while_held_and_stops_at_end() {
    let mut p = Pager::new(3).with_autoplay(ms(1_000));
    assert!(p.autoplay_active());
    assert!(!p.update(ms(500)));
    assert!(p.update(ms(500)));
    assert_eq!(p.index(), 1);

    p.set_held(true);
    assert!(!p.update(ms(5_000)));
    assert_eq!(p.index(), 1);
    p.set_held(false);

    assert!(p.update(ms(1_000)));
    assert_eq!(p.index(), 2);
    assert!(!p.autoplay_active());
    assert!(!p.update(ms(1_000)));
}

#[test]
fn manual_navigation_restarts_autoplay_timer() {
    let mut p = Pager::new(3).with_autoplay(ms(1_000));
    assert!(!p.update(ms(900)));
    assert!(p.next());
    assert!(!p.update(ms(200)));
    assert_eq!(p.index(), 1);
}

#[test]
fn stepping_back_from_the_end_resumes_autoplay() {
    let mut p = Pager::new(3).with_autoplay(ms(1_000));
    p.go_to(2);
    assert!(!p.autoplay_active());
    assert!(!p.update(ms(3_000)));

    assert!(p.prev());
    assert!(p.autoplay_active());
    assert!(!p.update(ms(999)));
    assert!(p.update(ms(1)));
    assert_eq!(p.index(), 2);
    assert!(!p.autoplay_active());
}

#[test]
fn zero_interval_disables_autoplay() {
    let p = Pager::new(3).with_autoplay(Duration::ZERO);
    assert!(!p.autoplay_active());
}

#[test]
fn track_needs_enough_copies_to_cover_viewport() {
    let t = measured_track(MarqueeConfig::default());
    assert_eq!(t.set_extent(), 300.0);
    assert_eq!(t.copies_needed(), 2);
    assert_eq!(t.slots_needed(), 6);
    let placements = t.placements();
    for p in &placements {
        assert_eq!(p.slot % 3, p.slide);
    }
    let mut slots: Vec<usize> = placements.iter().map(|p| p.slot).collect();
    slots.dedup();
    assert_eq!(slots, (0..6).collect::<Vec<_>>());
}

#[test]
fn placements_cover_viewport_without_seams() {
    let mut t = measured_track(MarqueeConfig::default());
    for _ in 0..200 {
        t.update(ms(37));
        let placements = t.placements();
        for x in (0..250).step_by(5) {
            let x = x as f32;
            assert!(
                placements.iter().any(|p| p.offset <= x && x < p.offset + 100.0),
                "gap at {x} with offset {}",
                t.offset()
            );
        }
    }
}

#[test]
fn offset_wraps_inside_one_set() {
    let mut t = measured_track(MarqueeConfig::default());
    t.update(ms(1_000));
    assert!((t.offset() - 40.0).abs() < 1e-3);
    for _ in 0..1_000 {
        t.update(ms(16));
        assert!(t.offset() >= 0.0 && t.offset() < t.set_extent());
    }
}

#[test]
fn reverse_runs_the_other_way() {
    let mut t = measured_track(MarqueeConfig {
        reverse: true,
        ..MarqueeConfig::default()
    });
    t.update(ms(100));
    assert!((t.offset() - 296.0).abs() < 1e-3);
}

#[test]
fn holding_eases_track_to_a_stop() {
    let mut t = measured_track(MarqueeConfig::default());
    t.set_held(true);
    for _ in 0..100 {
        t.update(ms(16));
    }
    assert_eq!(t.speed(), 0.0);
    let parked = t.offset();
    t.update(ms(16));
    assert_eq!(t.offset(), parked);

    t.set_held(false);
    t.update(ms(100));
    assert!(t.speed() > 0.0);
}

#[test]
fn scroll_nudge_speeds_up_temporarily() {
    let mut t = measured_track(MarqueeConfig::default());
    t.nudge(1_000.0);
    t.update(ms(1_000));
    assert!(t.speed() > MarqueeConfig::default().speed);
    for _ in 0..600 {
        t.update(ms(16));
    }
    assert!((t.speed() - MarqueeConfig::default().speed).abs() < 0.5);
}

#[test]
fn remeasure_keeps_offset_within_new_set() {
    let mut t = measured_track(MarqueeConfig::default());
    t.update(ms(5_000));
    t.measure(&[50.0, 50.0], 10.0, 400.0);
    assert_eq!(t.set_extent(), 120.0);
    assert!(t.offset() < 120.0);
    assert_eq!(t.copies_needed(), 5);
}

#[test]
fn axis_translate_strings() {
    assert_eq!(Axis::Horizontal.css_translate(-12.5), "translate3d(-12.50px, 0, 0)");
    assert_eq!(Axis::Vertical.css_translate(3.0), "translate3d(0, 3.00px, 0)");
}
