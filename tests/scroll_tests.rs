// Host-side tests for scroll-driven effects and card micro-interactions.

use folio_core::interaction::*;
use folio_core::scroll::*;
use glam::Vec2;
use std::time::Duration;

#[test]
fn scroll_progress_is_clamped_fraction() {
    assert_eq!(scroll_progress(0.0, 3_000.0, 1_000.0), 0.0);
    assert_eq!(scroll_progress(1_000.0, 3_000.0, 1_000.0), 0.5);
    assert_eq!(scroll_progress(2_000.0, 3_000.0, 1_000.0), 1.0);
    assert_eq!(scroll_progress(9_000.0, 3_000.0, 1_000.0), 1.0);
    // page shorter than the viewport
    assert_eq!(scroll_progress(10.0, 500.0, 1_000.0), 0.0);
}

#[test]
fn gradient_is_warm_at_the_ends_and_cool_in_the_middle() {
    assert_eq!(GradientTheme::for_progress(0.1), GradientTheme::Warm);
    assert_eq!(GradientTheme::for_progress(0.3), GradientTheme::Cool);
    assert_eq!(GradientTheme::for_progress(0.5), GradientTheme::Cool);
    assert_eq!(GradientTheme::for_progress(0.7), GradientTheme::Cool);
    assert_eq!(GradientTheme::for_progress(0.9), GradientTheme::Warm);
    assert_eq!(GradientTheme::Warm.class_name(), "gradient-warm");
    assert_eq!(GradientTheme::Cool.class_name(), "gradient-cool");
}

#[test]
fn element_progress_spans_entry_to_exit() {
    let vh = 800.0;
    assert_eq!(element_progress(800.0, 200.0, vh), 0.0);
    assert_eq!(element_progress(-200.0, 200.0, vh), 1.0);
    assert_eq!(element_progress(300.0, 200.0, vh), 0.5);
    assert_eq!(element_progress(2_000.0, 200.0, vh), 0.0);
}

#[test]
fn sections_reveal_once_ten_percent_is_above_the_margin() {
    let vh = 800.0;
    assert!(!should_reveal(900.0, 100.0, vh));
    assert!(!should_reveal(745.0, 100.0, vh));
    assert!(should_reveal(700.0, 100.0, vh));
    assert!(should_reveal(-50.0, 100.0, vh));
    assert!(!should_reveal(-100.0, 100.0, vh));
}

#[test]
fn scroll_velocity_is_smoothed() {
    let mut v = ScrollVelocity::new();
    assert_eq!(v.sample(0.0, Duration::ZERO), 0.0);
    let first = v.sample(100.0, Duration::from_secs(1));
    assert!((first - 30.0).abs() < 1e-3);
    let second = v.sample(100.0, Duration::from_secs(2));
    assert!((second - 21.0).abs() < 1e-3);
    assert_eq!(v.velocity(), second);
    // repeated timestamps are ignored
    assert_eq!(v.sample(500.0, Duration::from_secs(2)), second);
}

#[test]
fn magnetic_pull_is_a_tenth_of_the_offset_from_center() {
    let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
    let o = magnetic_offset(rect, Vec2::new(60.0, 30.0));
    assert!((o.x - 1.0).abs() < 1e-5);
    assert!((o.y + 2.0).abs() < 1e-5);
    assert_eq!(
        magnetic_transform(rect, Vec2::new(60.0, 50.0)),
        "translateY(-8px) scale(1.02) translate(1.00px, 0.00px)"
    );
}

#[test]
fn ripple_covers_element_and_centres_on_click() {
    let rect = Rect::new(10.0, 20.0, 200.0, 50.0);
    let r = ripple_geometry(rect, Vec2::new(60.0, 45.0));
    assert_eq!(r.size, 200.0);
    assert_eq!(r.left, -50.0);
    assert_eq!(r.top, -75.0);
}

#[test]
fn rect_converts_to_local_coordinates() {
    let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
    assert_eq!(rect.to_local(Vec2::new(15.0, 25.0)), Vec2::new(5.0, 5.0));
    assert_eq!(rect.center(), Vec2::new(25.0, 40.0));
}
