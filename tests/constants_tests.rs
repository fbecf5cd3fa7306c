// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure page-contract module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use folio_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn timing_constants_are_ordered() {
    assert!(SCROLL_THROTTLE < MAX_FRAME_DT);
    assert!(MAX_FRAME_DT < RESIZE_DEBOUNCE);
    assert!(SPRING_MAX_SUBSTEP_SEC > 0.0 && SPRING_MAX_SUBSTEP_SEC < 0.02);
    assert!(CURSOR_IDLE_WINDOW > SCROLL_THROTTLE);
    assert!(TYPEWRITER_START_DELAY > TYPEWRITER_DELAY);
    assert!(SCRAMBLE_SETTLE_STEP >= SCRAMBLE_FRAME);
    assert!(LOADING_FADE < LOADING_TICKER);
    assert!(RIPPLE_LIFETIME_MS > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn visual_ranges_are_sane() {
    assert!(PARTICLE_ALPHA_MIN > 0.0 && PARTICLE_ALPHA_MIN + PARTICLE_ALPHA_SPAN <= 1.0);
    assert!(PARTICLE_STATICITY > 0.0 && PARTICLE_EASE > 0.0);
    assert!(REVEAL_MIN_OPACITY > 0.0 && REVEAL_MIN_OPACITY < 1.0);
    assert!(REVEAL_WEIGHT_FROM < REVEAL_WEIGHT_TO);
    assert!(DOCK_HOVER_SCALE > DOCK_NEIGHBOR_SCALE && DOCK_NEIGHBOR_SCALE > 1.0);
    assert!(GRADIENT_WARM_BELOW < GRADIENT_WARM_ABOVE);
    assert!(CURSOR_MOVING_SCALE < 1.0);
    assert!(CURSOR_POSITION_DAMPING >= 1.0, "position spring must not overshoot");
    assert!(DEFAULT_RING_RADIUS_CH > 0.0 && DEFAULT_MARQUEE_GAP >= 0.0);
}

#[test]
fn data_attributes_use_the_data_prefix() {
    for attr in [
        ATTR_QUANTITY,
        ATTR_STATICITY,
        ATTR_EASE,
        ATTR_SIZE,
        ATTR_COLOR,
        ATTR_TYPEWRITER,
        ATTR_TYPING_STATE,
        ATTR_DELAY,
        ATTR_START_DELAY,
        ATTR_SPLIT,
        ATTR_WINDOW_START,
        ATTR_WINDOW_END,
        ATTR_RADIUS,
        ATTR_SCRAMBLE,
        ATTR_DIRECTION,
        ATTR_REVERSE,
        ATTR_SPEED,
        ATTR_GAP,
        ATTR_AUTOPLAY,
    ] {
        assert!(attr.starts_with("data-"), "{attr}");
    }
}

#[test]
fn selectors_match_their_attributes() {
    assert_eq!(TYPEWRITER_SELECTOR, format!("[{ATTR_TYPEWRITER}]"));
    assert_eq!(SCRAMBLE_SELECTOR, format!("[{ATTR_SCRAMBLE}]"));
    for sel in [MAGNETIC_SELECTOR, RIPPLE_SELECTOR, SECTION_SELECTOR, STAGGER_SELECTOR] {
        assert!(sel.split(',').all(|s| s.trim().starts_with('.')), "{sel}");
    }
}
