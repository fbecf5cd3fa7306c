// Physics and timing constants shared by every effect.
//
// These express intended behavior (spring frequencies, fade windows, timing
// offsets) and keep magic numbers out of the state machines.

use std::time::Duration;

// Frame scheduling
pub const MAX_FRAME_DT: Duration = Duration::from_millis(100); // clamp after tab switches
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(200);
pub const SCROLL_THROTTLE: Duration = Duration::from_millis(16);

// Particle field
pub const PARTICLE_QUANTITY: usize = 100;
pub const PARTICLE_STATICITY: f32 = 50.0;
pub const PARTICLE_EASE: f32 = 50.0;
pub const PARTICLE_SIZE: f32 = 0.4;
pub const PARTICLE_SIZE_VARIANCE: f32 = 1.0;
pub const PARTICLE_DRIFT_MAX: f32 = 0.05; // per axis, per frame
pub const PARTICLE_MAGNETISM_MIN: f32 = 0.1;
pub const PARTICLE_MAGNETISM_SPAN: f32 = 4.0;
pub const PARTICLE_ALPHA_MIN: f32 = 0.1;
pub const PARTICLE_ALPHA_SPAN: f32 = 0.6;
pub const PARTICLE_ALPHA_STEP: f32 = 0.02; // fade-in per frame
pub const PARTICLE_EDGE_FADE_PX: f32 = 20.0;

// Smooth cursor springs (ω in rad/s, ζ = damping ratio)
pub const SPRING_MAX_SUBSTEP_SEC: f32 = 1.0 / 120.0;
pub const CURSOR_POSITION_OMEGA: f32 = 20.0;
pub const CURSOR_POSITION_DAMPING: f32 = 1.0; // critical
pub const CURSOR_ROTATION_OMEGA: f32 = 14.0;
pub const CURSOR_ROTATION_DAMPING: f32 = 0.9;
pub const CURSOR_SCALE_OMEGA: f32 = 22.0;
pub const CURSOR_SCALE_DAMPING: f32 = 0.8;
pub const CURSOR_MOVING_SCALE: f32 = 0.95;
pub const CURSOR_IDLE_WINDOW: Duration = Duration::from_millis(160);
pub const CURSOR_HEADING_MIN_SPEED: f32 = 0.1; // px/ms before the glyph re-orients
pub const CURSOR_EPSILON: f32 = 0.01;

// Text reveal
pub const TYPEWRITER_DELAY: Duration = Duration::from_millis(120);
pub const TYPEWRITER_START_DELAY: Duration = Duration::from_millis(1500);
pub const REVEAL_MIN_OPACITY: f32 = 0.15;
pub const REVEAL_WEIGHT_FROM: f32 = 300.0;
pub const REVEAL_WEIGHT_TO: f32 = 700.0;
pub const STAGGER_STEP: Duration = Duration::from_millis(50);
pub const SCRAMBLE_FRAME: Duration = Duration::from_millis(40);
pub const SCRAMBLE_SETTLE_STEP: Duration = Duration::from_millis(60);
pub const SCRAMBLE_GLYPHS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789#%&*+=?";

// Carousel / marquee
pub const MARQUEE_SPEED: f32 = 40.0; // px per second
pub const MARQUEE_SPEED_TAU_SEC: f32 = 0.25; // easing toward target speed
pub const MARQUEE_NUDGE_PER_PX_S: f32 = 0.005; // boost per px/s of scroll velocity
pub const MARQUEE_NUDGE_MAX: f32 = 5.0;
pub const PAGER_AUTOPLAY: Duration = Duration::from_millis(5000);

// Dock
pub const DOCK_HOVER_SCALE: f32 = 1.25;
pub const DOCK_NEIGHBOR_SCALE: f32 = 1.1;

// Loading screen
pub const LOADING_TICKER: Duration = Duration::from_millis(2000);
pub const LOADING_FADE: Duration = Duration::from_millis(300);
pub const LOADING_STAGGER: Duration = Duration::from_millis(100);
pub const LOADING_FINAL_DELAY: Duration = Duration::from_millis(400);

// Scroll-driven page effects
pub const GRADIENT_WARM_BELOW: f32 = 0.3;
pub const GRADIENT_WARM_ABOVE: f32 = 0.7;
pub const SECTION_REVEAL_THRESHOLD: f32 = 0.1;
pub const SECTION_REVEAL_MARGIN_PX: f32 = 50.0;
pub const MAGNETIC_STRENGTH: f32 = 0.1;
