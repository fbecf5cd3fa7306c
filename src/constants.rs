// Host page contract: element ids, selectors and `data-*` attribute names.
//
// Kept free of `web_sys` so host tests can `include!` this file directly.

// Particle field
pub const PARTICLES_ID: &str = "particles";
pub const ATTR_QUANTITY: &str = "data-quantity";
pub const ATTR_STATICITY: &str = "data-staticity";
pub const ATTR_EASE: &str = "data-ease";
pub const ATTR_SIZE: &str = "data-size";
pub const ATTR_COLOR: &str = "data-color";

// Smooth cursor
pub const CURSOR_ID: &str = "smooth-cursor";
pub const CURSOR_ACTIVE_CLASS: &str = "smooth-cursor-active"; // on <body>, hides the system pointer
pub const CURSOR_ON_PARTICLE_CLASS: &str = "on-particle";
pub const MEDIA_COARSE_POINTER: &str = "(pointer: coarse)";
pub const MEDIA_REDUCED_MOTION: &str = "(prefers-reduced-motion: reduce)";

// Text reveal
pub const TYPEWRITER_SELECTOR: &str = "[data-typewriter]";
pub const ATTR_TYPEWRITER: &str = "data-typewriter";
pub const ATTR_TYPING_STATE: &str = "data-typing";
pub const ATTR_DELAY: &str = "data-delay";
pub const ATTR_START_DELAY: &str = "data-start-delay";
pub const SCROLL_REVEAL_SELECTOR: &str = "[data-scroll-reveal]";
pub const ATTR_SPLIT: &str = "data-split";
pub const ATTR_WINDOW_START: &str = "data-start";
pub const ATTR_WINDOW_END: &str = "data-end";
pub const SPINNING_SELECTOR: &str = "[data-spinning-text]";
pub const ATTR_RADIUS: &str = "data-radius";
pub const DEFAULT_RING_RADIUS_CH: f32 = 5.0;
pub const SCRAMBLE_SELECTOR: &str = "[data-scramble]";
pub const ATTR_SCRAMBLE: &str = "data-scramble";
pub const STAGGER_SELECTOR: &str = ".name, .title, .project-title, .running-title";
pub const SECTION_SELECTOR: &str = ".profile-section, .about-section, .project-card, .running-card";
pub const REVEALED_CLASS: &str = "animate-in";

// Carousel
pub const MARQUEE_SELECTOR: &str = "[data-marquee]";
pub const ATTR_DIRECTION: &str = "data-direction";
pub const ATTR_REVERSE: &str = "data-reverse";
pub const ATTR_SPEED: &str = "data-speed";
pub const ATTR_GAP: &str = "data-gap";
pub const DEFAULT_MARQUEE_GAP: f32 = 16.0;
pub const PAGER_SELECTOR: &str = "[data-pager]";
pub const PAGER_SLIDE_SELECTOR: &str = ".pager-slide";
pub const PAGER_TRACK_SELECTOR: &str = ".pager-track";
pub const PAGER_PREV_SELECTOR: &str = "[data-pager-prev]";
pub const PAGER_NEXT_SELECTOR: &str = "[data-pager-next]";
pub const PAGER_COUNTER_SELECTOR: &str = "[data-pager-counter]";
pub const ATTR_AUTOPLAY: &str = "data-autoplay";

// Dock
pub const DOCK_ID: &str = "dock";
pub const DOCK_ITEM_SELECTOR: &str = ".dock-item";
pub const DOCK_HIDDEN_CLASS: &str = "dock-hidden";
pub const DOCK_TRANSITION: &str = "transform 150ms ease-out";

// Loading screen
pub const LOADING_ID: &str = "loading-screen";
pub const LOADING_COUNTER_ID: &str = "loading-counter";
pub const HERO_BLOCK_SELECTOR: &str = "[data-hero-block]";
pub const HERO_REVEALED_CLASS: &str = "is-revealed";
pub const LOADING_FADING_CLASS: &str = "is-fading";
pub const LOADING_COMPLETE_EVENT: &str = "loading-complete";
pub const SCROLL_TRIGGER_GLOBAL: &str = "ScrollTrigger";

// Scroll effects and micro-interactions
pub const PROGRESS_BAR_SELECTOR: &str = ".scroll-progress-bar";
pub const MAGNETIC_SELECTOR: &str = ".project-card, .running-card";
pub const RIPPLE_SELECTOR: &str = ".project-link, .running-link";
pub const RIPPLE_CLASS: &str = "ripple";
pub const RIPPLE_LIFETIME_MS: i32 = 600;
