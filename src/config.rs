use log::Level;

#[cfg(debug_assertions)]
pub fn get_search_url() -> &'static str {
    "http://localhost:3000/search"  // Search app running locally
}

#[cfg(not(debug_assertions))]
pub fn get_search_url() -> &'static str {
    "/search"
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const GITHUB_URL: &str = "https://git.new/mplx";

// Breakpoints in CSS pixels, same as the media queries in the page styles.
pub const SMALL_BREAKPOINT: f64 = 640.0;
pub const MOBILE_BREAKPOINT: f64 = 768.0;

// Frame clock tick, roughly one display refresh.
pub const FRAME_INTERVAL_MS: u32 = 16;

// How long the constellation waits before measuring again when it has no size yet.
pub const MEASURE_RETRY_MS: u32 = 100;

pub const TESTIMONIAL_LOOP_SECS: f64 = 30.0;
pub const QUOTE_LOOP_SECS: f64 = 20.0;

// Hero fades out over the first 20% of the page.
pub const HERO_FADE_END: f64 = 0.2;

pub const SPRING_STIFFNESS: f64 = 100.0;
pub const SPRING_MASS: f64 = 1.0;
pub const SPRING_REST_DELTA: f64 = 0.001;

// Inset applied before a section counts as on screen.
pub const REVEAL_MARGIN_PX: f64 = 100.0;
