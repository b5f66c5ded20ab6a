//! Application-level configuration constants.

// Effect timing
pub const BOUNCE_RESET_MS: u32 = 1_000;
pub const CELEBRATION_RESET_MS: u32 = 5_000;

// Layout: button row stacks below this viewport width
pub const STACKED_LAYOUT_MAX_WIDTH: f64 = 500.0;

// Confetti burst parameters
pub const CONFETTI_PIECES: u32 = 500;
pub const CONFETTI_GRAVITY: f64 = 0.2;

// Clip volumes
pub const CLICK_VOLUME: f64 = 0.5;
pub const RESET_VOLUME: f64 = 0.5;
pub const CELEBRATION_VOLUME: f64 = 0.3;

// Default values
pub const DEFAULT_STEP: i64 = 1;
