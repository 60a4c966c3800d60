use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info  // Production
}

// Header
pub const HEADER_ID: &str = "header";
pub const HERO_ID: &str = "hero";
pub const SCROLL_THRESHOLD: f64 = 100.0;

// Hero showcase
pub const SHOWCASE_INTERVAL_MS: u32 = 3000;

// Calculator
pub const MIN_AMOUNT: u32 = 10_000;
pub const MAX_AMOUNT: u32 = 500_000;
pub const INITIAL_AMOUNT: u32 = 100_000;
pub const AMOUNT_STEP: u32 = 10_000;
pub const OLD_FEE_RATE: f64 = 0.06;
pub const OLD_MARKUP_RATE: f64 = 0.02;
pub const NEW_FEE_RATE: f64 = 0.003;
pub const INPUT_DEBOUNCE_MS: u32 = 50;
pub const AMOUNT_ANIMATION_MS: f64 = 400.0;
pub const FIELD_ANIMATION_MS: f64 = 500.0;

// Scroll reveal and lazy loading
pub const CARD_REVEAL_THRESHOLD: f64 = 0.2;
pub const SECTION_REVEAL_THRESHOLD: f64 = 0.5;
pub const LAZY_IMAGE_ROOT_MARGIN: &str = "50px";

// Performance budgets, milliseconds
pub const CONTENT_LOADED_BUDGET_MS: f64 = 1500.0;
pub const PAGE_LOAD_BUDGET_MS: f64 = 3000.0;
