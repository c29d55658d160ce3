use log::Level;

/// localStorage key holding the persisted theme.
pub const THEME_STORAGE_KEY: &str = "theme";

pub const MISSING_FIELDS_ALERT: &str = "Please fill in all required fields.";

// Animation timings, in milliseconds unless noted.
pub const THEME_PRESS_MS: u32 = 150;
pub const FADE_OUT_MS: u32 = 300;
pub const STAGGER_MS: u32 = 50;
pub const FADE_IN_TRANSITION: &str = "all 0.6s ease";

// Reveal-on-scroll observer options.
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEALED_CLASS: &str = "animated";
/// Applied instead of `REVEALED_CLASS` when no observer is available.
pub const STATIC_REVEAL_CLASS: &str = "revealed-static";

// Confirmation codes look like 10<n>51 with n in [0, CODE_RANGE).
pub const CODE_PREFIX: &str = "10";
pub const CODE_SUFFIX: &str = "51";
pub const CODE_RANGE: u32 = 10_000;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
