use log::Level;

/// How many toasts can be on screen at once. Older ones are pushed out.
pub const TOAST_LIMIT: usize = 3;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(debug_assertions)]
pub fn toast_duration_ms() -> u32 {
    8_000
}

#[cfg(not(debug_assertions))]
pub fn toast_duration_ms() -> u32 {
    5_000
}
