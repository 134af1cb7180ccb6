//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Logger setup
//! - JavaScript bindings (web only)

#[cfg(target_arch = "wasm32")]
pub mod web;

/// Initialize logging for the current platform
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging() {
    // Ignore a second init (tests, embedding hosts)
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}

/// Initialize logging for the current platform
#[cfg(target_arch = "wasm32")]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}
