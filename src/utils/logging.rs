//! Logging setup for the command-line binary.

/// Initialize the logger with default settings for terminal applications.
/// Uses INFO level by default; the RUST_LOG environment variable overrides it.
pub fn init_logger() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
}
