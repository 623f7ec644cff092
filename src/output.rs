//! Global output configuration.
//!
//! Answers go to stdout. Spinners, logs and errors go to stderr. Quiet mode
//! hides the purely cosmetic parts (confetti, spinner) but never the
//! conversation itself.

use std::sync::OnceLock;

/// Global output configuration.
static OUTPUT_CONFIG: OnceLock<OutputConfig> = OnceLock::new();

/// Output configuration settings.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    /// Suppress cosmetic output.
    pub quiet: bool,
}

/// Initialize the global output configuration.
///
/// This should be called once at startup with the CLI flags.
/// If called multiple times, subsequent calls are ignored.
pub fn init(config: OutputConfig) {
    let _ = OUTPUT_CONFIG.set(config);
}

/// Get the current output configuration.
pub fn config() -> &'static OutputConfig {
    OUTPUT_CONFIG.get_or_init(OutputConfig::default)
}

/// Check if quiet mode is enabled.
pub fn is_quiet() -> bool {
    config().quiet
}
