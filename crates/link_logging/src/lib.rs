#![deny(missing_docs)]
//! Shared logging utilities for the link extraction workspace.
//!
//! This crate provides the `link_*` logging macros used across the codebase
//! and a minimal test initializer for the global logger. Crates using the
//! macros must depend on `log` themselves.

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! link_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! link_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! link_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! link_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Target prefix shared by every crate in the workspace.
///
/// Test loggers only pass records whose target starts with this, which keeps
/// html5ever's tokenizer traces out of test output.
pub const TARGET_PREFIX: &str = "link_";

/// Level used by [`initialize_for_tests`]: debug in debug builds so skipped
/// anchors show up, info otherwise.
pub fn test_level() -> log::LevelFilter {
    if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    }
}

/// Initializes a terminal logger on stderr for use in tests.
///
/// Only records from workspace crates are shown. This safely no-ops if
/// another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

    let config = ConfigBuilder::new()
        .add_filter_allow_str(TARGET_PREFIX)
        .build();

    // Ignore the error if a logger was already set by another test.
    let _ = TermLogger::init(
        test_level(),
        config,
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}
