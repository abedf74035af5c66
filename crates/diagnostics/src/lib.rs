//! Lightweight logging shared by the ometree crates.
//!
//! Usage:
//! - Set OMETREE_LOG=off (default) - no logs
//! - Set OMETREE_LOG=info - root replacement and configuration
//! - Set OMETREE_LOG=debug - cache hits, node synthesis, enumeration fallbacks

use std::sync::Once;

// Re-export emit so macros can use it
pub use emit;

/// Environment variable read by [`init_diagnostics`]
pub const LOG_ENV: &str = "OMETREE_LOG";

static INIT: Once = Once::new();

/// Parse a log setting. `None` means logging is off.
///
/// Unknown values are reported as `Err` with the value that was rejected.
pub fn parse_level(value: &str) -> Result<Option<emit::Level>, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "off" => Ok(None),
        "debug" => Ok(Some(emit::Level::Debug)),
        "info" => Ok(Some(emit::Level::Info)),
        "warn" => Ok(Some(emit::Level::Warn)),
        "error" => Ok(Some(emit::Level::Error)),
        _ => Err(value.to_string()),
    }
}

/// Initialize diagnostics from the OMETREE_LOG environment variable
///
/// Call once at application startup; later calls are ignored.
pub fn init_diagnostics() {
    INIT.call_once(|| {
        let setting = std::env::var(LOG_ENV).unwrap_or_default();
        let (level, rejected) = match parse_level(&setting) {
            Ok(None) => return,
            Ok(Some(level)) => (level, None),
            Err(value) => (emit::Level::Info, Some(value)),
        };

        let rt = emit::setup()
            .emit_to(emit_term::stderr())
            .emit_when(emit::level::min_filter(level))
            .init();

        if let Some(value) = rejected {
            emit::warn!("unknown {env} value {value}, using info", env: LOG_ENV, value: value);
        }

        // The runtime lives for the rest of the process
        std::mem::forget(rt);
    });
}

/// Log basic operations (root replacement, configuration loading)
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::emit::info!($($arg)*)
    };
}

/// Log detailed diagnostics (cache hits, node synthesis, fallbacks)
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::emit::debug!($($arg)*)
    };
}

/// Log recoverable problems (rejected roots, probe limits)
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::emit::warn!($($arg)*)
    };
}

/// Log failures that stop an operation
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::emit::error!($($arg)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("off"), Ok(None));
        assert_eq!(parse_level(""), Ok(None));
        assert_eq!(parse_level("debug"), Ok(Some(emit::Level::Debug)));
        assert_eq!(parse_level(" WARN "), Ok(Some(emit::Level::Warn)));
        assert_eq!(parse_level("verbose"), Err("verbose".to_string()));
    }

    #[test]
    fn test_macros_expand_without_runtime() {
        // Nothing is installed, so these go nowhere
        log_debug!("debug {n}", n: 1);
        log_info!("info {s}", s: "x");
        log_warn!("warn");
        log_error!("error");
    }
}
