//! Verbosity-gated logging macros for the CPM engine.
//!
//! Nothing is formatted when the configured verbosity is below a macro's level,
//! so silent analyses pay only an integer comparison. Levels:
//! - 0: SILENT
//! - 1: SUMMARY (pass completion, final critical counts, failures)
//! - 2: DETAIL (per-activity criticality and bottleneck decisions)
//! - 3: TRACE (topological order, per-node timings)

pub const VERBOSITY_SILENT: u8 = 0;
pub const VERBOSITY_SUMMARY: u8 = 1;
pub const VERBOSITY_DETAIL: u8 = 2;
pub const VERBOSITY_TRACE: u8 = 3;

/// Log at SUMMARY level (verbosity >= 1).
#[macro_export]
macro_rules! log_summary {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_SUMMARY {
            eprintln!("[cpm] {}", format_args!($($arg)*));
        }
    };
}

/// Log at DETAIL level (verbosity >= 2).
#[macro_export]
macro_rules! log_detail {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_DETAIL {
            eprintln!("[cpm]   {}", format_args!($($arg)*));
        }
    };
}

/// Log at TRACE level (verbosity >= 3).
#[macro_export]
macro_rules! log_trace {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_TRACE {
            eprintln!("[cpm]     {}", format_args!($($arg)*));
        }
    };
}
