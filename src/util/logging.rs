//! Standardized logging utility.
//!
//! This module provides the `wlog!` macro which ensures all plain-text logs
//! follow the `YYYY-MM-DD HH:MM:SS [MODULE] Message` format. Structured
//! per-operation tracing goes through the `tracing` crate instead; `wlog!`
//! is reserved for lifecycle messages.

#[macro_export]
macro_rules! wlog {
    ($module:expr, $($arg:tt)*) => {{
        let now = chrono::Local::now();
        eprintln!("{} [{}] {}",
            now.format("%Y-%m-%d %H:%M:%S"),
            $module,
            format!($($arg)*)
        );
    }};
}

/// Standardized module identifiers
pub const CONTEXT: &str = "CONTEXT";
pub const SESSION: &str = "SESSION";
pub const INPUT: &str = "INPUT";
