//! Logging hooks for the rules core.
//!
//! Records go through the `log` facade when the `logging` feature is enabled.
//! Without it the macros only type-check their arguments and emit nothing.

macro_rules! log_debug {
    ($($arg:tt)+) => {{
        #[cfg(feature = "logging")]
        log::debug!($($arg)+);
        #[cfg(not(feature = "logging"))]
        {
            let _ = format_args!($($arg)+);
        }
    }};
}

macro_rules! log_trace {
    ($($arg:tt)+) => {{
        #[cfg(feature = "logging")]
        log::trace!($($arg)+);
        #[cfg(not(feature = "logging"))]
        {
            let _ = format_args!($($arg)+);
        }
    }};
}
