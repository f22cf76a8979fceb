//! Verbosity-gated console output, in the style of the teacher's own
//! `DISPLAY`/`DISPLAYLEVEL` macro family: a global atomic display level and
//! a handful of `macro_rules!` wrappers instead of pulling in a logging
//! crate for what is, in the end, a batch command-line tool.

use std::sync::atomic::{AtomicU32, Ordering};

/// 0 = silent; 1 = errors only; 2 = normal; 3 = verbose; 4 = trace.
pub static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(2);

#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

#[inline]
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level, Ordering::Relaxed);
}

/// Print to stdout unconditionally — match output itself goes through this,
/// never through `displaylevel!`.
#[macro_export]
macro_rules! displayout {
    ($($arg:tt)*) => { print!($($arg)*) };
}

/// Conditionally print to stderr at or above `level`.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::cli::constants::display_level() >= $level {
            eprint!($($arg)*);
        }
    };
}
