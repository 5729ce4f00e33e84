//! Thread CPU time stopwatch used to time benchmark workloads.

#[cfg(not(any(target_os = "linux", windows)))]
compile_error!("growbuf-stopwatch needs a per-thread CPU clock (Linux or Windows)");

#[cfg_attr(target_os = "linux", path = "clock_linux.rs")]
#[cfg_attr(windows, path = "clock_win.rs")]
mod clock;

pub mod stopwatch;

pub use stopwatch::{ThreadTimesSnapshot, ThreadTimesStopwatch};
