use libc::{CLOCK_THREAD_CPUTIME_ID, clock_gettime, timespec};

/// Reads the CPU time consumed so far by the calling thread, in nanoseconds.
///
/// The thread clock combines user and kernel time, so the whole value is
/// reported as user time. Returns zero if the clock cannot be read.
pub(crate) fn thread_cpu_ns() -> (u64, u64) {
    let mut ts: timespec = unsafe { std::mem::zeroed() };
    if unsafe { clock_gettime(CLOCK_THREAD_CPUTIME_ID, &mut ts) } != 0 {
        return (0, 0);
    }
    let ns = (ts.tv_sec as u64) * 1_000_000_000 + (ts.tv_nsec as u64);
    (ns, 0)
}
