use windows_sys::Win32::Foundation::FILETIME;
use windows_sys::Win32::System::Threading::{GetCurrentThread, GetThreadTimes};

const ZERO: FILETIME = FILETIME {
    dwLowDateTime: 0,
    dwHighDateTime: 0,
};

/// Reads the user and kernel CPU time consumed so far by the calling thread,
/// in nanoseconds. Returns zeros if the thread times cannot be queried.
pub(crate) fn thread_cpu_ns() -> (u64, u64) {
    let mut creation = ZERO;
    let mut exit = ZERO;
    let mut kernel = ZERO;
    let mut user = ZERO;
    let ok = unsafe {
        GetThreadTimes(
            GetCurrentThread(),
            &mut creation,
            &mut exit,
            &mut kernel,
            &mut user,
        )
    };
    if ok == 0 {
        return (0, 0);
    }
    (filetime_ns(&user), filetime_ns(&kernel))
}

// FILETIME counts 100ns ticks.
fn filetime_ns(ft: &FILETIME) -> u64 {
    let ticks = ((ft.dwHighDateTime as u64) << 32) | ft.dwLowDateTime as u64;
    ticks * 100
}
