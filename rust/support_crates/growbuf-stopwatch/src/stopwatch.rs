use std::time::Duration;

use crate::clock;

/// A snapshot of the current thread's CPU time.
///
/// Windows reports user and kernel time separately. On Linux both come from
/// the combined thread clock, so `kernel_ns` stays zero and `user_ns` carries
/// the total.
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
pub struct ThreadTimesSnapshot {
    pub user_ns: u64,
    pub kernel_ns: u64,
}

impl ThreadTimesSnapshot {
    /// Captures the current thread's CPU time. Returns a zeroed snapshot if the
    /// clock cannot be read.
    pub fn take() -> ThreadTimesSnapshot {
        let (user_ns, kernel_ns) = clock::thread_cpu_ns();
        ThreadTimesSnapshot { user_ns, kernel_ns }
    }

    /// Returns `self - other`, clamping each field at zero.
    pub fn diff(&self, other: &ThreadTimesSnapshot) -> ThreadTimesSnapshot {
        ThreadTimesSnapshot {
            user_ns: self.user_ns.saturating_sub(other.user_ns),
            kernel_ns: self.kernel_ns.saturating_sub(other.kernel_ns),
        }
    }

    pub fn add(&mut self, other: &ThreadTimesSnapshot) {
        self.user_ns += other.user_ns;
        self.kernel_ns += other.kernel_ns;
    }

    #[inline]
    pub fn total_ns(&self) -> u64 {
        self.user_ns + self.kernel_ns
    }

    pub fn as_duration(&self) -> Duration {
        Duration::from_nanos(self.total_ns())
    }
}

/// Sums thread CPU time over any number of start/stop intervals.
///
/// ```
/// use growbuf_stopwatch::ThreadTimesStopwatch;
///
/// let mut stopwatch = ThreadTimesStopwatch::new();
/// stopwatch.start();
/// let s: String = (0..1000).map(|i| char::from(b'a' + (i % 26) as u8)).collect();
/// stopwatch.stop();
/// assert_eq!(s.len(), 1000);
/// assert!(!stopwatch.is_running());
/// ```
#[derive(Default, Clone, Debug)]
pub struct ThreadTimesStopwatch {
    /// Snapshot taken when the current interval began, `None` while stopped.
    interval_start: Option<ThreadTimesSnapshot>,
    /// Time of all closed intervals.
    closed: ThreadTimesSnapshot,
}

impl ThreadTimesStopwatch {
    pub fn new() -> ThreadTimesStopwatch {
        ThreadTimesStopwatch::default()
    }

    pub fn start_new() -> ThreadTimesStopwatch {
        ThreadTimesStopwatch {
            interval_start: Some(ThreadTimesSnapshot::take()),
            closed: ThreadTimesSnapshot::default(),
        }
    }

    /// Opens a new interval. Calling it on a running stopwatch keeps the
    /// interval already open.
    pub fn start(&mut self) {
        self.interval_start.get_or_insert_with(ThreadTimesSnapshot::take);
    }

    /// Closes the open interval, if any.
    pub fn stop(&mut self) {
        if let Some(begin) = self.interval_start.take() {
            self.closed.add(&ThreadTimesSnapshot::take().diff(&begin));
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.interval_start.is_some()
    }

    /// Time of the closed intervals plus, while running, the open one so far.
    pub fn elapsed(&self) -> ThreadTimesSnapshot {
        match &self.interval_start {
            Some(begin) => {
                let mut total = self.closed;
                total.add(&ThreadTimesSnapshot::take().diff(begin));
                total
            }
            None => self.closed,
        }
    }
}
