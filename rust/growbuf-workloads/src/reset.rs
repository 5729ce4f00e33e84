use std::fmt;

/// Returns true if the buffer is cleared right after writing the segment at
/// `index`.
///
/// Clearing happens after the first segment and then every `clear_frequency`
/// segments. A frequency of 1 never clears.
#[inline]
pub fn should_clear(index: usize, clear_frequency: usize) -> bool {
    (index + 1) % clear_frequency == 1
}

/// Writes segments into one buffer, periodically clearing it while keeping
/// its capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResetStrategy {
    Buffer,
    Builder,
}

impl ResetStrategy {
    pub const ALL: [ResetStrategy; 2] = [ResetStrategy::Buffer, ResetStrategy::Builder];

    pub fn name(self) -> &'static str {
        match self {
            ResetStrategy::Buffer => "buffer",
            ResetStrategy::Builder => "builder",
        }
    }

    /// Runs the workload and returns what is left in the buffer at the end.
    ///
    /// `clear_frequency` must be non-zero.
    pub fn run(self, segments: &[String], clear_frequency: usize) -> Vec<u8> {
        debug_assert_ne!(clear_frequency, 0);
        match self {
            ResetStrategy::Buffer => {
                let mut buf = Vec::new();
                for (i, segment) in segments.iter().enumerate() {
                    buf.extend_from_slice(segment.as_bytes());
                    if should_clear(i, clear_frequency) {
                        buf.clear();
                    }
                }
                buf
            }
            ResetStrategy::Builder => {
                let mut buf = String::new();
                for (i, segment) in segments.iter().enumerate() {
                    buf.push_str(segment);
                    if should_clear(i, clear_frequency) {
                        buf.clear();
                    }
                }
                buf.into_bytes()
            }
        }
    }
}

impl fmt::Display for ResetStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters(s: &str) -> Vec<String> {
        s.chars().map(String::from).collect()
    }

    #[test]
    fn test_should_clear() {
        let cleared: Vec<usize> = (0..10).filter(|&i| should_clear(i, 3)).collect();
        assert_eq!(cleared, [0, 3, 6, 9]);
        assert!((0..100).all(|i| !should_clear(i, 1)));
        assert_eq!((0..20).filter(|&i| should_clear(i, 5000)).count(), 1);
    }

    #[test]
    fn test_run_keeps_tail_after_last_clear() {
        let segments = letters("abcde");
        for strategy in ResetStrategy::ALL {
            assert_eq!(strategy.run(&segments, 3), b"e", "strategy {strategy}");
            assert_eq!(strategy.run(&segments, 2), b"", "strategy {strategy}");
            assert_eq!(strategy.run(&segments, 1), b"abcde", "strategy {strategy}");
            assert_eq!(strategy.run(&segments, 5000), b"bcde", "strategy {strategy}");
        }
    }
}
