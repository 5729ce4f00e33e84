use growbuf_common::error::Error;
use growbuf_common::{Result, verify_case};

/// Parameters of one string-build benchmark case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringBuildCase {
    pub num_segments: usize,
    pub segment_length: usize,
    /// Controls how often the reset workloads clear their buffer, see
    /// [`crate::reset::should_clear`].
    pub clear_frequency: usize,
}

impl StringBuildCase {
    pub const fn new(num_segments: usize, segment_length: usize, clear_frequency: usize) -> Self {
        StringBuildCase {
            num_segments,
            segment_length,
            clear_frequency,
        }
    }

    /// The matrix measured by default.
    pub fn default_cases() -> Vec<StringBuildCase> {
        vec![
            StringBuildCase::new(20, 20, 2),
            StringBuildCase::new(20, 20, 5),
            StringBuildCase::new(20, 20, 10),
            StringBuildCase::new(20, 20, 20),
            StringBuildCase::new(20, 20, 5000),
            StringBuildCase::new(20, 500, 2),
        ]
    }

    pub fn validate(&self) -> Result<()> {
        verify_case!(self.reset_name(), self.num_segments > 0);
        verify_case!(self.reset_name(), self.clear_frequency > 0);
        Ok(())
    }

    /// Bytes needed to hold every segment, used by the presized strategies.
    pub fn size_hint(&self) -> usize {
        self.num_segments * self.segment_length
    }

    /// Group name for the concatenation workloads.
    pub fn concat_name(&self) -> String {
        format!(
            "segments_{}__segmentLength_{}",
            self.num_segments, self.segment_length
        )
    }

    /// Group name for the reset workloads.
    pub fn reset_name(&self) -> String {
        format!(
            "segments_{}__segmentLength_{}__clearsFrequency_{}",
            self.num_segments, self.segment_length, self.clear_frequency
        )
    }
}

/// Parameters of one slice-append benchmark case.
///
/// Each run starts from a base of `base_len` elements in storage of
/// `base_capacity` (raised to `base_len` if smaller) and appends a tail of
/// `tail_len` elements `rounds` times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceAppendCase {
    pub base_len: usize,
    pub base_capacity: usize,
    pub tail_len: usize,
    pub rounds: usize,
}

impl SliceAppendCase {
    pub const fn new(base_len: usize, base_capacity: usize, tail_len: usize, rounds: usize) -> Self {
        SliceAppendCase {
            base_len,
            base_capacity,
            tail_len,
            rounds,
        }
    }

    pub fn default_cases() -> Vec<SliceAppendCase> {
        vec![
            // Tail fits in the spare capacity.
            SliceAppendCase::new(64, 128, 32, 1),
            // Full base, one growth step.
            SliceAppendCase::new(64, 64, 32, 1),
            // Large tail onto a small full base.
            SliceAppendCase::new(16, 16, 4096, 1),
            // Many small appends, where growth policies diverge.
            SliceAppendCase::new(0, 0, 4, 256),
        ]
    }

    pub fn validate(&self) -> Result<()> {
        verify_case!(self.name(), self.rounds > 0);
        if self.checked_final_len().is_none() {
            return Err(Error::length_overflow(self.name()));
        }
        Ok(())
    }

    pub fn effective_capacity(&self) -> usize {
        self.base_capacity.max(self.base_len)
    }

    /// Length of the sequence after all rounds, `None` if it overflows.
    pub fn checked_final_len(&self) -> Option<usize> {
        self.tail_len
            .checked_mul(self.rounds)
            .and_then(|tail| self.base_len.checked_add(tail))
    }

    /// Length of the sequence after all rounds of a validated case.
    pub fn final_len(&self) -> usize {
        self.base_len + self.tail_len * self.rounds
    }

    pub fn name(&self) -> String {
        format!(
            "base_{}__capacity_{}__tail_{}__rounds_{}",
            self.base_len,
            self.effective_capacity(),
            self.tail_len,
            self.rounds
        )
    }
}
