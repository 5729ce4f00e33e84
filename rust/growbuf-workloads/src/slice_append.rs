use std::fmt;
use std::sync::Arc;

use growbuf_append::{GrowthPolicy, append_in_place};
use growbuf_common::Result;

use crate::cases::SliceAppendCase;
use crate::segments::random_segment;

/// Opaque reference-typed element used to exercise append with shared
/// pointers instead of owned strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: u64,
    pub name: String,
}

/// Generates `count` random strings of `len` letters.
pub fn string_elements(count: usize, len: usize, seed: u64) -> Vec<String> {
    let mut rng = fastrand::Rng::with_seed(seed);
    (0..count).map(|_| random_segment(&mut rng, len)).collect()
}

/// Generates `count` shared records with random ids and names.
pub fn record_elements(count: usize, seed: u64) -> Vec<Arc<Record>> {
    let mut rng = fastrand::Rng::with_seed(seed);
    (0..count)
        .map(|_| {
            Arc::new(Record {
                id: rng.u64(..),
                name: random_segment(&mut rng, 12),
            })
        })
        .collect()
}

/// How a tail is appended to a base sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppendStrategy {
    /// `Vec::extend_from_slice` with the standard library's growth.
    Builtin,
    /// [`growbuf_append::append`] with the given policy.
    CapacityAware(GrowthPolicy),
}

/// Result of appending the tail for every round of a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppendRun {
    pub len: usize,
    pub reallocations: usize,
}

impl AppendStrategy {
    pub const ALL: [AppendStrategy; 3] = [
        AppendStrategy::Builtin,
        AppendStrategy::CapacityAware(GrowthPolicy::ExactFit),
        AppendStrategy::CapacityAware(GrowthPolicy::Doubling),
    ];

    pub fn name(self) -> &'static str {
        match self {
            AppendStrategy::Builtin => "builtin",
            AppendStrategy::CapacityAware(policy) => policy.name(),
        }
    }

    /// Appends `tail` to `base` once, reporting whether the storage moved.
    #[inline]
    pub fn append_once<T: Clone>(self, base: &mut Vec<T>, tail: &[T]) -> bool {
        match self {
            AppendStrategy::Builtin => {
                let ptr = base.as_ptr();
                let capacity = base.capacity();
                base.extend_from_slice(tail);
                capacity != base.capacity() || ptr != base.as_ptr()
            }
            AppendStrategy::CapacityAware(policy) => {
                append_in_place(base, tail, policy).is_reallocated()
            }
        }
    }

    /// Appends `tail` to `base` `rounds` times.
    pub fn run<T: Clone>(self, mut base: Vec<T>, tail: &[T], rounds: usize) -> (Vec<T>, AppendRun) {
        let mut reallocations = 0;
        for _ in 0..rounds {
            if self.append_once(&mut base, tail) {
                reallocations += 1;
            }
        }
        let run = AppendRun {
            len: base.len(),
            reallocations,
        };
        (base, run)
    }
}

impl fmt::Display for AppendStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Base and tail elements for one slice-append case.
#[derive(Debug, Clone)]
pub struct AppendInput<T> {
    pub case: SliceAppendCase,
    base: Vec<T>,
    pub tail: Vec<T>,
}

impl<T: Clone> AppendInput<T> {
    /// Splits `pool`, which holds exactly `base_len + tail_len` elements of an
    /// already validated case, into base and tail.
    fn from_pool(case: SliceAppendCase, mut pool: Vec<T>) -> AppendInput<T> {
        debug_assert_eq!(pool.len(), case.base_len + case.tail_len);
        log::debug!("preparing append input {}", case.name());
        let tail = pool.split_off(case.base_len);
        AppendInput {
            case,
            base: pool,
            tail,
        }
    }

    /// A fresh base vector with the case's capacity.
    pub fn make_base(&self) -> Vec<T> {
        let mut base = Vec::with_capacity(self.case.effective_capacity());
        base.extend_from_slice(&self.base);
        base
    }

    pub fn run(&self, strategy: AppendStrategy) -> (Vec<T>, AppendRun) {
        strategy.run(self.make_base(), &self.tail, self.case.rounds)
    }
}

impl AppendInput<String> {
    /// Random 16-letter strings for `case`. Fails if the case does not
    /// validate.
    pub fn strings(case: SliceAppendCase, seed: u64) -> Result<AppendInput<String>> {
        case.validate()?;
        let pool = string_elements(case.base_len + case.tail_len, 16, seed);
        Ok(AppendInput::from_pool(case, pool))
    }
}

impl AppendInput<Arc<Record>> {
    pub fn records(case: SliceAppendCase, seed: u64) -> Result<AppendInput<Arc<Record>>> {
        case.validate()?;
        let pool = record_elements(case.base_len + case.tail_len, seed);
        Ok(AppendInput::from_pool(case, pool))
    }
}
