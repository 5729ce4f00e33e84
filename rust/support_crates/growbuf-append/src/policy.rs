/// Determines how much capacity is reserved when an append has to reallocate.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrowthPolicy {
    /// Allocate exactly the combined length. Every append that overflows the
    /// current capacity reallocates again.
    #[default]
    ExactFit,
    /// Allocate at least twice the current capacity, giving amortized O(1)
    /// cost per appended element over repeated appends.
    Doubling,
}

impl GrowthPolicy {
    /// Returns the capacity to allocate when `required` elements must fit and
    /// the existing storage holds `current`.
    ///
    /// The result is never smaller than `required`.
    #[inline]
    pub fn grown_capacity(self, current: usize, required: usize) -> usize {
        match self {
            GrowthPolicy::ExactFit => required,
            GrowthPolicy::Doubling => std::cmp::max(current.saturating_mul(2), required),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            GrowthPolicy::ExactFit => "exact_fit",
            GrowthPolicy::Doubling => "doubling",
        }
    }
}
