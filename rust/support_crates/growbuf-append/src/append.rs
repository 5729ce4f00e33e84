use crate::policy::GrowthPolicy;

/// Describes what happened to the base storage during an append.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    /// The existing allocation had room for the tail and was extended in place.
    Reused,
    /// The combined sequence was moved into a new allocation.
    Reallocated {
        old_capacity: usize,
        new_capacity: usize,
    },
}

impl AppendOutcome {
    #[inline]
    pub fn is_reallocated(&self) -> bool {
        matches!(self, AppendOutcome::Reallocated { .. })
    }
}

/// Appends `tail` to `base` and returns the combined sequence.
///
/// When `base.capacity() >= base.len() + tail.len()` the returned vector is
/// `base` itself, extended in place. Otherwise the elements of `base` are moved
/// into a new allocation of exactly the combined length and the old storage is
/// released.
///
/// An empty `tail` always returns `base` untouched.
///
/// # Panics
///
/// Panics if the combined length overflows `usize` or the new capacity
/// exceeds `isize::MAX` bytes.
///
/// # Examples
///
/// ```
/// use growbuf_append::append;
///
/// let mut base = Vec::with_capacity(5);
/// base.extend(["a", "b"]);
/// let ptr = base.as_ptr();
///
/// let combined = append(base, &["c"]);
/// assert_eq!(combined, ["a", "b", "c"]);
/// assert_eq!(combined.as_ptr(), ptr);
/// ```
#[inline]
pub fn append<T: Clone>(base: Vec<T>, tail: &[T]) -> Vec<T> {
    append_with_policy(base, tail, GrowthPolicy::ExactFit)
}

/// Same as [`append`], reserving capacity according to `policy` when the
/// base storage has to be replaced.
#[inline]
pub fn append_with_policy<T: Clone>(mut base: Vec<T>, tail: &[T], policy: GrowthPolicy) -> Vec<T> {
    append_in_place(&mut base, tail, policy);
    base
}

/// Appends `tail` to the vector behind `base`, replacing it with a new
/// allocation if the current capacity is insufficient.
///
/// Returns whether the existing storage was reused.
pub fn append_in_place<T: Clone>(
    base: &mut Vec<T>,
    tail: &[T],
    policy: GrowthPolicy,
) -> AppendOutcome {
    let required = base.len().checked_add(tail.len()).expect("capacity overflow");
    if required <= base.capacity() {
        // `reserve` inside `extend_from_slice` is a no-op when the spare
        // capacity already covers the tail.
        base.extend_from_slice(tail);
        return AppendOutcome::Reused;
    }
    reallocate_and_append(base, tail, required, policy)
}

#[cold]
fn reallocate_and_append<T: Clone>(
    base: &mut Vec<T>,
    tail: &[T],
    required: usize,
    policy: GrowthPolicy,
) -> AppendOutcome {
    let old_capacity = base.capacity();
    let mut grown = Vec::with_capacity(policy.grown_capacity(old_capacity, required));
    grown.append(base);
    grown.extend_from_slice(tail);
    let new_capacity = grown.capacity();
    *base = grown;
    AppendOutcome::Reallocated {
        old_capacity,
        new_capacity,
    }
}
