//! Capacity-aware append for `Vec<T>`.
//!
//! [`append`] combines a base sequence with a tail, extending the base storage
//! in place when its capacity can hold the result and moving everything into a
//! fresh allocation otherwise. The amount of capacity reserved on reallocation
//! is controlled by [`GrowthPolicy`].

pub mod append;
pub mod policy;

pub use append::{AppendOutcome, append, append_in_place, append_with_policy};
pub use policy::GrowthPolicy;
