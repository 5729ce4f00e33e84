//! Error and result definitions shared by the growbuf-* crates.

pub mod error;
pub mod result;

pub use result::Result;
