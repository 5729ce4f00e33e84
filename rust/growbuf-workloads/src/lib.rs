//! Workloads comparing string concatenation and slice append strategies.
//!
//! Everything here is shared by the criterion benches under `benches/` and by
//! the `growbuf-cmd` runner, so both measure exactly the same code.

pub mod cases;
pub mod concat;
pub mod reset;
pub mod segments;
pub mod slice_append;
pub mod timer;

pub use cases::{SliceAppendCase, StringBuildCase};
pub use concat::ConcatStrategy;
pub use reset::ResetStrategy;
pub use segments::SegmentSet;
pub use slice_append::{AppendInput, AppendRun, AppendStrategy, Record};
pub use timer::TimerWorkload;
