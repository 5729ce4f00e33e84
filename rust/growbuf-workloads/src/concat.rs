use std::fmt::{self, Display, Write as _};
use std::io::Write as _;

/// A way of concatenating a list of string segments.
///
/// Every strategy produces the same bytes; they differ only in how the output
/// storage is grown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConcatStrategy {
    /// Byte buffer that grows on demand.
    Buffer,
    /// `String::push_str` into a string that grows on demand.
    Builder,
    /// Byte buffer with the full size reserved up front.
    BufferPresized,
    /// String builder with the full size reserved up front.
    BuilderPresized,
    /// `[String]::join` with an empty separator.
    Join,
    /// Collects segment references into a presized vector, then joins it.
    JoinWithSliceMgmt,
    /// One formatting placeholder per segment, driven through `fmt::Display`.
    Format,
    /// Formats each segment as a `&dyn Display` into a growing string.
    FormatDyn,
}

impl ConcatStrategy {
    pub const ALL: [ConcatStrategy; 8] = [
        ConcatStrategy::Buffer,
        ConcatStrategy::Builder,
        ConcatStrategy::BufferPresized,
        ConcatStrategy::BuilderPresized,
        ConcatStrategy::Join,
        ConcatStrategy::JoinWithSliceMgmt,
        ConcatStrategy::Format,
        ConcatStrategy::FormatDyn,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ConcatStrategy::Buffer => "buffer",
            ConcatStrategy::Builder => "builder",
            ConcatStrategy::BufferPresized => "buffer_with_size_mgmt",
            ConcatStrategy::BuilderPresized => "builder_with_size_mgmt",
            ConcatStrategy::Join => "join",
            ConcatStrategy::JoinWithSliceMgmt => "join_with_slice_mgmt",
            ConcatStrategy::Format => "format",
            ConcatStrategy::FormatDyn => "format_dyn",
        }
    }

    /// Concatenates `segments`. `size_hint` is the number of bytes the
    /// presized strategies reserve before writing.
    pub fn build(self, segments: &[String], size_hint: usize) -> Vec<u8> {
        match self {
            ConcatStrategy::Buffer => write_buffer(Vec::new(), segments),
            ConcatStrategy::BufferPresized => {
                write_buffer(Vec::with_capacity(size_hint), segments)
            }
            ConcatStrategy::Builder => write_builder(String::new(), segments),
            ConcatStrategy::BuilderPresized => {
                write_builder(String::with_capacity(size_hint), segments)
            }
            ConcatStrategy::Join => segments.join("").into_bytes(),
            ConcatStrategy::JoinWithSliceMgmt => {
                let mut refs: Vec<&str> = Vec::with_capacity(segments.len());
                for segment in segments {
                    refs.push(segment);
                }
                refs.join("").into_bytes()
            }
            ConcatStrategy::Format => format!("{}", Concatenated(segments)).into_bytes(),
            ConcatStrategy::FormatDyn => {
                let mut out = String::new();
                for item in segments.iter().map(|s| s as &dyn Display) {
                    // Writing into a `String` cannot fail.
                    let _ = write!(out, "{item}");
                }
                out.into_bytes()
            }
        }
    }
}

impl fmt::Display for ConcatStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn write_buffer(mut buf: Vec<u8>, segments: &[String]) -> Vec<u8> {
    for segment in segments {
        // `io::Write` for `Vec<u8>` never fails.
        let _ = buf.write_all(segment.as_bytes());
    }
    buf
}

fn write_builder(mut buf: String, segments: &[String]) -> Vec<u8> {
    for segment in segments {
        buf.push_str(segment);
    }
    buf.into_bytes()
}

/// Displays a list of segments back to back, one `write!` per segment.
struct Concatenated<'a>(&'a [String]);

impl fmt::Display for Concatenated<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in self.0 {
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segments::SegmentSet;

    #[test]
    fn test_all_strategies_agree() {
        let set = SegmentSet::generate(20, 20, 11);
        let expected = set.concatenated().into_bytes();
        for strategy in ConcatStrategy::ALL {
            let out = strategy.build(set.as_slice(), set.total_len());
            assert_eq!(out, expected, "strategy {strategy}");
        }
    }

    #[test]
    fn test_presized_strategies_allocate_once() {
        let set = SegmentSet::generate(20, 500, 3);
        let hint = set.total_len();
        for strategy in [
            ConcatStrategy::BufferPresized,
            ConcatStrategy::BuilderPresized,
        ] {
            let out = strategy.build(set.as_slice(), hint);
            assert_eq!(out.len(), hint);
            assert_eq!(out.capacity(), hint);
        }
    }

    #[test]
    fn test_empty_segments() {
        for strategy in ConcatStrategy::ALL {
            assert!(strategy.build(&[], 0).is_empty());
        }
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = ConcatStrategy::ALL.iter().map(|s| s.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ConcatStrategy::ALL.len());
    }
}
