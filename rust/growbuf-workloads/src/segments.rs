/// Characters random segments are drawn from.
pub const ALPHABET: &[u8; 52] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Generates a string of `len` letters drawn uniformly from [`ALPHABET`].
pub fn random_segment(rng: &mut fastrand::Rng, len: usize) -> String {
    (0..len)
        .map(|_| char::from(ALPHABET[rng.usize(..ALPHABET.len())]))
        .collect()
}

/// A reproducible set of equally sized random segments.
#[derive(Debug, Clone)]
pub struct SegmentSet {
    segments: Vec<String>,
    segment_length: usize,
}

impl SegmentSet {
    pub fn generate(num_segments: usize, segment_length: usize, seed: u64) -> SegmentSet {
        log::debug!(
            "generating {num_segments} segments of length {segment_length} (seed {seed})"
        );
        let mut rng = fastrand::Rng::with_seed(seed);
        let segments = (0..num_segments)
            .map(|_| random_segment(&mut rng, segment_length))
            .collect();
        SegmentSet {
            segments,
            segment_length,
        }
    }

    #[inline]
    pub fn as_slice(&self) -> &[String] {
        &self.segments
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segment_length(&self) -> usize {
        self.segment_length
    }

    /// Length in bytes of all segments concatenated.
    pub fn total_len(&self) -> usize {
        self.segments.len() * self.segment_length
    }

    /// The expected result of concatenating every segment.
    pub fn concatenated(&self) -> String {
        self.segments.concat()
    }
}
