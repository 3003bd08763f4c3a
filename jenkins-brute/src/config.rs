use crate::error::Error;

/// Character prepended to every candidate when `prepend_marker` is set.
pub const MARKER: u8 = b'_';

/// Character placed between words when `use_separator` is set.
pub const SEPARATOR: u8 = b'_';

/// Seed passed to the hash for every candidate.
pub const HASH_SEED: u32 = jenkins_hash::DEFAULT_SEED;

/// Size of the per-worker candidate buffer in bytes.
pub const CANDIDATE_CAPACITY: usize = 1024;

/// Candidate grammar, fixed before the search starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Number of words concatenated per candidate.
    pub depth: usize,
    pub prepend_marker: bool,
    pub use_separator: bool,
    /// Upper-case the first character of every word.
    pub proper_case: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { depth: 2, prepend_marker: false, use_separator: true, proper_case: false }
    }
}

impl SearchConfig {
    /// Number of inner word slots expanded for each outer word.
    #[inline]
    pub fn inner_slots(&self) -> usize {
        self.depth.saturating_sub(1)
    }

    /// Worst-case rendered length for words no longer than `longest` bytes,
    /// or `None` if it does not fit in a `usize`.
    pub fn max_candidate_len(&self, longest: usize) -> Option<usize> {
        let marker = usize::from(self.prepend_marker);
        let separators = if self.use_separator { self.inner_slots() } else { 0 };
        longest.checked_mul(self.depth)?.checked_add(separators)?.checked_add(marker)
    }

    /// Rejects configurations that cannot be searched: a depth of zero, or
    /// candidates that could overflow the fixed candidate buffer.
    pub fn validate(&self, longest: usize) -> Result<(), Error> {
        if self.depth == 0 {
            return Err(Error::InvalidDepth(self.depth));
        }

        match self.max_candidate_len(longest) {
            Some(required) if required <= CANDIDATE_CAPACITY => Ok(()),
            Some(required) => Err(Error::CandidateTooLong { required, capacity: CANDIDATE_CAPACITY }),
            None => Err(Error::CandidateTooLong { required: usize::MAX, capacity: CANDIDATE_CAPACITY }),
        }
    }

    /// Total number of candidates for `word_count` words (`W^depth`), or
    /// `None` if it overflows a `u128`.
    pub fn search_space(&self, word_count: usize) -> Option<u128> {
        let depth = u32::try_from(self.depth).ok()?;
        (word_count as u128).checked_pow(depth)
    }
}
