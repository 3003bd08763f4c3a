use crate::config::{CANDIDATE_CAPACITY, MARKER, SEPARATOR, SearchConfig};
use crate::input::WordList;

/// Fixed-capacity byte buffer a candidate is rendered into.
///
/// Appends are bounds-checked against [`CANDIDATE_CAPACITY`]; the capacity is
/// validated against the word list before a search starts, so overflowing
/// it is a bug rather than a recoverable condition.
pub struct Candidate {
    buf: [u8; CANDIDATE_CAPACITY],
    len: usize,
}

impl Default for Candidate {
    fn default() -> Self {
        Self { buf: [0; CANDIDATE_CAPACITY], len: 0 }
    }
}

impl Candidate {
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    #[inline]
    pub fn truncate(&mut self, len: usize) {
        self.len = self.len.min(len);
    }

    #[inline]
    pub fn push(&mut self, byte: u8) {
        self.buf[self.len] = byte;
        self.len += 1;
    }

    #[inline]
    pub fn extend_from_slice(&mut self, bytes: &[u8]) {
        let end = self.len + bytes.len();
        self.buf[self.len..end].copy_from_slice(bytes);
        self.len = end;
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Upper-cases the byte at `index` if it is an ASCII letter.
    #[inline]
    fn uppercase_at(&mut self, index: usize) {
        if index < self.len {
            self.buf[index].make_ascii_uppercase();
        }
    }
}

/// Renders word-index tuples into candidates.
///
/// The outer word is written once per outer index by [`begin`](Self::begin)
/// and kept as a stem; [`render`](Self::render) then only rewrites the inner
/// words after it. With `proper_case` the first byte of every word is
/// upper-cased as it is written, whether or not the word list was cased at
/// load time.
pub struct CandidateBuilder<'a> {
    words: &'a WordList,
    config: SearchConfig,
    candidate: Candidate,
    stem_len: usize,
}

impl<'a> CandidateBuilder<'a> {
    pub fn new(words: &'a WordList, config: SearchConfig) -> Self {
        Self { words, config, candidate: Candidate::default(), stem_len: 0 }
    }

    /// Starts a new stem: the optional marker followed by the outer word.
    pub fn begin(&mut self, outer: usize) {
        self.candidate.clear();
        if self.config.prepend_marker {
            self.candidate.push(MARKER);
        }
        self.push_word(outer);
        self.stem_len = self.candidate.len();
    }

    /// Appends the inner words to the current stem, each preceded by the
    /// separator when enabled.
    pub fn render(&mut self, inner: &[usize]) -> &Candidate {
        self.candidate.truncate(self.stem_len);
        for &index in inner {
            if self.config.use_separator {
                self.candidate.push(SEPARATOR);
            }
            self.push_word(index);
        }
        &self.candidate
    }

    #[inline]
    fn push_word(&mut self, index: usize) {
        let start = self.candidate.len();
        self.candidate.extend_from_slice(self.words.bytes(index));
        if self.config.proper_case {
            self.candidate.uppercase_at(start);
        }
    }

    pub fn build(&mut self, outer: usize, inner: &[usize]) -> &Candidate {
        self.begin(outer);
        self.render(inner)
    }
}
