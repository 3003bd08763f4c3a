//! Word list and target hash set, loaded once and shared read-only by every
//! worker.

use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::Path;

use compact_str::CompactString;

use crate::conversion::parse_digest;
use crate::error::Error;
use crate::timing::ScopeTimer;

/// Deduplicated, sorted list of words. Indices into it identify words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<CompactString>,
}

impl WordList {
    /// Builds a word list from arbitrary tokens, collapsing duplicates.
    ///
    /// With `proper_case` the first character of every word is upper-cased
    /// before deduplication, so `moo` and `Moo` collapse into one entry.
    pub fn from_tokens<I, S>(tokens: I, proper_case: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let unique: BTreeSet<CompactString> = tokens
            .into_iter()
            .filter(|t| !t.as_ref().is_empty())
            .map(|t| {
                if proper_case {
                    capitalize(t.as_ref())
                } else {
                    CompactString::from(t.as_ref())
                }
            })
            .collect();

        Self { words: unique.into_iter().collect() }
    }

    /// Parses whitespace-separated words.
    pub fn parse(text: &str, proper_case: bool) -> Self {
        Self::from_tokens(text.split_whitespace(), proper_case)
    }

    pub fn load(path: &Path, proper_case: bool) -> Result<Self, Error> {
        let _timer = ScopeTimer::new("Load words");
        let text = fs::read_to_string(path)
            .map_err(|source| Error::ReadInput { path: path.to_path_buf(), source })?;
        let words = Self::parse(&text, proper_case);
        tracing::info!("Loaded {} words", words.len());
        Ok(words)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[inline]
    pub fn bytes(&self, index: usize) -> &[u8] {
        self.words[index].as_bytes()
    }

    /// Length in bytes of the longest word, 0 for an empty list.
    pub fn longest(&self) -> usize {
        self.words.iter().map(|w| w.len()).max().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(|w| w.as_str())
    }
}

/// Upper-cases the first byte of `word` if it is an ASCII letter. Words that
/// start with a non-ASCII character are left as they are, so casing never
/// changes a word's byte length.
fn capitalize(word: &str) -> CompactString {
    let mut out = CompactString::from(word);
    if let Some(first) = out.as_mut_str().get_mut(..1) {
        first.make_ascii_uppercase();
    }
    out
}

/// Digests whose preimages the search is looking for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetHashSet {
    digests: HashSet<u32>,
}

impl TargetHashSet {
    /// Parses whitespace-separated hex digests. `path` is only used for error
    /// reporting.
    pub fn parse(text: &str, path: &Path) -> Result<Self, Error> {
        let mut digests = HashSet::new();
        for (line_no, line) in text.lines().enumerate() {
            for token in line.split_whitespace() {
                let digest = parse_digest(token).ok_or_else(|| Error::InvalidDigest {
                    path: path.to_path_buf(),
                    line: line_no + 1,
                    token: token.to_string(),
                })?;
                digests.insert(digest);
            }
        }
        Ok(Self { digests })
    }

    pub fn load(path: &Path) -> Result<Self, Error> {
        let _timer = ScopeTimer::new("Load hashes");
        let text = fs::read_to_string(path)
            .map_err(|source| Error::ReadInput { path: path.to_path_buf(), source })?;
        let targets = Self::parse(&text, path)?;
        tracing::info!("Loaded {} hashes", targets.len());
        Ok(targets)
    }

    #[inline]
    pub fn contains(&self, digest: u32) -> bool {
        self.digests.contains(&digest)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.digests.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.digests.is_empty()
    }
}

impl FromIterator<u32> for TargetHashSet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self { digests: iter.into_iter().collect() }
    }
}
