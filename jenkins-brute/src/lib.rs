//! Recovers preimages of Jenkins lookup3 digests by brute-forcing
//! combinations of words from a word list.
//!
//! Software that identifies strings by a 32-bit lookup3 hash often ships only
//! the digests. Given a list of likely words and a set of target digests, this
//! crate renders every candidate of the form
//!
//! ```text
//! [_]word1[_word2[_word3 ...]]
//! ```
//!
//! for `depth` words, hashes each one with [`jenkins_hash`](jenkins_hash::jenkins_hash)
//! and reports those whose digest is a target.
//!
//! # How the search is split
//!
//! The first (outer) word of each candidate partitions the work: the word list
//! is cut into contiguous slices, one per worker thread, with sizes differing
//! by at most one. For each outer word a worker expands every combination of
//! the remaining `depth - 1` inner words with a mixed-radix odometer. A full
//! search therefore evaluates `W^depth` candidates for `W` words.
//!
//! # Usage
//!
//! ```sh
//! jenkins-brute --wordlist wordlist.txt --hashes hashes.txt --word-depth 2
//! ```
//!
//! Matches are appended to `matched_hashes.txt` and echoed to the console as
//!
//! ```text
//! [1234ms] Found hash: e2e5f321 = dog
//! ```
//!
//! # Library example
//!
//! ```
//! use jenkins_brute::{MatchRecord, Search, SearchConfig, TargetHashSet, WordList};
//! use jenkins_hash::jenkins_hash;
//! use parking_lot::Mutex;
//!
//! let words = WordList::parse("cat dog", false);
//! let targets: TargetHashSet = [jenkins_hash(b"cat_dog", 0)].into_iter().collect();
//! let sink = Mutex::new(Vec::<MatchRecord>::new());
//!
//! let search = Search::new(&words, &targets, SearchConfig::default(), &sink).unwrap();
//! let report = search.run(2).unwrap();
//!
//! assert_eq!(report.candidates, 4);
//! assert_eq!(sink.lock()[0].candidate, "cat_dog");
//! ```

pub mod candidate;
pub mod config;
pub mod conversion;
pub mod enumerator;
pub mod error;
pub mod input;
pub mod matcher;
pub mod scheduler;
pub mod search;
pub mod timing;
pub mod worker;

pub use candidate::{Candidate, CandidateBuilder};
pub use config::{CANDIDATE_CAPACITY, HASH_SEED, MARKER, SEPARATOR, SearchConfig};
pub use conversion::{digest_to_hex, hex_to_nibble, parse_digest};
pub use enumerator::Odometer;
pub use error::Error;
pub use input::{TargetHashSet, WordList};
pub use matcher::{Echo, MatchEngine, MatchLog, MatchRecord, MatchSink};
pub use scheduler::{default_thread_count, partition};
pub use search::{Search, SearchReport};
pub use worker::{WorkerResult, worker};
