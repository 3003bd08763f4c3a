use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::{Duration, Instant};

use crate::config::SearchConfig;
use crate::error::Error;
use crate::input::{TargetHashSet, WordList};
use crate::matcher::{MatchRecord, MatchSink};
use crate::scheduler;
use crate::worker::WorkerResult;

/// Everything a search shares between its workers.
///
/// The word list, target set and config are immutable for the lifetime of the
/// search and read without synchronization. The sink serializes its own
/// appends; the remaining state is atomic counters and the cancellation flag.
pub struct Search<'a, S: ?Sized> {
    words: &'a WordList,
    targets: &'a TargetHashSet,
    config: SearchConfig,
    sink: &'a S,
    started: Instant,
    outer_done: AtomicU64,
    matches: AtomicU64,
    sink_errors: AtomicU64,
    cancelled: AtomicBool,
}

/// Outcome of a completed (or cancelled) search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub workers: Vec<WorkerResult>,
    /// Candidates hashed across all workers.
    pub candidates: u64,
    pub matches: u64,
    /// Matches that could not be written to the sink.
    pub sink_errors: u64,
    pub elapsed: Duration,
    pub cancelled: bool,
}

impl<'a, S: MatchSink + ?Sized> Search<'a, S> {
    /// Creates a search after validating `config` against the word list.
    pub fn new(
        words: &'a WordList,
        targets: &'a TargetHashSet,
        config: SearchConfig,
        sink: &'a S,
    ) -> Result<Self, Error> {
        config.validate(words.longest())?;

        Ok(Self {
            words,
            targets,
            config,
            sink,
            started: Instant::now(),
            outer_done: AtomicU64::new(0),
            matches: AtomicU64::new(0),
            sink_errors: AtomicU64::new(0),
            cancelled: AtomicBool::new(false),
        })
    }

    /// Runs the search on `threads` workers and blocks until all finish.
    pub fn run(&self, threads: usize) -> Result<SearchReport, Error> {
        scheduler::run(self, threads)
    }

    /// Asks workers to stop after their current outer word.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Outer words fully processed so far, across all workers.
    pub fn progress(&self) -> u64 {
        self.outer_done.load(Ordering::Relaxed)
    }

    pub fn matches(&self) -> u64 {
        self.matches.load(Ordering::Relaxed)
    }

    pub fn sink_errors(&self) -> u64 {
        self.sink_errors.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn words(&self) -> &'a WordList {
        self.words
    }

    #[inline]
    pub fn targets(&self) -> &'a TargetHashSet {
        self.targets
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    #[inline]
    pub fn started(&self) -> Instant {
        self.started
    }

    pub(crate) fn outer_finished(&self) {
        self.outer_done.fetch_add(1, Ordering::Relaxed);
    }

    /// Hands a match to the sink. A failed write is logged and counted; the
    /// match itself still counts.
    pub(crate) fn report(&self, record: &MatchRecord) {
        self.matches.fetch_add(1, Ordering::Relaxed);
        if let Err(e) = self.sink.append(record) {
            self.sink_errors.fetch_add(1, Ordering::Relaxed);
            tracing::error!("Failed to record match {record}: {e}");
        }
    }
}
