use std::ops::Range;

use crate::candidate::CandidateBuilder;
use crate::enumerator::Odometer;
use crate::matcher::{MatchEngine, MatchSink};
use crate::search::Search;

/// What a worker hands back to the scheduler when it finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerResult {
    pub id: usize,
    /// Candidates hashed by this worker.
    pub candidates: u64,
}

/// Searches every candidate whose outer word lies in `outer`.
///
/// Outer words are visited in index order and, for each, the inner tuples in
/// odometer order, so a worker's output is reproducible. Cancellation is
/// checked once per outer word.
pub fn worker<S: MatchSink + ?Sized>(
    search: &Search<'_, S>,
    id: usize,
    outer: Range<usize>,
) -> WorkerResult {
    tracing::info!("Starting task #{id} over words {}..{}", outer.start, outer.end);

    let words = search.words();
    let mut builder = CandidateBuilder::new(words, search.config());
    let engine = MatchEngine::new(search.targets(), search.started());
    let mut odometer = Odometer::new(search.config().inner_slots(), words.len());
    match odometer.total() {
        Some(per_word) => tracing::debug!("Task #{id} expands {per_word} candidates per word"),
        None => tracing::debug!("Task #{id} expands more than 2^128 candidates per word"),
    }

    let mut candidates = 0u64;
    for index in outer {
        if search.is_cancelled() {
            tracing::debug!("Task #{id} cancelled before word {index}");
            break;
        }

        builder.begin(index);
        odometer.reset();
        while let Some(inner) = odometer.next_tuple() {
            let candidate = builder.render(inner);
            if let Some(record) = engine.try_match(candidate.as_bytes()) {
                search.report(&record);
            }
            candidates += 1;
        }

        search.outer_finished();
    }

    tracing::debug!("Task #{id} processed {candidates} candidates");
    WorkerResult { id, candidates }
}
