use std::ops::Range;
use std::thread;

use crate::error::Error;
use crate::matcher::MatchSink;
use crate::search::{Search, SearchReport};
use crate::worker::{WorkerResult, worker};

/// Worker count used when none is requested: every available core but one,
/// and never fewer than one.
pub fn default_thread_count() -> usize {
    thread::available_parallelism().map(|n| n.get().saturating_sub(1)).unwrap_or(1).max(1)
}

/// Splits `0..len` into `parts` contiguous ranges whose sizes differ by at most
/// one; the first `len % parts` ranges get the extra element. Ranges are empty
/// when `len < parts`. A `parts` of zero is treated as one.
pub fn partition(len: usize, parts: usize) -> Vec<Range<usize>> {
    let parts = parts.max(1);
    let base = len / parts;
    let extra = len % parts;

    let mut start = 0;
    (0..parts)
        .map(|i| {
            let size = base + usize::from(i < extra);
            let range = start..start + size;
            start += size;
            range
        })
        .collect()
}

/// Runs `search` with one OS thread per non-empty partition of the word list
/// and joins them all.
///
/// An empty word list is a no-op. If a worker cannot be spawned, the workers
/// already running are cancelled and joined before the error is returned.
pub fn run<S: MatchSink + ?Sized>(
    search: &Search<'_, S>,
    threads: usize,
) -> Result<SearchReport, Error> {
    let word_count = search.words().len();
    if word_count == 0 {
        tracing::warn!("Word list is empty, nothing to search");
        return Ok(summarize(search, Vec::new()));
    }

    let slices: Vec<Range<usize>> =
        partition(word_count, threads).into_iter().filter(|r| !r.is_empty()).collect();

    tracing::info!("Spooling up {} threads", slices.len());

    let workers = thread::scope(|scope| {
        let mut handles = Vec::with_capacity(slices.len());
        for (id, slice) in slices.into_iter().enumerate() {
            let spawned = thread::Builder::new()
                .name(format!("worker-{id}"))
                .spawn_scoped(scope, move || worker(search, id, slice));

            match spawned {
                Ok(handle) => handles.push((id, handle)),
                Err(source) => {
                    search.cancel();
                    return Err(Error::Spawn { id, source });
                }
            }
        }

        let mut results = Vec::with_capacity(handles.len());
        let mut first_error: Option<Error> = None;
        for (id, handle) in handles {
            match handle.join() {
                Ok(result) => results.push(result),
                Err(_) => {
                    if first_error.is_none() {
                        first_error = Some(Error::WorkerPanicked { id });
                    }
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(results),
        }
    })?;

    let report = summarize(search, workers);
    tracing::info!(
        "Processed {} candidates in {}ms, {} matches",
        report.candidates,
        report.elapsed.as_millis(),
        report.matches
    );
    Ok(report)
}

fn summarize<S: MatchSink + ?Sized>(
    search: &Search<'_, S>,
    workers: Vec<WorkerResult>,
) -> SearchReport {
    SearchReport {
        candidates: workers.iter().map(|w| w.candidates).sum(),
        workers,
        matches: search.matches(),
        sink_errors: search.sink_errors(),
        elapsed: search.started().elapsed(),
        cancelled: search.is_cancelled(),
    }
}
