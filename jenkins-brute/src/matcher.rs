use std::fmt;
use std::io::{self, Write};
use std::time::{Duration, Instant};

use indicatif::ProgressBar;
use jenkins_hash::jenkins_hash;
use parking_lot::Mutex;

use crate::config::HASH_SEED;
use crate::conversion::digest_to_hex;
use crate::input::TargetHashSet;
use crate::timing::elapsed_prefix;

/// A candidate whose digest is in the target set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    pub digest: u32,
    pub candidate: String,
    /// Time since the search started.
    pub elapsed: Duration,
}

impl fmt::Display for MatchRecord {
    /// `[<ms>ms] Found hash: <hex> = <candidate>`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Found hash: {} = {}",
            elapsed_prefix(self.elapsed),
            digest_to_hex(self.digest),
            self.candidate
        )
    }
}

/// Hashes candidates and checks them against the target set.
#[derive(Clone, Copy)]
pub struct MatchEngine<'a> {
    targets: &'a TargetHashSet,
    started: Instant,
}

impl<'a> MatchEngine<'a> {
    pub fn new(targets: &'a TargetHashSet, started: Instant) -> Self {
        Self { targets, started }
    }

    #[inline]
    pub fn try_match(&self, candidate: &[u8]) -> Option<MatchRecord> {
        let digest = jenkins_hash(candidate, HASH_SEED);
        if !self.targets.contains(digest) {
            return None;
        }

        Some(MatchRecord {
            digest,
            candidate: String::from_utf8_lossy(candidate).into_owned(),
            elapsed: self.started.elapsed(),
        })
    }
}

/// Shared destination for match records.
///
/// Implementations must make each `append` atomic with respect to other
/// appends, since every worker reports through the same sink.
pub trait MatchSink: Sync {
    fn append(&self, record: &MatchRecord) -> io::Result<()>;
}

/// Collects records in memory.
impl MatchSink for Mutex<Vec<MatchRecord>> {
    fn append(&self, record: &MatchRecord) -> io::Result<()> {
        self.lock().push(record.clone());
        Ok(())
    }
}

/// Where match lines are mirrored besides the persistent writer.
pub enum Echo {
    Silent,
    Stdout,
    /// Printed above a live progress bar.
    Progress(ProgressBar),
}

/// Appends one line per match to a writer and mirrors it to the console.
///
/// The writer and the console are written under the same lock, so lines from
/// concurrent workers never interleave.
pub struct MatchLog<W> {
    inner: Mutex<W>,
    echo: Echo,
}

impl<W: Write + Send> MatchLog<W> {
    pub fn new(writer: W, echo: Echo) -> Self {
        Self { inner: Mutex::new(writer), echo }
    }

    pub fn into_inner(self) -> W {
        self.inner.into_inner()
    }
}

impl<W: Write + Send> MatchSink for MatchLog<W> {
    fn append(&self, record: &MatchRecord) -> io::Result<()> {
        let line = record.to_string();

        let mut writer = self.inner.lock();
        match &self.echo {
            Echo::Silent => {}
            Echo::Stdout => println!("{line}"),
            Echo::Progress(bar) => bar.println(&line),
        }
        writeln!(writer, "{line}")?;
        writer.flush()
    }
}
