use std::fs::OpenOptions;
use std::io::BufWriter;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use jenkins_brute::{
    Echo, Error, MatchLog, Search, SearchConfig, TargetHashSet, WordList, default_thread_count,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "jenkins-brute")]
#[command(about = "Jenkins lookup3 brute forcer: finds word combinations matching target hashes")]
struct Args {
    /// Prepend an underscore to all candidates
    #[arg(short = 'p', long)]
    prepend_underscore: bool,

    /// Use proper case for words, ex: moo -> Moo
    #[arg(short = 'c', long)]
    proper_case: bool,

    /// Don't use underscores to separate words
    #[arg(short = 'u', long)]
    no_underscores: bool,

    /// How many words to combine per candidate
    #[arg(short = 'd', long, default_value_t = 2)]
    word_depth: usize,

    /// Whitespace-separated word list
    #[arg(short, long, default_value = "wordlist.txt")]
    wordlist: PathBuf,

    /// Whitespace-separated hex hashes to recover
    #[arg(short = 'H', long, default_value = "hashes.txt")]
    hashes: PathBuf,

    /// File matches are written to
    #[arg(short, long, default_value = "matched_hashes.txt")]
    output: PathBuf,

    /// Append to the output file instead of truncating it
    #[arg(long)]
    append: bool,

    /// Number of worker threads (default: available cores minus one)
    #[arg(short = 'j', long)]
    threads: Option<usize>,

    /// Disable progress bar
    #[arg(long)]
    no_progress: bool,
}

impl Args {
    fn search_config(&self) -> SearchConfig {
        SearchConfig {
            depth: self.word_depth,
            prepend_marker: self.prepend_underscore,
            use_separator: !self.no_underscores,
            proper_case: self.proper_case,
        }
    }
}

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = args.search_config();

    // Reject bad depths before spending time on loading.
    if config.depth == 0 {
        return Err(Error::InvalidDepth(config.depth));
    }

    let targets = TargetHashSet::load(&args.hashes)?;
    let words = WordList::load(&args.wordlist, config.proper_case)?;
    if words.is_empty() {
        return Err(Error::EmptyWordList);
    }
    if targets.is_empty() {
        tracing::warn!("No target hashes loaded, the search cannot match anything");
    }

    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .append(args.append)
        .truncate(!args.append)
        .open(&args.output)
        .map_err(|source| Error::OpenOutput { path: args.output.clone(), source })?;

    let progress_bar = if !args.no_progress {
        let pb = ProgressBar::new(words.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} words ({percent}%) {msg}")
                .expect("Invalid progress bar template")
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let echo = match &progress_bar {
        Some(pb) => Echo::Progress(pb.clone()),
        None => Echo::Stdout,
    };
    let sink = MatchLog::new(BufWriter::new(file), echo);
    let search = Search::new(&words, &targets, config, &sink)?;

    match config.search_space(words.len()) {
        Some(total) => tracing::info!("Searching {total} candidates at depth {}", config.depth),
        None => tracing::info!("Searching more than 2^128 candidates at depth {}", config.depth),
    }

    let threads = args.threads.unwrap_or_else(default_thread_count).max(1);

    let report = thread::scope(|scope| {
        let handle = scope.spawn(|| search.run(threads));

        while !handle.is_finished() {
            if let Some(ref pb) = progress_bar {
                pb.set_position(search.progress());
            }
            thread::sleep(Duration::from_millis(100));
        }

        // The scheduler turns worker panics into errors, so only a panic in
        // the scheduler itself lands here.
        handle.join().unwrap_or_else(|payload| std::panic::resume_unwind(payload))
    })?;

    if let Some(pb) = progress_bar {
        pb.set_position(search.progress());
        pb.finish_with_message("done");
    }

    if report.sink_errors > 0 {
        tracing::error!(
            "{} of {} matches could not be written to {:?}",
            report.sink_errors,
            report.matches,
            args.output
        );
    }

    println!(
        "Processed {} candidates on {} threads in {}ms, found {} matches",
        report.candidates,
        report.workers.len(),
        report.elapsed.as_millis(),
        report.matches
    );
    Ok(())
}
