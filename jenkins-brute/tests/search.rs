use std::collections::HashMap;
use std::fs;
use std::io::Write;

use jenkins_brute::{
    Echo, Error, MatchLog, MatchRecord, Search, SearchConfig, TargetHashSet, WordList,
};
use jenkins_hash::jenkins_hash;
use parking_lot::Mutex;
use tempfile::{NamedTempFile, tempdir};

fn targets_for(candidates: &[&str]) -> TargetHashSet {
    candidates.iter().map(|c| jenkins_hash(c.as_bytes(), 0)).collect()
}

/// Runs a search and returns how often each candidate was reported.
fn run_counts(
    words: &WordList,
    targets: &TargetHashSet,
    config: SearchConfig,
    threads: usize,
) -> (u64, HashMap<String, usize>) {
    let sink = Mutex::new(Vec::<MatchRecord>::new());
    let search = Search::new(words, targets, config, &sink).unwrap();
    let report = search.run(threads).unwrap();

    let mut counts = HashMap::new();
    for record in sink.lock().iter() {
        *counts.entry(record.candidate.clone()).or_insert(0) += 1;
    }
    assert_eq!(report.matches as usize, counts.values().sum::<usize>());
    (report.candidates, counts)
}

#[test]
fn test_single_words_are_each_hashed_once() {
    let words = WordList::parse("cat dog", false);
    let targets = targets_for(&["cat", "dog"]);
    let config = SearchConfig { depth: 1, ..Default::default() };

    let (candidates, counts) = run_counts(&words, &targets, config, 4);
    assert_eq!(candidates, 2);
    assert_eq!(counts.len(), 2);
    assert_eq!(counts["cat"], 1);
    assert_eq!(counts["dog"], 1);
}

#[test]
fn test_depth_two_with_separator() {
    let words = WordList::parse("a b", false);
    let expected = ["a_a", "a_b", "b_a", "b_b"];
    let targets = targets_for(&expected);

    let (candidates, counts) = run_counts(&words, &targets, SearchConfig::default(), 2);
    assert_eq!(candidates, 4);
    assert_eq!(counts.len(), 4);
    for candidate in expected {
        assert_eq!(counts[candidate], 1, "{candidate}");
    }
}

#[test]
fn test_finds_exactly_the_target() {
    let words = WordList::parse("cat dog", false);
    let targets: TargetHashSet = [jenkins_hash(b"dog", 0)].into_iter().collect();
    let config = SearchConfig { depth: 1, ..Default::default() };

    let sink = Mutex::new(Vec::<MatchRecord>::new());
    let search = Search::new(&words, &targets, config, &sink).unwrap();
    let report = search.run(1).unwrap();

    assert_eq!(report.matches, 1);
    let records = sink.lock();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].candidate, "dog");
    assert_eq!(records[0].digest, 0xE2E5_F321);
}

#[test]
fn test_marker_no_separator_and_proper_case() {
    let words = WordList::parse("cat dog", true);
    let config = SearchConfig {
        depth: 2,
        prepend_marker: true,
        use_separator: false,
        proper_case: true,
    };
    let targets = targets_for(&["_CatDog", "_DogDog", "_cat_dog", "CatDog"]);

    let (candidates, counts) = run_counts(&words, &targets, config, 3);
    assert_eq!(candidates, 4);
    let mut found: Vec<&str> = counts.keys().map(|s| s.as_str()).collect();
    found.sort();
    assert_eq!(found, vec!["_CatDog", "_DogDog"]);
}

#[test]
fn test_proper_case_applies_from_config_alone() {
    let words = WordList::parse("cat dog", false);
    let config = SearchConfig { depth: 1, proper_case: true, ..Default::default() };
    let targets = targets_for(&["Cat", "Dog", "cat", "dog"]);

    let (candidates, counts) = run_counts(&words, &targets, config, 2);
    assert_eq!(candidates, 2);
    let mut found: Vec<&str> = counts.keys().map(|s| s.as_str()).collect();
    found.sort();
    assert_eq!(found, vec!["Cat", "Dog"]);
}

#[test]
fn test_proper_case_leaves_non_ascii_initials() {
    let words = WordList::parse("straße ßtraße", false);
    let config = SearchConfig { depth: 1, proper_case: true, ..Default::default() };
    let targets = targets_for(&["Straße", "ßtraße", "SStraße"]);

    let (_, counts) = run_counts(&words, &targets, config, 1);
    let mut found: Vec<&str> = counts.keys().map(|s| s.as_str()).collect();
    found.sort();
    assert_eq!(found, vec!["Straße", "ßtraße"]);
}

#[test]
fn test_depth_three_covers_whole_space() {
    let words = WordList::parse("x y z", false);
    let mut all = Vec::new();
    for a in ["x", "y", "z"] {
        for b in ["x", "y", "z"] {
            for c in ["x", "y", "z"] {
                all.push(format!("{a}_{b}_{c}"));
            }
        }
    }
    let refs: Vec<&str> = all.iter().map(|s| s.as_str()).collect();
    let targets = targets_for(&refs);
    let config = SearchConfig { depth: 3, ..Default::default() };

    let (candidates, counts) = run_counts(&words, &targets, config, 2);
    assert_eq!(candidates, 27);
    assert_eq!(counts.len(), 27);
    assert!(counts.values().all(|&n| n == 1));
}

#[test]
fn test_repeated_runs_agree() {
    let words = WordList::parse("alpha beta gamma delta epsilon", false);
    let targets = targets_for(&["beta_alpha", "epsilon_epsilon", "gamma_delta", "nope"]);

    let first = run_counts(&words, &targets, SearchConfig::default(), 3);
    let second = run_counts(&words, &targets, SearchConfig::default(), 3);
    let single = run_counts(&words, &targets, SearchConfig::default(), 1);
    assert_eq!(first, second);
    assert_eq!(first, single);
    assert_eq!(first.1.len(), 3);
}

#[test]
fn test_rejects_oversized_candidates() {
    let long = "w".repeat(600);
    let words = WordList::parse(&long, false);
    let targets = TargetHashSet::default();
    let sink = Mutex::new(Vec::<MatchRecord>::new());

    let result = Search::new(&words, &targets, SearchConfig::default(), &sink);
    assert!(matches!(result, Err(Error::CandidateTooLong { required: 1201, .. })));

    let config = SearchConfig { depth: 1, ..Default::default() };
    assert!(Search::new(&words, &targets, config, &sink).is_ok());
}

#[test]
fn test_rejects_zero_depth() {
    let words = WordList::parse("a", false);
    let targets = TargetHashSet::default();
    let sink = Mutex::new(Vec::<MatchRecord>::new());
    let config = SearchConfig { depth: 0, ..Default::default() };

    let result = Search::new(&words, &targets, config, &sink);
    assert!(matches!(result, Err(Error::InvalidDepth(0))));
}

#[test]
fn test_files_to_match_log() {
    let mut word_file = NamedTempFile::new().unwrap();
    writeln!(word_file, "dog cat\ncat\n  bird").unwrap();
    let mut hash_file = NamedTempFile::new().unwrap();
    let cat_dog = jenkins_hash(b"cat_dog", 0);
    let bird_bird = jenkins_hash(b"bird_bird", 0);
    writeln!(hash_file, "{cat_dog:x}\n0x{bird_bird:08X} deadbeef").unwrap();

    let words = WordList::load(word_file.path(), false).unwrap();
    let targets = TargetHashSet::load(hash_file.path()).unwrap();
    assert_eq!(words.len(), 3);
    assert_eq!(targets.len(), 3);

    let dir = tempdir().unwrap();
    let out_path = dir.path().join("matched_hashes.txt");
    let sink = MatchLog::new(fs::File::create(&out_path).unwrap(), Echo::Silent);
    let search = Search::new(&words, &targets, SearchConfig::default(), &sink).unwrap();
    let report = search.run(2).unwrap();
    assert_eq!(report.candidates, 9);
    assert_eq!(report.matches, 2);
    assert_eq!(report.sink_errors, 0);

    let written = fs::read_to_string(&out_path).unwrap();
    let mut found = Vec::new();
    for line in written.lines() {
        let (stamp, rest) = line.split_once("] ").unwrap();
        assert!(stamp.starts_with('[') && stamp.ends_with("ms"), "{line}");
        assert!(stamp[1..stamp.len() - 2].parse::<u64>().is_ok(), "{line}");
        found.push(rest.to_string());
    }
    found.sort_by(|a, b| a.rsplit(" = ").next().cmp(&b.rsplit(" = ").next()));

    assert_eq!(
        found,
        vec![
            format!("Found hash: {:x} = bird_bird", jenkins_hash(b"bird_bird", 0)),
            format!("Found hash: {:x} = cat_dog", jenkins_hash(b"cat_dog", 0)),
        ]
    );
}

#[test]
fn test_load_reports_missing_file() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("wordlist.txt");
    assert!(matches!(WordList::load(&missing, false), Err(Error::ReadInput { .. })));
    assert!(matches!(TargetHashSet::load(&missing), Err(Error::ReadInput { .. })));
}
