//! End-to-end checks across the public API: provider → context → engine, and
//! selector → assignment.

use neighbours_core::{
    assign_minimal_overlap, overlap_same_position, select_best_match, IdentityShuffler,
    InMemoryProvider, Lexicon, LexiconContext, NeighbourEngine, NeighbourError, OverlapMetric,
    Regularity, RngShuffler,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::thread;

fn small_lexicon() -> Lexicon {
    Lexicon::from_entries([
        ("mint", 20.1),
        ("mind", 85.3),
        ("hint", 14.0),
        ("lint", 1.2),
        ("mist", 9.9),
        ("mink", 0.8),
        ("tint", 2.2),
        ("band", 30.0),
        ("bind", 12.5),
        ("kind", 150.7),
        ("mine", 60.0),
        ("nimt", 0.1),
    ])
}

fn engine_with_tables() -> (Arc<InMemoryProvider>, NeighbourEngine) {
    let provider = Arc::new(
        InMemoryProvider::new(small_lexicon())
            .with_pronunciation(HashMap::from([
                ("mint".to_string(), 1),
                ("kind".to_string(), 1),
            ]))
            .with_regularity(HashMap::from([("mint".to_string(), "1".to_string())])),
    );
    let engine = NeighbourEngine::new(LexiconContext::new(provider.clone()));
    (provider, engine)
}

#[test]
fn test_neighbour_queries_share_one_lexicon_load() {
    let (provider, engine) = engine_with_tables();

    let mint = engine.find_neighbours("mint").unwrap();
    assert_eq!(
        mint.words,
        vec!["mind", "hint", "lint", "mist", "mink", "tint", "mine"]
    );

    let onset = engine.onset_neighbours("mint").unwrap();
    assert_eq!(onset.words, vec!["hint", "lint", "tint"]);

    let shared = engine.shared_neighbours("mint", "bind").unwrap();
    assert_eq!(shared.words, vec!["mind"]);

    assert!(engine.transposition_neighbours("mint").unwrap().is_empty());
    assert_eq!(
        engine.shared_rime_words("ind").unwrap(),
        vec!["mind", "bind", "kind"]
    );

    assert_eq!(provider.lexicon_loads(), 1);
}

#[test]
fn test_lookups_report_unknowns_distinctly() {
    let (_, engine) = engine_with_tables();

    assert_eq!(engine.frequency("kind").unwrap(), 150.7);
    assert_eq!(
        engine.frequency("zebra").unwrap_err(),
        NeighbourError::KeyNotFound("zebra".into())
    );
    assert_eq!(engine.syllable_count("mint").unwrap(), Some(1));
    assert_eq!(engine.syllable_count("band").unwrap(), None);
    assert_eq!(engine.regularity("mint").unwrap(), Regularity::Regular);
    assert_eq!(engine.regularity("band").unwrap(), Regularity::Unknown);
}

#[test]
fn test_concurrent_queries_share_cache_and_single_load() {
    let (provider, engine) = engine_with_tables();
    let engine = Arc::new(engine);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                for word in ["mint", "mind", "band"] {
                    engine.find_neighbours(word).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let stats = engine.cache_stats();
    assert_eq!(stats.entries, 3);
    assert_eq!(stats.hits + stats.misses, 24);
    assert_eq!(provider.lexicon_loads(), 1);
}

#[test]
fn test_best_match_feeds_assignment() {
    let words = [
        "blunt", "forge", "latch", "pause", "weird", "witch", "chair", "gleam", "guard", "guest",
    ];
    let unrelated = [
        "fraud", "butch", "rouse", "crown", "flock", "slide", "sheet", "shawl", "brief", "truck",
    ];

    let single = select_best_match(words[0], &unrelated, OverlapMetric::SamePosition).unwrap();
    assert_eq!(
        single.score.same_position,
        overlap_same_position(words[0], &single.candidate)
    );

    let result = assign_minimal_overlap(
        &words,
        &unrelated,
        OverlapMetric::SamePosition,
        20,
        &mut RngShuffler::seeded(11),
    )
    .unwrap();

    let used: HashSet<&str> = result.pairs.iter().map(|p| p.candidate.as_str()).collect();
    assert_eq!(used.len(), words.len());
    assert!(result.total <= result.trial_totals[0]);
    assert_eq!(result.trial_totals.len(), 20);
}

#[test]
fn test_unshuffled_pass_is_deterministic() {
    let run = || {
        assign_minimal_overlap(
            &["mint", "band", "kind"],
            &["lost", "mile", "brag", "stew"],
            OverlapMetric::Total,
            1,
            &mut IdentityShuffler,
        )
        .unwrap()
    };
    let first = run();
    assert_eq!(first, run());
    assert_eq!(first.pairs.len(), 3);
}

#[test]
fn test_assignment_rejects_short_pool_without_partial_output() {
    let err = assign_minimal_overlap(
        &["abcde", "fghij", "klmno"],
        &["bfzzz"],
        OverlapMetric::Total,
        10,
        &mut RngShuffler::seeded(3),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        NeighbourError::InsufficientCandidates {
            words: 3,
            candidates: 1
        }
    ));
}

fn letter(i: usize) -> char {
    char::from(b'a' + i as u8)
}

#[test]
fn test_matching_normalises_case_and_rejects_invalid_words() {
    let best = select_best_match("Mint", &["MINT", "band"], OverlapMetric::Total).unwrap();
    assert_eq!(best.candidate, "band");

    let result = assign_minimal_overlap(
        &["Mint", "KIND"],
        &["mint", "Kind", "DOCK", "most"],
        OverlapMetric::Total,
        5,
        &mut RngShuffler::seeded(4),
    )
    .unwrap();
    assert_eq!(result.candidate_for("mint"), Some("dock"));
    assert_eq!(result.candidate_for("kind"), Some("most"));
    assert_eq!(result.total, 0);

    assert_eq!(
        assign_minimal_overlap(
            &["mint"],
            &["lost", "br4g"],
            OverlapMetric::Total,
            1,
            &mut IdentityShuffler,
        )
        .unwrap_err(),
        NeighbourError::InvalidWord("br4g".into())
    );
}

fn lexicon_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-d]{3}", 1..40)
}

proptest! {
    #[test]
    fn test_neighbours_differ_in_exactly_one_position(words in lexicon_strategy(), target in "[a-d]{3}") {
        let lexicon = Lexicon::from_entries(words.iter().map(|w| (w.as_str(), 1.0)));
        let engine = NeighbourEngine::new(LexiconContext::preloaded(lexicon));

        let result = engine.find_neighbours(&target).unwrap();
        prop_assert_eq!(result.count, result.words.len());
        for n in &result.words {
            prop_assert_ne!(n, &target);
            prop_assert_eq!(n.len(), target.len());
            let diffs = n.chars().zip(target.chars()).filter(|(a, b)| a != b).count();
            prop_assert_eq!(diffs, 1);
        }

        let again = engine.find_neighbours(&target).unwrap();
        prop_assert_eq!(again, result);
        prop_assert_eq!(engine.cache_stats().scans, 1);
    }

    #[test]
    fn test_assignment_is_one_to_one(seed in any::<u64>(), n in 1usize..6, extra in 0usize..3) {
        let words: Vec<String> = (0..n).map(|i| format!("w{}x", letter(i))).collect();
        let candidates: Vec<String> = (0..n + extra).map(|i| format!("c{}y", letter(i))).collect();
        let result = assign_minimal_overlap(
            &words,
            &candidates,
            OverlapMetric::Total,
            3,
            &mut RngShuffler::seeded(seed),
        ).unwrap();

        prop_assert_eq!(result.pairs.len(), n);
        let used: HashSet<&String> = result.pairs.iter().map(|p| &p.candidate).collect();
        prop_assert_eq!(used.len(), n);
        for pair in &result.pairs {
            prop_assert!(candidates.contains(&pair.candidate));
        }
    }
}
