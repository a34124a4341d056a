//! Deduplication integration tests
//!
//! Covers the exact/fuzzy filters, order preservation, and the
//! similarity ratio properties through the public API.

use crate::common::{create_test_services, init_tracing};
use textprep::core::config::NormalizeConfig;
use textprep::core::dedup::similarity::similarity;
use textprep::core::dedup::Deduplicator;

fn long(text: &str) -> String {
    format!("{text} padded with enough trailing words to pass the length filter.")
}

#[test]
fn test_near_duplicates_collapse_to_first_seen() {
    init_tracing();
    let dedup = Deduplicator::new(NormalizeConfig {
        similarity_threshold: 0.85,
        min_text_length: 10,
    });

    let texts = vec![
        "Hello world, this is unique text number one that is long enough.".to_string(),
        "Hello world, this is unique text number one that is long enough!!".to_string(),
        "Completely different text that is also long enough to be kept here.".to_string(),
    ];

    let outcome = dedup.deduplicate(&texts);
    assert_eq!(outcome.deduplicated_count, 2);
    assert_eq!(outcome.removed_indices, vec![1]);
    assert_eq!(outcome.texts[0], texts[0]);
    assert_eq!(outcome.texts[1], texts[2]);
}

#[test]
fn test_survivor_order_matches_input_order() {
    init_tracing();
    let dedup = Deduplicator::new(NormalizeConfig {
        similarity_threshold: 0.95,
        min_text_length: 10,
    });

    let texts = vec![
        long("Document about rust memory safety and the borrow checker"),
        long("Completely unrelated article describing sourdough fermentation"),
        long("Notes from the planning meeting about quarterly roadmaps"),
        long("Document about rust memory safety and the borrow checker"),
    ];

    let outcome = dedup.deduplicate(&texts);
    assert_eq!(outcome.texts, texts[..3].to_vec());
    assert_eq!(outcome.removed_indices, vec![3]);
}

#[test]
fn test_threshold_is_inclusive() {
    init_tracing();
    // Differ inside the signature prefix so the fuzzy path is
    // the one that decides.
    let base = "shared body of the two candidate texts".repeat(3);
    let a = format!("one {base}");
    let b = format!("two {base}");
    let score = similarity(&a, &b);
    assert!(score < 1.0);

    let dedup = Deduplicator::new(NormalizeConfig {
        similarity_threshold: score,
        min_text_length: 10,
    });
    let outcome = dedup.deduplicate(&[a, b]);
    assert_eq!(outcome.deduplicated_count, 1);
}

#[test]
fn test_similarity_symmetry_and_reflexivity() {
    let a = "The embedding service normalizes text before chunking it.";
    let b = "The embedding service normalises text after chunking it.";

    assert_eq!(similarity(a, a), 1.0);
    assert_eq!(similarity(b, b), 1.0);
    assert_eq!(similarity(a, b), similarity(b, a));
}

#[test]
fn test_deduplicate_through_batch_api() {
    let services = create_test_services();
    let html = "<p>Shared content body that is long enough to clear the minimum length.</p>";
    let texts = vec![
        html.to_string(),
        html.to_string(),
        "<p>Distinct content body that is long enough to clear the minimum too.</p>".to_string(),
    ];

    let with_dedup = services.normalize_batch(&texts, true, true);
    assert_eq!(with_dedup.len(), 2);

    let without_dedup = services.normalize_batch(&texts, false, true);
    assert_eq!(without_dedup.len(), 3);
}

#[test]
fn test_mixed_drop_reasons_recorded_once_each() {
    init_tracing();
    let dedup = Deduplicator::new(NormalizeConfig {
        similarity_threshold: 0.85,
        min_text_length: 30,
    });

    let keeper = long("An entry that survives both filters without any trouble");
    let texts = vec![
        "too short".to_string(),
        keeper.clone(),
        keeper.clone(),
        "also short".to_string(),
    ];

    let outcome = dedup.deduplicate(&texts);
    assert_eq!(outcome.texts, vec![keeper]);
    assert_eq!(outcome.removed_indices, vec![0, 2, 3]);
    assert_eq!(outcome.original_count, 4);
    assert_eq!(outcome.deduplicated_count, 1);
}
