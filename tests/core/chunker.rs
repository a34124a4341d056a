//! Chunker integration tests
//!
//! Size bound, coverage, overlap, and precondition rejection
//! through the public API.

use crate::common::{create_test_services_with_chunking, init_tracing};
use textprep::core::chunker::{chunk_text, chunk_text_with_separators};

#[test]
fn test_paragraph_document_chunks_with_overlap() {
    init_tracing();
    let chunks = chunk_text("AAAA\n\nBBBB\n\nCCCC\n\nDDDD", 10, 4).unwrap();
    assert_eq!(chunks, vec!["AAAA\n\nBBBB", "BBBB\n\nCCCC", "CCCC\n\nDDDD"]);
}

#[test]
fn test_size_bound_across_separator_levels() {
    init_tracing();
    // Paragraphs, long lines, and long words all present
    let text = format!(
        "Short paragraph.\n\n{}\n\nword {} word\n\nfinal paragraph here",
        "A long line that will have to be split at word boundaries to fit the bound.",
        "b".repeat(40)
    );

    let chunks = chunk_text(&text, 30, 8).unwrap();
    assert!(!chunks.is_empty());
    for chunk in &chunks {
        assert!(
            chunk.chars().count() <= 30,
            "chunk exceeds bound: {chunk:?}"
        );
    }
}

#[test]
fn test_coverage_no_content_lost() {
    init_tracing();
    let text = "alpha beta gamma delta epsilon zeta eta theta iota kappa";
    let chunks = chunk_text(text, 15, 6).unwrap();

    for word in text.split_whitespace() {
        assert!(
            chunks.iter().any(|chunk| chunk.contains(word)),
            "{word:?} not covered by {chunks:?}"
        );
    }
}

#[test]
fn test_empty_text() {
    assert!(chunk_text("", 100, 10).unwrap().is_empty());
}

#[test]
fn test_character_fallback_lengths() {
    let chunks = chunk_text(&"x".repeat(250), 100, 0).unwrap();
    let lengths: Vec<usize> = chunks.iter().map(|c| c.chars().count()).collect();
    assert_eq!(lengths, vec![100, 100, 50]);
}

#[test]
fn test_invalid_overlap_rejected_before_chunking() {
    let err = chunk_text("some text", 10, 10).unwrap_err();
    assert!(err.is_bad_request());
    assert!(err.message().contains("chunk_overlap"));
}

#[test]
fn test_oversized_unit_exception_to_size_bound() {
    // With the character fallback removed from the hierarchy, an
    // indivisible oversized unit passes through verbatim.
    let chunks = chunk_text_with_separators(
        "head unsplittablemegatokenthatwillnotfit tail",
        12,
        0,
        &[" "],
    )
    .unwrap();

    assert!(chunks
        .iter()
        .any(|c| c == "unsplittablemegatokenthatwillnotfit"));
    // Everything else still honors the bound
    for chunk in chunks.iter().filter(|c| c.chars().count() > 12) {
        assert_eq!(chunk, "unsplittablemegatokenthatwillnotfit");
    }
}

#[test]
fn test_determinism_repeated_calls() {
    let text = "Para one.\n\nPara two is longer than one.\n\nPara three ends it.";
    let first = chunk_text(text, 24, 6).unwrap();
    for _ in 0..3 {
        assert_eq!(chunk_text(text, 24, 6).unwrap(), first);
    }
}

#[test]
fn test_multibyte_text_never_splits_characters() {
    let text = "émojis 🦀🦀🦀 and chinese 中文测试 mixed in one document ".repeat(5);
    let chunks = chunk_text(&text, 20, 5).unwrap();

    for chunk in &chunks {
        assert!(std::str::from_utf8(chunk.as_bytes()).is_ok());
        assert!(chunk.chars().count() <= 20);
    }
}

#[test]
fn test_services_chunking_validates_per_call_parameters() {
    let services = create_test_services_with_chunking(10, 4);
    assert!(services.chunk_text("fine").is_ok());
    assert!(services.chunk_text_with("fine", 8, 9).is_err());
}
