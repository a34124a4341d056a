//! Recursive separator-hierarchy text chunking.
//!
//! Splits text into bounded, overlapping segments for
//! embedding-model input limits. Separators are tried from the
//! largest semantic unit (paragraph break) down to single
//! characters; pieces that still exceed the chunk size recurse on
//! the remaining, lower-priority separators. Recursion depth is
//! therefore capped by the separator list length.
//!
//! All sizes are measured in **characters**, not bytes, so chunk
//! boundaries always fall on valid UTF-8 character boundaries.
//!
//! # Size bound
//!
//! Every produced chunk is at most `chunk_size` characters, with
//! one documented exception: an indivisible piece (no
//! lower-priority separators left to recurse on) is emitted
//! verbatim even when it exceeds the bound.

use crate::core::error::{Result, TextPrepError};

/// Default separator hierarchy: paragraph break, line break,
/// word break, then individual characters.
pub const DEFAULT_SEPARATORS: [&str; 4] = ["\n\n", "\n", " ", ""];

/// Split `text` into chunks of at most `chunk_size` characters
/// with `chunk_overlap` characters carried between neighbors,
/// using the default separator hierarchy.
///
/// Returns [`TextPrepError::InvalidChunking`] when
/// `chunk_size == 0` or `chunk_overlap >= chunk_size`; an overlap
/// at or beyond the chunk size could stall the accumulator, so
/// the precondition is rejected up front rather than left to the
/// algorithm.
///
/// # Example
///
/// ```
/// use textprep::core::chunker::chunk_text;
///
/// let chunks = chunk_text("AAAA\n\nBBBB\n\nCCCC\n\nDDDD", 10, 4).unwrap();
/// assert_eq!(chunks, vec!["AAAA\n\nBBBB", "BBBB\n\nCCCC", "CCCC\n\nDDDD"]);
/// ```
pub fn chunk_text(text: &str, chunk_size: usize, chunk_overlap: usize) -> Result<Vec<String>> {
    chunk_text_with_separators(text, chunk_size, chunk_overlap, &DEFAULT_SEPARATORS)
}

/// Split `text` with a caller-supplied separator hierarchy.
///
/// Separators are tried in priority order; an empty string splits
/// into individual characters. The hierarchy is finite and fixed
/// per call, which bounds the recursion depth.
pub fn chunk_text_with_separators(
    text: &str,
    chunk_size: usize,
    chunk_overlap: usize,
    separators: &[&str],
) -> Result<Vec<String>> {
    if chunk_size == 0 {
        return Err(TextPrepError::InvalidChunking(
            "chunk_size must be greater than zero".to_string(),
        ));
    }
    if chunk_overlap >= chunk_size {
        return Err(TextPrepError::InvalidChunking(format!(
            "chunk_overlap ({chunk_overlap}) must be less than chunk_size ({chunk_size})"
        )));
    }
    if text.is_empty() {
        return Ok(Vec::new());
    }

    let mut chunks = Vec::new();
    split_recursive(text, chunk_size, chunk_overlap, separators, &mut chunks);
    tracing::debug!(
        "Chunked {} chars into {} chunks (size {}, overlap {})",
        text.chars().count(),
        chunks.len(),
        chunk_size,
        chunk_overlap
    );
    Ok(chunks)
}

/// One level of the recursion: pick a separator, split, merge.
fn split_recursive(
    text: &str,
    chunk_size: usize,
    chunk_overlap: usize,
    separators: &[&str],
    out: &mut Vec<String>,
) {
    let (separator, remaining) = select_separator(text, separators);
    let pieces = split_on(text, separator);
    merge_pieces(&pieces, separator, chunk_size, chunk_overlap, remaining, out);
}

/// First separator (in priority order) that occurs in `text`.
///
/// An empty separator always matches and splits into characters.
/// When no listed separator occurs, the empty separator is the
/// fallback with nothing left to recurse on.
fn select_separator<'s>(text: &str, separators: &'s [&'s str]) -> (&'s str, &'s [&'s str]) {
    for (i, sep) in separators.iter().enumerate() {
        if sep.is_empty() || text.contains(sep) {
            return (sep, &separators[i + 1..]);
        }
    }
    ("", &[])
}

/// Split into borrowed pieces; an empty separator yields one
/// piece per character.
fn split_on<'t>(text: &'t str, separator: &str) -> Vec<&'t str> {
    if separator.is_empty() {
        let mut pieces = Vec::with_capacity(text.len());
        let mut iter = text.char_indices().peekable();
        while let Some((start, _)) = iter.next() {
            let end = iter.peek().map(|&(i, _)| i).unwrap_or(text.len());
            pieces.push(&text[start..end]);
        }
        pieces
    } else {
        text.split(separator).collect()
    }
}

/// Walk pieces left to right, accumulating them into chunks.
///
/// The running length counts piece characters plus one separator
/// length for every join after the first. A flush joins the
/// accumulated pieces with the separator, trims, and discards
/// empty results.
fn merge_pieces(
    pieces: &[&str],
    separator: &str,
    chunk_size: usize,
    chunk_overlap: usize,
    remaining: &[&str],
    out: &mut Vec<String>,
) {
    let sep_len = separator.chars().count();
    let mut current: Vec<&str> = Vec::new();
    let mut current_len = 0usize;

    for &piece in pieces {
        let piece_len = piece.chars().count();

        // Oversized piece: flush, then recurse on it with the
        // lower-priority separators (or emit verbatim when none
        // remain).
        if piece_len > chunk_size {
            flush(&mut current, &mut current_len, separator, out);
            if remaining.is_empty() {
                let trimmed = piece.trim();
                if !trimmed.is_empty() {
                    out.push(trimmed.to_string());
                }
            } else {
                split_recursive(piece, chunk_size, chunk_overlap, remaining, out);
            }
            continue;
        }

        // Flush when adding this piece would overflow, seeding
        // the next accumulator with the overlap tail of the chunk
        // just flushed.
        if !current.is_empty() && current_len + sep_len + piece_len > chunk_size {
            let chunk = join_trimmed(&current, separator);
            if !chunk.is_empty() {
                out.push(chunk);
            }
            seed_overlap(&mut current, &mut current_len, sep_len, chunk_overlap);

            // The seed plus the incoming piece must still fit;
            // drop seeded pieces from the front until it does.
            while !current.is_empty() && current_len + sep_len + piece_len > chunk_size {
                pop_front(&mut current, &mut current_len, sep_len);
            }
        }

        if !current.is_empty() {
            current_len += sep_len;
        }
        current_len += piece_len;
        current.push(piece);
    }

    flush(&mut current, &mut current_len, separator, out);
}

/// Emit the accumulator as a chunk (if non-empty after trimming)
/// and reset it.
fn flush(current: &mut Vec<&str>, current_len: &mut usize, separator: &str, out: &mut Vec<String>) {
    if current.is_empty() {
        return;
    }
    let chunk = join_trimmed(current, separator);
    if !chunk.is_empty() {
        out.push(chunk);
    }
    current.clear();
    *current_len = 0;
}

fn join_trimmed(pieces: &[&str], separator: &str) -> String {
    pieces.join(separator).trim().to_string()
}

/// Replace the accumulator with its overlap tail: scan backward,
/// greedily keeping pieces while the cumulative length stays
/// within `chunk_overlap`. The first kept piece is charged its
/// own length; each further piece also charges one separator.
fn seed_overlap(
    current: &mut Vec<&str>,
    current_len: &mut usize,
    sep_len: usize,
    chunk_overlap: usize,
) {
    let mut seed: Vec<&str> = Vec::new();
    let mut seed_len = 0usize;

    for &piece in current.iter().rev() {
        let piece_len = piece.chars().count();
        let cost = if seed.is_empty() {
            piece_len
        } else {
            piece_len + sep_len
        };
        if seed_len + cost > chunk_overlap {
            break;
        }
        seed_len += cost;
        seed.push(piece);
    }

    seed.reverse();
    *current = seed;
    *current_len = seed_len;
}

/// Drop the oldest piece from the accumulator, adjusting the
/// running length for the separator that joined it.
fn pop_front(current: &mut Vec<&str>, current_len: &mut usize, sep_len: usize) {
    let dropped = current.remove(0);
    *current_len -= dropped.chars().count();
    if !current.is_empty() {
        *current_len -= sep_len;
    }
}
