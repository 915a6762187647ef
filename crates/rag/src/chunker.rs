//! Text chunker — overlapping token windows.
//!
//! Splits text on whitespace and emits windows of `chunk_size` tokens,
//! each advancing by `chunk_size - overlap` tokens. Pure and
//! deterministic: the same text and parameters always produce the same
//! chunks.

use groundbot_core::error::{Error, Result};

/// Split `text` into overlapping windows of whitespace tokens.
///
/// The window step is `chunk_size - overlap`, which must be strictly
/// positive — `overlap >= chunk_size` (or `chunk_size == 0`) is
/// rejected with a validation error since it would never advance.
/// Empty or whitespace-only input yields an empty sequence, not an
/// error.
pub fn chunk(text: &str, chunk_size: usize, overlap: usize) -> Result<Vec<String>> {
    if chunk_size == 0 || overlap >= chunk_size {
        return Err(Error::Validation {
            message: format!(
                "chunk window must advance: overlap ({overlap}) must be smaller than chunk_size ({chunk_size})"
            ),
        });
    }

    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(Vec::new());
    }

    let step = chunk_size - overlap;
    let mut chunks = Vec::new();
    let mut i = 0;
    while i < tokens.len() {
        let end = (i + chunk_size).min(tokens.len());
        chunks.push(tokens[i..end].join(" "));
        i += step;
    }

    Ok(chunks)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered_text(n: usize) -> String {
        (0..n).map(|i| i.to_string()).collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn empty_input_yields_no_chunks() {
        assert!(chunk("", 10, 2).unwrap().is_empty());
        assert!(chunk("   \n\t  ", 10, 2).unwrap().is_empty());
    }

    #[test]
    fn short_input_yields_single_chunk() {
        let chunks = chunk("one two three", 10, 2).unwrap();
        assert_eq!(chunks, vec!["one two three"]);
    }

    #[test]
    fn windows_never_exceed_chunk_size() {
        let text = numbered_text(137);
        let chunks = chunk(&text, 20, 5).unwrap();
        for c in &chunks {
            assert!(c.split_whitespace().count() <= 20);
        }
    }

    #[test]
    fn consecutive_windows_overlap_exactly() {
        let text = numbered_text(100);
        let chunks = chunk(&text, 20, 5).unwrap();

        for pair in chunks.windows(2) {
            let left: Vec<&str> = pair[0].split_whitespace().collect();
            let right: Vec<&str> = pair[1].split_whitespace().collect();
            // Full windows share exactly `overlap` tokens: the tail of
            // one equals the head of the next.
            if left.len() == 20 {
                assert_eq!(&left[15..], &right[..5.min(right.len())]);
            }
        }
    }

    #[test]
    fn non_overlapping_spans_reconstruct_token_sequence() {
        let text = numbered_text(83);
        let chunk_size = 20;
        let overlap = 5;
        let step = chunk_size - overlap;
        let chunks = chunk(&text, chunk_size, overlap).unwrap();

        // Taking the first `step` tokens of each window (all of the
        // last) replays the original token stream.
        let mut rebuilt: Vec<String> = Vec::new();
        for (i, c) in chunks.iter().enumerate() {
            let tokens: Vec<&str> = c.split_whitespace().collect();
            if i + 1 == chunks.len() {
                rebuilt.extend(tokens.iter().map(|t| t.to_string()));
            } else {
                rebuilt.extend(tokens.iter().take(step).map(|t| t.to_string()));
            }
        }

        let original: Vec<String> = text.split_whitespace().map(String::from).collect();
        assert_eq!(rebuilt, original);
    }

    #[test]
    fn overlap_equal_to_chunk_size_rejected() {
        let err = chunk("a b c", 5, 5).unwrap_err();
        assert!(err.to_string().contains("overlap"));
    }

    #[test]
    fn overlap_greater_than_chunk_size_rejected() {
        assert!(chunk("a b c", 5, 9).is_err());
    }

    #[test]
    fn zero_chunk_size_rejected() {
        assert!(chunk("a b c", 0, 0).is_err());
    }

    #[test]
    fn deterministic() {
        let text = numbered_text(60);
        assert_eq!(chunk(&text, 7, 2).unwrap(), chunk(&text, 7, 2).unwrap());
    }

    #[test]
    fn windows_normalize_interior_whitespace() {
        let chunks = chunk("a\r\nb\tc   d", 3, 1).unwrap();
        assert_eq!(chunks[0], "a b c");
    }
}
