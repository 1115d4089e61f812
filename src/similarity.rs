//! Partial-ratio string similarity on a 0..=100 scale.
//!
//! `ratio` is `strsim::normalized_levenshtein` scaled to a percentage.
//! `partial_ratio` slides the shorter string across the longer one, one char
//! at a time, and keeps the best window ratio. All lengths are measured in
//! chars, not bytes.

use strsim::normalized_levenshtein;

/// Upper bound of every score.
pub const MAX_SCORE: u8 = 100;

/// Edit similarity of two whole strings.
pub fn ratio(a: &str, b: &str) -> u8 {
    to_score(normalized_levenshtein(a, b))
}

/// Best edit similarity between the shorter string and any equally long
/// window of the longer one. Returns 0 when either side is empty.
pub fn partial_ratio(a: &str, b: &str) -> u8 {
    let (short, long) = if a.chars().count() <= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };
    let short_len = short.chars().count();
    if short_len == 0 {
        return 0;
    }

    let long_chars: Vec<char> = long.chars().collect();
    let mut best = 0.0_f64;
    for window in long_chars.windows(short_len) {
        let candidate: String = window.iter().collect();
        let similarity = normalized_levenshtein(short, &candidate);
        if similarity > best {
            best = similarity;
            if best >= 1.0 {
                break;
            }
        }
    }
    to_score(best)
}

fn to_score(similarity: f64) -> u8 {
    (similarity * f64::from(MAX_SCORE))
        .round()
        .clamp(0.0, f64::from(MAX_SCORE)) as u8
}
