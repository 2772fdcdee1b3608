use crate::ranking::RankedText;
use liblevenshtein::distance::transposition_distance;

/// Candidates scoring above this are dropped.
const MAX_PROXIMITY: f64 = 2.0;

/// Penalty for a candidate that does not start with the typed text.
const NON_PREFIX_PENALTY: f64 = 0.5;

/// Filter `candidates` down to those close to `partial_text` and order them
/// closest first.
///
/// Ties are broken by the shorter candidate text, then by input order. When
/// `partial_text` normalizes to nothing, or when no candidate is close
/// enough, `candidates` is returned as given.
///
/// ```
/// # use libgraphql_assist::ranking::rank;
/// let ranked = rank(vec!["title", "test", "body"], "tes");
/// assert_eq!(ranked.first(), Some(&"test"));
/// assert!(!ranked.contains(&"body"));
/// ```
pub fn rank<T: RankedText>(candidates: Vec<T>, partial_text: &str) -> Vec<T> {
    let text = normalize_text(partial_text);
    if text.is_empty() {
        return candidates;
    }

    let mut scored = candidates.iter()
        .enumerate()
        .map(|(idx, candidate)| {
            let candidate_text = candidate.ranked_text();
            let score = proximity(&normalize_text(candidate_text), &text);
            (idx, score, candidate_text.chars().count())
        })
        .filter(|(_, score, _)| *score <= MAX_PROXIMITY)
        .collect::<Vec<_>>();

    if scored.is_empty() {
        log::debug!(
            "no candidate within {MAX_PROXIMITY} of `{text}`, keeping all {}",
            candidates.len(),
        );
        return candidates;
    }

    scored.sort_by(|(_, a_score, a_len), (_, b_score, b_len)| {
        a_score.total_cmp(b_score).then(a_len.cmp(b_len))
    });

    let mut slots = candidates.into_iter()
        .map(Some)
        .collect::<Vec<_>>();
    scored.into_iter()
        .filter_map(|(idx, _, _)| slots[idx].take())
        .collect()
}

/// Lowercase `text` and drop everything but ASCII letters, digits and `_`.
pub fn normalize_text(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

/// How far the (normalized) `suggestion` is from the (normalized) `text`.
/// Lower is closer.
///
/// Starts from the edit distance (adjacent transpositions counting as one
/// edit). Suggestions longer than `text` are credited for their extra length
/// so that completing a word is not penalized, but lose half a point unless
/// they start with `text`.
pub fn proximity(suggestion: &str, text: &str) -> f64 {
    let mut proximity = transposition_distance(text, suggestion) as f64;
    let suggestion_len = suggestion.chars().count();
    let text_len = text.chars().count();
    if suggestion_len > text_len {
        proximity -= (suggestion_len - text_len - 1) as f64;
        if !suggestion.starts_with(text) {
            proximity += NON_PREFIX_PENALTY;
        }
    }
    proximity
}
