// Sense-sequence similarity with max-then-average aggregation.
//
// The directional score of A onto B: each sense in A takes the best defined
// path similarity it can find in B, and the score is the mean of those best
// matches. Senses with no defined pairwise similarity contribute nothing —
// neither to the sum nor to the count. The symmetric score averages both
// directions.
//
// `None` models the undefined cases: an empty sequence, or nothing in A
// comparable to anything in B. Callers filter or report it explicitly.

use crate::senses::extract_senses;
use crate::tagger::traits::Tagger;
use crate::taxonomy::traits::{SenseId, Taxonomy};

/// Normalized similarity of `from` onto `to`: mean of each `from` sense's
/// best defined match in `to`. Not symmetric by itself.
///
/// `None` when `from` is empty or no sense in `from` has any defined
/// pairwise similarity to a sense in `to`.
pub fn directional_score(
    from: &[SenseId],
    to: &[SenseId],
    taxonomy: &dyn Taxonomy,
) -> Option<f64> {
    let mut best_matches = Vec::new();

    for &a in from {
        let mut best: Option<f64> = None;
        for &b in to {
            if let Some(value) = taxonomy.path_similarity(a, b) {
                best = Some(best.map_or(value, |current| current.max(value)));
            }
        }
        if let Some(value) = best {
            best_matches.push(value);
        }
    }

    if best_matches.is_empty() {
        return None;
    }
    Some(best_matches.iter().sum::<f64>() / best_matches.len() as f64)
}

/// Symmetric similarity: the mean of both directional scores.
/// `None` if either direction is undefined.
pub fn symmetric_score(
    doc_a: &[SenseId],
    doc_b: &[SenseId],
    taxonomy: &dyn Taxonomy,
) -> Option<f64> {
    let forward = directional_score(doc_a, doc_b, taxonomy)?;
    let backward = directional_score(doc_b, doc_a, taxonomy)?;
    Some((forward + backward) / 2.0)
}

/// End-to-end similarity of two texts: extract both sense sequences, then
/// score them symmetrically.
pub fn text_similarity(
    text_a: &str,
    text_b: &str,
    tagger: &dyn Tagger,
    taxonomy: &dyn Taxonomy,
) -> Option<f64> {
    let senses_a = extract_senses(text_a, tagger, taxonomy);
    let senses_b = extract_senses(text_b, tagger, taxonomy);
    symmetric_score(&senses_a, &senses_b, taxonomy)
}
