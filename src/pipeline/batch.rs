// Line-pair comparison pipeline.
//
// Scores every line of document A against every line of document B, skips
// pairs whose score is undefined, sorts the rest in non-increasing score
// order, and keeps pairs strictly above the threshold.
//
// Sense sequences are extracted once per line up front; the AxB grid then
// only pays for scoring. The grid is quadratic in line count, so large
// documents get a progress bar.

use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::scoring::similarity::symmetric_score;
use crate::senses::extract_senses;
use crate::tagger::traits::Tagger;
use crate::taxonomy::traits::Taxonomy;

/// Grids with at least this many pairs show a progress bar.
const PROGRESS_THRESHOLD: usize = 500;

/// One scored line pair from the comparison grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredPair {
    pub line_a: String,
    pub line_b: String,
    /// Symmetric similarity in [0, 1]
    pub score: f64,
}

/// Compare every line of `lines_a` against every line of `lines_b`.
///
/// Returns the pairs scoring strictly above `threshold`, sorted by score
/// descending (ties keep first-seen order).
pub fn compare_line_sets(
    lines_a: &[String],
    lines_b: &[String],
    tagger: &dyn Tagger,
    taxonomy: &dyn Taxonomy,
    threshold: f64,
) -> Vec<ScoredPair> {
    // Extract each line's sense sequence once, not once per pair
    let senses_a: Vec<_> = lines_a
        .iter()
        .map(|line| extract_senses(line, tagger, taxonomy))
        .collect();
    let senses_b: Vec<_> = lines_b
        .iter()
        .map(|line| extract_senses(line, tagger, taxonomy))
        .collect();

    let total_pairs = lines_a.len() * lines_b.len();
    let pb = if total_pairs >= PROGRESS_THRESHOLD {
        let pb = ProgressBar::new(total_pairs as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("  Scoring [{bar:30}] {pos}/{len} ({eta})")
                .unwrap(),
        );
        Some(pb)
    } else {
        None
    };

    let mut scored = Vec::new();
    let mut skipped = 0usize;

    for (line_a, sa) in lines_a.iter().zip(&senses_a) {
        for (line_b, sb) in lines_b.iter().zip(&senses_b) {
            match symmetric_score(sa, sb, taxonomy) {
                Some(score) => scored.push(ScoredPair {
                    line_a: line_a.clone(),
                    line_b: line_b.clone(),
                    score,
                }),
                None => skipped += 1,
            }
            if let Some(ref pb) = pb {
                pb.inc(1);
            }
        }
    }
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    info!(
        pairs = total_pairs,
        scored = scored.len(),
        skipped,
        "Line grid scored"
    );

    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    scored.retain(|pair| pair.score > threshold);
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tagger::traits::TaggedToken;
    use crate::taxonomy::traits::{CoarsePos, SenseId};

    /// Tags every whitespace token as a noun.
    struct NounTagger;

    impl Tagger for NounTagger {
        fn tag(&self, text: &str) -> Vec<TaggedToken> {
            text.split_whitespace()
                .map(|word| TaggedToken {
                    text: word.to_string(),
                    tag: "NN".to_string(),
                })
                .collect()
        }
    }

    /// Single-digit words become senses; pairwise similarity decays with
    /// the numeric distance between offsets, except across the 100 mark,
    /// where pairs are incomparable.
    struct DigitTaxonomy;

    impl Taxonomy for DigitTaxonomy {
        fn senses_of(&self, word: &str, pos: CoarsePos) -> Vec<SenseId> {
            word.parse::<u32>()
                .map(|offset| vec![SenseId { pos, offset }])
                .unwrap_or_default()
        }

        fn path_similarity(&self, a: SenseId, b: SenseId) -> Option<f64> {
            if (a.offset < 100) != (b.offset < 100) {
                return None;
            }
            Some(1.0 / (1.0 + a.offset.abs_diff(b.offset) as f64))
        }
    }

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_identical_lines_score_top() {
        let a = lines(&["1 2", "5"]);
        let b = lines(&["1 2"]);
        let pairs = compare_line_sets(&a, &b, &NounTagger, &DigitTaxonomy, 0.5);
        assert_eq!(pairs[0].line_a, "1 2");
        assert!(
            (pairs[0].score - 1.0).abs() < 1e-9,
            "Identical lines should score 1.0, got {}",
            pairs[0].score
        );
    }

    #[test]
    fn test_results_sorted_descending() {
        let a = lines(&["1", "3", "7"]);
        let b = lines(&["1"]);
        let pairs = compare_line_sets(&a, &b, &NounTagger, &DigitTaxonomy, 0.0);
        for window in pairs.windows(2) {
            assert!(
                window[0].score >= window[1].score,
                "Pairs out of order: {} before {}",
                window[0].score,
                window[1].score
            );
        }
    }

    #[test]
    fn test_threshold_is_strict() {
        // "3" vs "1" scores exactly 1/3
        let a = lines(&["3"]);
        let b = lines(&["1"]);
        let kept = compare_line_sets(&a, &b, &NounTagger, &DigitTaxonomy, 1.0 / 3.0);
        assert!(
            kept.is_empty(),
            "Score equal to the threshold must be excluded"
        );
        let kept = compare_line_sets(&a, &b, &NounTagger, &DigitTaxonomy, 0.33);
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn test_undefined_pairs_are_skipped() {
        // "200" is across the incomparability mark from "1"; "blank" has no
        // senses at all. Neither pair aborts the batch.
        let a = lines(&["1", "200", "blank"]);
        let b = lines(&["1"]);
        let pairs = compare_line_sets(&a, &b, &NounTagger, &DigitTaxonomy, 0.0);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].line_a, "1");
    }

    #[test]
    fn test_empty_inputs_produce_empty_report() {
        let empty: Vec<String> = Vec::new();
        let b = lines(&["1"]);
        assert!(compare_line_sets(&empty, &b, &NounTagger, &DigitTaxonomy, 0.5).is_empty());
        assert!(compare_line_sets(&b, &empty, &NounTagger, &DigitTaxonomy, 0.5).is_empty());
    }
}
