// Composition tests — verifying the stages chain together correctly.
//
// These tests exercise the data flow between modules:
//   extract -> senses -> scoring -> batch pipeline -> report
// over scripted taggers/taxonomies, with only the two-file regression test
// touching the filesystem (temp files).

use std::collections::HashMap;

use semblance::extract::{read_document, split_lines};
use semblance::output::SimilarityReport;
use semblance::pipeline::batch::{compare_line_sets, ScoredPair};
use semblance::tagger::traits::{TaggedToken, Tagger};
use semblance::taxonomy::traits::{CoarsePos, SenseId, Taxonomy};

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

/// One sense per catalogued word; similarity from a symmetric pair table,
/// identity at 1.0.
struct WordTable {
    offsets: HashMap<String, u32>,
    pairs: HashMap<(u32, u32), f64>,
}

impl WordTable {
    fn new(words: &[(&str, u32)], pairs: &[(u32, u32, f64)]) -> Self {
        let offsets = words.iter().map(|(w, o)| (w.to_string(), *o)).collect();
        let mut table = HashMap::new();
        for &(a, b, value) in pairs {
            table.insert((a, b), value);
            table.insert((b, a), value);
        }
        Self {
            offsets,
            pairs: table,
        }
    }
}

impl Taxonomy for WordTable {
    fn senses_of(&self, word: &str, pos: CoarsePos) -> Vec<SenseId> {
        self.offsets
            .get(word)
            .map(|&offset| vec![SenseId { pos, offset }])
            .unwrap_or_default()
    }

    fn path_similarity(&self, a: SenseId, b: SenseId) -> Option<f64> {
        if a == b {
            return Some(1.0);
        }
        self.pairs.get(&(a.offset, b.offset)).copied()
    }
}

fn lines(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

// ============================================================
// Chain: senses -> scoring -> batch ordering and filtering
// ============================================================

#[test]
fn batch_report_is_sorted_and_thresholded() {
    let taxonomy = WordTable::new(
        &[("storm", 1), ("tempest", 2), ("breeze", 3), ("ledger", 4)],
        &[(1, 2, 0.9), (1, 3, 0.55), (2, 3, 0.5)],
    );

    let a = lines(&["storm", "breeze", "ledger"]);
    let b = lines(&["tempest"]);

    let pairs = compare_line_sets(&a, &b, &NounTagger, &taxonomy, 0.5);

    // "ledger" has no defined pair with "tempest" and is skipped;
    // "breeze"/"tempest" scores exactly 0.5 and the strict threshold cuts it
    assert_eq!(pairs.len(), 1, "Got: {pairs:?}");
    assert_eq!(pairs[0].line_a, "storm");
    assert!((pairs[0].score - 0.9).abs() < 1e-9);

    // Lower the threshold: both defined pairs appear, best first
    let pairs = compare_line_sets(&a, &b, &NounTagger, &taxonomy, 0.0);
    assert_eq!(pairs.len(), 2);
    assert!(pairs[0].score >= pairs[1].score);
}

#[test]
fn undefined_pairs_never_abort_the_batch() {
    let taxonomy = WordTable::new(&[("storm", 1), ("tempest", 2)], &[(1, 2, 0.8)]);

    // Middle line has no catalogued words at all
    let a = lines(&["storm", "zzzz qqqq", "storm"]);
    let b = lines(&["tempest"]);

    let pairs = compare_line_sets(&a, &b, &NounTagger, &taxonomy, 0.1);
    assert_eq!(pairs.len(), 2, "Both defined pairs survive: {pairs:?}");
}

// ============================================================
// Chain: extract -> batch — the two-file comparator must read BOTH files
// ============================================================

#[test]
fn comparator_reads_the_second_file_not_the_first_twice() {
    // Guards against a document comparator that reads file1 twice and
    // silently compares a document against itself. Reading the real file2
    // produces a 0.9 cross-file pair; a self-comparison would score 1.0.
    let dir = std::env::temp_dir().join("semblance-composition-test");
    std::fs::create_dir_all(&dir).unwrap();
    let path_a = dir.join("left.txt");
    let path_b = dir.join("right.txt");
    std::fs::write(&path_a, "storm\n").unwrap();
    std::fs::write(&path_b, "tempest\n").unwrap();

    let taxonomy = WordTable::new(&[("storm", 1), ("tempest", 2)], &[(1, 2, 0.9)]);

    let lines_a = split_lines(&read_document(&path_a).unwrap());
    let lines_b = split_lines(&read_document(&path_b).unwrap());
    let pairs = compare_line_sets(&lines_a, &lines_b, &NounTagger, &taxonomy, 0.5);

    assert_eq!(pairs.len(), 1);
    assert_eq!(
        pairs[0].line_b, "tempest",
        "Second side must come from file2"
    );
    assert!(
        (pairs[0].score - 0.9).abs() < 1e-9,
        "A self-comparison would have scored 1.0, got {}",
        pairs[0].score
    );

    std::fs::remove_dir_all(&dir).unwrap();
}

// ============================================================
// Chain: batch -> JSON report
// ============================================================

#[test]
fn json_report_carries_pairs_and_count() {
    let pairs = vec![
        ScoredPair {
            line_a: "storm".to_string(),
            line_b: "tempest".to_string(),
            score: 0.9,
        },
        ScoredPair {
            line_a: "breeze".to_string(),
            line_b: "tempest".to_string(),
            score: 0.55,
        },
    ];
    let report = SimilarityReport::new("a.txt".into(), "b.txt".into(), 0.5, pairs);
    assert_eq!(report.matches, 2);

    let json = serde_json::to_string(&report).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["matches"], 2);
    assert_eq!(parsed["pairs"][0]["line_b"], "tempest");
}
