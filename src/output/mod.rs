// Output formatting — terminal display and the JSON report.

pub mod terminal;

use serde::Serialize;

use crate::pipeline::batch::ScoredPair;

/// Machine-readable report for the document comparator (`docs --json`).
#[derive(Debug, Serialize)]
pub struct SimilarityReport {
    pub file1: String,
    pub file2: String,
    pub threshold: f64,
    /// Number of line pairs above the threshold
    pub matches: usize,
    pub pairs: Vec<ScoredPair>,
}

impl SimilarityReport {
    pub fn new(file1: String, file2: String, threshold: f64, pairs: Vec<ScoredPair>) -> Self {
        Self {
            file1,
            file2,
            threshold,
            matches: pairs.len(),
            pairs,
        }
    }
}
