// Similarity scoring — directional, symmetric, and end-to-end text scores.

pub mod similarity;
