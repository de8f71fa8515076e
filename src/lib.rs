// Semblance: taxonomy-based semantic similarity for lines and documents.
//
// This is the library root. Each module corresponds to one stage of the
// similarity pipeline: tag text, map tokens to word senses, score sense
// sequences against each other, and report the results.

pub mod config;
pub mod extract;
pub mod output;
pub mod pipeline;
pub mod scoring;
pub mod senses;
pub mod tagger;
pub mod taxonomy;
