// Taxonomy trait — the swap-ready abstraction.
//
// The taxonomy is handed to the sense extractor and the scorer as an
// explicit handle rather than ambient global state, so tests can inject
// scripted inventories and alternative snapshots can be swapped in without
// touching the rest of the pipeline. The default implementation reads the
// WordNet database files.

/// Coarse part-of-speech category used to key sense lookups.
///
/// Derived from the first character of a fine-grained tag; tags outside
/// these four categories are "unknown" and their tokens are dropped before
/// any taxonomy lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoarsePos {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl CoarsePos {
    /// All categories, in the order the WordNet database names them.
    pub const ALL: [CoarsePos; 4] = [
        CoarsePos::Noun,
        CoarsePos::Verb,
        CoarsePos::Adjective,
        CoarsePos::Adverb,
    ];

    /// Human-readable category name.
    pub fn label(&self) -> &'static str {
        match self {
            CoarsePos::Noun => "noun",
            CoarsePos::Verb => "verb",
            CoarsePos::Adjective => "adjective",
            CoarsePos::Adverb => "adverb",
        }
    }
}

/// Identifier for one word sense (synset) in the taxonomy.
///
/// The offset is only meaningful within its category: noun 2084071 and
/// verb 2084071 are unrelated senses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SenseId {
    pub pos: CoarsePos,
    pub offset: u32,
}

/// Trait for a lexical taxonomy: a sense inventory plus a similarity metric.
pub trait Taxonomy {
    /// Senses catalogued for a surface form under one category, most common
    /// first. Implementations are responsible for any morphological
    /// normalization ("friends" -> "friend", "are" -> "be"). An empty vec
    /// means the word is not in the inventory under that category.
    fn senses_of(&self, word: &str, pos: CoarsePos) -> Vec<SenseId>;

    /// Path-based similarity between two senses, in [0, 1].
    ///
    /// `None` means the senses share no connecting path (e.g. different
    /// categories) and the pair contributes nothing to a score.
    fn path_similarity(&self, a: SenseId, b: SenseId) -> Option<f64>;
}
