// Sense extraction — tagged tokens to a canonical word-sense sequence.
//
// Each token keeps at most one sense: the first (most common) one the
// taxonomy lists for its (word, coarse category) pair. Tokens whose tag maps
// to no category, and tokens the taxonomy has never heard of, are silently
// dropped. Short or unusual inputs can therefore produce an empty sequence,
// which the scorer reports as undefined rather than an error.

use crate::tagger::traits::Tagger;
use crate::taxonomy::traits::{CoarsePos, SenseId, Taxonomy};

/// Map a fine-grained tag to its coarse category by first character.
/// `None` means "unknown": the token takes no part in sense extraction,
/// with no fallback lookup under other categories.
pub fn coarse_pos(fine_tag: &str) -> Option<CoarsePos> {
    match fine_tag.chars().next()? {
        'N' => Some(CoarsePos::Noun),
        'J' => Some(CoarsePos::Adjective),
        'R' => Some(CoarsePos::Adverb),
        'V' => Some(CoarsePos::Verb),
        _ => None,
    }
}

/// Convert a text into its sense sequence, in original token order.
pub fn extract_senses(
    text: &str,
    tagger: &dyn Tagger,
    taxonomy: &dyn Taxonomy,
) -> Vec<SenseId> {
    let mut senses = Vec::new();
    for token in tagger.tag(text) {
        let Some(pos) = coarse_pos(&token.tag) else {
            continue;
        };
        if let Some(&first) = taxonomy.senses_of(&token.text, pos).first() {
            senses.push(first);
        }
    }
    senses
}
