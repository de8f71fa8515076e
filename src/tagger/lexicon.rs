// Lexicon-driven part-of-speech tagger.
//
// A most-frequent-class baseline: closed-class words (determiners, pronouns,
// prepositions, auxiliaries, ...) come from a fixed table; open-class words
// consult the lexicon for their possible categories and suffix shape picks
// the fine tag. One contextual patch rule prefers the verb reading right
// after a personal pronoun, modal, or "to" ("I like cats", "to fish").
//
// Tag quality is deliberately modest. The similarity core only consumes the
// first character of each tag, and any Tagger implementation can replace
// this one behind the trait.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::taxonomy::traits::CoarsePos;

use super::tokenize;
use super::traits::{Lexicon, TaggedToken, Tagger};

/// Closed-class words with their fixed tags. First listing wins for words
/// that could sit in several groups.
static CLOSED_CLASS_GROUPS: &[(&str, &[&str])] = &[
    ("DT", &[
        "the", "a", "an", "this", "that", "these", "those", "each", "every",
        "either", "neither", "some", "any", "no", "all", "both", "another",
    ]),
    ("PRP", &[
        "i", "you", "he", "she", "it", "we", "they", "me", "him", "us",
        "them", "myself", "yourself", "himself", "herself", "itself",
        "ourselves", "themselves", "mine", "yours", "hers", "ours", "theirs",
    ]),
    ("PRP$", &["my", "your", "his", "her", "its", "our", "their"]),
    ("IN", &[
        "of", "in", "on", "at", "by", "for", "with", "about", "against",
        "between", "into", "through", "during", "before", "after", "above",
        "below", "from", "up", "down", "under", "over", "since", "without",
        "within", "along", "across", "behind", "beyond", "near", "than",
        "as", "if", "because", "while", "until", "unless", "although",
        "though", "whether",
    ]),
    ("CC", &["and", "or", "but", "nor", "so", "yet"]),
    ("MD", &["can", "could", "may", "might", "must", "shall", "should", "will", "would"]),
    ("TO", &["to"]),
    ("WDT", &["which", "what", "whatever"]),
    ("WP", &["who", "whom", "whose"]),
    ("WRB", &["when", "where", "why", "how"]),
    ("EX", &["there"]),
    ("RB", &["not", "n't", "very", "too", "also", "just", "never", "always", "often"]),
    // Auxiliary forms of be/do/have get their conjugation-specific tags
    ("VB", &["be"]),
    ("VBP", &["am", "are", "do", "have"]),
    ("VBZ", &["is", "does", "has"]),
    ("VBD", &["was", "were", "did", "had"]),
    ("VBN", &["been", "done"]),
    ("VBG", &["being", "doing", "having"]),
];

/// Pre-built word -> tag lookup for the closed-class table.
static CLOSED_CLASS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    for (tag, words) in CLOSED_CLASS_GROUPS {
        for &word in *words {
            map.entry(word).or_insert(*tag);
        }
    }
    map
});

/// Previous-tag contexts after which an ambiguous word reads as a verb.
const VERB_CONTEXTS: [&str; 3] = ["PRP", "MD", "TO"];

/// Lexicon-backed tagger. Borrows the lexicon (in practice the loaded
/// WordNet taxonomy) rather than owning a second copy of it.
pub struct LexiconTagger<'a> {
    lexicon: &'a dyn Lexicon,
}

impl<'a> LexiconTagger<'a> {
    pub fn new(lexicon: &'a dyn Lexicon) -> Self {
        Self { lexicon }
    }

    /// Pick a fine tag for one open-class token. `prev_tag` is the fine tag
    /// of the preceding token (empty at the start of the text).
    fn open_class_tag(&self, token: &str, prev_tag: &str) -> String {
        let lower = token.to_lowercase();
        let classes = self.lexicon.known_pos(&lower);

        let is_verb = classes.contains(&CoarsePos::Verb);
        let is_noun = classes.contains(&CoarsePos::Noun);
        let is_adj = classes.contains(&CoarsePos::Adjective);
        let is_adv = classes.contains(&CoarsePos::Adverb);

        if VERB_CONTEXTS.contains(&prev_tag) && is_verb {
            return verb_tag(&lower, prev_tag).to_string();
        }
        if lower.ends_with("ly") && is_adv {
            return "RB".to_string();
        }
        if is_noun {
            return noun_tag(&lower, self.lexicon).to_string();
        }
        if is_verb {
            return verb_tag(&lower, prev_tag).to_string();
        }
        if is_adj {
            return "JJ".to_string();
        }
        if is_adv {
            return "RB".to_string();
        }

        // Not in the lexicon at all: fall back to shape
        if lower.ends_with("ly") {
            "RB".to_string()
        } else if lower.ends_with("ing") {
            "VBG".to_string()
        } else if lower.ends_with("ed") {
            "VBD".to_string()
        } else if token.chars().next().is_some_and(|c| c.is_uppercase()) {
            "NNP".to_string()
        } else {
            "NN".to_string()
        }
    }
}

/// Fine verb tag from surface shape. A base form after a pronoun subject is
/// present tense (VBP); after "to" or a modal it is the infinitive (VB).
fn verb_tag(lower: &str, prev_tag: &str) -> &'static str {
    if lower.ends_with("ing") {
        "VBG"
    } else if lower.ends_with("ed") {
        "VBD"
    } else if lower.ends_with('s') && !lower.ends_with("ss") {
        "VBZ"
    } else if prev_tag == "PRP" {
        "VBP"
    } else {
        "VB"
    }
}

/// Fine noun tag: NNS when the form looks plural and its singular is also
/// a catalogued noun, NN otherwise.
fn noun_tag(lower: &str, lexicon: &dyn Lexicon) -> &'static str {
    if lower.ends_with('s') && !lower.ends_with("ss") {
        if let Some(singular) = lower.strip_suffix('s') {
            if lexicon.known_pos(singular).contains(&CoarsePos::Noun) {
                return "NNS";
            }
        }
    }
    "NN"
}

impl Tagger for LexiconTagger<'_> {
    fn tag(&self, text: &str) -> Vec<TaggedToken> {
        let mut tagged = Vec::new();
        let mut prev_tag = String::new();

        for token in tokenize(text) {
            let tag = if token.chars().all(|c| c.is_ascii_digit()) {
                "CD".to_string()
            } else if !token.chars().any(|c| c.is_alphabetic()) {
                // Symbols tag as themselves (".", ",", "?") and drop later
                token.clone()
            } else if let Some(&tag) = CLOSED_CLASS.get(token.to_lowercase().as_str()) {
                tag.to_string()
            } else {
                self.open_class_tag(&token, &prev_tag)
            };

            prev_tag = tag.clone();
            tagged.push(TaggedToken { text: token, tag });
        }
        tagged
    }
}
