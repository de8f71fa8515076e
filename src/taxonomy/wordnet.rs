// WordNet-backed taxonomy implementation.
//
// Parses the WordNet 3.x database files (index.noun, data.noun, noun.exc,
// and the verb/adj/adv counterparts) from a local directory into in-memory
// maps: lemma -> ordered synset offsets, synset -> hypernym offsets, and
// irregular form -> base forms. Everything is immutable after load.
//
// Path similarity follows the classic formulation: 1 / (1 + d), where d is
// the shortest connecting path through hypernym links. Nouns and verbs are
// additionally connected through a simulated common root so any same-category
// pair is comparable; adjectives and adverbs carry no hypernym structure, so
// only identical senses compare.

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};

use super::traits::{CoarsePos, SenseId, Taxonomy};
use crate::tagger::traits::Lexicon;

/// File suffix WordNet uses for each category (index.noun, data.verb, ...).
fn file_suffix(pos: CoarsePos) -> &'static str {
    match pos {
        CoarsePos::Noun => "noun",
        CoarsePos::Verb => "verb",
        CoarsePos::Adjective => "adj",
        CoarsePos::Adverb => "adv",
    }
}

/// Returns the default directory for the WordNet database files.
/// Uses the platform data directory: ~/.local/share/semblance/wordnet/ on Linux.
pub fn default_wordnet_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("semblance")
        .join("wordnet")
}

/// Check whether the index and data files for all four categories exist.
pub fn wordnet_files_present(dir: &Path) -> bool {
    CoarsePos::ALL.iter().all(|&pos| {
        let suffix = file_suffix(pos);
        dir.join(format!("index.{suffix}")).exists() && dir.join(format!("data.{suffix}")).exists()
    })
}

/// Per-category load statistics, displayed by `semblance status`.
#[derive(Debug, Clone, Copy)]
pub struct CategoryStats {
    pub pos: CoarsePos,
    pub lemmas: usize,
    pub synsets: usize,
}

/// A lexical taxonomy loaded from WordNet database files.
pub struct WordNetTaxonomy {
    /// lemma -> synset offsets in frequency order, per category
    index: HashMap<CoarsePos, HashMap<String, Vec<u32>>>,
    /// synset offset -> hypernym offsets, per category (every parsed synset
    /// has an entry, possibly empty)
    hypernyms: HashMap<CoarsePos, HashMap<u32, Vec<u32>>>,
    /// irregular surface form -> base forms, per category
    exceptions: HashMap<CoarsePos, HashMap<String, Vec<String>>>,
}

impl WordNetTaxonomy {
    /// Load the database files from `dir`.
    ///
    /// Index and data files are required for all four categories; exception
    /// files are optional (a missing one just means no irregular forms for
    /// that category). Malformed lines are skipped with a warning.
    pub fn load(dir: &Path) -> Result<Self> {
        let mut index = HashMap::new();
        let mut hypernyms = HashMap::new();
        let mut exceptions = HashMap::new();

        for &pos in &CoarsePos::ALL {
            let suffix = file_suffix(pos);

            let index_path = dir.join(format!("index.{suffix}"));
            index.insert(pos, load_index_file(&index_path)?);

            let data_path = dir.join(format!("data.{suffix}"));
            hypernyms.insert(pos, load_data_file(&data_path)?);

            let exc_path = dir.join(format!("{suffix}.exc"));
            let exc = if exc_path.exists() {
                load_exception_file(&exc_path)?
            } else {
                HashMap::new()
            };
            exceptions.insert(pos, exc);
        }

        let taxonomy = Self {
            index,
            hypernyms,
            exceptions,
        };

        for stats in taxonomy.stats() {
            info!(
                category = stats.pos.label(),
                lemmas = stats.lemmas,
                synsets = stats.synsets,
                "Loaded WordNet category"
            );
        }

        Ok(taxonomy)
    }

    /// Load statistics for each category, in the fixed category order.
    pub fn stats(&self) -> Vec<CategoryStats> {
        CoarsePos::ALL
            .iter()
            .map(|&pos| CategoryStats {
                pos,
                lemmas: self.index.get(&pos).map_or(0, |m| m.len()),
                synsets: self.hypernyms.get(&pos).map_or(0, |m| m.len()),
            })
            .collect()
    }

    /// Candidate base forms for a surface form, in lookup priority order:
    /// the form itself, irregular bases from the exception list, then the
    /// regular suffix-detachment candidates.
    fn base_forms(&self, word: &str, pos: CoarsePos) -> Vec<String> {
        let normalized = word.to_lowercase().replace(' ', "_");
        let mut forms = vec![normalized.clone()];

        if let Some(bases) = self
            .exceptions
            .get(&pos)
            .and_then(|m| m.get(&normalized))
        {
            forms.extend(bases.iter().cloned());
        }

        forms.extend(suffix_candidates(&normalized, pos));

        // Dedupe while preserving priority order
        let mut seen = HashSet::new();
        forms.retain(|f| seen.insert(f.clone()));
        forms
    }
}

impl Taxonomy for WordNetTaxonomy {
    fn senses_of(&self, word: &str, pos: CoarsePos) -> Vec<SenseId> {
        let Some(lemmas) = self.index.get(&pos) else {
            return Vec::new();
        };

        let mut senses = Vec::new();
        let mut seen = HashSet::new();
        for form in self.base_forms(word, pos) {
            if let Some(offsets) = lemmas.get(&form) {
                for &offset in offsets {
                    if seen.insert(offset) {
                        senses.push(SenseId { pos, offset });
                    }
                }
            }
        }
        senses
    }

    fn path_similarity(&self, a: SenseId, b: SenseId) -> Option<f64> {
        // Hypernym graphs never cross categories
        if a.pos != b.pos {
            return None;
        }
        if a == b {
            return Some(1.0);
        }

        let graph = self.hypernyms.get(&a.pos)?;
        let depths_a = ancestor_depths(graph, a.offset);
        let depths_b = ancestor_depths(graph, b.offset);

        let mut shortest: Option<u32> = None;
        for (ancestor, &da) in &depths_a {
            if let Some(&db) = depths_b.get(ancestor) {
                let d = da + db;
                if shortest.map_or(true, |s| d < s) {
                    shortest = Some(d);
                }
            }
        }

        // Nouns and verbs connect through a simulated root one step above
        // their real roots, so disjoint hierarchies still compare.
        if matches!(a.pos, CoarsePos::Noun | CoarsePos::Verb) {
            let via_root = root_distance(graph, &depths_a) + root_distance(graph, &depths_b) + 2;
            if shortest.map_or(true, |s| via_root < s) {
                shortest = Some(via_root);
            }
        }

        shortest.map(|d| 1.0 / (1.0 + d as f64))
    }
}

impl Lexicon for WordNetTaxonomy {
    fn known_pos(&self, word: &str) -> Vec<CoarsePos> {
        CoarsePos::ALL
            .iter()
            .copied()
            .filter(|&pos| !self.senses_of(word, pos).is_empty())
            .collect()
    }
}

/// Regular suffix-detachment candidates for a surface form, in rule order.
/// These are WordNet's "rules of detachment"; irregular forms are handled
/// separately by the exception lists.
fn suffix_candidates(word: &str, pos: CoarsePos) -> Vec<String> {
    let rules: &[(&str, &str)] = match pos {
        CoarsePos::Noun => &[
            ("s", ""),
            ("ses", "s"),
            ("ves", "f"),
            ("xes", "x"),
            ("zes", "z"),
            ("ches", "ch"),
            ("shes", "sh"),
            ("men", "man"),
            ("ies", "y"),
        ],
        CoarsePos::Verb => &[
            ("s", ""),
            ("ies", "y"),
            ("es", "e"),
            ("es", ""),
            ("ed", "e"),
            ("ed", ""),
            ("ing", "e"),
            ("ing", ""),
        ],
        CoarsePos::Adjective => &[("er", ""), ("est", ""), ("er", "e"), ("est", "e")],
        CoarsePos::Adverb => &[],
    };

    rules
        .iter()
        .filter_map(|&(suffix, replacement)| {
            word.strip_suffix(suffix)
                .filter(|stem| !stem.is_empty())
                .map(|stem| format!("{stem}{replacement}"))
        })
        .collect()
}

/// BFS over hypernym links: every ancestor of `offset` (including itself)
/// mapped to its minimum distance.
fn ancestor_depths(graph: &HashMap<u32, Vec<u32>>, offset: u32) -> HashMap<u32, u32> {
    let mut depths = HashMap::new();
    let mut frontier = vec![offset];
    depths.insert(offset, 0u32);

    while let Some(current) = frontier.pop() {
        let next_depth = depths[&current] + 1;
        if let Some(parents) = graph.get(&current) {
            for &parent in parents {
                let entry = depths.entry(parent).or_insert(u32::MAX);
                if next_depth < *entry {
                    *entry = next_depth;
                    frontier.push(parent);
                }
            }
        }
    }
    depths
}

/// Minimum distance from the BFS origin to any root ancestor (one with no
/// outgoing hypernym links, or one the data file never defined).
fn root_distance(graph: &HashMap<u32, Vec<u32>>, depths: &HashMap<u32, u32>) -> u32 {
    depths
        .iter()
        .filter(|(offset, _)| graph.get(offset).map_or(true, |parents| parents.is_empty()))
        .map(|(_, &d)| d)
        .min()
        .unwrap_or(0)
}

/// Parse one index file line: `lemma pos synset_cnt p_cnt [ptrs...]
/// sense_cnt tagsense_cnt offset [offset...]`. The offsets are the last
/// `synset_cnt` fields, listed most-common sense first.
fn parse_index_line(line: &str) -> Option<(String, Vec<u32>)> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let lemma = (*fields.first()?).to_string();
    let synset_cnt: usize = fields.get(2)?.parse().ok()?;
    if synset_cnt == 0 || fields.len() < 6 + synset_cnt {
        return None;
    }
    let offsets = fields[fields.len() - synset_cnt..]
        .iter()
        .map(|f| f.parse::<u32>())
        .collect::<Result<Vec<u32>, _>>()
        .ok()?;
    Some((lemma, offsets))
}

/// Parse one data file line into (synset offset, hypernym offsets).
///
/// Layout: `offset lex_filenum ss_type w_cnt (word lex_id)... p_cnt
/// (ptr_symbol offset pos source_target)... | gloss`. The word count is
/// hexadecimal; the pointer count is decimal. Hypernym pointers are the
/// `@` (and `@i` instance) symbols and always stay within the category.
fn parse_data_line(line: &str) -> Option<(u32, Vec<u32>)> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let offset: u32 = fields.first()?.parse().ok()?;
    let w_cnt = usize::from_str_radix(fields.get(3)?, 16).ok()?;
    let p_cnt_idx = 4 + w_cnt * 2;
    let p_cnt: usize = fields.get(p_cnt_idx)?.parse().ok()?;

    let mut hypernyms = Vec::new();
    for i in 0..p_cnt {
        let base = p_cnt_idx + 1 + i * 4;
        let symbol = *fields.get(base)?;
        if symbol == "@" || symbol == "@i" {
            hypernyms.push(fields.get(base + 1)?.parse().ok()?);
        }
    }
    Some((offset, hypernyms))
}

/// True for WordNet's copyright/header lines, which begin with whitespace.
fn is_header_line(line: &str) -> bool {
    line.is_empty() || line.starts_with(' ') || line.starts_with('\t')
}

fn load_index_file(path: &Path) -> Result<HashMap<String, Vec<u32>>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open WordNet index file: {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut lemmas = HashMap::new();
    for line in reader.lines() {
        let line = line?;
        if is_header_line(&line) {
            continue;
        }
        match parse_index_line(&line) {
            Some((lemma, offsets)) => {
                lemmas.insert(lemma, offsets);
            }
            None => warn!(file = %path.display(), "Skipping malformed index line"),
        }
    }
    Ok(lemmas)
}

fn load_data_file(path: &Path) -> Result<HashMap<u32, Vec<u32>>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open WordNet data file: {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut synsets = HashMap::new();
    for line in reader.lines() {
        let line = line?;
        if is_header_line(&line) {
            continue;
        }
        match parse_data_line(&line) {
            Some((offset, hypernyms)) => {
                synsets.insert(offset, hypernyms);
            }
            None => warn!(file = %path.display(), "Skipping malformed data line"),
        }
    }
    Ok(synsets)
}

fn load_exception_file(path: &Path) -> Result<HashMap<String, Vec<String>>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open WordNet exception file: {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut exceptions = HashMap::new();
    for line in reader.lines() {
        let line = line?;
        let mut fields = line.split_whitespace().map(str::to_string);
        if let Some(surface) = fields.next() {
            let bases: Vec<String> = fields.collect();
            if !bases.is_empty() {
                exceptions.insert(surface, bases);
            }
        }
    }
    Ok(exceptions)
}
