use retort_core::{Lexicon, Spellcheck};

/// Spellchecker backed by an exhaustive scan of the lexicon with
/// Wagner-Fischer edit distance. Candidates are ranked by distance,
/// then by length closeness, then alphabetically, so the best match
/// is always first and ranking is stable across runs.
#[derive(Debug, Clone)]
pub struct EditDistanceSpellchecker {
    lexicon: Lexicon,
}

impl EditDistanceSpellchecker {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }
}

impl Spellcheck for EditDistanceSpellchecker {
    fn corrections(&self, word: &str, max_distance: usize) -> Vec<String> {
        let word_len = word.chars().count();
        let mut scored: Vec<(usize, usize, String)> = Vec::new();

        for known in self.lexicon.iter() {
            let known_len = known.chars().count();
            // Length difference is a lower bound on edit distance
            if known_len.abs_diff(word_len) > max_distance {
                continue;
            }
            let dist = levenshtein_distance(word, known);
            if dist <= max_distance {
                scored.push((dist, known_len.abs_diff(word_len), known.to_string()));
            }
        }

        scored.sort();
        scored.into_iter().map(|(_, _, w)| w).collect()
    }
}

/// Edit distance with the usual single-row space optimization.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
