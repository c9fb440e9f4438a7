use std::collections::HashMap;

use retort_core::ScoreSentiment;

/// Lexicon-based polarity scorer: AFINN-style valences summed over the
/// token stream and normalized by token count. Individual word scores
/// sit in [-5, 5], so the normalized score does too, but ordinary text
/// lands near [-1, 1].
pub struct PolarityScorer {
    valences: HashMap<&'static str, i8>,
}

/// Valence table, AFINN subset. Lowercase keys; the pipeline feeds
/// this scorer lowercased tokens.
const VALENCES: &[(&str, i8)] = &[
    // positive
    ("good", 3), ("great", 3), ("excellent", 3), ("amazing", 4),
    ("awesome", 4), ("wonderful", 4), ("fantastic", 4), ("best", 3),
    ("love", 3), ("loves", 3), ("loved", 3), ("lovely", 3),
    ("like", 2), ("likes", 2), ("liked", 2),
    ("happy", 3), ("glad", 3), ("joy", 3), ("fun", 4), ("funny", 4),
    ("nice", 3), ("fine", 2), ("cool", 1), ("sunny", 2), ("warm", 1),
    ("friend", 1), ("friendly", 2), ("smile", 2), ("smiles", 2),
    ("laugh", 1), ("laughs", 1), ("laughing", 1),
    ("win", 4), ("wins", 4), ("won", 3), ("winner", 4),
    ("beautiful", 3), ("pretty", 1), ("sweet", 2), ("kind", 2),
    ("help", 2), ("helps", 2), ("helped", 2), ("helpful", 2),
    ("thanks", 2), ("thank", 2), ("welcome", 2), ("please", 1),
    ("hope", 2), ("hopeful", 2), ("better", 2), ("perfect", 3),
    ("super", 3), ("yay", 3), ("wow", 4), ("interesting", 2),
    ("delicious", 3), ("tasty", 2), ("enjoy", 2), ("enjoyed", 2),
    // negative
    ("bad", -3), ("terrible", -3), ("awful", -3), ("horrible", -3),
    ("worst", -3), ("worse", -3), ("poor", -2),
    ("hate", -3), ("hates", -3), ("hated", -3),
    ("sad", -2), ("unhappy", -2), ("angry", -3), ("mad", -3),
    ("stupid", -2), ("dumb", -3), ("evil", -3), ("ugly", -3),
    ("annoying", -2), ("annoyed", -2), ("boring", -3), ("bored", -2),
    ("wrong", -2), ("broken", -1), ("fail", -2), ("fails", -2),
    ("failed", -2), ("failure", -2), ("lose", -3), ("loses", -3),
    ("lost", -3), ("loser", -3),
    ("hurt", -2), ("hurts", -2), ("pain", -2), ("painful", -2),
    ("cry", -1), ("cries", -1), ("crying", -2), ("tears", -2),
    ("sick", -2), ("tired", -2), ("scared", -2), ("afraid", -2),
    ("fear", -2), ("worry", -3), ("worried", -3), ("trouble", -2),
    ("problem", -2), ("problems", -2), ("sorry", -1), ("no", -1),
    ("never", -1), ("nasty", -3), ("gross", -2), ("disgusting", -3),
    ("rude", -2), ("mean", -2), ("cruel", -3), ("dirty", -2),
    ("cold", -1), ("rainy", -1), ("storm", -1), ("stormy", -1),
];

impl PolarityScorer {
    pub fn new() -> Self {
        Self {
            valences: VALENCES.iter().copied().collect(),
        }
    }
}

impl Default for PolarityScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreSentiment for PolarityScorer {
    fn score(&self, tokens: &[String]) -> f64 {
        if tokens.is_empty() {
            return 0.0;
        }
        let sum: i64 = tokens
            .iter()
            .filter_map(|t| self.valences.get(t.as_str()))
            .map(|&v| v as i64)
            .sum();
        sum as f64 / tokens.len() as f64
    }
}
