use std::collections::HashSet;

// ─── Errors ──────────────────────────────────────────────────────

/// Fatal schema problems in the response tree. These are configuration
/// bugs, never user-input bugs: any input that hits one means the tree
/// resource is missing a required branch or a row was malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("row {row}: {reason}")]
    MalformedRow { row: usize, reason: String },
    #[error("response tree has no '{0}' category branch")]
    MissingCategory(String),
    #[error("category '{category}' has no '{sentiment}' sentiment branch")]
    MissingSentiment { category: String, sentiment: String },
    #[error("branch '{category}/{sentiment}' has no fallback topic bucket")]
    MissingFallback { category: String, sentiment: String },
    #[error("branch '{category}/{sentiment}' yielded an empty candidate set")]
    EmptyCandidates { category: String, sentiment: String },
}

/// A preprocessing capability failed for one input. Recoverable: the
/// pipeline logs it and passes the stage's input through unchanged.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{0}")]
pub struct CapabilityError(pub String);

// ─── Part-of-speech tags ─────────────────────────────────────────

/// The tag set the normalizer accepts for synonym expansion: the nine
/// Penn treebank noun/verb tags. Everything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum PosTag {
    NounSingular,
    NounPlural,
    ProperNounSingular,
    ProperNounPlural,
    VerbBase,
    VerbPastTense,
    VerbPastParticiple,
    VerbNonThirdPresent,
    VerbThirdPresent,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordClass {
    Noun,
    Verb,
}

impl PosTag {
    /// Noun or verb word class for synonym lookup, `None` for tags
    /// outside the accepted set.
    pub fn word_class(self) -> Option<WordClass> {
        match self {
            PosTag::NounSingular
            | PosTag::NounPlural
            | PosTag::ProperNounSingular
            | PosTag::ProperNounPlural => Some(WordClass::Noun),
            PosTag::VerbBase
            | PosTag::VerbPastTense
            | PosTag::VerbPastParticiple
            | PosTag::VerbNonThirdPresent
            | PosTag::VerbThirdPresent => Some(WordClass::Verb),
            PosTag::Other => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    pub token: String,
    pub tag: PosTag,
}

// ─── Capability traits ───────────────────────────────────────────
//
// The engine calls its language tooling through these seams. The
// algorithms behind them are replaceable black boxes; retort-lang
// ships the default implementations.

pub trait Tokenize {
    /// Split raw text into word tokens. May return an empty vec.
    fn tokenize(&self, text: &str) -> Vec<String>;
}

pub trait Spellcheck {
    /// Known-word candidates within `max_distance` edits of `word`,
    /// best first. Empty when nothing is close enough.
    fn corrections(&self, word: &str, max_distance: usize) -> Vec<String>;
}

pub trait TagTokens {
    fn tag(&self, tokens: &[String]) -> Result<Vec<TaggedToken>, CapabilityError>;
}

pub trait ScoreSentiment {
    /// Polarity of a token stream, nominally in [-5, 5]; typical text
    /// lands near [-1, 1].
    fn score(&self, tokens: &[String]) -> f64;
}

pub trait LookupSynonyms {
    /// Ranked synonyms of `word` in the given sense.
    fn synonyms(&self, word: &str, class: WordClass) -> Vec<String>;
}

// ─── Lexicon ─────────────────────────────────────────────────────

/// Immutable set of known correctly-spelled words. Loaded once at
/// startup; used only for membership tests and spellcheck candidates.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    words: HashSet<String>,
}

impl Lexicon {
    pub fn new(words: impl IntoIterator<Item = String>) -> Self {
        Self {
            words: words.into_iter().collect(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(|w| w.as_str())
    }
}

// ─── Simple RNG (xorshift64) ────────────────────────────────────

/// Seedable generator injected into the selector so that response
/// picks are reproducible under test.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Uniform index into a non-empty slice of length `len`.
    pub fn next_index(&mut self, len: usize) -> usize {
        (self.next_u64() % len as u64) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_class_covers_accepted_tags() {
        assert_eq!(PosTag::NounSingular.word_class(), Some(WordClass::Noun));
        assert_eq!(PosTag::ProperNounPlural.word_class(), Some(WordClass::Noun));
        assert_eq!(PosTag::VerbBase.word_class(), Some(WordClass::Verb));
        assert_eq!(PosTag::VerbThirdPresent.word_class(), Some(WordClass::Verb));
        assert_eq!(PosTag::Other.word_class(), None);
    }

    #[test]
    fn lexicon_membership() {
        let lex = Lexicon::new(["goat".to_string(), "weather".to_string()]);
        assert!(lex.contains("goat"));
        assert!(!lex.contains("Goat"));
        assert!(!lex.contains("troll"));
        assert_eq!(lex.len(), 2);
    }

    #[test]
    fn rng_is_deterministic_per_seed() {
        let mut a = SimpleRng::new(42);
        let mut b = SimpleRng::new(42);
        for _ in 0..8 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
        let mut c = SimpleRng::new(7);
        assert_ne!(SimpleRng::new(42).next_u64(), c.next_u64());
    }

    #[test]
    fn rng_zero_seed_is_usable() {
        let mut rng = SimpleRng::new(0);
        assert_ne!(rng.next_u64(), 0);
        assert!(rng.next_index(3) < 3);
    }
}
