use std::collections::{HashMap, HashSet};

use retort_core::{CapabilityError, PosTag, TagTokens, TaggedToken};

/// Rule-based part-of-speech tagger.
///
/// Closed-class function words are tagged from a hardcoded table,
/// common verbs from a base-form list plus inflection rules, and
/// everything else defaults to noun (proper noun when capitalized) —
/// the same default-category behavior the Brill tagger is usually
/// configured with for English.
pub struct RuleTagger {
    closed_class: HashSet<&'static str>,
    fixed: HashMap<&'static str, PosTag>,
    verb_bases: HashSet<&'static str>,
}

/// Articles, determiners, prepositions, conjunctions, pronouns,
/// modals, interrogatives and common adverbs. None of these belong to
/// the accepted noun/verb tag set, so none of them get expanded.
const CLOSED_CLASS: &[&str] = &[
    // articles & determiners
    "the", "a", "an", "this", "that", "these", "those", "some", "any", "all",
    "each", "every", "no", "another", "such",
    // prepositions
    "to", "of", "in", "for", "on", "with", "at", "by", "from", "into",
    "about", "over", "under", "between", "through", "after", "before",
    "up", "out", "off",
    // conjunctions & negation
    "and", "or", "but", "not", "if", "then", "than", "so", "as", "because",
    // pronouns
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us",
    "them", "my", "your", "his", "our", "their", "its",
    // interrogatives
    "who", "what", "which", "when", "where", "how", "why",
    // modals
    "will", "would", "shall", "should", "may", "might", "can", "could", "must",
    // adverbs & interjections
    "very", "also", "just", "too", "more", "most", "only", "here", "there",
    "now", "never", "always", "ugh", "oh", "yes",
];

/// Auxiliaries and irregular inflections with fixed tags.
const FIXED_TAGS: &[(&str, PosTag)] = &[
    ("be", PosTag::VerbBase),
    ("am", PosTag::VerbNonThirdPresent),
    ("are", PosTag::VerbNonThirdPresent),
    ("is", PosTag::VerbThirdPresent),
    ("was", PosTag::VerbPastTense),
    ("were", PosTag::VerbPastTense),
    ("been", PosTag::VerbPastParticiple),
    ("do", PosTag::VerbNonThirdPresent),
    ("does", PosTag::VerbThirdPresent),
    ("did", PosTag::VerbPastTense),
    ("done", PosTag::VerbPastParticiple),
    ("have", PosTag::VerbNonThirdPresent),
    ("has", PosTag::VerbThirdPresent),
    ("had", PosTag::VerbPastTense),
    ("went", PosTag::VerbPastTense),
    ("gone", PosTag::VerbPastParticiple),
    ("saw", PosTag::VerbPastTense),
    ("seen", PosTag::VerbPastParticiple),
    ("knew", PosTag::VerbPastTense),
    ("known", PosTag::VerbPastParticiple),
    ("thought", PosTag::VerbPastTense),
    ("felt", PosTag::VerbPastTense),
    ("made", PosTag::VerbPastTense),
    ("took", PosTag::VerbPastTense),
    ("taken", PosTag::VerbPastParticiple),
    ("got", PosTag::VerbPastTense),
    ("gave", PosTag::VerbPastTense),
    ("given", PosTag::VerbPastParticiple),
    ("came", PosTag::VerbPastTense),
    ("said", PosTag::VerbPastTense),
    ("ran", PosTag::VerbPastTense),
    ("ate", PosTag::VerbPastTense),
    ("eaten", PosTag::VerbPastParticiple),
    ("heard", PosTag::VerbPastTense),
    ("told", PosTag::VerbPastTense),
    ("found", PosTag::VerbPastTense),
];

/// Base forms of common verbs, used with -s/-ed/-ing inflection rules.
const VERB_BASES: &[&str] = &[
    "like", "love", "hate", "want", "need", "know", "think", "feel", "help",
    "make", "take", "get", "give", "go", "come", "see", "say", "talk", "walk",
    "run", "play", "work", "eat", "sleep", "rain", "snow", "live", "look",
    "find", "tell", "ask", "answer", "laugh", "smile", "hear", "read",
    "write", "learn", "try", "use",
];

impl RuleTagger {
    pub fn new() -> Self {
        Self {
            closed_class: CLOSED_CLASS.iter().copied().collect(),
            fixed: FIXED_TAGS.iter().copied().collect(),
            verb_bases: VERB_BASES.iter().copied().collect(),
        }
    }

    fn tag_one(&self, token: &str) -> PosTag {
        let lower = token.to_lowercase();
        let lower = lower.as_str();

        if self.closed_class.contains(lower) {
            return PosTag::Other;
        }
        if let Some(&tag) = self.fixed.get(lower) {
            return tag;
        }
        if self.verb_bases.contains(lower) {
            return PosTag::VerbBase;
        }
        if let Some(stem) = lower.strip_suffix('s') {
            if self.verb_bases.contains(stem) {
                return PosTag::VerbThirdPresent;
            }
        }
        if let Some(stem) = lower.strip_suffix("ed") {
            if self.verb_bases.contains(stem) || self.verb_bases.contains(format!("{stem}e").as_str()) {
                return PosTag::VerbPastTense;
            }
        }
        if let Some(stem) = lower.strip_suffix("ing") {
            // Gerunds are outside the accepted tag set
            if self.verb_bases.contains(stem) || self.verb_bases.contains(format!("{stem}e").as_str()) {
                return PosTag::Other;
            }
        }

        let capitalized = token.chars().next().is_some_and(|c| c.is_uppercase());
        let plural = lower.len() > 2 && lower.ends_with('s') && !lower.ends_with("ss");

        match (capitalized, plural) {
            (true, true) => PosTag::ProperNounPlural,
            (true, false) => PosTag::ProperNounSingular,
            (false, true) => PosTag::NounPlural,
            (false, false) => PosTag::NounSingular,
        }
    }
}

impl Default for RuleTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl TagTokens for RuleTagger {
    fn tag(&self, tokens: &[String]) -> Result<Vec<TaggedToken>, CapabilityError> {
        Ok(tokens
            .iter()
            .map(|t| TaggedToken {
                token: t.clone(),
                tag: self.tag_one(t),
            })
            .collect())
    }
}
