use std::collections::HashMap;

use retort_core::{LookupSynonyms, WordClass};

/// Embedded thesaurus: word to ranked noun-sense and verb-sense
/// synonyms. Small by design — it covers everyday conversation topics,
/// and callers with a real thesaurus plug in their own
/// `LookupSynonyms` implementation.
pub struct StaticThesaurus {
    entries: HashMap<&'static str, (&'static [&'static str], &'static [&'static str])>,
}

/// (word, noun senses, verb senses)
const ENTRIES: &[(&str, &[&str], &[&str])] = &[
    ("weather", &["climate", "forecast", "conditions"], &[]),
    ("rain", &["rainfall", "shower", "drizzle"], &["pour", "drizzle"]),
    ("snow", &["snowfall", "powder"], &[]),
    ("sun", &["sunshine", "daylight"], &[]),
    ("storm", &["tempest", "squall"], &[]),
    ("goat", &["billy", "kid"], &[]),
    ("dog", &["hound", "pup", "puppy"], &[]),
    ("cat", &["kitten", "feline", "tabby"], &[]),
    ("animal", &["creature", "beast"], &[]),
    ("food", &["meal", "dish", "cuisine"], &[]),
    ("dinner", &["supper", "meal"], &[]),
    ("friend", &["pal", "buddy", "companion"], &[]),
    ("family", &["relatives", "household"], &[]),
    ("home", &["house", "residence"], &[]),
    ("work", &["job", "labor", "employment"], &["toil", "labor"]),
    ("job", &["work", "occupation", "career"], &[]),
    ("money", &["cash", "funds", "currency"], &[]),
    ("school", &["academy", "college"], &[]),
    ("music", &["melody", "tune", "song"], &[]),
    ("song", &["tune", "melody"], &["sing"]),
    ("movie", &["film", "picture"], &[]),
    ("game", &["match", "contest"], &["play"]),
    ("book", &["novel", "volume"], &["reserve"]),
    ("story", &["tale", "narrative"], &[]),
    ("joke", &["gag", "jest"], &["kid", "jest"]),
    ("day", &["daytime", "date"], &[]),
    ("night", &["evening", "nighttime"], &[]),
    ("time", &["moment", "hour"], &[]),
    ("name", &["title", "label"], &["call", "dub"]),
    ("question", &["query", "inquiry"], &["ask", "doubt"]),
    ("answer", &["reply", "response"], &["respond", "reply"]),
    ("help", &["aid", "assistance"], &["assist", "aid"]),
    ("love", &["affection", "fondness"], &["adore", "cherish"]),
    ("hate", &["hatred", "loathing"], &["loathe", "despise"]),
    ("talk", &["conversation", "chat"], &["speak", "chat"]),
    ("walk", &["stroll", "hike"], &["stroll", "amble"]),
    ("run", &["jog", "sprint"], &["jog", "sprint", "dash"]),
    ("play", &["recreation", "fun"], &["frolic", "compete"]),
    ("eat", &[], &["dine", "consume", "devour"]),
    ("sleep", &["rest", "slumber"], &["rest", "doze", "slumber"]),
    ("laugh", &["chuckle", "giggle"], &["chuckle", "giggle"]),
    ("smile", &["grin"], &["grin", "beam"]),
    ("trip", &["journey", "voyage", "outing"], &["stumble"]),
    ("car", &["automobile", "vehicle"], &[]),
    ("trouble", &["difficulty", "problem"], &["bother"]),
];

impl StaticThesaurus {
    pub fn new() -> Self {
        Self {
            entries: ENTRIES.iter().map(|&(w, n, v)| (w, (n, v))).collect(),
        }
    }
}

impl Default for StaticThesaurus {
    fn default() -> Self {
        Self::new()
    }
}

impl LookupSynonyms for StaticThesaurus {
    fn synonyms(&self, word: &str, class: WordClass) -> Vec<String> {
        let lower = word.to_lowercase();
        let Some(&(nouns, verbs)) = self.entries.get(lower.as_str()) else {
            return Vec::new();
        };
        let senses = match class {
            WordClass::Noun => nouns,
            WordClass::Verb => verbs,
        };
        senses.iter().map(|s| s.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noun_and_verb_senses_are_distinct() {
        let th = StaticThesaurus::new();
        let nouns = th.synonyms("run", WordClass::Noun);
        let verbs = th.synonyms("run", WordClass::Verb);
        assert!(nouns.contains(&"jog".to_string()));
        assert!(verbs.contains(&"sprint".to_string()));
        assert!(!nouns.contains(&"dash".to_string()));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let th = StaticThesaurus::new();
        assert_eq!(
            th.synonyms("Weather", WordClass::Noun),
            vec!["climate", "forecast", "conditions"]
        );
    }

    #[test]
    fn unknown_word_has_no_synonyms() {
        let th = StaticThesaurus::new();
        assert!(th.synonyms("zyzzyva", WordClass::Noun).is_empty());
        assert!(th.synonyms("weather", WordClass::Verb).is_empty());
    }
}
