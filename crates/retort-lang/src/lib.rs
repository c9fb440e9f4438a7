mod sentiment;
mod spell;
mod tagger;
mod thesaurus;
mod tokenizer;

pub use sentiment::PolarityScorer;
pub use spell::{levenshtein_distance, EditDistanceSpellchecker};
pub use tagger::RuleTagger;
pub use thesaurus::StaticThesaurus;
pub use tokenizer::WordTokenizer;
