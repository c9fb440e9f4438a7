use retort_core::{Lexicon, LookupSynonyms, ScoreSentiment, Spellcheck, TagTokens, Tokenize, WordClass};

/// How many edits away a spellcheck candidate may be.
const SPELLCHECK_MAX_DISTANCE: usize = 2;
/// Tokens this short are never spellchecked.
const SPELLCHECK_MIN_LEN: usize = 4;
/// Synonyms fetched per word sense (noun, verb).
const SYNONYMS_PER_SENSE: usize = 3;

/// Input normalization pipeline: tokenize, spellcheck-augment,
/// synonym-expand, lowercase. Produces the bag of query tokens the
/// selector matches against topic nodes.
///
/// All language tooling is called through the capability traits; a
/// failing stage degrades to a pass-through with a warning instead of
/// failing the request.
pub struct Pipeline {
    tokenizer: Box<dyn Tokenize + Send + Sync>,
    spellchecker: Box<dyn Spellcheck + Send + Sync>,
    tagger: Box<dyn TagTokens + Send + Sync>,
    scorer: Box<dyn ScoreSentiment + Send + Sync>,
    thesaurus: Box<dyn LookupSynonyms + Send + Sync>,
    lexicon: Lexicon,
}

impl Pipeline {
    pub fn new(
        tokenizer: impl Tokenize + Send + Sync + 'static,
        spellchecker: impl Spellcheck + Send + Sync + 'static,
        tagger: impl TagTokens + Send + Sync + 'static,
        scorer: impl ScoreSentiment + Send + Sync + 'static,
        thesaurus: impl LookupSynonyms + Send + Sync + 'static,
        lexicon: Lexicon,
    ) -> Self {
        Self {
            tokenizer: Box::new(tokenizer),
            spellchecker: Box::new(spellchecker),
            tagger: Box::new(tagger),
            scorer: Box::new(scorer),
            thesaurus: Box::new(thesaurus),
            lexicon,
        }
    }

    /// Lowercased query tokens for `text`: the original tokens, then
    /// the best spellcheck candidate for each unknown token, then up
    /// to 3 noun-sense and 3 verb-sense synonyms for each noun/verb.
    /// Duplicates are allowed here; the selector deduplicates at the
    /// candidate level.
    pub fn normalize(&self, text: &str) -> Vec<String> {
        let tokens = self.tokenizer.tokenize(text);
        let spellchecked = self.spellcheck_augment(tokens);
        let mut result = spellchecked.clone();
        result.extend(self.expand_synonyms(&spellchecked));
        for token in &mut result {
            *token = token.to_lowercase();
        }
        result
    }

    /// Sentiment of an already-normalized token stream.
    pub fn sentiment(&self, tokens: &[String]) -> f64 {
        self.scorer.score(tokens)
    }

    /// Append the single best correction for each token that is longer
    /// than 3 characters and not in the lexicon. Originals are kept:
    /// the corrected form is extra evidence, not a replacement.
    fn spellcheck_augment(&self, tokens: Vec<String>) -> Vec<String> {
        let mut out = tokens.clone();
        for token in &tokens {
            if token.chars().count() < SPELLCHECK_MIN_LEN || self.lexicon.contains(token) {
                continue;
            }
            let candidates = self.spellchecker.corrections(token, SPELLCHECK_MAX_DISTANCE);
            if let Some(best) = candidates.into_iter().next() {
                out.push(best);
            }
        }
        out
    }

    /// Synonyms for every token tagged as a noun or verb, noun senses
    /// first. A tagger failure skips expansion for this input.
    fn expand_synonyms(&self, tokens: &[String]) -> Vec<String> {
        let tagged = match self.tagger.tag(tokens) {
            Ok(tagged) => tagged,
            Err(err) => {
                tracing::warn!(error = %err, "POS tagging failed, skipping synonym expansion");
                return Vec::new();
            }
        };

        let mut out = Vec::new();
        for word in &tagged {
            if word.tag.word_class().is_none() {
                continue;
            }
            for class in [WordClass::Noun, WordClass::Verb] {
                out.extend(
                    self.thesaurus
                        .synonyms(&word.token, class)
                        .into_iter()
                        .take(SYNONYMS_PER_SENSE),
                );
            }
        }
        out
    }
}
