mod classify;
mod normalize;
mod select;
mod tree;

use std::sync::Mutex;

use retort_core::{ConfigurationError, SimpleRng};

pub use classify::{is_non_negative, is_question};
pub use normalize::Pipeline;
pub use select::select_response;
pub use tree::{Node, NodeId, NodeKind, ResponseTree};

/// The response-selection engine: an immutable lookup tree plus the
/// normalization pipeline, with a seedable rng for the final pick.
///
/// Once constructed the tree and lexicon are read-only, so `answer`
/// can run from any number of threads; the rng is the only mutable
/// state and lives behind a mutex.
pub struct Engine {
    tree: ResponseTree,
    pipeline: Pipeline,
    rng: Mutex<SimpleRng>,
}

impl Engine {
    pub fn new(tree: ResponseTree, pipeline: Pipeline, rng: SimpleRng) -> Self {
        Self {
            tree,
            pipeline,
            rng: Mutex::new(rng),
        }
    }

    /// Answer one utterance. `last_reply` is the previous reply for
    /// this conversation (empty for none); it is excluded from the
    /// pick when an alternative exists. Never fails on user input —
    /// the only errors are tree schema violations.
    pub fn answer(&self, input: &str, last_reply: &str) -> Result<String, ConfigurationError> {
        let query_tokens = self.pipeline.normalize(input);

        let category = if classify::is_question(input) { "q" } else { "s" };
        let score = self.pipeline.sentiment(&query_tokens);
        let sentiment = if classify::is_non_negative(score) { "p" } else { "n" };

        tracing::debug!(category, sentiment, tokens = query_tokens.len(), "classified input");

        let mut rng = self.rng.lock().unwrap();
        select::select_response(
            &self.tree,
            category,
            sentiment,
            &query_tokens,
            last_reply,
            &mut rng,
        )
    }

    pub fn tree(&self) -> &ResponseTree {
        &self.tree
    }
}
