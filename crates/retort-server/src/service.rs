use std::sync::Mutex;

use retort_core::ConfigurationError;
use retort_engine::Engine;

/// Owns the engine and the single process-wide "last reply".
///
/// The stored value is a convenience for single-user deployments:
/// callers that thread their own per-conversation last reply pass it
/// explicitly and the shared value is ignored for selection (it is
/// still updated, last writer wins).
pub struct ChatService {
    engine: Engine,
    last_reply: Mutex<String>,
}

impl ChatService {
    pub fn new(engine: Engine) -> Self {
        Self {
            engine,
            last_reply: Mutex::new(String::new()),
        }
    }

    pub fn answer(
        &self,
        input: &str,
        last_reply: Option<&str>,
    ) -> Result<String, ConfigurationError> {
        let previous = match last_reply {
            Some(explicit) => explicit.to_string(),
            None => self.last_reply.lock().unwrap().clone(),
        };
        let reply = self.engine.answer(input, &previous)?;
        *self.last_reply.lock().unwrap() = reply.clone();
        Ok(reply)
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }
}
