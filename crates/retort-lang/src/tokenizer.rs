use retort_core::Tokenize;

/// Word tokenizer: splits on anything that is not alphanumeric, but
/// keeps apostrophes inside a word so contractions can be expanded
/// instead of shredded ("don't" becomes "do" + "not", not "don" + "t").
#[derive(Debug, Clone, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    pub fn new() -> Self {
        Self
    }
}

impl Tokenize for WordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let mut out = Vec::new();
        for raw in text.split(|c: char| !c.is_alphanumeric() && c != '\'' && c != '\u{2019}') {
            let word = raw.trim_matches(|c| c == '\'' || c == '\u{2019}');
            if word.is_empty() {
                continue;
            }
            expand_contraction(word, &mut out);
        }
        out
    }
}

/// Push `word` onto `out`, splitting off a clitic if present.
fn expand_contraction(word: &str, out: &mut Vec<String>) {
    let normalized = word.replace('\u{2019}', "'");
    let lower = normalized.to_lowercase();

    // Irregular negations first
    match lower.as_str() {
        "won't" => {
            out.push("will".to_string());
            out.push("not".to_string());
            return;
        }
        "can't" | "cannot" => {
            out.push("can".to_string());
            out.push("not".to_string());
            return;
        }
        _ => {}
    }

    if let Some(stem) = normalized.strip_suffix("n't").or_else(|| normalized.strip_suffix("N'T")) {
        if !stem.is_empty() {
            out.push(stem.to_string());
            out.push("not".to_string());
            return;
        }
    }

    // Other clitics ("it's", "we're", "I'll"): keep both halves as tokens
    if let Some(pos) = normalized.find('\'') {
        let (head, tail) = normalized.split_at(pos);
        let tail = &tail[1..];
        if !head.is_empty() {
            out.push(head.to_string());
        }
        if !tail.is_empty() {
            out.push(tail.to_string());
        }
        return;
    }

    out.push(normalized);
}
