use std::path::Path;

use retort_core::Lexicon;

use crate::ResourceLoadError;

/// Load a lexicon from a newline-delimited word list, one word per
/// line, no header.
pub fn load_lexicon(path: impl AsRef<Path>) -> Result<Lexicon, ResourceLoadError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ResourceLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_lexicon(&content))
}

pub fn parse_lexicon(content: &str) -> Lexicon {
    Lexicon::new(
        content
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string),
    )
}
