mod lexicon;
mod table;

use std::path::PathBuf;

pub use lexicon::{load_lexicon, parse_lexicon};
pub use table::{load_rows, parse_rows};

/// A startup resource could not be read or parsed. Fatal: the service
/// never reaches ready state without its tree and lexicon.
#[derive(Debug, thiserror::Error)]
pub enum ResourceLoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path} as CSV: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
