// Error type shared across the workspace.

use std::io;

/// Errors that abort a correction run.
///
/// Unresolved words and invalid interactive selections are not errors:
/// the former is marked inline and processing continues, the latter
/// falls back to keeping the original word.
#[derive(Debug, thiserror::Error)]
pub enum CorrectorError {
    /// A word list or engine lexicon could not be read.
    #[error("failed to load {path}: {source}")]
    Load {
        path: String,
        #[source]
        source: io::Error,
    },

    /// An input or output stream failed.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

impl CorrectorError {
    /// Wrap a read failure for the resource at `path`.
    pub fn load(path: impl Into<String>, source: io::Error) -> Self {
        Self::Load {
            path: path.into(),
            source,
        }
    }
}
