//! # Error Types

use std::path::PathBuf;

use crate::charts::Renderer;

/// Errors from vocabscope operations.
#[derive(Debug, thiserror::Error)]
pub enum VocabscopeError {
    /// I/O error, with the path being read or written.
    #[error("{}: {source}", path.display())]
    Io {
        /// The path of the failed operation.
        path: PathBuf,

        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON.
    #[error("{}: malformed json: {source}", path.display())]
    Json {
        /// The path of the malformed file.
        path: PathBuf,

        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// The JSON document has no `model.vocab` entry.
    #[error("{}: missing `model.vocab`", path.display())]
    MissingVocab {
        /// The path of the file.
        path: PathBuf,
    },

    /// The `model.vocab` entry is not a container of string tokens.
    #[error("{}: unsupported `model.vocab` entry at index {index}", path.display())]
    InvalidVocab {
        /// The path of the file.
        path: PathBuf,

        /// The index of the offending entry.
        index: usize,
    },

    /// Venn layouts exist only for 2 or 3 sets.
    #[error("venn layouts need 2 or 3 sets, got {count}")]
    Arity {
        /// The number of sets passed.
        count: usize,
    },

    /// The renderer is recognized, but its backend is not compiled in.
    #[error("renderer `{0}` needs the `kaleido` feature")]
    UnsupportedRenderer(Renderer),

    /// Error from a chart backend.
    #[error("render error: {0}")]
    Render(String),
}

impl VocabscopeError {
    /// Wrap an [`std::io::Error`] with the path it came from.
    pub fn io<P: Into<PathBuf>>(
        path: P,
        source: std::io::Error,
    ) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for vocabscope operations.
pub type VSResult<T> = core::result::Result<T, VocabscopeError>;
