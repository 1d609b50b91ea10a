use std::path::PathBuf;

/// Failures raised while reading or writing a flat record store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store exists but could not be read, or could not be written.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line did not split into exactly two comma separated fields.
    #[error("malformed record in {} at line {line}: {content:?}", path.display())]
    Malformed {
        path: PathBuf,
        line: usize,
        content: String,
    },
}

impl StoreError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
