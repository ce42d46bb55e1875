use std::path::PathBuf;
use thiserror::Error;

/// Failures while loading or writing the lookup artifacts. None of these are retried.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode or decode vectorizer {}: {source}", path.display())]
    Codec {
        path: PathBuf,
        #[source]
        source: bincode::Error,
    },

    #[error("failed to parse dataset {}: {source}", path.display())]
    Dataset {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("dataset {} has no rows", path.display())]
    EmptyDataset { path: PathBuf },

    #[error("vectorizer was not fitted on this table ({rows} rows); rebuild it with `travel_bot index`")]
    RowMismatch { rows: usize },
}
