use std::path::PathBuf;

use thiserror::Error;

pub mod history;

pub use history::{HistoryLoad, RowError, load_history};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to open history {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read CSV header: {0}")]
    Header(#[source] csv::Error),
    #[error("missing required column: {0}")]
    MissingColumn(&'static str),
    #[error("no usable rows in {0}")]
    Empty(PathBuf),
}
