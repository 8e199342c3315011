use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum CombineError {
    #[error("Source directory not found or not a directory: {0}")]
    SourceNotFound(PathBuf),
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("File is not valid UTF-8: {path}")]
    Decode { path: PathBuf },
    #[error("Walk error: {0}")]
    Walk(String),
}
impl CombineError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CombineError::Io {
            path: path.into(),
            source,
        }
    }
}
