use std::fmt::Formatter;
use std::path::PathBuf;

#[derive(Debug)]
pub enum SubsetError {
    /// The input font is missing, not a regular file, or empty. This is the
    /// only error a caller must treat as fatal.
    MissingInput(PathBuf),
    IoError(std::io::Error),
}

impl std::fmt::Display for SubsetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            SubsetError::MissingInput(path) => {
                write!(f, "missing input font: {}", path.display())
            }
            SubsetError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for SubsetError {}

impl From<std::io::Error> for SubsetError {
    fn from(e: std::io::Error) -> Self {
        SubsetError::IoError(e)
    }
}
