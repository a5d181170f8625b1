use std::{
    ffi::OsStr,
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::debug;

pub const SOURCE_EXTENSIONS: [&str; 2] = ["吉吉", "lls"];

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("unsupported file extension: {extension:?}")]
    UnsupportedExtension { extension: String },
    #[error("file not found: {}", .path.display())]
    NotFound { path: PathBuf },
    #[error("not a file: {}", .path.display())]
    NotAFile { path: PathBuf },
    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Reads a `.吉吉` or `.lls` file as UTF-8.
pub fn read_source(path: &Path) -> Result<String, SourceError> {
    let extension = path.extension().and_then(OsStr::to_str).unwrap_or_default();

    if !SOURCE_EXTENSIONS.contains(&extension) {
        return Err(SourceError::UnsupportedExtension {
            extension: String::from(extension),
        });
    }

    if !path.exists() {
        return Err(SourceError::NotFound {
            path: path.to_path_buf(),
        });
    }

    if !path.is_file() {
        return Err(SourceError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    debug!(path = %path.display(), "reading source");

    fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })
}
