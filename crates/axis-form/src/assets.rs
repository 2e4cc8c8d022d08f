//! Background image lookup

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::{FormError, Result};

/// Source of page background images
pub trait BackgroundSource {
    /// Load a background by file name
    ///
    /// Returns `Ok(None)` when the image does not exist; the page is then
    /// rendered with a placeholder notice instead. Any other failure
    /// aborts rendering.
    fn load(&self, file_name: &str) -> Result<Option<Vec<u8>>>;
}

/// Backgrounds read from a directory on disk
#[derive(Debug, Clone)]
pub struct AssetDir {
    root: PathBuf,
}

impl AssetDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl BackgroundSource for AssetDir {
    fn load(&self, file_name: &str) -> Result<Option<Vec<u8>>> {
        match std::fs::read(self.root.join(file_name)) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(FormError::Asset {
                file: file_name.to_string(),
                source,
            }),
        }
    }
}
