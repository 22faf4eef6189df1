use std::{
    fs, io,
    path::{Component, Path, PathBuf},
};

use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("missing asset '{path}'")]
    Missing { path: String },
    #[error("asset path '{path}' escapes the asset root")]
    EscapesRoot { path: String },
    #[error("failed to read asset '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl AssetError {
    /// Relative path of the asset the error is about.
    pub fn path(&self) -> &str {
        match self {
            AssetError::Missing { path }
            | AssetError::EscapesRoot { path }
            | AssetError::Read { path, .. } => path,
        }
    }
}

/// Read-only view over the directory holding images and reports.
#[derive(Debug, Clone)]
pub struct AssetStore {
    root: PathBuf,
}

impl AssetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Joins `relative` onto the root. Absolute paths and `..` are rejected.
    pub fn resolve(&self, relative: &str) -> Result<PathBuf, AssetError> {
        let candidate = Path::new(relative);
        let contained = candidate
            .components()
            .all(|component| matches!(component, Component::Normal(_) | Component::CurDir));
        if relative.is_empty() || !contained {
            return Err(AssetError::EscapesRoot {
                path: relative.to_string(),
            });
        }
        Ok(self.root.join(candidate))
    }

    pub fn ensure_exists(&self, relative: &str) -> Result<PathBuf, AssetError> {
        let path = self.resolve(relative)?;
        if path.is_file() {
            Ok(path)
        } else {
            error!(asset = %relative, root = %self.root.display(), "asset not found");
            Err(AssetError::Missing {
                path: relative.to_string(),
            })
        }
    }

    /// Reads the whole file; the handle is released before returning.
    pub fn read_to_string(&self, relative: &str) -> Result<String, AssetError> {
        let path = self.resolve(relative)?;
        fs::read_to_string(&path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                error!(asset = %relative, root = %self.root.display(), "asset not found");
                AssetError::Missing {
                    path: relative.to_string(),
                }
            } else {
                AssetError::Read {
                    path: relative.to_string(),
                    source,
                }
            }
        })
    }
}

#[cfg(test)]
#[path = "tests/assets_tests.rs"]
mod tests;
