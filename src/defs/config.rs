use crate::error::{DefsError, Result};
use std::path::{Path, PathBuf};

pub const STORE_FILENAME: &str = "definitions.json";

/// Where the glossary document lives.
///
/// An explicit path always wins. Otherwise the store sits next to the running
/// executable, so each installed copy of the tool keeps its own glossary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreLocation {
    pub path: PathBuf,
}

impl StoreLocation {
    pub fn resolve(explicit: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = explicit {
            return Ok(Self { path });
        }

        let exe = std::env::current_exe().map_err(|e| {
            DefsError::Config(format!("cannot locate the running executable: {}", e))
        })?;
        Self::beside(&exe)
    }

    /// The default store for an executable at `exe`.
    pub fn beside(exe: &Path) -> Result<Self> {
        let dir = exe.parent().ok_or_else(|| {
            DefsError::Config(format!("executable {} has no parent directory", exe.display()))
        })?;
        Ok(Self {
            path: dir.join(STORE_FILENAME),
        })
    }
}
