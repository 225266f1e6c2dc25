use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;

use crate::dino::{build_dinos, ConstructionError, Dino, RawDino};

/// On-disk document shape: the dino list sits under a capitalized key.
#[derive(Debug, Deserialize)]
struct DinoFile {
    #[serde(rename = "Dinos")]
    dinos: Vec<RawDino>,
}

#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read dino data {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse dino data {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Construction(#[from] ConstructionError),
}

pub struct DinoLoader {
    base_dir: PathBuf,
}

impl DinoLoader {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn load(&self, file: impl AsRef<Path>) -> Result<Vec<Dino>, DataError> {
        let path = self.base_dir.join(file);
        let data = fs::read_to_string(&path).map_err(|source| DataError::Io {
            path: path.clone(),
            source,
        })?;
        let document: DinoFile =
            serde_json::from_str(&data).map_err(|source| DataError::Parse { path, source })?;
        Ok(build_dinos(document.dinos)?)
    }
}
