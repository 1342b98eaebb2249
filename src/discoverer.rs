use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;
use walkdir::WalkDir;

use crate::collector::NameCollector;

#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse error in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: syn::Error,
    },
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Drives the name collector over every Rust file under a project root and
/// unions the results into one global name set. Any unreadable or unparsable
/// file aborts discovery; a file skipped here would silently miss renames.
pub struct ProjectDiscoverer;

impl ProjectDiscoverer {
    pub fn discover(project_root: &Path) -> Result<BTreeSet<String>, DiscoveryError> {
        let mut all_names = BTreeSet::new();
        for entry in WalkDir::new(project_root) {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            if path.extension().map_or(false, |ext| ext == "rs") {
                let source = fs::read_to_string(path).map_err(|e| DiscoveryError::Io {
                    path: path.to_path_buf(),
                    source: e,
                })?;
                let tree = syn::parse_file(&source).map_err(|e| DiscoveryError::Parse {
                    path: path.to_path_buf(),
                    source: e,
                })?;
                let names = NameCollector::new().collect(&tree);
                debug!(file = %path.display(), count = names.len(), "collected definitions");
                all_names.extend(names);
            }
        }
        Ok(all_names)
    }
}
