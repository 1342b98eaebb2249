use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::config::ObfuscationConfig;
use crate::discoverer::ProjectDiscoverer;
use crate::encryptor::StringEncryptor;
use crate::errors::AppError;
use crate::metrics::Metrics;
use crate::preamble;
use crate::rename_map::{self, NameGenerator, RenameMap};
use crate::renamer::GlobalRenamer;

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("io error on {path}: {source}")]
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
    #[error("preamble synthesis failed for {path}: {source}")]
    Preamble {
        path: PathBuf,
        #[source]
        source: syn::Error,
    },
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

#[derive(Debug)]
pub struct RunSummary {
    pub files_transformed: u64,
    pub names_mapped: usize,
}

/// Two-phase orchestrator. Phase one is project-wide: discover every defined
/// name and freeze one rename map for the whole run. Phase two is per file
/// and only starts once the map is final, so a reference is never matched
/// against a partially-renamed name. There is no partial-success mode; the
/// first failure aborts the run and any partly written output is invalid.
pub struct Pipeline {
    config: ObfuscationConfig,
}

impl Pipeline {
    pub fn new(config: ObfuscationConfig) -> Self {
        Self { config }
    }

    pub async fn run(
        &self,
        source_dir: &Path,
        output_dir: &Path,
        metrics: &Metrics,
    ) -> Result<RunSummary, AppError> {
        // Documented destructive behavior: a previous output tree is replaced.
        if output_dir.exists() {
            warn!(dir = %output_dir.display(), "removing existing output directory");
            tokio::fs::remove_dir_all(output_dir)
                .await
                .map_err(|e| TransformError::Io {
                    path: output_dir.to_path_buf(),
                    source: e,
                })?;
        }

        info!(dir = %source_dir.display(), "discovery phase");
        let names = ProjectDiscoverer::discover(source_dir)?;
        let mut generator = NameGenerator::new(self.config.seed, self.config.name_length);
        let map = rename_map::build_rename_map(&names, &self.config.exclude, &mut generator)?;
        info!(discovered = names.len(), mapped = map.len(), "rename map frozen");

        info!(dir = %output_dir.display(), "transformation phase");
        let mut files_transformed = 0u64;
        for entry in WalkDir::new(source_dir) {
            let entry = entry.map_err(TransformError::from)?;
            let path = entry.path();
            let relative = path.strip_prefix(source_dir).unwrap_or(path);
            let target = output_dir.join(relative);

            if entry.file_type().is_dir() {
                tokio::fs::create_dir_all(&target)
                    .await
                    .map_err(|e| TransformError::Io {
                        path: target.clone(),
                        source: e,
                    })?;
            } else if path.extension().map_or(false, |ext| ext == "rs") {
                self.transform_file(&map, path, &target, metrics).await?;
                files_transformed += 1;
            } else {
                // Mirror non-source files byte for byte.
                tokio::fs::copy(path, &target)
                    .await
                    .map_err(|e| TransformError::Io {
                        path: path.to_path_buf(),
                        source: e,
                    })?;
            }
        }

        Ok(RunSummary {
            files_transformed,
            names_mapped: map.len(),
        })
    }

    async fn transform_file(
        &self,
        map: &RenameMap,
        source_path: &Path,
        target_path: &Path,
        metrics: &Metrics,
    ) -> Result<(), TransformError> {
        let source = tokio::fs::read_to_string(source_path)
            .await
            .map_err(|e| TransformError::Io {
                path: source_path.to_path_buf(),
                source: e,
            })?;
        let mut tree = syn::parse_file(&source).map_err(|e| TransformError::Parse {
            path: source_path.to_path_buf(),
            source: e,
        })?;

        let mut renamer = GlobalRenamer::new(map);
        renamer.apply(&mut tree);
        metrics.names_renamed.inc_by(renamer.substitutions());

        let mut encryptor = StringEncryptor::new();
        encryptor.apply(&mut tree);
        let table = encryptor.into_table();
        metrics.strings_encrypted.inc_by(table.len() as u64);

        if !table.is_empty() {
            let items = preamble::synthesize(&table).map_err(|e| TransformError::Preamble {
                path: source_path.to_path_buf(),
                source: e,
            })?;
            preamble::prepend(&mut tree, items);
        }

        let output = prettyplease::unparse(&tree);
        tokio::fs::write(target_path, output)
            .await
            .map_err(|e| TransformError::Io {
                path: target_path.to_path_buf(),
                source: e,
            })?;
        metrics.files_transformed.inc();
        debug!(
            file = %source_path.display(),
            renamed = renamer.substitutions(),
            strings = table.len(),
            "transformed"
        );
        Ok(())
    }
}
