use std::collections::BTreeSet;
use std::fs;

use config as config_rs;
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_NAME_LENGTH: usize = 4;

/// Names the rename map builder must never touch. Entry points and trait
/// methods that are resolved by name at link or call time break when renamed.
const DEFAULT_EXCLUDE: &[&str] = &[
    "main", "new", "default", "clone", "drop", "fmt", "from", "into", "self", "Self",
];

/// On-disk shape of the user exclude file: `{"names": ["keep_me", ...]}`.
#[derive(Debug, Deserialize)]
pub struct ExcludeFile {
    pub names: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ObfuscationConfig {
    pub seed: Option<u64>,
    pub name_length: usize,
    pub exclude: BTreeSet<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("config error: {0}")]
    Config(#[from] config_rs::ConfigError),
    #[error("invalid value for {key}: {value}")]
    Invalid { key: String, value: String },
}

pub fn load_config(
    exclude_path: Option<&str>,
    seed: Option<u64>,
    name_length: Option<usize>,
) -> Result<ObfuscationConfig, ConfigError> {
    // Layered settings: defaults, then environment, then CLI flags.
    let mut builder = config_rs::Config::builder()
        .set_default("name_length", DEFAULT_NAME_LENGTH as i64)?;

    if let Ok(len) = std::env::var("OBF_NAME_LENGTH") {
        builder = builder.set_override("name_length", len)?;
    }
    if let Some(len) = name_length {
        builder = builder.set_override("name_length", len as i64)?;
    }

    let cfg = builder.build()?;
    let name_length = cfg.get::<usize>("name_length")?;
    if name_length == 0 {
        return Err(ConfigError::Invalid {
            key: "name_length".into(),
            value: "0".into(),
        });
    }

    let seed = match seed {
        Some(s) => Some(s),
        None => match std::env::var("OBF_SEED") {
            Ok(raw) => Some(raw.parse::<u64>().map_err(|_| ConfigError::Invalid {
                key: "OBF_SEED".into(),
                value: raw.clone(),
            })?),
            Err(_) => None,
        },
    };

    // User-supplied names are merged over the built-in set.
    let mut exclude: BTreeSet<String> =
        DEFAULT_EXCLUDE.iter().map(|s| s.to_string()).collect();
    if let Some(path) = exclude_path {
        let content = fs::read_to_string(path)?;
        let user: ExcludeFile = serde_json::from_str(&content)?;
        exclude.extend(user.names);
    }

    Ok(ObfuscationConfig {
        seed,
        name_length,
        exclude,
    })
}
