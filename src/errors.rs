use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(#[from] crate::config::ConfigError),
    #[error("discovery error: {0}")]
    Discovery(#[from] crate::discoverer::DiscoveryError),
    #[error("rename error: {0}")]
    Rename(#[from] crate::rename_map::RenameError),
    #[error("transform error: {0}")]
    Transform(#[from] crate::pipeline::TransformError),
    #[error("other error: {0}")]
    Other(String),
}
