pub mod collector;
pub mod config;
pub mod discoverer;
pub mod encryptor;
pub mod errors;
pub mod logger;
pub mod metrics;
pub mod pipeline;
pub mod preamble;
pub mod rename_map;
pub mod renamer;
pub mod template;
