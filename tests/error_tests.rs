use std::path::PathBuf;

use code_obfuscator::discoverer::DiscoveryError;
use code_obfuscator::errors::AppError;
use code_obfuscator::pipeline::TransformError;
use code_obfuscator::rename_map::RenameError;

#[test]
fn app_error_from_discovery_io() {
    let io_err = std::io::Error::new(std::io::ErrorKind::Other, "fail");
    let app: AppError = DiscoveryError::Io {
        path: PathBuf::from("src/a.rs"),
        source: io_err,
    }
    .into();
    assert!(matches!(app, AppError::Discovery(DiscoveryError::Io { .. })));
}

#[test]
fn app_error_from_rename_collision() {
    let app: AppError = RenameError::Collision {
        name: "add".into(),
        attempts: 1000,
    }
    .into();
    assert!(matches!(app, AppError::Rename(RenameError::Collision { .. })));
}

#[test]
fn transform_parse_error_reports_the_file() {
    let parse_err = syn::parse_file("fn {").unwrap_err();
    let err = TransformError::Parse {
        path: PathBuf::from("src/broken.rs"),
        source: parse_err,
    };
    assert!(err.to_string().contains("src/broken.rs"));
}

#[test]
fn rename_collision_message_names_the_symbol() {
    let err = RenameError::Collision {
        name: "crowded".into(),
        attempts: 1000,
    };
    let msg = err.to_string();
    assert!(msg.contains("crowded"));
    assert!(msg.contains("1000"));
}
