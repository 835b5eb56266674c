//! The compose stack shipped at the workspace root must match the deployer defaults

use std::fs;
use std::path::PathBuf;

use deployer::config::{DEFAULT_API_HEALTH_URL, DEFAULT_COMPOSE_FILE, DEFAULT_WEB_URL};
use url::Url;

fn workspace_file(name: &str) -> String {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .to_path_buf();
    fs::read_to_string(root.join(name)).unwrap()
}

fn rust_version_from_manifest(manifest: &str) -> String {
    manifest
        .lines()
        .find_map(|line| line.trim().strip_prefix("rust-version = "))
        .unwrap()
        .trim_matches('"')
        .to_string()
}

#[test]
fn test_builder_image_matches_workspace_toolchain() {
    let dockerfile = workspace_file("Dockerfile");
    let manifest = workspace_file("Cargo.toml");

    let image = dockerfile
        .lines()
        .find_map(|line| line.strip_prefix("FROM rust:"))
        .unwrap();
    let image_version = image.split_whitespace().next().unwrap();

    assert_eq!(image_version, rust_version_from_manifest(&manifest));
}

#[test]
fn test_compose_file_publishes_probed_ports() {
    let compose = workspace_file(DEFAULT_COMPOSE_FILE);

    for url in [DEFAULT_WEB_URL, DEFAULT_API_HEALTH_URL] {
        let port = Url::parse(url).unwrap().port().unwrap();
        assert!(
            compose.contains(&format!("\"{port}:{port}\"")),
            "compose file does not publish port {port}"
        );
    }
}
