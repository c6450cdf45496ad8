//! Architecture tests for crate layering.
//!
//! The dependency direction is tui -> client -> (nothing), with config
//! below both. These tests walk the source trees and fail when a lower
//! layer mentions a higher one, which `cargo` alone would only catch
//! once someone also added the manifest entry.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// (crate source dir, forbidden identifiers) pairs.
const LAYERING_RULES: &[(&str, &[&str])] = &[
    ("crates/config/src", &["claw_client", "claw_tui"]),
    ("crates/client/src", &["claw_tui", "claw_config"]),
];

#[test]
fn lower_layers_do_not_reference_higher_ones() {
    let root = find_workspace_root();
    let mut violations = Vec::new();

    for (dir, forbidden) in LAYERING_RULES {
        let dir = root.join(dir);
        assert!(dir.exists(), "source directory not found at {:?}", dir);

        for file in rust_files(&dir) {
            let content = fs::read_to_string(&file)
                .unwrap_or_else(|e| panic!("failed to read {:?}: {e}", file));
            for name in *forbidden {
                if content.contains(name) {
                    violations.push(format!("{} references {}", file.display(), name));
                }
            }
        }
    }

    assert!(
        violations.is_empty(),
        "layering violations:\n{}",
        violations.join("\n")
    );
}

#[test]
fn rendering_stays_out_of_the_service_crate() {
    let root = find_workspace_root();
    for file in rust_files(&root.join("crates/client/src")) {
        let content =
            fs::read_to_string(&file).unwrap_or_else(|e| panic!("failed to read {:?}: {e}", file));
        assert!(
            !content.contains("ratatui") && !content.contains("crossterm"),
            "{} pulls terminal concerns into the service crate",
            file.display()
        );
    }
}

fn rust_files(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.path().extension() == Some(std::ffi::OsStr::new("rs")))
        .map(|e| e.into_path())
        .collect()
}

fn find_workspace_root() -> PathBuf {
    let current_dir = std::env::current_dir().expect("failed to get current directory");

    let mut dir = current_dir.as_path();
    loop {
        let cargo_toml = dir.join("Cargo.toml");
        if cargo_toml.exists()
            && let Ok(content) = fs::read_to_string(&cargo_toml)
            && content.contains("[workspace]")
        {
            return dir.to_path_buf();
        }

        match dir.parent() {
            Some(parent) => dir = parent,
            None => return current_dir,
        }
    }
}
