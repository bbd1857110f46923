//! Layering guardrails for the workspace crates.
//!
//! - `qfharness_core` is a pure vocabulary crate and must not declare any `[dependencies]`.
//! - `qfharness_runtime` must not depend on the CLI layer (`qfharness`, `clap`, `miette`).

/// Dependency names listed in the `[dependencies]` table of a manifest.
fn main_dependencies(manifest: &str) -> Vec<String> {
    let mut in_dependencies = false;
    let mut names = Vec::new();

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        // Track when we enter/exit the `[dependencies]` table.
        if line.starts_with('[') {
            if line == "[dependencies]" {
                in_dependencies = true;
                continue;
            }
            // Any new section after `[dependencies]` ends the scan window.
            if in_dependencies {
                break;
            }
        }

        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Strip inline comments for robustness.
        let line_no_comment = line.split('#').next().unwrap_or("").trim();
        if let Some((name, _)) = line_no_comment.split_once('=') {
            names.push(name.trim().to_string());
        }
    }
    names
}

#[test]
fn core_has_no_dependencies() {
    let deps = main_dependencies(include_str!("../crates/qfharness_core/Cargo.toml"));
    assert!(deps.is_empty(), "`qfharness_core` must stay dependency-free, found: {deps:?}");
}

#[test]
fn runtime_does_not_depend_on_cli_layer() {
    let deps = main_dependencies(include_str!("../crates/qfharness_runtime/Cargo.toml"));
    for forbidden in ["qfharness", "clap", "miette"] {
        assert!(
            !deps.iter().any(|d| d == forbidden),
            "`qfharness_runtime` must not depend on `{forbidden}`"
        );
    }
}

#[test]
fn dependency_scan_reads_only_main_table() {
    let manifest = "[package]\nname = \"x\"\n\n[dependencies]\nserde = \"1\" # inline\n# comment\n\n[dev-dependencies]\nproptest = \"1\"\n";
    assert_eq!(main_dependencies(manifest), vec!["serde".to_string()]);
}
