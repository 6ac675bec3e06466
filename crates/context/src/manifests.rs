//! Dependency extraction from well-known manifest formats.
//!
//! Each parser is tried independently and may contribute; malformed input is
//! swallowed so a broken manifest never fails extraction.

use std::sync::OnceLock;

use regex::Regex;

use crate::types::FileSet;

const VERSION_OPERATORS: &[&str] = &["==", ">=", "<="];

/// Union of package names across `package.json`, `requirements.txt`, and
/// `go.mod`, deduplicated in first-seen order.
pub(crate) fn extract_dependencies(files: &FileSet) -> Vec<String> {
    let mut dependencies = Vec::new();

    if let Some(raw) = files.get("package.json") {
        package_json_dependencies(raw, &mut dependencies);
    }
    if let Some(raw) = files.get("requirements.txt") {
        requirements_dependencies(raw, &mut dependencies);
    }
    if let Some(raw) = files.get("go.mod") {
        go_mod_dependencies(raw, &mut dependencies);
    }

    dependencies
}

fn push_unique(dependencies: &mut Vec<String>, name: &str) {
    if !dependencies.iter().any(|existing| existing == name) {
        dependencies.push(name.to_string());
    }
}

/// Keys of `dependencies` and `devDependencies`; parse failures contribute
/// nothing.
fn package_json_dependencies(raw: &str, dependencies: &mut Vec<String>) {
    let parsed: serde_json::Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => {
            log::debug!("skipping malformed package.json: {e}");
            return;
        }
    };

    for section in ["dependencies", "devDependencies"] {
        if let Some(map) = parsed.get(section).and_then(|v| v.as_object()) {
            for name in map.keys() {
                push_unique(dependencies, name);
            }
        }
    }
}

/// One package per line, truncated at the first version operator. Blank
/// lines and `#` comments are dropped.
fn requirements_dependencies(raw: &str, dependencies: &mut Vec<String>) {
    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut name = line;
        for operator in VERSION_OPERATORS {
            if let Some(at) = name.find(operator) {
                name = &name[..at];
            }
        }
        if !name.is_empty() {
            push_unique(dependencies, name);
        }
    }
}

fn require_token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"require\s+(\S+)").unwrap_or_else(|e| panic!("invalid require pattern: {e}"))
    })
}

/// Every token immediately following `require`. No version stripping; block
/// syntax (`require (`) yields the opening paren, matching upstream.
fn go_mod_dependencies(raw: &str, dependencies: &mut Vec<String>) {
    for capture in require_token_pattern().captures_iter(raw) {
        if let Some(token) = capture.get(1) {
            push_unique(dependencies, token.as_str());
        }
    }
}
