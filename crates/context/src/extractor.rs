use crate::manifests;
use crate::types::{FileSet, ProjectContext, ProjectType};
use crate::vocab::{
    BACKEND_PATH_HINTS, CI_PATH_HINTS, DATABASE_FEATURE_CONTENT_HINTS,
    DATABASE_FEATURE_PATH_HINTS, DATABASE_PATH_HINTS, DESIGN_CONTENT_HINTS, DEVOPS_PATH_HINTS,
    DOCKER_PATH_HINTS, FRAMEWORK_CONTENT_HINTS, FRONTEND_PATH_HINTS, LANGUAGE_SUFFIXES,
    MAX_SCAN_BYTES, TECHNOLOGY_CONTENT_HINTS, TEST_PATH_HINTS, TEST_PATH_SUFFIXES,
};

/// Derive a [`ProjectContext`] from a file snapshot and the user's request.
///
/// Deterministic and pure: no I/O, no shared state. Ill-formed inputs
/// degrade instead of failing; an empty snapshot yields
/// [`ProjectType::Unknown`] with every detection set empty.
///
/// The request is part of the extraction interface for parity with the
/// consumer-facing API; classification currently derives from files alone.
pub fn extract(files: &FileSet, _user_request: &str) -> ProjectContext {
    // One lowercased buffer for every content scan; O(total bytes), capped.
    let content = concatenated_content(files);

    ProjectContext {
        project_type: detect_project_type(files, &content),
        technologies: detect_technologies(files, &content),
        frameworks: detect_frameworks(&content),
        dependencies: manifests::extract_dependencies(files),
        has_tests: has_test_files(files),
        has_database: has_database_signals(files, &content),
        has_docker: has_docker_files(files),
        has_ci: has_ci_files(files),
    }
}

fn concatenated_content(files: &FileSet) -> String {
    let mut buffer = String::new();
    for contents in files.values() {
        if !buffer.is_empty() {
            buffer.push('\n');
        }
        if buffer.len() + contents.len() > MAX_SCAN_BYTES {
            let budget = MAX_SCAN_BYTES.saturating_sub(buffer.len());
            let cut = floor_char_boundary(contents, budget);
            buffer.push_str(&contents[..cut]);
            log::debug!(
                "content scan capped at {MAX_SCAN_BYTES} bytes; remaining files ignored"
            );
            break;
        }
        buffer.push_str(contents);
    }
    buffer.to_lowercase()
}

fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    let mut index = index;
    while !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

fn count_matching_paths(files: &FileSet, hints: &[&str]) -> usize {
    files
        .keys()
        .filter(|path| hints.iter().any(|hint| path.contains(hint)))
        .count()
}

fn any_path_contains(files: &FileSet, hints: &[&str]) -> bool {
    files
        .keys()
        .any(|path| hints.iter().any(|hint| path.contains(hint)))
}

fn any_path_ends_with(files: &FileSet, suffixes: &[&str]) -> bool {
    files
        .keys()
        .any(|path| suffixes.iter().any(|suffix| path.ends_with(suffix)))
}

/// Bucket the project by path evidence; first rule wins. Content-based
/// design detection is the last resort before `Unknown`.
fn detect_project_type(files: &FileSet, content: &str) -> ProjectType {
    let frontend = count_matching_paths(files, FRONTEND_PATH_HINTS);
    let backend = count_matching_paths(files, BACKEND_PATH_HINTS);
    let database = count_matching_paths(files, DATABASE_PATH_HINTS);
    let devops = count_matching_paths(files, DEVOPS_PATH_HINTS);

    log::debug!(
        "project buckets: frontend={frontend} backend={backend} database={database} devops={devops}"
    );

    if frontend > 0 && backend > 0 {
        ProjectType::Fullstack
    } else if frontend > 0 {
        ProjectType::Frontend
    } else if backend > 0 {
        ProjectType::Backend
    } else if database > 0 {
        ProjectType::Database
    } else if devops > 0 {
        ProjectType::Devops
    } else if DESIGN_CONTENT_HINTS.iter().any(|hint| content.contains(hint)) {
        ProjectType::Design
    } else {
        ProjectType::Unknown
    }
}

fn push_canonical(out: &mut Vec<String>, name: &str) {
    if !out.iter().any(|existing| existing == name) {
        out.push(name.to_string());
    }
}

/// Languages from file suffixes, then stacks from content substrings, in
/// table order. Duplicates collapse to the first occurrence.
fn detect_technologies(files: &FileSet, content: &str) -> Vec<String> {
    let mut technologies = Vec::new();

    for (suffixes, language) in LANGUAGE_SUFFIXES {
        if any_path_ends_with(files, suffixes) {
            push_canonical(&mut technologies, language);
        }
    }

    for (needles, canonical) in TECHNOLOGY_CONTENT_HINTS {
        if needles.iter().any(|needle| content.contains(needle)) {
            push_canonical(&mut technologies, canonical);
        }
    }

    technologies
}

fn detect_frameworks(content: &str) -> Vec<String> {
    let mut frameworks = Vec::new();
    for (needles, canonical) in FRAMEWORK_CONTENT_HINTS {
        if needles.iter().any(|needle| content.contains(needle)) {
            push_canonical(&mut frameworks, canonical);
        }
    }
    frameworks
}

fn has_test_files(files: &FileSet) -> bool {
    any_path_contains(files, TEST_PATH_HINTS) || any_path_ends_with(files, TEST_PATH_SUFFIXES)
}

fn has_database_signals(files: &FileSet, content: &str) -> bool {
    any_path_contains(files, DATABASE_FEATURE_PATH_HINTS)
        || any_path_ends_with(files, &[".sql"])
        || DATABASE_FEATURE_CONTENT_HINTS
            .iter()
            .any(|hint| content.contains(hint))
}

fn has_docker_files(files: &FileSet) -> bool {
    any_path_contains(files, DOCKER_PATH_HINTS)
}

fn has_ci_files(files: &FileSet) -> bool {
    any_path_contains(files, CI_PATH_HINTS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn files(entries: &[(&str, &str)]) -> FileSet {
        entries
            .iter()
            .map(|(path, contents)| (path.to_string(), contents.to_string()))
            .collect()
    }

    #[test]
    fn empty_snapshot_degrades_to_unknown() {
        let context = extract(&FileSet::new(), "");
        assert_eq!(context.project_type, ProjectType::Unknown);
        assert!(context.technologies.is_empty());
        assert!(context.frameworks.is_empty());
        assert!(context.dependencies.is_empty());
        assert!(!context.has_tests);
        assert!(!context.has_database);
        assert!(!context.has_docker);
        assert!(!context.has_ci);
    }

    #[test]
    fn components_tsx_classifies_frontend() {
        let fs = files(&[("src/components/App.tsx", "import React from 'react'")]);
        let context = extract(&fs, "");
        assert_eq!(context.project_type, ProjectType::Frontend);
        assert_eq!(context.technologies, vec!["TypeScript", "React"]);
    }

    #[test]
    fn frontend_plus_backend_is_fullstack() {
        let fs = files(&[
            ("src/components/Nav.tsx", ""),
            ("api/users.ts", "import express from 'express'"),
        ]);
        let context = extract(&fs, "");
        assert_eq!(context.project_type, ProjectType::Fullstack);
        assert!(context.technologies.contains(&"Express".to_string()));
    }

    #[test]
    fn sql_paths_classify_database() {
        let fs = files(&[("migrations/001.sql", "CREATE TABLE users"), ("schema.sql", "")]);
        let context = extract(&fs, "");
        assert_eq!(context.project_type, ProjectType::Database);
        assert!(context.has_database);
    }

    #[test]
    fn yml_alone_classifies_devops() {
        // Known over-classification kept for parity: any .yml bumps devops.
        let fs = files(&[("uno.config.yml", "theme: dark")]);
        let context = extract(&fs, "");
        assert_eq!(context.project_type, ProjectType::Devops);
    }

    #[test]
    fn dockerfile_path_match_is_case_sensitive() {
        let fs = files(&[("Dockerfile", "FROM node")]);
        assert_eq!(extract(&fs, "").project_type, ProjectType::Devops);

        let lowercase = files(&[("dockerfile", "FROM node")]);
        assert_eq!(extract(&lowercase, "").project_type, ProjectType::Unknown);
    }

    #[test]
    fn design_terms_in_content_classify_design() {
        let fs = files(&[("notes.txt", "Refining the UX of the onboarding flow")]);
        assert_eq!(extract(&fs, "").project_type, ProjectType::Design);
    }

    #[test]
    fn framework_vocabulary_is_independent() {
        let fs = files(&[("readme.txt", "built with fastapi and sveltekit")]);
        let context = extract(&fs, "");
        assert_eq!(context.frameworks, vec!["SvelteKit", "FastAPI"]);
        // "fastapi" does not hit the technology vocabulary.
        assert!(!context.technologies.contains(&"FastAPI".to_string()));
    }

    #[test]
    fn next_substring_detects_next_js_technology() {
        let fs = files(&[("notes.txt", "we might adopt next for routing")]);
        let context = extract(&fs, "");
        assert_eq!(context.technologies, vec!["Next.js"]);
    }

    #[test]
    fn feature_flags_fire_on_path_evidence() {
        let fs = files(&[
            ("src/__tests__/app.spec.ts", ""),
            (".github/workflows/ci.yml", "on: push"),
            ("docker-compose.yml", "services: {}"),
        ]);
        let context = extract(&fs, "");
        assert!(context.has_tests);
        assert!(context.has_docker);
        assert!(context.has_ci);
    }

    #[test]
    fn bare_db_in_content_sets_has_database() {
        // Broad by upstream design: any "db" substring counts.
        let fs = files(&[("notes.txt", "remember to update the dbx report")]);
        assert!(extract(&fs, "").has_database);
    }

    #[test]
    fn oversized_content_is_truncated_not_fatal() {
        let big = "x".repeat(MAX_SCAN_BYTES + 1024);
        let fs = files(&[("big.txt", &big), ("notes.txt", "uses postgres")]);
        let context = extract(&fs, "");
        // big.txt sorts first and exhausts the budget; postgres is past the cap.
        assert!(!context.technologies.contains(&"PostgreSQL".to_string()));
        assert_eq!(context.project_type, ProjectType::Unknown);
    }
}
