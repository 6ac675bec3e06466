use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// In-memory project snapshot: relative path (forward slashes) to file
/// contents. Paths are case-preserving; iteration order is fixed by the map
/// so derived records are byte-stable across runs.
pub type FileSet = BTreeMap<String, String>;

/// Coarse shape of a project, derived from its file paths and contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Frontend,
    Backend,
    Fullstack,
    Database,
    Devops,
    Design,
    Unknown,
}

impl ProjectType {
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectType::Frontend => "frontend",
            ProjectType::Backend => "backend",
            ProjectType::Fullstack => "fullstack",
            ProjectType::Database => "database",
            ProjectType::Devops => "devops",
            ProjectType::Design => "design",
            ProjectType::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for ProjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the scorer needs to know about a project.
///
/// Derived once per request by [`crate::extract`]; never mutated afterwards.
/// Detection lists keep first-seen order so downstream comma-joins are
/// deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectContext {
    #[serde(rename = "type")]
    pub project_type: ProjectType,
    /// Canonical technology names (languages plus detected stacks).
    pub technologies: Vec<String>,
    /// Canonical framework names; independent vocabulary from technologies.
    pub frameworks: Vec<String>,
    /// Package names pooled from all recognized manifests.
    pub dependencies: Vec<String>,
    pub has_tests: bool,
    pub has_database: bool,
    pub has_docker: bool,
    pub has_ci: bool,
}

/// Context record safe to hand to the chat UI: everything in
/// [`ProjectContext`] plus a file count, minus the raw file contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectContextSummary {
    #[serde(rename = "type")]
    pub project_type: ProjectType,
    pub technologies: Vec<String>,
    pub frameworks: Vec<String>,
    pub dependencies: Vec<String>,
    pub has_tests: bool,
    pub has_database: bool,
    pub has_docker: bool,
    pub has_ci: bool,
    pub file_count: usize,
}

impl ProjectContextSummary {
    pub fn of(context: &ProjectContext, files: &FileSet) -> Self {
        Self {
            project_type: context.project_type,
            technologies: context.technologies.clone(),
            frameworks: context.frameworks.clone(),
            dependencies: context.dependencies.clone(),
            has_tests: context.has_tests,
            has_database: context.has_database,
            has_docker: context.has_docker,
            has_ci: context.has_ci,
            file_count: files.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_context() -> ProjectContext {
        ProjectContext {
            project_type: ProjectType::Frontend,
            technologies: vec!["TypeScript".into(), "React".into()],
            frameworks: vec![],
            dependencies: vec!["react".into()],
            has_tests: true,
            has_database: false,
            has_docker: false,
            has_ci: false,
        }
    }

    #[test]
    fn context_serializes_with_ui_field_names() {
        let json = serde_json::to_value(sample_context()).unwrap();
        assert_eq!(json["type"], "frontend");
        assert_eq!(json["hasTests"], true);
        assert_eq!(json["technologies"][1], "React");
    }

    #[test]
    fn summary_carries_file_count_but_never_contents() {
        let mut files = FileSet::new();
        files.insert("src/App.tsx".into(), "secret contents".into());
        let summary = ProjectContextSummary::of(&sample_context(), &files);
        assert_eq!(summary.file_count, 1);

        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"fileCount\":1"));
        assert!(!json.contains("secret contents"));
    }
}
