//! Project context extraction: pure heuristics that turn a file snapshot and
//! a user request into a [`ProjectContext`] for the agent router.

mod extractor;
mod manifests;
mod types;
mod vocab;

pub use extractor::extract;
pub use types::{FileSet, ProjectContext, ProjectContextSummary, ProjectType};
