//! Agent router: classifies a project snapshot, scores the agent roster,
//! and selects the specialist best suited to a user request.
//!
//! The router is stateless and fully reentrant: every call is a pure
//! function over its arguments plus the immutable process-wide catalog. It
//! never fails at runtime; ill-formed inputs degrade to the general agent.

mod score;
mod select;

pub use agent_catalog::{AgentCatalog, AgentDescriptor, AgentId, CatalogError};
pub use agent_context::{FileSet, ProjectContext, ProjectContextSummary, ProjectType};
pub use score::{score, ScoreVector, GENERAL_BASE_SCORE};
pub use select::{select, AgentSelection};

/// Derive a [`ProjectContext`] from a file snapshot and the user request.
pub fn analyze_project_context(files: &FileSet, user_request: &str) -> ProjectContext {
    agent_context::extract(files, user_request)
}

/// Score the roster against `context` and pick the best agent.
pub fn select_agent(context: &ProjectContext, user_request: &str) -> AgentSelection {
    let scores = score::score(context, user_request);
    select::select(&scores, context, user_request)
}
