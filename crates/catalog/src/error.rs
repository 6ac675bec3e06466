use thiserror::Error;

use crate::agent::AgentId;

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors that can occur while building or querying the agent catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The static descriptor table does not cover every declared agent id.
    /// Startup-fatal: the router must refuse to serve.
    #[error("catalog incomplete: no descriptor for agent '{0}'")]
    Incomplete(AgentId),

    /// A descriptor appears out of catalog order or under the wrong id.
    #[error("catalog descriptor for '{expected}' found '{found}' at position {position}")]
    Misplaced {
        expected: AgentId,
        found: AgentId,
        position: usize,
    },

    /// An identifier string does not name any known agent.
    #[error("unknown agent id: '{0}'")]
    UnknownAgent(String),
}
