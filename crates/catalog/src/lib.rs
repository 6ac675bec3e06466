//! Agent roster: the closed set of specialist agents, their static
//! descriptors, and the process-wide read-only catalog.

mod agent;
mod catalog;
mod definitions;
mod error;

pub use agent::{AgentDescriptor, AgentId};
pub use catalog::AgentCatalog;
pub use error::{CatalogError, Result};
