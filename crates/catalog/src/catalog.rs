use std::sync::OnceLock;

use crate::agent::{AgentDescriptor, AgentId};
use crate::definitions::DESCRIPTORS;
use crate::error::{CatalogError, Result};

/// Immutable registry of agent descriptors, total over `AgentId`.
///
/// Built once per process; read-only afterwards, so it can be consulted from
/// any number of parallel callers without synchronization.
pub struct AgentCatalog {
    agents: [AgentDescriptor; AgentId::COUNT],
}

impl AgentCatalog {
    /// Build the catalog from the static descriptor table, verifying that
    /// every declared `AgentId` has exactly one descriptor in catalog order.
    pub fn new() -> Result<Self> {
        for (position, expected) in AgentId::ALL.into_iter().enumerate() {
            let found = DESCRIPTORS[position].id;
            if found != expected {
                if DESCRIPTORS.iter().all(|d| d.id != expected) {
                    return Err(CatalogError::Incomplete(expected));
                }
                return Err(CatalogError::Misplaced {
                    expected,
                    found,
                    position,
                });
            }
        }
        log::debug!("agent catalog initialized with {} agents", AgentId::COUNT);
        Ok(Self { agents: DESCRIPTORS })
    }

    /// Process-wide catalog instance.
    ///
    /// A broken descriptor table is startup-fatal: the router refuses to
    /// serve rather than route against a partial roster.
    pub fn global() -> &'static AgentCatalog {
        static CATALOG: OnceLock<AgentCatalog> = OnceLock::new();
        CATALOG.get_or_init(|| match AgentCatalog::new() {
            Ok(catalog) => catalog,
            Err(e) => panic!("agent catalog failed to initialize: {e}"),
        })
    }

    /// Descriptor for an agent id. Total: the id is closed and the catalog
    /// is verified complete at construction.
    pub fn lookup(&self, id: AgentId) -> &AgentDescriptor {
        &self.agents[id.index()]
    }

    /// All descriptors in catalog order.
    pub fn all(&self) -> &[AgentDescriptor] {
        &self.agents
    }

    /// Agents whose keywords, name, or description contain `term`
    /// (case-insensitive substring), in catalog order.
    pub fn search_by_keyword(&self, term: &str) -> Vec<&AgentDescriptor> {
        let needle = term.to_lowercase();
        self.agents
            .iter()
            .filter(|agent| {
                agent
                    .keywords
                    .iter()
                    .any(|keyword| keyword.to_lowercase().contains(&needle))
                    || agent.name.to_lowercase().contains(&needle)
                    || agent.description.to_lowercase().contains(&needle)
            })
            .collect()
    }
}
