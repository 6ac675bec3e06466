use serde::{Deserialize, Serialize};

/// Closed set of specialist agents the router can select.
///
/// Variant order is the catalog order: it drives `AgentCatalog::all()` and
/// breaks ties when two agents end up with the same score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AgentId {
    FrontendSpecialist,
    BackendArchitect,
    DatabaseMaster,
    DevopsCommander,
    DesignGuru,
    PerformanceOptimizer,
    TestingSpecialist,
    /// Fallback agent; always scored with a positive floor so it wins when
    /// nothing else fires.
    General,
}

impl AgentId {
    pub const COUNT: usize = 8;

    /// All agent ids in catalog order.
    pub const ALL: [AgentId; Self::COUNT] = [
        AgentId::FrontendSpecialist,
        AgentId::BackendArchitect,
        AgentId::DatabaseMaster,
        AgentId::DevopsCommander,
        AgentId::DesignGuru,
        AgentId::PerformanceOptimizer,
        AgentId::TestingSpecialist,
        AgentId::General,
    ];

    /// Wire identifier, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            AgentId::FrontendSpecialist => "frontend-specialist",
            AgentId::BackendArchitect => "backend-architect",
            AgentId::DatabaseMaster => "database-master",
            AgentId::DevopsCommander => "devops-commander",
            AgentId::DesignGuru => "design-guru",
            AgentId::PerformanceOptimizer => "performance-optimizer",
            AgentId::TestingSpecialist => "testing-specialist",
            AgentId::General => "general",
        }
    }

    /// Position in catalog order; dense index for score vectors.
    pub fn index(self) -> usize {
        match self {
            AgentId::FrontendSpecialist => 0,
            AgentId::BackendArchitect => 1,
            AgentId::DatabaseMaster => 2,
            AgentId::DevopsCommander => 3,
            AgentId::DesignGuru => 4,
            AgentId::PerformanceOptimizer => 5,
            AgentId::TestingSpecialist => 6,
            AgentId::General => 7,
        }
    }
}

impl std::fmt::Display for AgentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AgentId {
    type Err = crate::error::CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| crate::error::CatalogError::UnknownAgent(s.to_string()))
    }
}

/// Static description of one agent: display metadata plus the keyword
/// vocabulary and prompt template the rest of the system consumes.
///
/// Descriptors are created once at startup and never mutated. The
/// `prompt_template` is an opaque pass-through payload; the router neither
/// interprets nor transforms it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentDescriptor {
    pub id: AgentId,
    pub name: &'static str,
    pub description: &'static str,
    pub expertise: &'static [&'static str],
    /// Opaque display string consumed by the UI.
    pub icon: &'static str,
    /// Opaque display string consumed by the UI.
    pub color: &'static str,
    pub capabilities: &'static [&'static str],
    pub prompt_template: &'static str,
    /// Lowercase tokens matched as substrings against user requests.
    pub keywords: &'static [&'static str],
}
