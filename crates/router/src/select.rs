use agent_catalog::{AgentCatalog, AgentId};
use agent_context::{ProjectContext, ProjectType};
use serde::{Deserialize, Serialize};

use crate::score::ScoreVector;

/// Alternates below this score are dropped from the suggestion list.
const SUGGESTION_THRESHOLD: f32 = 0.3;

/// How many ranked runners-up are considered for suggestions.
const SUGGESTION_CANDIDATES: usize = 3;

/// The router's verdict: a primary agent, a clamped confidence, a
/// deterministic one-sentence explanation, and ranked alternates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentSelection {
    pub selected_agent: AgentId,
    /// `min(top score, 1.0)`; a UI signal, not a calibrated probability.
    pub confidence: f32,
    pub reasoning: String,
    /// At most three runners-up scoring above the threshold, best first,
    /// never including the selected agent.
    pub suggested_agents: Vec<AgentId>,
}

/// Pick the winner from a score vector.
///
/// The fallback agent's floor guarantees a well-defined argmax even when
/// every other score is zero; ties break in catalog order.
pub fn select(
    scores: &ScoreVector,
    context: &ProjectContext,
    user_request: &str,
) -> AgentSelection {
    let ranked = scores.ranked();
    let (selected_agent, top_score) = ranked[0];

    // Runners-up: the next three ranked entries, filtered by threshold.
    let suggested_agents: Vec<AgentId> = ranked
        .iter()
        .skip(1)
        .take(SUGGESTION_CANDIDATES)
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .map(|(id, _)| *id)
        .collect();

    let confidence = top_score.min(1.0);
    log::debug!(
        "selected {selected_agent} (confidence {confidence:.2}), {} suggestion(s)",
        suggested_agents.len()
    );

    AgentSelection {
        selected_agent,
        confidence,
        reasoning: reasoning_for(selected_agent, context, user_request),
        suggested_agents,
    }
}

/// One sentence naming the firing signals. Stable for identical inputs: no
/// timestamps, and every list keeps its deterministic detection order.
fn reasoning_for(selected: AgentId, context: &ProjectContext, user_request: &str) -> String {
    let agent = AgentCatalog::global().lookup(selected);
    let mut reasons: Vec<String> = Vec::new();

    if context.project_type != ProjectType::Unknown {
        reasons.push(format!(
            "Project appears to be {}-focused",
            context.project_type
        ));
    }

    if !context.technologies.is_empty() {
        reasons.push(format!(
            "Technologies detected: {}",
            context.technologies.join(", ")
        ));
    }

    let request = user_request.to_lowercase();
    let matching: Vec<&str> = agent
        .keywords
        .iter()
        .filter(|keyword| request.contains(*keyword))
        .copied()
        .collect();
    if !matching.is_empty() {
        reasons.push(format!("Request contains keywords: {}", matching.join(", ")));
    }

    format!("Selected {} because: {}.", agent.name, reasons.join("; "))
}
