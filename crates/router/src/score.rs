//! Additive scoring of agents from four independent signal families.
//!
//! All contributions are commutative, so the final vector is independent of
//! the order the families run in.

use agent_catalog::{AgentCatalog, AgentId};
use agent_context::{ProjectContext, ProjectType};

/// Floor score for the fallback agent; guarantees a winner when nothing
/// else fires.
pub const GENERAL_BASE_SCORE: f32 = 0.5;

/// Weight per catalog keyword found in the user request.
const KEYWORD_HIT_WEIGHT: f32 = 0.2;

/// Signal family 1: additive increments per detected project type.
const PROJECT_TYPE_WEIGHTS: &[(ProjectType, &[(AgentId, f32)])] = &[
    (
        ProjectType::Frontend,
        &[
            (AgentId::FrontendSpecialist, 0.8),
            (AgentId::DesignGuru, 0.4),
            (AgentId::PerformanceOptimizer, 0.3),
        ],
    ),
    (
        ProjectType::Backend,
        &[
            (AgentId::BackendArchitect, 0.8),
            (AgentId::DatabaseMaster, 0.4),
            (AgentId::PerformanceOptimizer, 0.3),
        ],
    ),
    (
        ProjectType::Fullstack,
        &[
            (AgentId::FrontendSpecialist, 0.5),
            (AgentId::BackendArchitect, 0.5),
            (AgentId::DatabaseMaster, 0.3),
        ],
    ),
    (
        ProjectType::Database,
        &[
            (AgentId::DatabaseMaster, 0.8),
            (AgentId::BackendArchitect, 0.4),
        ],
    ),
    (
        ProjectType::Devops,
        &[
            (AgentId::DevopsCommander, 0.8),
            (AgentId::BackendArchitect, 0.3),
        ],
    ),
    (
        ProjectType::Design,
        &[(AgentId::DesignGuru, 0.8), (AgentId::FrontendSpecialist, 0.4)],
    ),
];

/// Signal family 2: each stack family whose vocabulary intersects the
/// detected technologies/frameworks adds its weight once. Families are
/// tested independently; several may fire.
const STACK_AFFINITIES: &[(&[&str], AgentId, f32)] = &[
    (
        &["react", "vue", "svelte", "angular"],
        AgentId::FrontendSpecialist,
        0.6,
    ),
    (
        &["express", "fastapi", "django", "gin", "echo", "node"],
        AgentId::BackendArchitect,
        0.6,
    ),
    (
        &["postgresql", "mysql", "mongodb", "redis"],
        AgentId::DatabaseMaster,
        0.6,
    ),
    (
        &["docker", "kubernetes", "k8s"],
        AgentId::DevopsCommander,
        0.6,
    ),
];

/// Signal family 3 bonuses: request substrings with a fixed per-agent bump,
/// on top of the per-keyword catalog hits.
const REQUEST_BONUSES: &[(&[&str], AgentId, f32)] = &[
    (
        &["performance", "optimize", "speed"],
        AgentId::PerformanceOptimizer,
        0.5,
    ),
    (&["test", "testing", "qa"], AgentId::TestingSpecialist, 0.5),
    (&["design", "ui", "ux"], AgentId::DesignGuru, 0.5),
    (&["deploy", "docker", "ci"], AgentId::DevopsCommander, 0.5),
];

/// Signal family 4: feature-flag bumps.
const FEATURE_FLAG_WEIGHT: f32 = 0.3;

/// Dense non-negative scores over the closed agent set.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreVector {
    scores: [f32; AgentId::COUNT],
}

impl ScoreVector {
    /// All zeros except the fallback agent's floor.
    pub fn new() -> Self {
        let mut scores = [0.0; AgentId::COUNT];
        scores[AgentId::General.index()] = GENERAL_BASE_SCORE;
        Self { scores }
    }

    pub fn get(&self, id: AgentId) -> f32 {
        self.scores[id.index()]
    }

    fn add(&mut self, id: AgentId, amount: f32) {
        self.scores[id.index()] += amount;
    }

    /// `(agent, score)` pairs sorted by descending score; ties keep catalog
    /// order (the sort is stable over a catalog-ordered base).
    pub fn ranked(&self) -> Vec<(AgentId, f32)> {
        let mut ranked: Vec<(AgentId, f32)> =
            AgentId::ALL.into_iter().map(|id| (id, self.get(id))).collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        ranked
    }
}

impl Default for ScoreVector {
    fn default() -> Self {
        Self::new()
    }
}

/// Score every agent against the extracted context and the user request.
pub fn score(context: &ProjectContext, user_request: &str) -> ScoreVector {
    let request = user_request.to_lowercase();
    let mut scores = ScoreVector::new();

    score_by_project_type(&mut scores, context.project_type);
    score_by_stacks(&mut scores, context);
    score_by_request(&mut scores, &request);
    score_by_features(&mut scores, context);

    scores
}

fn score_by_project_type(scores: &mut ScoreVector, project_type: ProjectType) {
    for (candidate, weights) in PROJECT_TYPE_WEIGHTS {
        if *candidate != project_type {
            continue;
        }
        for (agent, weight) in *weights {
            scores.add(*agent, *weight);
        }
    }
}

fn score_by_stacks(scores: &mut ScoreVector, context: &ProjectContext) {
    let all_tech: Vec<String> = context
        .technologies
        .iter()
        .chain(context.frameworks.iter())
        .map(|name| name.to_lowercase())
        .collect();

    for (vocabulary, agent, weight) in STACK_AFFINITIES {
        if all_tech.iter().any(|tech| vocabulary.contains(&tech.as_str())) {
            scores.add(*agent, *weight);
        }
    }
}

fn score_by_request(scores: &mut ScoreVector, request: &str) {
    for agent in AgentCatalog::global().all() {
        let hits = agent
            .keywords
            .iter()
            .filter(|keyword| request.contains(*keyword))
            .count();
        if hits > 0 {
            log::debug!("{} matched {hits} request keyword(s)", agent.id);
            scores.add(agent.id, hits as f32 * KEYWORD_HIT_WEIGHT);
        }
    }

    for (needles, agent, weight) in REQUEST_BONUSES {
        if needles.iter().any(|needle| request.contains(needle)) {
            scores.add(*agent, *weight);
        }
    }
}

fn score_by_features(scores: &mut ScoreVector, context: &ProjectContext) {
    if context.has_tests {
        scores.add(AgentId::TestingSpecialist, FEATURE_FLAG_WEIGHT);
    }
    if context.has_database {
        scores.add(AgentId::DatabaseMaster, FEATURE_FLAG_WEIGHT);
    }
    // Docker and CI together still count once.
    if context.has_docker || context.has_ci {
        scores.add(AgentId::DevopsCommander, FEATURE_FLAG_WEIGHT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn bare_context(project_type: ProjectType) -> ProjectContext {
        ProjectContext {
            project_type,
            technologies: vec![],
            frameworks: vec![],
            dependencies: vec![],
            has_tests: false,
            has_database: false,
            has_docker: false,
            has_ci: false,
        }
    }

    #[test]
    fn fresh_vector_has_only_the_general_floor() {
        let scores = ScoreVector::new();
        for id in AgentId::ALL {
            let expected = if id == AgentId::General {
                GENERAL_BASE_SCORE
            } else {
                0.0
            };
            assert_eq!(scores.get(id), expected);
        }
    }

    #[test]
    fn unknown_project_type_adds_nothing() {
        let scores = score(&bare_context(ProjectType::Unknown), "");
        assert_eq!(scores, ScoreVector::new());
    }

    #[test]
    fn frontend_project_boosts_frontend_specialist() {
        let scores = score(&bare_context(ProjectType::Frontend), "");
        assert_eq!(scores.get(AgentId::FrontendSpecialist), 0.8);
        assert_eq!(scores.get(AgentId::DesignGuru), 0.4);
        assert_eq!(scores.get(AgentId::PerformanceOptimizer), 0.3);
        assert_eq!(scores.get(AgentId::BackendArchitect), 0.0);
    }

    #[test]
    fn stack_families_fire_independently() {
        let mut context = bare_context(ProjectType::Unknown);
        context.technologies = vec!["React".into(), "Redis".into()];
        context.frameworks = vec!["FastAPI".into()];

        let scores = score(&context, "");
        assert_eq!(scores.get(AgentId::FrontendSpecialist), 0.6);
        assert_eq!(scores.get(AgentId::BackendArchitect), 0.6);
        assert_eq!(scores.get(AgentId::DatabaseMaster), 0.6);
        assert_eq!(scores.get(AgentId::DevopsCommander), 0.0);
    }

    #[test]
    fn stack_match_is_exact_not_substring() {
        let mut context = bare_context(ProjectType::Unknown);
        context.technologies = vec!["TypeScript".into(), "Next.js".into()];
        let scores = score(&context, "");
        assert_eq!(scores.get(AgentId::FrontendSpecialist), 0.0);
        assert_eq!(scores.get(AgentId::BackendArchitect), 0.0);
    }

    #[test]
    fn request_keywords_accumulate_per_hit() {
        // "react" and "component" are both frontend-specialist keywords.
        let scores = score(
            &bare_context(ProjectType::Unknown),
            "refactor the react component",
        );
        let expected = 2.0 * KEYWORD_HIT_WEIGHT;
        assert!((scores.get(AgentId::FrontendSpecialist) - expected).abs() < 1e-6);
    }

    #[test]
    fn keyword_matching_is_substring_based() {
        // "ui" hides inside "build": both the design-guru keyword hit and
        // the request bonus fire.
        let scores = score(&bare_context(ProjectType::Unknown), "build something");
        let expected = KEYWORD_HIT_WEIGHT + 0.5;
        assert!((scores.get(AgentId::DesignGuru) - expected).abs() < 1e-6);
    }

    #[test]
    fn performance_request_gets_the_bonus() {
        let scores = score(&bare_context(ProjectType::Unknown), "optimize load speed");
        // bonus 0.5 plus the "optimization"/"speed" keyword hits
        assert!(scores.get(AgentId::PerformanceOptimizer) >= 0.5);
    }

    #[test]
    fn docker_and_ci_together_count_once() {
        let mut both = bare_context(ProjectType::Unknown);
        both.has_docker = true;
        both.has_ci = true;
        let mut only_docker = bare_context(ProjectType::Unknown);
        only_docker.has_docker = true;

        let scored_both = score(&both, "");
        let scored_one = score(&only_docker, "");
        assert_eq!(
            scored_both.get(AgentId::DevopsCommander),
            scored_one.get(AgentId::DevopsCommander)
        );
        assert_eq!(scored_both.get(AgentId::DevopsCommander), FEATURE_FLAG_WEIGHT);
    }

    #[test]
    fn feature_flags_bump_their_agents() {
        let mut context = bare_context(ProjectType::Unknown);
        context.has_tests = true;
        context.has_database = true;
        let scores = score(&context, "");
        assert_eq!(scores.get(AgentId::TestingSpecialist), FEATURE_FLAG_WEIGHT);
        assert_eq!(scores.get(AgentId::DatabaseMaster), FEATURE_FLAG_WEIGHT);
    }

    #[test]
    fn ranking_breaks_ties_in_catalog_order() {
        let ranked = ScoreVector::new().ranked();
        assert_eq!(ranked[0].0, AgentId::General);
        // The seven zero-scored agents keep catalog order.
        let rest: Vec<AgentId> = ranked[1..].iter().map(|(id, _)| *id).collect();
        assert_eq!(
            rest,
            AgentId::ALL[..AgentId::COUNT - 1].to_vec()
        );
    }
}
