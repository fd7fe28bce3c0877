use crate::core::{
    facets::{default_fallback_facets, derive_facets, FacetLimits},
    scoring::{calculate_candidate_score, ResolvedPreferences},
};
use crate::models::{BudgetRange, CandidateItem, Preferences, RecommendationFacet, ScoredCandidate, ScoringWeights};

/// Recommendation orchestrator
///
/// # Pipeline Stages
/// 1. Resolve preferences (budget range parsing)
/// 2. Score every candidate in the pool
/// 3. Stable rank by descending score
/// 4. Derive facets (titles, missing skills, categories)
///
/// Holds configuration only, so one instance can serve concurrent requests.
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
    limits: FacetLimits,
    fallback: Vec<RecommendationFacet>,
}

impl Matcher {
    pub fn new(weights: ScoringWeights, limits: FacetLimits, fallback: Vec<RecommendationFacet>) -> Self {
        Self {
            weights,
            limits,
            fallback,
        }
    }

    pub fn with_default_weights() -> Self {
        Self::new(ScoringWeights::default(), FacetLimits::default(), default_fallback_facets())
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn fallback(&self) -> &[RecommendationFacet] {
        &self.fallback
    }

    /// Score and rank the pool
    ///
    /// Sorting is stable: candidates with equal scores keep their pool order.
    pub fn rank(
        &self,
        skills: &[String],
        preferences: &Preferences,
        pool: &[CandidateItem],
    ) -> Vec<ScoredCandidate> {
        let resolved = ResolvedPreferences {
            budget: preferences.budget_range.as_deref().map(BudgetRange::parse),
            category: preferences.category.as_deref(),
        };

        let mut ranked: Vec<ScoredCandidate> = pool
            .iter()
            .map(|item| ScoredCandidate {
                score: calculate_candidate_score(skills, &resolved, item, &self.weights),
                item: item.clone(),
            })
            .collect();

        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked
    }

    /// Produce recommendation facets for a user
    ///
    /// # Arguments
    /// * `skills` - The user's declared skills; empty selects the fallback facets
    /// * `preferences` - Optional budget range and category
    /// * `pool` - Open projects fetched by the caller
    ///
    /// # Returns
    /// At most `max_facets` facets; empty when no candidate scored above zero
    pub fn score_and_recommend(
        &self,
        skills: &[String],
        preferences: &Preferences,
        pool: &[CandidateItem],
    ) -> Vec<RecommendationFacet> {
        if skills.is_empty() {
            tracing::debug!("No skills supplied, serving {} fallback facets", self.fallback.len());
            let mut fallback = self.fallback.clone();
            fallback.truncate(self.limits.max_facets);
            return fallback;
        }

        let ranked = self.rank(skills, preferences, pool);

        if ranked.first().map_or(true, |top| top.score == 0) {
            tracing::debug!("No candidate in a pool of {} matched", pool.len());
            return Vec::new();
        }

        let facets = derive_facets(&ranked, pool, skills, &self.limits);

        tracing::debug!(
            "Derived {} facets from {} candidates (top score {})",
            facets.len(),
            pool.len(),
            ranked[0].score
        );

        facets
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FacetFilter;

    fn create_candidate(id: &str, skills: &[&str], budget: Option<f64>, category: Option<&str>) -> CandidateItem {
        CandidateItem {
            id: id.to_string(),
            title: format!("Project {}", id),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            budget,
            category: category.map(str::to_string),
            status: Some("open".to_string()),
        }
    }

    fn skills(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_rank_basic() {
        let matcher = Matcher::with_default_weights();
        let pool = vec![
            create_candidate("vue", &["vue"], None, None),
            create_candidate("react", &["react", "node"], None, None),
        ];

        let ranked = matcher.rank(&skills(&["React"]), &Preferences::default(), &pool);

        assert_eq!(ranked[0].item.id, "react");
        assert_eq!(ranked[0].score, 10);
        assert_eq!(ranked[1].item.id, "vue");
        assert_eq!(ranked[1].score, 0);
    }

    #[test]
    fn test_rank_is_stable() {
        let matcher = Matcher::with_default_weights();
        let pool = vec![
            create_candidate("a", &["go"], None, None),
            create_candidate("b", &["rust"], None, None),
            create_candidate("c", &["go"], None, None),
            create_candidate("d", &["rust"], None, None),
        ];

        let ranked = matcher.rank(&skills(&["Rust"]), &Preferences::default(), &pool);
        let ids: Vec<&str> = ranked.iter().map(|c| c.item.id.as_str()).collect();

        assert_eq!(ids, vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_preferences_raise_score() {
        let matcher = Matcher::with_default_weights();
        let pool = vec![
            create_candidate("plain", &["python"], Some(50.0), Some("Data")),
            create_candidate("fit", &["python"], Some(300.0), Some("Data Science")),
        ];
        let preferences = Preferences {
            budget_range: Some("100-500".to_string()),
            category: Some("Data Science".to_string()),
        };

        let ranked = matcher.rank(&skills(&["Python"]), &preferences, &pool);

        assert_eq!(ranked[0].item.id, "fit");
        assert_eq!(ranked[0].score, 10 + 5 + 8);
        assert_eq!(ranked[1].score, 10);
    }

    #[test]
    fn test_no_skills_returns_fallback() {
        let matcher = Matcher::with_default_weights();
        let pool = vec![create_candidate("1", &["rust"], Some(9000.0), Some("Web Development"))];

        let facets = matcher.score_and_recommend(&[], &Preferences::default(), &pool);

        assert_eq!(facets, default_fallback_facets());
    }

    #[test]
    fn test_no_positive_score_yields_no_facets() {
        let matcher = Matcher::with_default_weights();
        let pool = vec![create_candidate("1", &["cobol"], None, Some("Legacy"))];

        let facets = matcher.score_and_recommend(&skills(&["Swift"]), &Preferences::default(), &pool);

        assert!(facets.is_empty());
    }

    #[test]
    fn test_recommend_includes_top_title() {
        let matcher = Matcher::with_default_weights();
        let pool = vec![
            create_candidate("1", &["react", "node"], None, Some("Web Development")),
            create_candidate("2", &["vue"], None, None),
        ];

        let facets = matcher.score_and_recommend(&skills(&["React"]), &Preferences::default(), &pool);

        assert_eq!(facets[0].label, "Project 1");
        assert_eq!(facets[0].filters, FacetFilter::Query("Project 1".to_string()));
        assert!(facets.iter().any(|f| f.filters == FacetFilter::Skills(vec!["node".to_string()])));
        assert!(facets
            .iter()
            .any(|f| f.filters == FacetFilter::Category("Web Development".to_string())));
        assert!(facets.len() <= 8);
    }

    #[test]
    fn test_custom_fallback() {
        let fallback = vec![RecommendationFacet::new("Design", FacetFilter::Category("Design".into()))];
        let matcher = Matcher::new(ScoringWeights::default(), FacetLimits::default(), fallback.clone());

        assert_eq!(matcher.score_and_recommend(&[], &Preferences::default(), &[]), fallback);
    }
}
