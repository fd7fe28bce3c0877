use std::collections::HashMap;

use crate::core::text::{contains_ci, eq_ci};
use crate::models::{CandidateItem, FacetFilter, RecommendationFacet, ScoredCandidate};

/// Limits governing facet derivation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetLimits {
    /// Hard cap on the number of facets returned
    pub max_facets: usize,
    /// Ranked candidates turned into title facets
    pub top_items: usize,
    /// Unclaimed pool skills considered for skill facets
    pub skill_facets: usize,
    /// Ranked candidates scanned for category facets
    pub category_window: usize,
}

impl Default for FacetLimits {
    fn default() -> Self {
        Self {
            max_facets: 8,
            top_items: 5,
            skill_facets: 5,
            category_window: 10,
        }
    }
}

/// Static facets served when the user declared no skills
pub fn default_fallback_facets() -> Vec<RecommendationFacet> {
    vec![
        RecommendationFacet::new(
            "Web Development Projects",
            FacetFilter::Category("Web Development".to_string()),
        ),
        RecommendationFacet::new("Mobile Apps", FacetFilter::Category("Mobile Apps".to_string())),
        RecommendationFacet::new(
            "High Paying Projects",
            FacetFilter::BudgetRange("5000-10000".to_string()),
        ),
    ]
}

/// Build the facet list from a ranked pool
///
/// Order: top candidate titles, then skills the user lacks, then categories of
/// the best-ranked candidates. Truncated to `limits.max_facets`.
pub fn derive_facets(
    ranked: &[ScoredCandidate],
    pool: &[CandidateItem],
    user_skills: &[String],
    limits: &FacetLimits,
) -> Vec<RecommendationFacet> {
    let mut facets: Vec<RecommendationFacet> = ranked
        .iter()
        .take(limits.top_items)
        .map(|c| RecommendationFacet::new(c.item.title.clone(), FacetFilter::Query(c.item.title.clone())))
        .collect();

    for skill in top_missing_skills(pool, user_skills, limits.skill_facets) {
        if !facets.iter().any(|f| contains_ci(&f.label, skill)) {
            facets.push(RecommendationFacet::new(
                format!("{} Projects", skill),
                FacetFilter::Skills(vec![skill.to_string()]),
            ));
        }
    }

    for category in leading_categories(ranked, limits.category_window) {
        if !facets.iter().any(|f| f.label.contains(category)) {
            facets.push(RecommendationFacet::new(
                category.to_string(),
                FacetFilter::Category(category.to_string()),
            ));
        }
    }

    facets.truncate(limits.max_facets);
    facets
}

/// Most frequent pool skills the user does not already have
///
/// Frequencies are counted per exact spelling; ties keep first-appearance
/// order in the pool.
pub fn top_missing_skills<'a>(
    pool: &'a [CandidateItem],
    user_skills: &[String],
    limit: usize,
) -> Vec<&'a str> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, usize)> = Vec::new();

    for skill in pool.iter().flat_map(|item| item.skills.iter()) {
        match index.get(skill.as_str()) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                index.insert(skill.as_str(), counts.len());
                counts.push((skill.as_str(), 1));
            }
        }
    }

    counts.retain(|(skill, _)| !user_skills.iter().any(|own| eq_ci(own, skill)));
    // stable: equal counts stay in first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts.into_iter().take(limit).map(|(skill, _)| skill).collect()
}

/// Distinct non-empty categories among the first `window` ranked candidates
fn leading_categories(ranked: &[ScoredCandidate], window: usize) -> Vec<&str> {
    let mut categories: Vec<&str> = Vec::new();
    for category in ranked
        .iter()
        .take(window)
        .filter_map(|c| c.item.category.as_deref())
        .filter(|c| !c.is_empty())
    {
        if !categories.contains(&category) {
            categories.push(category);
        }
    }
    categories
}
