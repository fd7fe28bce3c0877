use crate::core::text::{contains_ci, eq_ci};
use crate::models::{BudgetRange, CandidateItem, ScoringWeights};

/// Preference conditions resolved once per query, ahead of the scoring fold
#[derive(Debug, Clone, Default)]
pub struct ResolvedPreferences<'a> {
    pub budget: Option<BudgetRange>,
    pub category: Option<&'a str>,
}

/// Calculate the relevance score of one candidate
///
/// score = skill credit
///       + budget bonus     (candidate budget within the preferred range)
///       + category bonus   (exact category match)
pub fn calculate_candidate_score(
    skills: &[String],
    preferences: &ResolvedPreferences<'_>,
    item: &CandidateItem,
    weights: &ScoringWeights,
) -> u32 {
    let skill_score: u32 = skills
        .iter()
        .map(|skill| skill_credit(skill, &item.skills, weights))
        .sum();

    skill_score
        + budget_bonus(preferences.budget.as_ref(), item.budget, weights)
        + category_bonus(preferences.category, item.category.as_deref(), weights)
}

/// Credit for a single user skill against a candidate's skill set
///
/// An exact match anywhere in the set wins over a partial one; a skill is
/// credited at most once.
#[inline]
pub fn skill_credit(skill: &str, candidate_skills: &[String], weights: &ScoringWeights) -> u32 {
    if candidate_skills.iter().any(|s| eq_ci(s, skill)) {
        weights.exact_skill
    } else if candidate_skills
        .iter()
        .any(|s| contains_ci(s, skill) || contains_ci(skill, s))
    {
        weights.partial_skill
    } else {
        0
    }
}

#[inline]
fn budget_bonus(range: Option<&BudgetRange>, budget: Option<f64>, weights: &ScoringWeights) -> u32 {
    match (range, budget) {
        (Some(range), Some(budget)) if range.contains(budget) => weights.budget,
        _ => 0,
    }
}

#[inline]
fn category_bonus(preferred: Option<&str>, category: Option<&str>, weights: &ScoringWeights) -> u32 {
    match (preferred, category) {
        (Some(preferred), Some(category)) if preferred == category => weights.category,
        _ => 0,
    }
}
