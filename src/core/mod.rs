// Core algorithm exports
pub mod facets;
pub mod matcher;
pub mod scoring;
pub mod suggest;
pub mod text;

pub use facets::{default_fallback_facets, derive_facets, top_missing_skills, FacetLimits};
pub use matcher::Matcher;
pub use scoring::{calculate_candidate_score, skill_credit};
pub use suggest::{plan_suggestion, suggest, PendingSuggestion, SuggestLimits, SuggestionPlan, SuggestionResult, Vocabulary};
pub use text::{contains_ci, eq_ci, CiSet};
