// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{BudgetRange, CandidateItem, FacetFilter, Preferences, RecommendationFacet, ScoredCandidate, ScoringWeights};
pub use requests::{RecommendationRequest, SuggestionQuery};
pub use responses::{ErrorResponse, HealthResponse};
