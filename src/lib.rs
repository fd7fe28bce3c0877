//! Gigmatch - project recommendations and skill suggestions for a freelance marketplace
//!
//! This library provides the matching core used by the marketplace:
//! a scorer that ranks open projects against a user's skills and preferences
//! and derives follow-up search facets, and a term suggester for skill input.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{contains_ci, suggest, Matcher, SuggestLimits, SuggestionResult, Vocabulary};
pub use models::{CandidateItem, Preferences, RecommendationFacet, ScoredCandidate, ScoringWeights};
