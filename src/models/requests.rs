use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::Preferences;

/// Request for personalised project recommendations
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RecommendationRequest {
    #[validate(length(max = 100))]
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub preferences: Preferences,
}

/// Query string of the skill suggestion endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SuggestionQuery {
    #[validate(length(max = 100))]
    #[serde(default)]
    pub query: Option<String>,
}
