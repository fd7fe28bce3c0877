use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Open work item (project) as read from the data store
///
/// Every field is read leniently: missing, null or mistyped values degrade to
/// empty/absent instead of failing the whole row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateItem {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_string_list")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "lenient_budget")]
    pub budget: Option<f64>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub status: Option<String>,
}

/// Soft preferences attached to a recommendation query
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(rename = "budgetRange", default, skip_serializing_if = "Option::is_none")]
    pub budget_range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Inclusive budget band parsed from a "min-max" string
///
/// An unset bound is unbounded on that side.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BudgetRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl BudgetRange {
    /// Parse "min-max". Missing, empty, negative or non-numeric parts leave
    /// that bound unset rather than failing.
    pub fn parse(raw: &str) -> Self {
        let mut parts = raw.split('-');
        let min = parts.next().and_then(parse_bound);
        let max = parts.next().and_then(parse_bound);
        Self { min, max }
    }

    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        self.min.map_or(true, |min| value >= min) && self.max.map_or(true, |max| value <= max)
    }
}

fn parse_bound(part: &str) -> Option<f64> {
    part.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}

/// Candidate paired with its relevance score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    #[serde(flatten)]
    pub item: CandidateItem,
    pub score: u32,
}

/// Filter payload carried by a facet
///
/// Serializes as a single-key object, e.g. `{"query": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FacetFilter {
    Query(String),
    Skills(Vec<String>),
    Category(String),
    // config sources may lowercase keys
    #[serde(alias = "budgetrange")]
    BudgetRange(String),
}

/// Suggested follow-up search shortcut
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationFacet {
    pub label: String,
    pub filters: FacetFilter,
}

impl RecommendationFacet {
    pub fn new(label: impl Into<String>, filters: FacetFilter) -> Self {
        Self {
            label: label.into(),
            filters,
        }
    }
}

/// Integer weights for each scoring signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringWeights {
    pub exact_skill: u32,
    pub partial_skill: u32,
    pub budget: u32,
    pub category: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            exact_skill: 10,
            partial_skill: 5,
            budget: 5,
            category: 8,
        }
    }
}

fn lenient_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(lenient_opt_string(deserializer)?.unwrap_or_default())
}

fn lenient_opt_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn lenient_string_list<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(values) => values
            .into_iter()
            .filter_map(|v| match v {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

fn lenient_budget<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    let budget = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(budget.filter(|b| b.is_finite() && *b >= 0.0))
}
