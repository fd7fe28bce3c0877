use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::core::{default_fallback_facets, FacetLimits, Matcher, SuggestLimits, Vocabulary};
use crate::models::{RecommendationFacet, ScoringWeights};

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub supabase: SupabaseSettings,
    #[serde(default)]
    pub cache: CacheSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub facets: FacetSettings,
    #[serde(default)]
    pub suggestions: SuggestionSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

/// Data store connection; an empty URL or key leaves the service unconfigured
#[derive(Debug, Clone, Deserialize)]
pub struct SupabaseSettings {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_projects_table")]
    pub projects_table: String,
}

impl Default for SupabaseSettings {
    fn default() -> Self {
        Self {
            url: String::new(),
            api_key: String::new(),
            projects_table: default_projects_table(),
        }
    }
}

fn default_projects_table() -> String { "projects".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    #[serde(default = "default_cache_capacity")]
    pub capacity: u64,
    #[serde(default = "default_cache_ttl")]
    pub ttl_secs: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            capacity: default_cache_capacity(),
            ttl_secs: default_cache_ttl(),
        }
    }
}

fn default_cache_capacity() -> u64 { 64 }
fn default_cache_ttl() -> u64 { 30 }

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_fetch_limit")]
    pub pool_limit: usize,
    #[serde(default = "default_fetch_limit")]
    pub corpus_limit: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            pool_limit: default_fetch_limit(),
            corpus_limit: default_fetch_limit(),
        }
    }
}

fn default_fetch_limit() -> usize { 100 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_exact_skill_weight")]
    pub exact_skill: u32,
    #[serde(default = "default_partial_skill_weight")]
    pub partial_skill: u32,
    #[serde(default = "default_budget_weight")]
    pub budget: u32,
    #[serde(default = "default_category_weight")]
    pub category: u32,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            exact_skill: default_exact_skill_weight(),
            partial_skill: default_partial_skill_weight(),
            budget: default_budget_weight(),
            category: default_category_weight(),
        }
    }
}

fn default_exact_skill_weight() -> u32 { 10 }
fn default_partial_skill_weight() -> u32 { 5 }
fn default_budget_weight() -> u32 { 5 }
fn default_category_weight() -> u32 { 8 }

impl From<&WeightsConfig> for ScoringWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            exact_skill: config.exact_skill,
            partial_skill: config.partial_skill,
            budget: config.budget,
            category: config.category,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FacetSettings {
    #[serde(default = "default_max_facets")]
    pub max_facets: usize,
    #[serde(default = "default_top_items")]
    pub top_items: usize,
    #[serde(default = "default_skill_facets")]
    pub skill_facets: usize,
    #[serde(default = "default_category_window")]
    pub category_window: usize,
    /// Served verbatim when the user declared no skills
    #[serde(default = "default_fallback_facets")]
    pub fallback: Vec<RecommendationFacet>,
}

impl Default for FacetSettings {
    fn default() -> Self {
        Self {
            max_facets: default_max_facets(),
            top_items: default_top_items(),
            skill_facets: default_skill_facets(),
            category_window: default_category_window(),
            fallback: default_fallback_facets(),
        }
    }
}

fn default_max_facets() -> usize { 8 }
fn default_top_items() -> usize { 5 }
fn default_skill_facets() -> usize { 5 }
fn default_category_window() -> usize { 10 }

impl From<&FacetSettings> for FacetLimits {
    fn from(config: &FacetSettings) -> Self {
        Self {
            max_facets: config.max_facets,
            top_items: config.top_items,
            skill_facets: config.skill_facets,
            category_window: config.category_window,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SuggestionSettings {
    #[serde(default = "default_min_query_len")]
    pub min_query_len: usize,
    #[serde(default = "default_suggestion_limit")]
    pub limit: usize,
    #[serde(default = "default_sufficient_matches")]
    pub sufficient_matches: usize,
    /// Replaces the built-in skill vocabulary when set
    #[serde(default)]
    pub vocabulary: Option<Vec<String>>,
}

impl Default for SuggestionSettings {
    fn default() -> Self {
        Self {
            min_query_len: default_min_query_len(),
            limit: default_suggestion_limit(),
            sufficient_matches: default_sufficient_matches(),
            vocabulary: None,
        }
    }
}

fn default_min_query_len() -> usize { 2 }
fn default_suggestion_limit() -> usize { 10 }
fn default_sufficient_matches() -> usize { 5 }

impl SuggestionSettings {
    pub fn limits(&self) -> SuggestLimits {
        SuggestLimits {
            min_query_len: self.min_query_len,
            limit: self.limit,
            sufficient_matches: self.sufficient_matches,
        }
    }

    pub fn vocabulary(&self) -> Vocabulary {
        match &self.vocabulary {
            Some(terms) => Vocabulary::new(terms),
            None => Vocabulary::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl LoggingSettings {
    /// Human-readable output instead of JSON lines
    pub fn is_pretty(&self) -> bool {
        self.format.eq_ignore_ascii_case("pretty")
    }
}

/// Conventional variables applied over the layered config
const ENV_OVERRIDES: &[(&str, &str)] = &[
    ("SUPABASE_URL", "supabase.url"),
    ("SUPABASE_KEY", "supabase.api_key"),
    ("LOG_LEVEL", "logging.level"),
    ("LOG_FORMAT", "logging.format"),
];

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with GIGMATCH_)
    /// 5. SUPABASE_URL / SUPABASE_KEY / LOG_LEVEL / LOG_FORMAT
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., GIGMATCH__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("GIGMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        substitute_env_vars(settings, |name| std::env::var(name).ok())?.try_deserialize()
    }

    /// Matcher built from the scoring and facet sections
    pub fn matcher(&self) -> Matcher {
        Matcher::new(
            ScoringWeights::from(&self.scoring.weights),
            FacetLimits::from(&self.facets),
            self.facets.fallback.clone(),
        )
    }
}

/// Apply the conventional data store and logging variables on top of the layered config
fn substitute_env_vars<F>(settings: Config, lookup: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut builder = Config::builder().add_source(settings);

    for &(var, key) in ENV_OVERRIDES {
        if let Some(value) = lookup(var) {
            builder = builder.set_override(key, value)?;
        }
    }

    builder.build()
}
