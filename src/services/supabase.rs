use crate::models::CandidateItem;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when reading from the data store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Unauthorized: invalid API key")]
    Unauthorized,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// PostgREST (Supabase) client
///
/// Supplies the two read-only inputs of the recommendation core:
/// - the pool of open projects
/// - the corpus of project skill tags
pub struct SupabaseClient {
    base_url: String,
    api_key: String,
    projects_table: String,
    client: Client,
}

impl SupabaseClient {
    /// Create a new client
    pub fn new(base_url: String, api_key: String, projects_table: String) -> Result<Self, StoreError> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;

        Ok(Self {
            base_url,
            api_key,
            projects_table,
            client,
        })
    }

    /// Build a client only when both the URL and the key are set
    pub fn from_settings(url: &str, api_key: &str, projects_table: &str) -> Result<Option<Self>, StoreError> {
        if url.trim().is_empty() || api_key.trim().is_empty() {
            return Ok(None);
        }
        Self::new(url.to_string(), api_key.to_string(), projects_table.to_string()).map(Some)
    }

    fn table_url(&self, query: &[(&str, String)]) -> String {
        let params = query
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        format!(
            "{}/rest/v1/{}?{}",
            self.base_url.trim_end_matches('/'),
            self.projects_table,
            params
        )
    }

    async fn fetch_rows(&self, url: &str) -> Result<Vec<Value>, StoreError> {
        let response = self
            .client
            .get(url)
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(StoreError::Unauthorized);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::error!("Data store query failed: {} - {}", status, body);
            return Err(StoreError::ApiError(format!("Query failed: {}", status)));
        }

        match response.json::<Value>().await? {
            Value::Array(rows) => Ok(rows),
            other => Err(StoreError::InvalidResponse(format!(
                "Expected an array of rows, got {}",
                type_name(&other)
            ))),
        }
    }

    /// Fetch up to `limit` projects with status "open"
    ///
    /// Rows that cannot be read as a project are skipped.
    pub async fn fetch_open_projects(&self, limit: usize) -> Result<Vec<CandidateItem>, StoreError> {
        let url = self.table_url(&[
            ("select", "*".to_string()),
            ("status", "eq.open".to_string()),
            ("limit", limit.to_string()),
        ]);

        let rows = self.fetch_rows(&url).await?;
        let total = rows.len();

        let projects: Vec<CandidateItem> = rows
            .into_iter()
            .filter(Value::is_object)
            .filter_map(|row| serde_json::from_value(row).ok())
            .collect();

        tracing::debug!("Fetched {} open projects ({} rows)", projects.len(), total);

        Ok(projects)
    }

    /// Fetch the skill tag lists of up to `limit` projects
    ///
    /// Rows whose `skills` field is missing or not an array are skipped; non-string
    /// tags inside a list are dropped.
    pub async fn fetch_skill_corpus(&self, limit: usize) -> Result<Vec<Vec<String>>, StoreError> {
        let url = self.table_url(&[("select", "skills".to_string()), ("limit", limit.to_string())]);

        let rows = self.fetch_rows(&url).await?;

        let corpus: Vec<Vec<String>> = rows
            .iter()
            .filter_map(|row| row.get("skills").and_then(Value::as_array))
            .map(|tags| {
                tags.iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .collect();

        tracing::debug!("Fetched skill corpus of {} entries", corpus.len());

        Ok(corpus)
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
