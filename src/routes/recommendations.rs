use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{ErrorResponse, HealthResponse, RecommendationRequest, SuggestionQuery};
use crate::services::ProjectSource;
use crate::core::{plan_suggestion, Matcher, SuggestLimits, SuggestionPlan, Vocabulary};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// `None` when the data store is not configured
    pub source: Option<ProjectSource>,
    pub matcher: Matcher,
    pub vocabulary: Arc<Vocabulary>,
    pub suggest_limits: SuggestLimits,
    pub pool_limit: usize,
    pub corpus_limit: usize,
}

/// Configure all recommendation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/recommendations", web::post().to(recommend))
        .route("/recommendations/skills", web::get().to(suggest_skills));
}

fn unavailable() -> HttpResponse {
    HttpResponse::ServiceUnavailable().json(ErrorResponse::new(
        "API service unavailable - database configuration issue",
        "Data store URL or key is not set",
        503,
    ))
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let status = if state.source.is_some() { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Recommendation endpoint
///
/// POST /api/v1/recommendations
///
/// Request body:
/// ```json
/// {
///   "skills": ["React", "Node.js"],
///   "preferences": { "budgetRange": "100-500", "category": "Web Development" }
/// }
/// ```
///
/// Responds with an array of `{label, filters}` facets.
async fn recommend(
    state: web::Data<AppState>,
    req: web::Json<RecommendationRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for recommendation request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse::new(
            "Validation failed",
            errors.to_string(),
            400,
        ));
    }

    // The fallback facets do not depend on the pool
    if req.skills.is_empty() {
        return HttpResponse::Ok().json(state.matcher.score_and_recommend(&[], &req.preferences, &[]));
    }

    let Some(source) = &state.source else {
        return unavailable();
    };

    let pool = match source.open_projects(state.pool_limit).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to fetch open projects: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse::new(
                "Failed to fetch projects",
                e.to_string(),
                500,
            ));
        }
    };

    let facets = state.matcher.score_and_recommend(&req.skills, &req.preferences, &pool);

    tracing::info!(
        "Returning {} facets for {} skills (from {} candidates)",
        facets.len(),
        req.skills.len(),
        pool.len()
    );

    HttpResponse::Ok().json(facets)
}

/// Skill suggestion endpoint
///
/// GET /api/v1/recommendations/skills?query={partial}
///
/// Responds with `{"skills": [...]}`. A failed corpus read degrades to
/// vocabulary-only suggestions.
async fn suggest_skills(
    state: web::Data<AppState>,
    query: web::Query<SuggestionQuery>,
) -> impl Responder {
    let Some(source) = &state.source else {
        return unavailable();
    };

    if let Err(errors) = query.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse::new(
            "Validation failed",
            errors.to_string(),
            400,
        ));
    }

    let text = query.query.as_deref().unwrap_or_default();

    let result = match plan_suggestion(text, &state.vocabulary, &state.suggest_limits) {
        SuggestionPlan::Ready(result) => result,
        SuggestionPlan::NeedsCorpus(pending) => match source.skill_corpus(state.corpus_limit).await {
            Ok(corpus) => pending.with_corpus(&corpus),
            Err(e) => {
                tracing::warn!("Failed to fetch skill corpus, using vocabulary only: {}", e);
                pending.vocabulary_only()
            }
        },
    };

    tracing::debug!("Suggesting {} skills for {:?}", result.skills.len(), text);

    HttpResponse::Ok().json(result)
}
