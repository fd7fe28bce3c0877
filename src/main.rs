use actix_cors::Cors;
use actix_web::{web, App, HttpServer, middleware};
use gigmatch::config::{LoggingSettings, Settings};
use gigmatch::routes::{self, errors, recommendations::AppState};
use gigmatch::services::{CacheManager, ProjectSource, SupabaseClient};
use std::sync::Arc;
use tracing::{info, error, warn};
use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber; `RUST_LOG` takes precedence over the configured level
fn init_logging(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.is_pretty() {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Settings come first so the [logging] section can configure the subscriber
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            init_logging(&LoggingSettings::default());
            error!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e));
        }
    };

    init_logging(&settings.logging);

    info!("Starting gigmatch recommendation service...");
    info!("Configuration loaded successfully");

    // The service still answers fallback requests without a data store
    let store = match SupabaseClient::from_settings(
        &settings.supabase.url,
        &settings.supabase.api_key,
        &settings.supabase.projects_table,
    ) {
        Ok(store) => store,
        Err(e) => {
            error!("Failed to build data store client: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::Other, e));
        }
    };

    let source = match store {
        Some(store) => {
            let cache = CacheManager::new(settings.cache.capacity, settings.cache.ttl_secs);
            info!(
                "Data store client initialized (cache: {} entries, TTL: {}s)",
                settings.cache.capacity, settings.cache.ttl_secs
            );
            Some(ProjectSource::new(Arc::new(store), cache))
        }
        None => {
            warn!("SUPABASE_URL or SUPABASE_KEY not set, running without data store");
            None
        }
    };

    let matcher = settings.matcher();
    let vocabulary = settings.suggestions.vocabulary();

    info!(
        "Matcher initialized with weights: {:?}, vocabulary: {} terms",
        matcher.weights(),
        vocabulary.len()
    );

    let app_state = AppState {
        source,
        matcher,
        vocabulary: Arc::new(vocabulary),
        suggest_limits: settings.suggestions.limits(),
        pool_limit: settings.matching.pool_limit,
        corpus_limit: settings.matching.corpus_limit,
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(errors::json_config())
            .app_data(errors::query_config())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
