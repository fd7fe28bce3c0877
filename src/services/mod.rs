// Service exports
pub mod cache;
pub mod supabase;

pub use cache::{CacheError, CacheKey, CacheManager};
pub use supabase::{StoreError, SupabaseClient};

use crate::models::CandidateItem;
use std::sync::Arc;

/// Data-store reads fronted by the TTL cache
///
/// Only successful reads are cached.
#[derive(Clone)]
pub struct ProjectSource {
    store: Arc<SupabaseClient>,
    cache: CacheManager,
}

impl ProjectSource {
    pub fn new(store: Arc<SupabaseClient>, cache: CacheManager) -> Self {
        Self { store, cache }
    }

    /// Open projects forming the candidate pool
    pub async fn open_projects(&self, limit: usize) -> Result<Vec<CandidateItem>, StoreError> {
        let key = CacheKey::open_projects(limit);
        if let Ok(pool) = self.cache.get::<Vec<CandidateItem>>(&key).await {
            return Ok(pool);
        }

        let pool = self.store.fetch_open_projects(limit).await?;
        if let Err(e) = self.cache.set(&key, &pool).await {
            tracing::warn!("Failed to cache project pool: {}", e);
        }
        Ok(pool)
    }

    /// Skill tag lists forming the suggestion corpus
    pub async fn skill_corpus(&self, limit: usize) -> Result<Vec<Vec<String>>, StoreError> {
        let key = CacheKey::skill_corpus(limit);
        if let Ok(corpus) = self.cache.get::<Vec<Vec<String>>>(&key).await {
            return Ok(corpus);
        }

        let corpus = self.store.fetch_skill_corpus(limit).await?;
        if let Err(e) = self.cache.set(&key, &corpus).await {
            tracing::warn!("Failed to cache skill corpus: {}", e);
        }
        Ok(corpus)
    }
}
