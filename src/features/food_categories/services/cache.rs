use std::collections::HashMap;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

use crate::features::food_categories::dtos::FoodCategoryTreeDto;
use crate::features::food_categories::models::FoodCategory;

struct Cached<T> {
    value: T,
    stored_at: Instant,
}

impl<T: Clone> Cached<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            stored_at: Instant::now(),
        }
    }

    fn fresh(&self, ttl: Duration) -> Option<T> {
        (self.stored_at.elapsed() < ttl).then(|| self.value.clone())
    }
}

#[derive(Default)]
struct CacheState {
    by_id: HashMap<i64, Cached<FoodCategory>>,
    tree: Option<Cached<Vec<FoodCategoryTreeDto>>>,
    /// Bumped by every invalidation
    generation: u64,
}

/// Read cache for single categories and the whole tree.
///
/// Any write to the category table must call [`CategoryCache::invalidate`],
/// which drops every entry at once. Readers take [`CategoryCache::generation`]
/// before querying the store and hand it back to `put_*`; a value read before
/// an invalidation is discarded instead of stored.
pub struct CategoryCache {
    state: RwLock<CacheState>,
    ttl: Option<Duration>,
}

impl CategoryCache {
    /// `None` disables caching entirely
    pub fn new(ttl: Option<Duration>) -> Self {
        Self {
            state: RwLock::new(CacheState::default()),
            ttl,
        }
    }

    pub async fn get_category(&self, id: i64) -> Option<FoodCategory> {
        let ttl = self.ttl?;
        let state = self.state.read().await;
        state.by_id.get(&id).and_then(|entry| entry.fresh(ttl))
    }

    /// Current invalidation generation
    pub async fn generation(&self) -> u64 {
        self.state.read().await.generation
    }

    pub async fn put_category(&self, generation: u64, category: &FoodCategory) {
        if self.ttl.is_none() {
            return;
        }
        let mut state = self.state.write().await;
        if state.generation != generation {
            tracing::debug!("Skipping stale cache entry for food category {}", category.id);
            return;
        }
        state.by_id.insert(category.id, Cached::new(category.clone()));
    }

    pub async fn get_tree(&self) -> Option<Vec<FoodCategoryTreeDto>> {
        let ttl = self.ttl?;
        let state = self.state.read().await;
        state.tree.as_ref().and_then(|entry| entry.fresh(ttl))
    }

    pub async fn put_tree(&self, generation: u64, tree: &[FoodCategoryTreeDto]) {
        if self.ttl.is_none() {
            return;
        }
        let mut state = self.state.write().await;
        if state.generation != generation {
            tracing::debug!("Skipping stale food category tree");
            return;
        }
        state.tree = Some(Cached::new(tree.to_vec()));
    }

    /// Clear the cache
    pub async fn invalidate(&self) {
        let mut state = self.state.write().await;
        state.by_id.clear();
        state.tree = None;
        state.generation = state.generation.wrapping_add(1);
    }
}

impl std::fmt::Debug for CategoryCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CategoryCache")
            .field("ttl", &self.ttl)
            .finish()
    }
}
