use crate::core::error::{AppError, Result};
use crate::features::food_categories::models::ParentResolutionMode;
use crate::features::food_categories::store::CategoryStore;

/// Decides which parent id a created or updated category is stored with.
///
/// In [`ParentResolutionMode::Sibling`] mode a category requested under `P`
/// is stored with `P`'s own parent, so it lands next to `P` rather than
/// below it. [`ParentResolutionMode::Child`] stores `P` itself. Both modes
/// fail with `NotFound` when `P` does not exist.
///
/// `is_final` on the parent is not consulted.
#[derive(Debug, Clone, Copy)]
pub struct ParentResolver {
    mode: ParentResolutionMode,
}

impl ParentResolver {
    pub fn new(mode: ParentResolutionMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ParentResolutionMode {
        self.mode
    }

    pub async fn resolve<S>(
        &self,
        store: &S,
        requested_parent_id: Option<i64>,
    ) -> Result<Option<i64>>
    where
        S: CategoryStore + ?Sized,
    {
        let Some(parent_id) = requested_parent_id else {
            return Ok(None);
        };

        let parent = store
            .get(parent_id)
            .await?
            .ok_or_else(|| AppError::category_not_found(parent_id))?;

        Ok(match self.mode {
            ParentResolutionMode::Sibling => parent.parent_id,
            ParentResolutionMode::Child => Some(parent.id),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{category, InMemoryCategoryStore};

    fn store() -> InMemoryCategoryStore {
        InMemoryCategoryStore::with_rows(vec![
            category(1, None, "Food"),
            category(2, Some(1), "Produce"),
            category(3, Some(2), "Fruit"),
        ])
    }

    #[tokio::test]
    async fn test_absent_parent_resolves_to_root() {
        let store = store();
        for mode in [ParentResolutionMode::Sibling, ParentResolutionMode::Child] {
            let resolved = ParentResolver::new(mode).resolve(&store, None).await.unwrap();
            assert_eq!(resolved, None);
        }
        assert_eq!(store.read_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_parent_is_not_found() {
        let store = store();
        for mode in [ParentResolutionMode::Sibling, ParentResolutionMode::Child] {
            let err = ParentResolver::new(mode)
                .resolve(&store, Some(99))
                .await
                .unwrap_err();
            assert!(matches!(err, AppError::NotFound(ref msg) if msg.ends_with("id: 99")));
        }
    }

    #[tokio::test]
    async fn test_sibling_mode_takes_the_parents_parent() {
        let store = store();
        let resolver = ParentResolver::new(ParentResolutionMode::Sibling);

        assert_eq!(resolver.resolve(&store, Some(1)).await.unwrap(), None);
        assert_eq!(resolver.resolve(&store, Some(2)).await.unwrap(), Some(1));
        assert_eq!(resolver.resolve(&store, Some(3)).await.unwrap(), Some(2));
    }

    #[tokio::test]
    async fn test_child_mode_keeps_the_requested_parent() {
        let store = store();
        let resolver = ParentResolver::new(ParentResolutionMode::Child);

        assert_eq!(resolver.resolve(&store, Some(1)).await.unwrap(), Some(1));
        assert_eq!(resolver.resolve(&store, Some(3)).await.unwrap(), Some(3));
    }
}
