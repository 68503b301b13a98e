//! Ranked-list tracker tests

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::cases::{CaseId, CaseRegistry, CaseStyle};
    use crate::store::{MemoryStore, PreferenceStore};
    use std::sync::Arc;

    async fn tracker() -> (StyleTracker, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let handle: Arc<dyn PreferenceStore> = store.clone();
        (StyleTracker::load(handle).await, store)
    }

    fn ids(names: &[&str]) -> Vec<CaseId> {
        names.iter().copied().map(CaseId::new).collect()
    }

    #[tokio::test]
    async fn starts_empty() {
        let (tracker, _) = tracker().await;
        assert!(tracker.pinned().is_empty());
        assert!(tracker.recent().is_empty());
    }

    #[tokio::test]
    async fn record_use_is_move_to_front_with_eviction() {
        let (mut tracker, _) = tracker().await;
        for id in ["a", "b", "c", "d"] {
            tracker.record_use(CaseId::new(id)).await;
        }
        assert_eq!(tracker.recent().items(), ids(&["d", "c", "b", "a"]));

        tracker.record_use(CaseId::new("a")).await;
        assert_eq!(tracker.recent().items(), ids(&["a", "d", "c", "b"]));

        tracker.record_use(CaseId::new("e")).await;
        assert_eq!(tracker.recent().items(), ids(&["e", "a", "d", "c"]));
    }

    #[tokio::test]
    async fn record_use_of_pinned_style_is_noop() {
        let (mut tracker, _) = tracker().await;
        tracker.pin(CaseId::new("camelCase")).await;

        tracker.record_use(CaseId::new("camelCase")).await;
        assert!(tracker.recent().is_empty());
        assert_eq!(tracker.pinned().items(), ids(&["camelCase"]));
    }

    #[tokio::test]
    async fn pin_removes_from_recent() {
        let (mut tracker, _) = tracker().await;
        tracker.record_use(CaseId::new("camelCase")).await;
        tracker.record_use(CaseId::new("snake_case")).await;

        tracker.pin(CaseId::new("camelCase")).await;

        assert!(!tracker.recent().contains(&CaseId::new("camelCase")));
        assert_eq!(tracker.pinned().items()[0], CaseId::new("camelCase"));
        assert_eq!(tracker.recent().items(), ids(&["snake_case"]));
    }

    #[tokio::test]
    async fn pin_twice_leaves_list_unchanged() {
        let (mut tracker, _) = tracker().await;
        tracker.pin(CaseId::new("a")).await;
        tracker.pin(CaseId::new("b")).await;
        let snapshot = tracker.pinned().items().to_vec();

        tracker.pin(CaseId::new("a")).await;
        assert_eq!(tracker.pinned().items(), snapshot.as_slice());
    }

    #[tokio::test]
    async fn unpin_absent_is_noop() {
        let (mut tracker, _) = tracker().await;
        tracker.pin(CaseId::new("a")).await;

        tracker.unpin(&CaseId::new("b")).await;
        assert_eq!(tracker.pinned().items(), ids(&["a"]));
    }

    #[tokio::test]
    async fn unpinned_style_becomes_trackable_again() {
        let (mut tracker, _) = tracker().await;
        tracker.pin(CaseId::new("a")).await;
        tracker.unpin(&CaseId::new("a")).await;

        tracker.record_use(CaseId::new("a")).await;
        assert_eq!(tracker.recent().items(), ids(&["a"]));
    }

    #[tokio::test]
    async fn mutations_write_through_to_store() {
        let (mut tracker, store) = tracker().await;

        tracker.record_use(CaseId::new("snake_case")).await;
        assert_eq!(
            store.get(RECENT_KEY).await.unwrap().as_deref(),
            Some(r#"["snake_case"]"#)
        );

        tracker.pin(CaseId::new("camelCase")).await;
        assert_eq!(
            store.get(PINNED_KEY).await.unwrap().as_deref(),
            Some(r#"["camelCase"]"#)
        );

        tracker.clear_recent().await;
        assert_eq!(store.get(RECENT_KEY).await.unwrap().as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn reload_restores_both_lists() {
        let store = Arc::new(MemoryStore::new());
        let handle: Arc<dyn PreferenceStore> = store.clone();
        let mut tracker = StyleTracker::load(handle.clone()).await;

        tracker.record_use(CaseId::new("snake_case")).await;
        tracker.record_use(CaseId::new("kebab-case")).await;
        tracker.pin(CaseId::new("camelCase")).await;
        drop(tracker);

        let reloaded = StyleTracker::load(handle).await;
        assert_eq!(reloaded.pinned().items(), ids(&["camelCase"]));
        assert_eq!(
            reloaded.recent().items(),
            ids(&["kebab-case", "snake_case"])
        );
    }

    #[tokio::test]
    async fn malformed_pinned_value_loads_empty() {
        let store = Arc::new(MemoryStore::new());
        store.set(PINNED_KEY, "not a list").await.unwrap();
        store.set(RECENT_KEY, r#"["snake_case"]"#).await.unwrap();

        let handle: Arc<dyn PreferenceStore> = store;
        let tracker = StyleTracker::load(handle).await;
        assert!(tracker.pinned().is_empty());
        assert_eq!(tracker.recent().items(), ids(&["snake_case"]));
    }

    #[tokio::test]
    async fn sections_order_pinned_recent_rest() {
        let mut registry = CaseRegistry::new();
        for id in ["a", "b", "c", "d"] {
            registry.register(CaseStyle::new(id, id, |s| s.to_string()));
        }

        let (mut tracker, _) = tracker().await;
        tracker.pin(CaseId::new("c")).await;
        tracker.record_use(CaseId::new("b")).await;

        let sections = tracker.sections(&registry);
        assert_eq!(sections.pinned, ids(&["c"]));
        assert_eq!(sections.recent, ids(&["b"]));
        assert_eq!(sections.others, ids(&["a", "d"]));
    }
}
