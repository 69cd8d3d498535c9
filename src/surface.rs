use std::sync::{
    Arc, Mutex,
    atomic::{AtomicU64, Ordering},
};

use tracing::debug;

use crate::{
    config::ListingConfig,
    post::SortMode,
    store::PostStore,
    view::{ListingView, present},
};

/// Owns the listing shown on one output surface.
///
/// Refreshes may overlap (e.g. the sort mode changes while a fetch is still
/// running). Each refresh takes a token; only the holder of the newest token
/// may publish, so a slow stale refresh never replaces a newer listing.
pub struct ListingSurface {
    store: Arc<dyn PostStore>,
    options: ListingConfig,
    latest: AtomicU64,
    current: Mutex<Option<ListingView>>,
}

impl ListingSurface {
    pub fn new(store: Arc<dyn PostStore>, options: ListingConfig) -> Self {
        Self {
            store,
            options,
            latest: AtomicU64::new(0),
            current: Mutex::new(None),
        }
    }

    /// Re-runs the whole pipeline for `sort`. Returns whether the result was
    /// published.
    pub async fn refresh(&self, sort: SortMode) -> bool {
        let token = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        let view = present(self.store.as_ref(), sort, &self.options).await;
        let mut current = self.current.lock().unwrap();
        if self.latest.load(Ordering::SeqCst) != token {
            debug!("discarding stale {sort} listing (request {token})");
            return false;
        }
        *current = Some(view);
        true
    }

    pub fn current(&self) -> Option<ListingView> {
        self.current.lock().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use async_trait::async_trait;

    use super::*;
    use crate::{
        post::Post,
        store::{FetchOutcome, testing::StubStore},
    };

    fn featured_post() -> Post {
        Post {
            id: Arc::from("f1"),
            date: Some(Arc::from("2025-09-01")),
            is_featured: Some(true),
            ..Default::default()
        }
    }

    /// First read is slow, every later read is immediate.
    struct SlowFirst {
        inner: StubStore,
        slow: StubStore,
        seen: AtomicU64,
    }

    #[async_trait]
    impl PostStore for SlowFirst {
        async fn fetch_all(&self) -> FetchOutcome<Vec<Post>> {
            if self.seen.fetch_add(1, Ordering::SeqCst) == 0 {
                self.slow.fetch_all().await
            } else {
                self.inner.fetch_all().await
            }
        }

        async fn fetch_recent(&self, limit: usize) -> FetchOutcome<Vec<Post>> {
            self.inner.fetch_recent(limit).await
        }

        async fn fetch_by_user(&self, user_id: &str) -> FetchOutcome<Vec<Post>> {
            self.inner.fetch_by_user(user_id).await
        }

        async fn fetch_one(&self, id: &str) -> FetchOutcome<Post> {
            self.inner.fetch_one(id).await
        }
    }

    #[tokio::test]
    async fn publishes_latest_refresh() {
        let surface = ListingSurface::new(
            Arc::new(StubStore::with_posts(vec![featured_post()])),
            ListingConfig::default(),
        );
        assert!(surface.current().is_none());
        assert!(surface.refresh(SortMode::Featured).await);
        let view = surface.current().unwrap();
        assert_eq!(view.sort, SortMode::Featured);
        assert!(!view.is_demo());
    }

    #[tokio::test]
    async fn stale_refresh_is_discarded() {
        let store = SlowFirst {
            inner: StubStore::with_posts(vec![featured_post()]),
            slow: StubStore::new(FetchOutcome::Empty).delayed(Duration::from_millis(200)),
            seen: AtomicU64::new(0),
        };
        let surface = Arc::new(ListingSurface::new(
            Arc::new(store),
            ListingConfig::default(),
        ));

        let stale = {
            let surface = surface.clone();
            tokio::spawn(async move { surface.refresh(SortMode::Latest).await })
        };
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(surface.refresh(SortMode::Featured).await);
        assert!(!stale.await.unwrap());

        let view = surface.current().unwrap();
        assert_eq!(view.sort, SortMode::Featured);
        assert!(!view.is_demo());
    }
}
