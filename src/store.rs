use std::{fmt::Display, future::Future, sync::Arc, time::Duration};

use async_trait::async_trait;
use tracing::{info, warn};

use crate::{config::Config, error::BlogErr, firestore::FirestoreStore, post::Post};

/// Classified result of a read against the store.
///
/// `Empty` and `Unavailable` differ only for logging; every consumer treats
/// anything but `Ok` as "nothing to show".
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome<T> {
    Ok(T),
    Empty,
    Failed(String),
    Unavailable,
}

#[cfg(test)]
impl<T> FetchOutcome<T> {
    pub fn ok(self) -> Option<T> {
        match self {
            FetchOutcome::Ok(value) => Some(value),
            _ => None,
        }
    }
}

impl FetchOutcome<Vec<Post>> {
    /// A successful read with no documents is `Empty`, not `Ok(vec![])`.
    pub fn from_posts(posts: Vec<Post>) -> Self {
        if posts.is_empty() {
            FetchOutcome::Empty
        } else {
            FetchOutcome::Ok(posts)
        }
    }
}

impl<T> Display for FetchOutcome<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchOutcome::Ok(_) => write!(f, "ok"),
            FetchOutcome::Empty => write!(f, "empty"),
            FetchOutcome::Failed(reason) => write!(f, "failed: {reason}"),
            FetchOutcome::Unavailable => write!(f, "store unavailable"),
        }
    }
}

/// Read access to the posts collection.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Every post in the collection, in store order.
    async fn fetch_all(&self) -> FetchOutcome<Vec<Post>>;

    /// Newest posts first, at most `limit`, ordered by the store.
    async fn fetch_recent(&self, limit: usize) -> FetchOutcome<Vec<Post>>;

    /// Posts owned by `user_id`, in store order.
    async fn fetch_by_user(&self, user_id: &str) -> FetchOutcome<Vec<Post>>;

    /// A single post. A missing document is `Empty`.
    async fn fetch_one(&self, id: &str) -> FetchOutcome<Post>;
}

/// Store used when no backend is configured.
pub struct Offline;

#[async_trait]
impl PostStore for Offline {
    async fn fetch_all(&self) -> FetchOutcome<Vec<Post>> {
        FetchOutcome::Unavailable
    }

    async fn fetch_recent(&self, _limit: usize) -> FetchOutcome<Vec<Post>> {
        FetchOutcome::Unavailable
    }

    async fn fetch_by_user(&self, _user_id: &str) -> FetchOutcome<Vec<Post>> {
        FetchOutcome::Unavailable
    }

    async fn fetch_one(&self, _id: &str) -> FetchOutcome<Post> {
        FetchOutcome::Unavailable
    }
}

/// Wraps a store so that every read gives up after `timeout`.
pub struct Timed<S> {
    inner: S,
    timeout: Duration,
}

impl<S: PostStore> Timed<S> {
    pub fn new(inner: S, timeout: Duration) -> Self {
        Self { inner, timeout }
    }
}

#[async_trait]
impl<S: PostStore> PostStore for Timed<S> {
    async fn fetch_all(&self) -> FetchOutcome<Vec<Post>> {
        with_timeout(self.timeout, self.inner.fetch_all()).await
    }

    async fn fetch_recent(&self, limit: usize) -> FetchOutcome<Vec<Post>> {
        with_timeout(self.timeout, self.inner.fetch_recent(limit)).await
    }

    async fn fetch_by_user(&self, user_id: &str) -> FetchOutcome<Vec<Post>> {
        with_timeout(self.timeout, self.inner.fetch_by_user(user_id)).await
    }

    async fn fetch_one(&self, id: &str) -> FetchOutcome<Post> {
        with_timeout(self.timeout, self.inner.fetch_one(id)).await
    }
}

pub fn from_config(config: &Config) -> Result<Arc<dyn PostStore>, BlogErr> {
    match &config.store {
        Some(store) => {
            info!(
                "using document store {} (project {})",
                store.base_url, store.project_id
            );
            Ok(Arc::new(Timed::new(
                FirestoreStore::new(store)?,
                Duration::from_secs(store.timeout_secs),
            )))
        }
        None => {
            warn!("no store configured, every view will show demo content");
            Ok(Arc::new(Offline))
        }
    }
}

/// Runs a fetch under `timeout`; expiry is reported as `Failed`.
pub async fn with_timeout<T, Fut>(timeout: Duration, fetch: Fut) -> FetchOutcome<T>
where
    Fut: Future<Output = FetchOutcome<T>>,
{
    match tokio::time::timeout(timeout, fetch).await {
        Ok(outcome) => outcome,
        Err(_) => FetchOutcome::Failed(format!("fetch timed out after {timeout:?}")),
    }
}
