use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::{
    config::ListingConfig,
    demo,
    post::Post,
    store::{FetchOutcome, PostStore},
    view::{UNKNOWN_DATE, plain_text},
};

const WORDS_PER_MINUTE: usize = 200;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailView {
    pub id: Arc<str>,
    pub title: Arc<str>,
    pub author: Arc<str>,
    pub date: Arc<str>,
    pub image: Arc<str>,
    /// Sanitized HTML, safe to embed as is.
    pub content: String,
    pub tags: Vec<Arc<str>>,
    pub reading_minutes: usize,
    pub is_demo: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DetailPage {
    Found(DetailView),
    NotFound,
    Error,
}

pub fn reading_minutes(text: &str) -> usize {
    text.split_whitespace().count().div_ceil(WORDS_PER_MINUTE)
}

impl DetailView {
    fn new(post: &Post, options: &ListingConfig, is_demo: bool) -> Self {
        let content = post.content().unwrap_or_default();
        Self {
            id: post.id.clone(),
            title: Arc::from(post.title()),
            author: Arc::from(post.author()),
            date: post
                .date()
                .cloned()
                .unwrap_or_else(|| Arc::from(UNKNOWN_DATE)),
            image: post
                .image_url()
                .cloned()
                .unwrap_or_else(|| options.placeholder_image.clone()),
            content: ammonia::clean(content),
            tags: post.tags.clone().unwrap_or_default(),
            reading_minutes: reading_minutes(&plain_text(content)),
            is_demo,
        }
    }
}

/// Resolves the post behind a `blog-detail.html?id=...` link.
pub async fn present_detail(store: &dyn PostStore, id: &str, options: &ListingConfig) -> DetailPage {
    if let Some(post) = demo::find(id) {
        return DetailPage::Found(DetailView::new(post, options, true));
    }
    match store.fetch_one(id).await {
        FetchOutcome::Ok(post) => DetailPage::Found(DetailView::new(&post, options, false)),
        FetchOutcome::Empty => {
            info!("post {id} does not exist");
            DetailPage::NotFound
        }
        FetchOutcome::Failed(reason) => {
            warn!("loading post {id} failed: {reason}");
            DetailPage::Error
        }
        FetchOutcome::Unavailable => {
            warn!("loading post {id} failed: store unavailable");
            DetailPage::Error
        }
    }
}
