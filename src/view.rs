//! Turns store results into display-ready listings, substituting demo posts
//! whenever there is nothing real to show.

use std::sync::{Arc, LazyLock};

use html_escape::decode_html_entities;
use regex::Regex;
use serde::Serialize;
use tracing::{info, warn};
use url::form_urlencoded;

use crate::{
    config::ListingConfig,
    demo,
    listing::arrange,
    post::{Post, SortMode},
    store::{FetchOutcome, PostStore},
};

pub const UNKNOWN_DATE: &str = "Unknown date";
pub const NO_CONTENT: &str = "No content available";
pub const ELLIPSIS: &str = "...";

static MARKUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("<[^>]*>").expect("markup pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Live,
    Demo,
}

/// Summary of one post as shown in a listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    pub id: Arc<str>,
    pub title: Arc<str>,
    pub preview: String,
    pub author: Arc<str>,
    pub date: Arc<str>,
    pub image: Arc<str>,
    pub tags: Vec<Arc<str>>,
    /// Detail page link, absent for demo cards.
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingView {
    pub mode: ViewMode,
    pub sort: SortMode,
    pub cards: Vec<Card>,
}

impl ListingView {
    pub fn is_demo(&self) -> bool {
        self.mode == ViewMode::Demo
    }

    fn demo(sort: SortMode, posts: &[Post], options: &ListingConfig) -> Self {
        Self {
            mode: ViewMode::Demo,
            sort,
            cards: posts
                .iter()
                .map(|post| summarize(post, ViewMode::Demo, options))
                .collect(),
        }
    }

    fn live(sort: SortMode, posts: &[Post], options: &ListingConfig) -> Self {
        Self {
            mode: ViewMode::Live,
            sort,
            cards: posts
                .iter()
                .map(|post| summarize(post, ViewMode::Live, options))
                .collect(),
        }
    }
}

fn strip_markup(html: &str) -> String {
    MARKUP.replace_all(html, "").into_owned()
}

/// Plain text of an HTML fragment: tags dropped, entities decoded.
pub fn plain_text(html: &str) -> String {
    decode_html_entities(&strip_markup(html)).into_owned()
}

/// First `length` characters of the text content followed by an ellipsis.
pub fn preview(content: Option<&str>, length: usize) -> String {
    match content.filter(|content| !content.is_empty()) {
        Some(content) => {
            let text: String = plain_text(content).chars().take(length).collect();
            format!("{text}{ELLIPSIS}")
        }
        None => format!("{NO_CONTENT}{ELLIPSIS}"),
    }
}

pub fn detail_link(id: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("id", id)
        .finish();
    format!("blog-detail.html?{query}")
}

pub fn summarize(post: &Post, mode: ViewMode, options: &ListingConfig) -> Card {
    Card {
        id: post.id.clone(),
        title: Arc::from(post.title()),
        preview: preview(post.content(), options.preview_length),
        author: Arc::from(post.author()),
        date: post
            .date()
            .cloned()
            .unwrap_or_else(|| Arc::from(UNKNOWN_DATE)),
        image: post
            .image_url()
            .cloned()
            .unwrap_or_else(|| options.placeholder_image.clone()),
        tags: post
            .tags
            .iter()
            .flatten()
            .take(options.max_tags)
            .cloned()
            .collect(),
        link: match mode {
            ViewMode::Live => Some(detail_link(&post.id)),
            ViewMode::Demo => None,
        },
    }
}

fn log_fallback<T>(view: &str, outcome: &FetchOutcome<T>) {
    match outcome {
        FetchOutcome::Failed(reason) => {
            warn!("{view}: loading posts failed, showing demo posts: {reason}")
        }
        other => info!("{view}: {other}, showing demo posts"),
    }
}

/// Fetches every post, arranges it for `sort` and falls back to the demo set
/// when the store has nothing usable.
pub async fn present(store: &dyn PostStore, sort: SortMode, options: &ListingConfig) -> ListingView {
    let posts = match store.fetch_all().await {
        FetchOutcome::Ok(posts) => posts,
        outcome => {
            log_fallback("listing", &outcome);
            return ListingView::demo(sort, demo::listing_posts(), options);
        }
    };
    let arranged = arrange(&posts, sort);
    if arranged.is_empty() {
        info!("listing: no posts left for {sort}, showing demo posts");
        return ListingView::demo(sort, demo::listing_posts(), options);
    }
    info!("listing: {} posts for {sort}", arranged.len());
    ListingView::live(sort, &arranged, options)
}

/// Home page variant: the store orders and limits, the short demo set is the
/// fallback.
pub async fn present_home(store: &dyn PostStore, options: &ListingConfig) -> ListingView {
    match store.fetch_recent(options.home_limit).await {
        FetchOutcome::Ok(posts) => {
            let mut arranged = arrange(&posts, SortMode::Latest);
            arranged.truncate(options.home_limit);
            info!("home: {} recent posts", arranged.len());
            ListingView::live(SortMode::Latest, &arranged, options)
        }
        outcome => {
            log_fallback("home", &outcome);
            ListingView::demo(SortMode::Latest, demo::home_posts(), options)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::store::testing::StubStore;

    fn post(id: &str, date: &str, featured: Option<bool>) -> Post {
        Post {
            id: Arc::from(id),
            title: Some(Arc::from(format!("Post {id}"))),
            content: Some(Arc::from("<p>Body</p>")),
            date: Some(Arc::from(date)),
            is_featured: featured,
            ..Default::default()
        }
    }

    fn demo_cards(options: &ListingConfig) -> Vec<Card> {
        demo::listing_posts()
            .iter()
            .map(|post| summarize(post, ViewMode::Demo, options))
            .collect()
    }

    #[test]
    fn preview_truncates_stripped_text() {
        let content = format!("<p>{}</p>", "a".repeat(150));
        assert_eq!(
            preview(Some(&content), 100),
            format!("{}...", "a".repeat(100))
        );
        assert_eq!(preview(Some("<b>short</b>"), 100), "short...");
        assert_eq!(preview(None, 100), "No content available...");
    }

    #[test]
    fn preview_decodes_entities_before_truncating() {
        assert_eq!(preview(Some("<p>Tom &amp; Jerry</p>"), 100), "Tom & Jerry...");
        assert_eq!(preview(Some("a&amp;b"), 2), "a&...");
        assert_eq!(preview(Some(""), 100), "No content available...");
    }

    #[test]
    fn blank_fields_get_placeholders() {
        let blank = Post {
            id: Arc::from("b1"),
            title: Some(Arc::from("")),
            author: Some(Arc::from("")),
            content: Some(Arc::from("")),
            date: Some(Arc::from("")),
            ..Default::default()
        };
        let card = summarize(&blank, ViewMode::Live, &ListingConfig::default());
        assert_eq!(card.title.as_ref(), "Untitled");
        assert_eq!(card.author.as_ref(), "Unknown author");
        assert_eq!(card.preview, "No content available...");
        assert_eq!(card.date.as_ref(), UNKNOWN_DATE);
    }

    #[test]
    fn preview_counts_characters() {
        assert_eq!(preview(Some("<i>héllo wörld</i>"), 7), "héllo w...");
    }

    #[test]
    fn summarize_fills_placeholders() {
        let options = ListingConfig {
            max_tags: 2,
            ..Default::default()
        };
        let bare = Post {
            id: Arc::from("x1"),
            tags: Some(vec![Arc::from("a"), Arc::from("b"), Arc::from("c")]),
            image_url: Some(Arc::from("")),
            ..Default::default()
        };
        let card = summarize(&bare, ViewMode::Live, &options);
        assert_eq!(card.title.as_ref(), "Untitled");
        assert_eq!(card.author.as_ref(), "Unknown author");
        assert_eq!(card.date.as_ref(), UNKNOWN_DATE);
        assert_eq!(card.image, options.placeholder_image);
        assert_eq!(card.tags, vec![Arc::<str>::from("a"), Arc::from("b")]);
        assert_eq!(card.link.as_deref(), Some("blog-detail.html?id=x1"));

        assert!(summarize(&bare, ViewMode::Demo, &options).link.is_none());
        let untagged = Post::default();
        assert!(summarize(&untagged, ViewMode::Live, &options).tags.is_empty());
    }

    #[test]
    fn detail_link_is_query_encoded() {
        assert_eq!(detail_link("a b&c"), "blog-detail.html?id=a+b%26c");
    }

    #[tokio::test]
    async fn live_listing_is_sorted() {
        let options = ListingConfig::default();
        let store = StubStore::with_posts(vec![
            post("a", "2025-09-01", None),
            post("b", "2025-09-10", None),
            post("c", "2025-08-15", None),
        ]);
        let view = present(&store, SortMode::Latest, &options).await;
        assert_eq!(view.mode, ViewMode::Live);
        let dates: Vec<&str> = view.cards.iter().map(|c| c.date.as_ref()).collect();
        assert_eq!(dates, vec!["2025-09-10", "2025-09-01", "2025-08-15"]);
        assert!(view.cards.iter().all(|c| c.link.is_some()));
    }

    #[tokio::test]
    async fn unusable_outcomes_fall_back_for_every_sort() {
        let options = ListingConfig::default();
        for outcome in [
            FetchOutcome::Unavailable,
            FetchOutcome::Empty,
            FetchOutcome::Failed("boom".into()),
        ] {
            let store = StubStore::new(outcome);
            for sort in SortMode::ALL {
                let view = present(&store, sort, &options).await;
                assert!(view.is_demo());
                assert_eq!(view.sort, sort);
                assert_eq!(view.cards, demo_cards(&options));
            }
        }
    }

    #[tokio::test]
    async fn featured_without_featured_posts_falls_back() {
        let options = ListingConfig::default();
        let store = StubStore::with_posts(vec![
            post("a", "2025-09-01", Some(false)),
            post("b", "2025-09-02", None),
        ]);
        let view = present(&store, SortMode::Featured, &options).await;
        assert!(view.is_demo());
        assert_eq!(view.cards, demo_cards(&options));

        let latest = present(&store, SortMode::Latest, &options).await;
        assert!(!latest.is_demo());
        assert_eq!(latest.cards.len(), 2);
    }

    #[tokio::test]
    async fn every_presentation_refetches() {
        let options = ListingConfig::default();
        let store = StubStore::with_posts(vec![post("a", "2025-09-01", Some(true))]);
        present(&store, SortMode::Latest, &options).await;
        present(&store, SortMode::Featured, &options).await;
        assert_eq!(store.calls(), 2);
    }

    #[tokio::test]
    async fn home_uses_recent_posts_or_short_demo_set() {
        let options = ListingConfig {
            home_limit: 2,
            ..Default::default()
        };
        let store = StubStore::with_posts(vec![
            post("a", "2025-09-01", None),
            post("b", "2025-09-10", None),
            post("c", "2025-08-15", None),
        ]);
        let view = present_home(&store, &options).await;
        assert_eq!(view.mode, ViewMode::Live);
        let ids: Vec<&str> = view.cards.iter().map(|c| c.id.as_ref()).collect();
        assert_eq!(ids, vec!["b", "a"]);

        let offline = StubStore::new(FetchOutcome::Unavailable);
        let view = present_home(&offline, &options).await;
        assert!(view.is_demo());
        let ids: Vec<&str> = view.cards.iter().map(|c| c.id.as_ref()).collect();
        assert_eq!(ids, vec!["demo1", "demo2", "demo3"]);
    }
}
