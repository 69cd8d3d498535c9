//! Per-user dashboard. View counts here are random placeholders regenerated on
//! every render; nothing in this module measures real traffic.

use std::{ops::RangeInclusive, sync::Arc};

use chrono::{Duration, NaiveDate};
use rand::Rng;
use serde::Serialize;
use tracing::{info, warn};

use crate::{
    listing::arrange,
    post::{Post, SortMode},
    store::{FetchOutcome, PostStore},
    view::{UNKNOWN_DATE, detail_link},
};

const SIMULATED_VIEWS: RangeInclusive<u32> = 1..=1000;
const SIMULATED_DAILY_VIEWS: RangeInclusive<u32> = 100..=599;
const TREND_DAYS: i64 = 7;
const TOP_POSTS: usize = 5;
const TOP_TITLE_LENGTH: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Performance {
    AboveAverage,
    Average,
    BelowAverage,
}

impl Performance {
    fn of(views: u32, average: u32) -> Self {
        match views.cmp(&average) {
            std::cmp::Ordering::Greater => Performance::AboveAverage,
            std::cmp::Ordering::Equal => Performance::Average,
            std::cmp::Ordering::Less => Performance::BelowAverage,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    pub id: Arc<str>,
    pub title: Arc<str>,
    pub author: Arc<str>,
    pub date: Arc<str>,
    pub link: String,
    pub simulated_views: u32,
    pub performance: Performance,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Point {
    pub label: String,
    pub simulated_views: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analytics {
    pub total_posts: usize,
    pub total_views: u64,
    pub average_views: u32,
    pub top_post: Arc<str>,
    pub trend: Vec<Point>,
    pub top_posts: Vec<Point>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DashboardPage {
    Ready { rows: Vec<Row>, analytics: Analytics },
    NoPosts,
    Unavailable,
    Error,
}

fn shorten(title: &str) -> String {
    if title.chars().count() > TOP_TITLE_LENGTH {
        let short: String = title.chars().take(TOP_TITLE_LENGTH).collect();
        format!("{short}...")
    } else {
        title.to_string()
    }
}

/// Builds rows and analytics for posts already arranged newest first.
/// `views` holds one simulated count per post.
fn build(posts: &[Post], views: &[u32], trend: Vec<Point>) -> DashboardPage {
    let total_views: u64 = views.iter().map(|v| u64::from(*v)).sum();
    let average_views = (total_views as f64 / posts.len() as f64).round() as u32;

    let rows: Vec<Row> = posts
        .iter()
        .zip(views)
        .map(|(post, views)| Row {
            id: post.id.clone(),
            title: Arc::from(post.title()),
            author: Arc::from(post.author()),
            date: post
                .date()
                .cloned()
                .unwrap_or_else(|| Arc::from(UNKNOWN_DATE)),
            link: detail_link(&post.id),
            simulated_views: *views,
            performance: Performance::of(*views, average_views),
        })
        .collect();

    // first of equally viewed posts wins
    let top_post = rows
        .iter()
        .fold(None::<&Row>, |top, row| match top {
            Some(top) if top.simulated_views >= row.simulated_views => Some(top),
            _ => Some(row),
        })
        .map(|row| row.title.clone())
        .unwrap_or_else(|| Arc::from("-"));

    let mut by_views: Vec<&Row> = rows.iter().collect();
    by_views.sort_by(|a, b| b.simulated_views.cmp(&a.simulated_views));
    let top_posts = by_views
        .into_iter()
        .take(TOP_POSTS)
        .map(|row| Point {
            label: shorten(&row.title),
            simulated_views: row.simulated_views,
        })
        .collect();

    let analytics = Analytics {
        total_posts: rows.len(),
        total_views,
        average_views,
        top_post,
        trend,
        top_posts,
    };
    DashboardPage::Ready { rows, analytics }
}

fn simulated_trend<R: Rng>(rng: &mut R, today: NaiveDate) -> Vec<Point> {
    (0..TREND_DAYS)
        .rev()
        .map(|days_ago| Point {
            label: (today - Duration::days(days_ago)).format("%a").to_string(),
            simulated_views: rng.gen_range(SIMULATED_DAILY_VIEWS),
        })
        .collect()
}

pub async fn present_dashboard(store: &dyn PostStore, user_id: &str) -> DashboardPage {
    let posts = match store.fetch_by_user(user_id).await {
        FetchOutcome::Ok(posts) => posts,
        FetchOutcome::Empty => {
            info!("dashboard: user {user_id} has no posts");
            return DashboardPage::NoPosts;
        }
        FetchOutcome::Unavailable => {
            warn!("dashboard: store unavailable");
            return DashboardPage::Unavailable;
        }
        FetchOutcome::Failed(reason) => {
            warn!("dashboard: loading posts of {user_id} failed: {reason}");
            return DashboardPage::Error;
        }
    };
    let arranged = arrange(&posts, SortMode::Latest);
    let mut rng = rand::thread_rng();
    let views: Vec<u32> = arranged
        .iter()
        .map(|_| rng.gen_range(SIMULATED_VIEWS))
        .collect();
    let trend = simulated_trend(&mut rng, chrono::Local::now().date_naive());
    info!("dashboard: {} posts for user {user_id}", arranged.len());
    build(&arranged, &views, trend)
}
