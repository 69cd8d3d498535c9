use std::{fmt::Display, sync::Arc};

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const UNTITLED: &str = "Untitled";
pub const UNKNOWN_AUTHOR: &str = "Unknown author";

/// A blog entry as stored in the document store.
///
/// Every field except `id` is optional because documents are written by other
/// clients and nothing validates them. Values of an unexpected type are
/// treated as absent instead of failing the whole fetch.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Post {
    #[serde(default)]
    pub id: Arc<str>,
    #[serde(default, deserialize_with = "lenient_str")]
    pub title: Option<Arc<str>>,
    #[serde(default, deserialize_with = "lenient_str")]
    pub author: Option<Arc<str>>,
    #[serde(default, deserialize_with = "lenient_str")]
    pub content: Option<Arc<str>>,
    #[serde(default, deserialize_with = "lenient_str")]
    pub date: Option<Arc<str>>,
    #[serde(rename = "imageURL", default, deserialize_with = "lenient_str")]
    pub image_url: Option<Arc<str>>,
    #[serde(default, deserialize_with = "lenient_tags")]
    pub tags: Option<Vec<Arc<str>>>,
    #[serde(rename = "isFeatured", default, deserialize_with = "lenient_bool")]
    pub is_featured: Option<bool>,
    #[serde(rename = "userId", default, deserialize_with = "lenient_str")]
    pub user_id: Option<Arc<str>>,
}

/// Blank strings count as absent, the same as a missing field.
fn non_empty(value: &Option<Arc<str>>) -> Option<&Arc<str>> {
    value.as_ref().filter(|value| !value.trim().is_empty())
}

impl Post {
    pub fn title(&self) -> &str {
        non_empty(&self.title).map_or(UNTITLED, |title| &**title)
    }

    pub fn author(&self) -> &str {
        non_empty(&self.author).map_or(UNKNOWN_AUTHOR, |author| &**author)
    }

    pub fn content(&self) -> Option<&str> {
        non_empty(&self.content).map(|content| &**content)
    }

    pub fn date(&self) -> Option<&Arc<str>> {
        non_empty(&self.date)
    }

    pub fn image_url(&self) -> Option<&Arc<str>> {
        non_empty(&self.image_url)
    }

    /// Only an explicit `true` marks a post as featured.
    pub fn is_featured(&self) -> bool {
        self.is_featured == Some(true)
    }

    pub fn published(&self) -> Option<DateTime<Utc>> {
        self.date().and_then(|date| parse_date(date))
    }
}

/// Parses the loosely formatted `date` field of a post.
///
/// Accepts RFC 3339, bare `YYYY-MM-DD` (midnight UTC), `YYYY-MM-DDTHH:MM[:SS]`
/// without offset (UTC) and RFC 2822.
pub fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(date) = DateTime::parse_from_rfc3339(value) {
        return Some(date.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|date| date.and_utc());
    }
    for format in [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
    ] {
        if let Ok(date) = NaiveDateTime::parse_from_str(value, format) {
            return Some(date.and_utc());
        }
    }
    DateTime::parse_from_rfc2822(value)
        .ok()
        .map(|date| date.with_timezone(&Utc))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    #[default]
    Latest,
    Popular,
    Featured,
}

impl SortMode {
    pub const ALL: [SortMode; 3] = [SortMode::Latest, SortMode::Popular, SortMode::Featured];

    pub fn label(&self) -> &'static str {
        match self {
            SortMode::Latest => "Latest",
            SortMode::Popular => "Popular",
            SortMode::Featured => "Featured",
        }
    }

    /// File name of the listing page for this mode in a built site.
    pub fn page(&self) -> &'static str {
        match self {
            SortMode::Latest => "blogs.html",
            SortMode::Popular => "blogs-popular.html",
            SortMode::Featured => "blogs-featured.html",
        }
    }
}

impl Display for SortMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

fn lenient_str<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Arc<str>>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(value) => Some(Arc::from(value)),
        Value::Number(value) => Some(Arc::from(value.to_string())),
        Value::Bool(value) => Some(Arc::from(value.to_string())),
        _ => None,
    })
}

fn lenient_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
    Ok(Value::deserialize(deserializer)?.as_bool())
}

fn lenient_tags<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Vec<Arc<str>>>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(values) => Some(
            values
                .into_iter()
                .filter_map(|value| match value {
                    Value::String(tag) => Some(Arc::from(tag)),
                    _ => None,
                })
                .collect(),
        ),
        _ => None,
    })
}
