use std::{fs::File, path::PathBuf, sync::Arc};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{BlogErr, ContextExt};

pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "https://images.unsplash.com/photo-1499750310107-5fef28a66643?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1470&q=80";

/// Connection settings for the document store holding the posts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Root of the REST API, e.g. `https://firestore.googleapis.com/v1/`.
    pub base_url: Url,
    pub project_id: Arc<str>,
    #[serde(default = "default_collection")]
    pub collection: Arc<str>,
    #[serde(default)]
    pub api_key: Option<Arc<str>>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingConfig {
    #[serde(default = "default_preview_length")]
    pub preview_length: usize,
    #[serde(default = "default_max_tags")]
    pub max_tags: usize,
    #[serde(default = "default_home_limit")]
    pub home_limit: usize,
    #[serde(default = "default_placeholder_image")]
    pub placeholder_image: Arc<str>,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            preview_length: default_preview_length(),
            max_tags: default_max_tags(),
            home_limit: default_home_limit(),
            placeholder_image: default_placeholder_image(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub dist_path: PathBuf,
    pub template: PathBuf,
    pub title: Arc<str>,
    pub description: Arc<str>,
    /// Without a store every view falls back to demo content.
    #[serde(default)]
    pub store: Option<StoreConfig>,
    #[serde(default)]
    pub listing: ListingConfig,
}

impl TryFrom<PathBuf> for Config {
    type Error = BlogErr;
    fn try_from(value: PathBuf) -> Result<Self, BlogErr> {
        let config_path = value.join("config.yaml");
        let f = File::open(&config_path).with_context(|| format!("config file: {config_path:?}"))?;
        Ok(serde_yaml::from_reader(f)?)
    }
}

fn default_collection() -> Arc<str> {
    Arc::from("blogs")
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_preview_length() -> usize {
    100
}

fn default_max_tags() -> usize {
    5
}

fn default_home_limit() -> usize {
    6
}

fn default_placeholder_image() -> Arc<str> {
    Arc::from(DEFAULT_PLACEHOLDER_IMAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_gets_listing_defaults() {
        let config: Config = serde_yaml::from_str(
            "dist_path: dist\ntemplate: templates\ntitle: BlogCraft\ndescription: Stories\n",
        )
        .unwrap();
        assert!(config.store.is_none());
        assert_eq!(config.listing.preview_length, 100);
        assert_eq!(config.listing.max_tags, 5);
        assert_eq!(config.listing.home_limit, 6);
        assert_eq!(
            config.listing.placeholder_image.as_ref(),
            DEFAULT_PLACEHOLDER_IMAGE
        );
    }

    #[test]
    fn store_section() {
        let config: Config = serde_yaml::from_str(
            r#"
dist_path: dist
template: templates
title: BlogCraft
description: Stories
store:
  base_url: https://firestore.googleapis.com/v1/
  project_id: blogcraft-demo
  timeout_secs: 3
"#,
        )
        .unwrap();
        let store = config.store.unwrap();
        assert_eq!(store.project_id.as_ref(), "blogcraft-demo");
        assert_eq!(store.collection.as_ref(), "blogs");
        assert_eq!(store.timeout_secs, 3);
        assert!(store.api_key.is_none());
    }

    #[test]
    fn missing_config_file_has_context() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::try_from(dir.path().to_path_buf()).unwrap_err();
        assert!(err.to_string().starts_with("config file:"));
    }
}
