//! Read-only client for the Firestore REST API.

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use serde_json::{Map, Value, json};
use tracing::{debug, info};
use url::Url;

use crate::{
    config::StoreConfig,
    error::{BlogErr, ContextExt},
    post::Post,
    req::get_client,
    store::{FetchOutcome, PostStore},
};

pub struct FirestoreStore {
    client: Client,
    /// `.../projects/{project}/databases/(default)/documents/`
    documents: Url,
    collection: Arc<str>,
    api_key: Option<Arc<str>>,
}

#[derive(Debug, Deserialize)]
struct Document {
    name: String,
    #[serde(default)]
    fields: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListDocumentsResponse {
    #[serde(default)]
    documents: Vec<Document>,
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RunQueryItem {
    document: Option<Document>,
}

impl Document {
    fn into_post(self) -> Result<Post, BlogErr> {
        let id = self
            .name
            .rsplit('/')
            .next()
            .filter(|id| !id.is_empty())
            .ok_or_else(|| format!("document name without id: {}", self.name))?
            .to_string();
        let mut fields = decode_fields(self.fields);
        fields.insert("id".into(), Value::String(id.clone()));
        serde_json::from_value(Value::Object(fields))
            .with_context(|| format!("decode document {id}"))
    }
}

/// Turns Firestore typed values (`{"stringValue": "a"}`) into plain JSON.
fn decode_value(value: Value) -> Value {
    let Value::Object(typed) = value else {
        return Value::Null;
    };
    let Some((kind, inner)) = typed.into_iter().next() else {
        return Value::Null;
    };
    match kind.as_str() {
        "integerValue" => inner
            .as_str()
            .and_then(|number| number.parse::<i64>().ok())
            .map(Value::from)
            .unwrap_or(inner),
        "arrayValue" => match inner {
            Value::Object(mut array) => match array.remove("values") {
                Some(Value::Array(values)) => {
                    Value::Array(values.into_iter().map(decode_value).collect())
                }
                _ => Value::Array(vec![]),
            },
            _ => Value::Array(vec![]),
        },
        "mapValue" => match inner {
            Value::Object(mut map) => match map.remove("fields") {
                Some(Value::Object(fields)) => Value::Object(decode_fields(fields)),
                _ => Value::Object(Map::new()),
            },
            _ => Value::Object(Map::new()),
        },
        "nullValue" => Value::Null,
        _ => inner,
    }
}

fn decode_fields(fields: Map<String, Value>) -> Map<String, Value> {
    fields
        .into_iter()
        .map(|(key, value)| (key, decode_value(value)))
        .collect()
}

async fn ensure_success(response: Response) -> Result<Response, BlogErr> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(format!("store responded with status {status}: {}", body.trim()).into())
}

impl FirestoreStore {
    pub fn new(config: &StoreConfig) -> Result<Self, BlogErr> {
        let mut base = config.base_url.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let documents = base.join(&format!(
            "projects/{}/databases/(default)/documents/",
            config.project_id
        ))?;
        Ok(Self {
            client: get_client(Duration::from_secs(config.timeout_secs))?,
            documents,
            collection: config.collection.clone(),
            api_key: config.api_key.clone(),
        })
    }

    fn with_key(&self, mut url: Url) -> Url {
        if let Some(key) = &self.api_key {
            url.query_pairs_mut().append_pair("key", key);
        }
        url
    }

    fn collection_url(&self) -> Result<Url, BlogErr> {
        Ok(self.with_key(self.documents.join(&self.collection)?))
    }

    fn document_url(&self, id: &str) -> Result<Url, BlogErr> {
        let mut url = self.documents.clone();
        url.path_segments_mut()
            .map_err(|_| BlogErr::from("store url cannot be a base"))?
            .pop_if_empty()
            .push(&self.collection)
            .push(id);
        Ok(self.with_key(url))
    }

    fn run_query_url(&self) -> Url {
        let mut url = self.documents.clone();
        let path = format!("{}:runQuery", self.documents.path().trim_end_matches('/'));
        url.set_path(&path);
        self.with_key(url)
    }

    async fn list_documents(&self) -> Result<Vec<Post>, BlogErr> {
        let mut posts = Vec::new();
        let mut page_token: Option<String> = None;
        loop {
            let mut url = self.collection_url()?;
            if let Some(token) = &page_token {
                url.query_pairs_mut().append_pair("pageToken", token);
            }
            debug!("GET {}", url);
            let response = ensure_success(self.client.get(url).send().await?).await?;
            let page: ListDocumentsResponse = response.json().await?;
            for document in page.documents {
                posts.push(document.into_post()?);
            }
            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }
        Ok(posts)
    }

    async fn run_query(&self, query: Value) -> Result<Vec<Post>, BlogErr> {
        let url = self.run_query_url();
        debug!("POST {} {}", url, query);
        let response = ensure_success(
            self.client
                .post(url)
                .json(&json!({ "structuredQuery": query }))
                .send()
                .await?,
        )
        .await?;
        let items: Vec<RunQueryItem> = response.json().await?;
        items
            .into_iter()
            .filter_map(|item| item.document)
            .map(Document::into_post)
            .collect()
    }

    async fn get_document(&self, id: &str) -> Result<Option<Post>, BlogErr> {
        let url = self.document_url(id)?;
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let document: Document = ensure_success(response).await?.json().await?;
        Ok(Some(document.into_post()?))
    }
}

#[async_trait]
impl PostStore for FirestoreStore {
    async fn fetch_all(&self) -> FetchOutcome<Vec<Post>> {
        match self.list_documents().await {
            Ok(posts) => {
                info!("fetched {} posts from {}", posts.len(), self.collection);
                FetchOutcome::from_posts(posts)
            }
            Err(err) => FetchOutcome::Failed(err.to_string()),
        }
    }

    async fn fetch_recent(&self, limit: usize) -> FetchOutcome<Vec<Post>> {
        let query = json!({
            "from": [{ "collectionId": self.collection.as_ref() }],
            "orderBy": [{ "field": { "fieldPath": "date" }, "direction": "DESCENDING" }],
            "limit": limit,
        });
        match self.run_query(query).await {
            Ok(posts) => FetchOutcome::from_posts(posts),
            Err(err) => FetchOutcome::Failed(err.to_string()),
        }
    }

    async fn fetch_by_user(&self, user_id: &str) -> FetchOutcome<Vec<Post>> {
        let query = json!({
            "from": [{ "collectionId": self.collection.as_ref() }],
            "where": {
                "fieldFilter": {
                    "field": { "fieldPath": "userId" },
                    "op": "EQUAL",
                    "value": { "stringValue": user_id },
                }
            },
        });
        match self.run_query(query).await {
            Ok(posts) => FetchOutcome::from_posts(posts),
            Err(err) => FetchOutcome::Failed(err.to_string()),
        }
    }

    async fn fetch_one(&self, id: &str) -> FetchOutcome<Post> {
        match self.get_document(id).await {
            Ok(Some(post)) => FetchOutcome::Ok(post),
            Ok(None) => FetchOutcome::Empty,
            Err(err) => FetchOutcome::Failed(err.to_string()),
        }
    }
}
