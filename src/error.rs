use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlogErr {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Config file not valid:\n {0}")]
    Config(#[from] serde_yaml::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Template error:\n {0}")]
    Template(#[from] tera::Error),
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Url parse error: {0}")]
    Url(#[from] url::ParseError),
    #[error("Async runtime error: {0}")]
    Join(#[from] tokio::task::JoinError),
    #[error("{context}\n{source}")]
    Context {
        context: String,
        #[source]
        source: Box<BlogErr>,
    },
    #[error("{0}")]
    Message(String),
}

impl From<String> for BlogErr {
    fn from(value: String) -> Self {
        BlogErr::Message(value)
    }
}

impl From<&str> for BlogErr {
    fn from(value: &str) -> Self {
        BlogErr::Message(value.to_string())
    }
}

pub trait ContextExt<T> {
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T, BlogErr>;
}

impl<T, E: Into<BlogErr>> ContextExt<T> for Result<T, E> {
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T, BlogErr> {
        self.map_err(|err| BlogErr::Context {
            context: f(),
            source: Box::new(err.into()),
        })
    }
}
