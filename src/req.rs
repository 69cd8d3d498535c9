use std::time::Duration;

use crate::error::BlogErr;

pub fn get_client(timeout: Duration) -> Result<reqwest::Client, BlogErr> {
    Ok(reqwest::Client::builder()
        .user_agent(concat!("blogcraft/", env!("CARGO_PKG_VERSION")))
        .timeout(timeout)
        .build()?)
}
