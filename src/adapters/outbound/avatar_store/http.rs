use crate::ports::outbound::avatar_store::{AvatarRetrievalError, AvatarStore};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use std::time::Duration;
use tokio::time::Instant;

pub struct Http {
    client: reqwest::Client,
}

#[async_trait]
impl AvatarStore for Http {
    fn create() -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("Rust Discord Colour Bot"));
        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::new(30, 0))
            .build()
            .expect("Failed HTTP Client build");

        Self { client }
    }

    async fn fetch(&self, url: &str) -> Result<Vec<u8>, AvatarRetrievalError> {
        let start = Instant::now();
        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|why| AvatarRetrievalError::new(format!("Request for {url} failed - {why}")))?;

        let bytes = response.bytes().await.map_err(|why| {
            AvatarRetrievalError::new(format!("Could not read body of {url} - {why}"))
        })?;

        log::debug!(
            "Fetched {} avatar bytes in {}ms",
            bytes.len(),
            start.elapsed().as_millis()
        );
        Ok(bytes.to_vec())
    }
}
