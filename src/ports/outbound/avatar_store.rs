use async_trait::async_trait;
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, derive(Clone))]
#[derive(Debug, Error)]
#[error("Error retrieving avatar: {0}")]
pub struct AvatarRetrievalError(String);

impl AvatarRetrievalError {
    #[must_use]
    pub fn new(msg: String) -> Self {
        Self(msg)
    }
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait AvatarStore {
    fn create() -> Self;
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, AvatarRetrievalError>;
}
