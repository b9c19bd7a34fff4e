use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard rejected the write: {0}")]
    Rejected(String),
    #[error("clipboard task aborted: {0}")]
    Task(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClipboardFacade: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}
