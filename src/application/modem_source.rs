// Source trait for raw modem_ctrl responses
use async_trait::async_trait;
use std::string::FromUtf8Error;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to start modem_ctrl: {0}")]
    Spawn(#[source] std::io::Error),
    #[error("modem_ctrl did not finish within {0:?}")]
    Timeout(Duration),
    #[error("modem_ctrl exited with code {code:?}: {stderr}")]
    ExitStatus { code: Option<i32>, stderr: String },
    #[error("modem_ctrl output is not UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
    #[error("modem_ctrl output is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[async_trait]
pub trait ModemInfoSource: Send + Sync {
    /// Run the `info` call once and return its parsed JSON output
    async fn call_info(&self) -> Result<serde_json::Value, SourceError>;
}
