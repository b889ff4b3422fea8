use thiserror::Error;

use crate::domain::email::EmailId;

/// Failure taxonomy for the remote mail operations. Every variant is
/// terminal for the user action that triggered it; nothing is retried.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-success status on a list, count or detail fetch.
    #[error("fetch failed with status {0}")]
    Fetch(u16),

    #[error("email {0} not found")]
    NotFound(EmailId),

    /// Rejected input: the local empty-recipient check, or a server-side
    /// 400 on send. Carries the message to show the user.
    #[error("{0}")]
    Validation(String),

    /// Send failure other than a reported validation error.
    #[error("send failed with status {0}")]
    Send(u16),

    /// Rejected read/archived patch.
    #[error("update failed with status {0}")]
    Update(u16),

    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
}
