pub mod http;

#[cfg(test)]
pub mod fake;

use serde::Serialize;

use crate::domain::email::{Email, EmailId, Mailbox};
use crate::error::ApiError;

/// Partial body for `PUT /emails/{id}`. Absent fields are omitted from
/// the JSON so the server only touches the flags the patch names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EmailPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
}

impl EmailPatch {
    pub fn read(value: bool) -> Self {
        Self {
            read: Some(value),
            ..Self::default()
        }
    }

    pub fn archived(value: bool) -> Self {
        Self {
            archived: Some(value),
            ..Self::default()
        }
    }
}

/// The five remote operations of the webmail server.
pub trait MailApi {
    /// Ordered listing of one mailbox, server order (newest first).
    fn list_mailbox(&self, mailbox: Mailbox) -> Result<Vec<Email>, ApiError>;

    fn inbox_count(&self) -> Result<u64, ApiError>;

    fn get_email(&self, id: EmailId) -> Result<Email, ApiError>;

    fn update_email(&self, id: EmailId, patch: EmailPatch) -> Result<(), ApiError>;

    fn send_email(&self, recipients: &str, subject: &str, body: &str) -> Result<(), ApiError>;
}
