use std::cell::RefCell;

use crate::api::{EmailPatch, MailApi};
use crate::domain::email::{Email, EmailId, Mailbox};
use crate::error::ApiError;

/// One recorded remote operation, in issue order.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List(Mailbox),
    Count,
    Get(EmailId),
    Update(EmailId, EmailPatch),
    Send {
        recipients: String,
        subject: String,
        body: String,
    },
}

/// In-memory stand-in for the remote store: serves canned emails and
/// records every operation so tests can assert on the exact traffic.
#[derive(Default)]
pub struct FakeApi {
    pub emails: Vec<Email>,
    pub count: u64,
    pub fail_list: bool,
    pub fail_count: bool,
    pub fail_get: bool,
    pub fail_update: bool,
    pub fail_send: bool,
    /// When set, send fails as a server-reported validation error.
    pub send_validation_error: Option<String>,
    pub calls: RefCell<Vec<Call>>,
}

impl FakeApi {
    pub fn with_emails(emails: Vec<Email>) -> Self {
        Self {
            count: emails.len() as u64,
            emails,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

impl MailApi for FakeApi {
    fn list_mailbox(&self, mailbox: Mailbox) -> Result<Vec<Email>, ApiError> {
        self.record(Call::List(mailbox));
        if self.fail_list {
            return Err(ApiError::Fetch(500));
        }
        Ok(self.emails.clone())
    }

    fn inbox_count(&self) -> Result<u64, ApiError> {
        self.record(Call::Count);
        if self.fail_count {
            return Err(ApiError::Fetch(500));
        }
        Ok(self.count)
    }

    fn get_email(&self, id: EmailId) -> Result<Email, ApiError> {
        self.record(Call::Get(id));
        if self.fail_get {
            return Err(ApiError::Fetch(500));
        }
        self.emails
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or(ApiError::NotFound(id))
    }

    fn update_email(&self, id: EmailId, patch: EmailPatch) -> Result<(), ApiError> {
        self.record(Call::Update(id, patch));
        if self.fail_update {
            return Err(ApiError::Update(500));
        }
        Ok(())
    }

    fn send_email(&self, recipients: &str, subject: &str, body: &str) -> Result<(), ApiError> {
        self.record(Call::Send {
            recipients: recipients.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });
        if let Some(message) = &self.send_validation_error {
            return Err(ApiError::Validation(message.clone()));
        }
        if self.fail_send {
            return Err(ApiError::Send(500));
        }
        Ok(())
    }
}

/// Canned email for tests; unread and unarchived unless edited.
pub fn email(id: EmailId) -> Email {
    Email {
        id,
        sender: format!("sender{id}@example.com"),
        recipients: "me@example.com".to_string(),
        subject: format!("Subject {id}"),
        body: format!("Body {id}"),
        timestamp: "Jan 1 2026, 12:00 AM".to_string(),
        read: false,
        archived: false,
    }
}
