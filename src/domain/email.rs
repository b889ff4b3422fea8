use std::fmt;

use serde::Deserialize;

pub type EmailId = u32;

/// An email as returned by the server. The server owns the canonical
/// record; anything held here is a per-view snapshot that goes stale the
/// moment the server record changes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Email {
    pub id: EmailId,
    pub sender: String,
    /// Comma-joined recipient addresses.
    pub recipients: String,
    pub subject: String,
    pub body: String,
    /// Server-formatted, display only.
    pub timestamp: String,
    pub read: bool,
    pub archived: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mailbox {
    Inbox,
    Sent,
    Archive,
}

impl Mailbox {
    /// Wire name used in the `/emails/{mailbox}` route.
    pub fn as_str(self) -> &'static str {
        match self {
            Mailbox::Inbox => "inbox",
            Mailbox::Sent => "sent",
            Mailbox::Archive => "archive",
        }
    }

    /// Capitalized heading for the listing view.
    pub fn title(self) -> &'static str {
        match self {
            Mailbox::Inbox => "Inbox",
            Mailbox::Sent => "Sent",
            Mailbox::Archive => "Archive",
        }
    }
}

impl fmt::Display for Mailbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
