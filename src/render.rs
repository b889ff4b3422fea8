//! Pure projections from fetched mail data to displayable structure.
//! Nothing here owns state or talks to the network; the terminal shell
//! paints whatever these return.

use crate::domain::email::{Email, EmailId, Mailbox};

/// Action control attached to a listing row: inbox rows archive, archive
/// rows unarchive, sent rows carry no control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Archive,
    Unarchive,
}

impl RowAction {
    pub fn label(self) -> &'static str {
        match self {
            RowAction::Archive => "Archive",
            RowAction::Unarchive => "Unarchive",
        }
    }
}

/// One display unit of a mailbox listing. The subject doubles as the
/// activation target that opens the detail view for `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailRow {
    pub id: EmailId,
    pub recipients: String,
    pub subject: String,
    pub timestamp: String,
    pub action: Option<RowAction>,
}

/// Detail background: white for a snapshot fetched unread, gray once
/// read. The one stateful visual cue in the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailBackground {
    White,
    Gray,
}

/// Displayable form of a single opened email. `reply_to` binds the reply
/// action to the email's id; `body` is literal text, never reinterpreted
/// as markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailDetail {
    pub reply_to: EmailId,
    pub sender: String,
    pub recipients: String,
    pub subject: String,
    pub timestamp: String,
    pub body: String,
    pub background: DetailBackground,
}

/// Project a mailbox listing. Rows render uniformly regardless of read
/// state; only the detail view distinguishes read from unread.
pub fn mailbox_rows(mailbox: Mailbox, emails: &[Email]) -> Vec<EmailRow> {
    let action = match mailbox {
        Mailbox::Inbox => Some(RowAction::Archive),
        Mailbox::Archive => Some(RowAction::Unarchive),
        Mailbox::Sent => None,
    };
    emails
        .iter()
        .map(|email| EmailRow {
            id: email.id,
            recipients: email.recipients.clone(),
            subject: email.subject.clone(),
            timestamp: email.timestamp.clone(),
            action,
        })
        .collect()
}

/// Project an opened email. The background reflects the snapshot's read
/// flag as fetched, i.e. the pre-open state, captured before the
/// read-marking patch is issued.
pub fn email_detail(email: &Email) -> EmailDetail {
    EmailDetail {
        reply_to: email.id,
        sender: email.sender.clone(),
        recipients: email.recipients.clone(),
        subject: email.subject.clone(),
        timestamp: email.timestamp.clone(),
        body: email.body.clone(),
        background: if email.read {
            DetailBackground::Gray
        } else {
            DetailBackground::White
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::email;

    #[test]
    fn inbox_rows_carry_archive_control() {
        let rows = mailbox_rows(Mailbox::Inbox, &[email(1), email(2)]);
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.action == Some(RowAction::Archive)));
    }

    #[test]
    fn archive_rows_carry_unarchive_control() {
        let rows = mailbox_rows(Mailbox::Archive, &[email(1)]);
        assert_eq!(rows[0].action, Some(RowAction::Unarchive));
    }

    #[test]
    fn sent_rows_carry_no_control() {
        let rows = mailbox_rows(Mailbox::Sent, &[email(1)]);
        assert_eq!(rows[0].action, None);
    }

    #[test]
    fn rows_ignore_read_state() {
        let mut read = email(1);
        read.read = true;
        let unread = email(2);
        let rows = mailbox_rows(Mailbox::Inbox, &[read, unread]);
        // Same shape for both; nothing in a row depends on the flag.
        assert_eq!(rows[0].action, rows[1].action);
    }

    #[test]
    fn detail_background_tracks_fetched_read_flag() {
        let unread = email(1);
        assert_eq!(email_detail(&unread).background, DetailBackground::White);

        let mut read = email(2);
        read.read = true;
        assert_eq!(email_detail(&read).background, DetailBackground::Gray);
    }

    #[test]
    fn detail_body_is_kept_literal() {
        let mut e = email(1);
        e.body = "<b>not markup</b>\n\n*plain*".to_string();
        assert_eq!(email_detail(&e).body, "<b>not markup</b>\n\n*plain*");
    }
}
