use log::{error, warn};

use crate::api::{EmailPatch, MailApi};
use crate::compose::ComposeForm;
use crate::domain::email::{Email, EmailId, Mailbox};

/// The single active view. Exactly one is live at a time; a listing and
/// the compose form are never both visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Mailbox(Mailbox),
    Compose,
    /// Carries the snapshot fetched on entry. It goes stale the instant
    /// the server record changes; nothing here refreshes it.
    Detail(Email),
}

/// A user action, as delivered by the presentation shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Nav: inbox, sent or archived.
    SelectMailbox(Mailbox),
    /// Nav: compose a fresh message.
    SelectCompose,
    /// Subject activation on a listing row.
    OpenEmail(EmailId),
    /// Archive control on an inbox row.
    Archive(EmailId),
    /// Unarchive control on an archive row.
    Unarchive(EmailId),
    /// Reply action in the detail view.
    Reply,
    /// Compose form submission.
    Submit,
}

/// Owns the page's one mutable view state and drives every transition.
/// Each remote call completes before the next event is processed, so a
/// completion can never land on a view that is no longer active.
pub struct Controller {
    view: View,
    /// Listing backing the active mailbox view. Replaced wholesale on
    /// every mailbox entry; never appended to.
    emails: Vec<Email>,
    /// Known only while in Inbox; hidden everywhere else.
    inbox_count: Option<u64>,
    compose: ComposeForm,
    /// Last submit failure, shown until the next attempt or navigation.
    compose_error: Option<String>,
}

impl Controller {
    pub fn new() -> Self {
        Self {
            view: View::Mailbox(Mailbox::Inbox),
            emails: Vec::new(),
            inbox_count: None,
            compose: ComposeForm::default(),
            compose_error: None,
        }
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn emails(&self) -> &[Email] {
        &self.emails
    }

    pub fn inbox_count(&self) -> Option<u64> {
        self.inbox_count
    }

    pub fn compose(&self) -> &ComposeForm {
        &self.compose
    }

    /// The shell edits the draft fields through this as the user types.
    pub fn compose_mut(&mut self) -> &mut ComposeForm {
        &mut self.compose
    }

    pub fn compose_error(&self) -> Option<&str> {
        self.compose_error.as_deref()
    }

    /// Dispatch one user action, issuing whatever remote calls the
    /// transition needs. Every failure is terminal for this action: the
    /// user has to trigger it again. Fetch failures are logged and leave
    /// an empty or stale view; submit failures are surfaced on the form.
    pub fn handle(&mut self, event: Event, api: &dyn MailApi) {
        match event {
            Event::SelectMailbox(mailbox) => self.enter_mailbox(mailbox, api),
            Event::SelectCompose => {
                self.compose.clear();
                self.compose_error = None;
                self.inbox_count = None;
                self.view = View::Compose;
            }
            Event::OpenEmail(id) => self.open_email(id, api),
            Event::Archive(id) => self.set_archived(id, true, api),
            Event::Unarchive(id) => self.set_archived(id, false, api),
            Event::Reply => self.reply(api),
            Event::Submit => self.submit(api),
        }
    }

    /// Enter a mailbox view: discard the draft, replace the listing
    /// wholesale and, for the inbox only, refresh the count indicator.
    fn enter_mailbox(&mut self, mailbox: Mailbox, api: &dyn MailApi) {
        self.compose.clear();
        self.compose_error = None;
        self.view = View::Mailbox(mailbox);
        self.emails.clear();

        match api.list_mailbox(mailbox) {
            Ok(emails) => self.emails = emails,
            Err(e) => error!("failed to fetch {mailbox} listing: {e}"),
        }

        self.inbox_count = if mailbox == Mailbox::Inbox {
            match api.inbox_count() {
                Ok(count) => Some(count),
                Err(e) => {
                    error!("failed to fetch inbox count: {e}");
                    None
                }
            }
        } else {
            None
        };
    }

    /// Open the detail view for `id`. The snapshot keeps the read flag it
    /// was fetched with (the detail background reflects it); an unread
    /// email is then marked read fire-and-forget, failure logged only.
    fn open_email(&mut self, id: EmailId, api: &dyn MailApi) {
        let email = match api.get_email(id) {
            Ok(email) => email,
            Err(e) => {
                error!("failed to fetch email {id}: {e}");
                return;
            }
        };

        if !email.read {
            if let Err(e) = api.update_email(id, EmailPatch::read(true)) {
                warn!("failed to mark email {id} read: {e}");
            }
        }

        self.inbox_count = None;
        self.view = View::Detail(email);
    }

    /// Flip the archived flag; on success the inbox is re-entered. A
    /// rejected patch leaves the pre-toggle listing on screen.
    fn set_archived(&mut self, id: EmailId, archived: bool, api: &dyn MailApi) {
        match api.update_email(id, EmailPatch::archived(archived)) {
            Ok(()) => self.enter_mailbox(Mailbox::Inbox, api),
            Err(e) => error!("failed to set archived={archived} on email {id}: {e}"),
        }
    }

    /// Re-fetch a fresh snapshot of the opened email and pre-fill the
    /// compose form from it, on top of whatever the body already holds.
    fn reply(&mut self, api: &dyn MailApi) {
        let View::Detail(opened) = &self.view else {
            return;
        };
        let id = opened.id;

        match api.get_email(id) {
            Ok(email) => {
                self.compose.prefill_reply(&email);
                self.compose_error = None;
                self.inbox_count = None;
                self.view = View::Compose;
            }
            Err(e) => error!("failed to fetch email {id} for reply: {e}"),
        }
    }

    /// Submit the draft. Success lands in Sent (reloading it discards the
    /// draft); failure leaves the form untouched for correction.
    fn submit(&mut self, api: &dyn MailApi) {
        match self.compose.submit(api) {
            Ok(()) => self.enter_mailbox(Mailbox::Sent, api),
            Err(e) => {
                error!("failed to send email: {e}");
                self.compose_error = Some(e.to_string());
            }
        }
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}
