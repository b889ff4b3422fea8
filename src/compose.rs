use crate::api::MailApi;
use crate::domain::email::Email;
use crate::error::ApiError;

/// Delimiter inserted between an existing draft body and a freshly quoted
/// original when replying on top of prior content.
const REPLY_SEPARATOR: &str = "\n\n---\n\n";

/// The three free-text compose fields. Created empty on every
/// mailbox-to-compose transition, populated by [`ComposeForm::prefill_reply`],
/// and discarded on navigation away or successful send.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComposeForm {
    pub recipients: String,
    pub subject: String,
    pub body: String,
}

impl ComposeForm {
    pub fn clear(&mut self) {
        self.recipients.clear();
        self.subject.clear();
        self.body.clear();
    }

    /// Pre-fill the form for a reply to `email`. The subject prefix is
    /// applied unconditionally, so replying to a reply yields "Re: Re: ".
    /// Text already in the body is kept above the quoted original.
    pub fn prefill_reply(&mut self, email: &Email) {
        let quoted = format!(
            "On {} {} wrote:\n{}",
            email.timestamp, email.sender, email.body
        );
        self.recipients = email.sender.clone();
        self.subject = format!("Re: {}", email.subject);
        self.body = if self.body.is_empty() {
            quoted
        } else {
            format!("{}\n{REPLY_SEPARATOR}{quoted}", self.body)
        };
    }

    /// Validate and send. The empty-recipient check fails locally, before
    /// any network call is issued.
    pub fn submit(&self, api: &dyn MailApi) -> Result<(), ApiError> {
        if self.recipients.is_empty() {
            return Err(ApiError::Validation(
                "At least one recipient is required.".to_string(),
            ));
        }
        api.send_email(&self.recipients, &self.subject, &self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::{Call, FakeApi, email};

    fn original() -> Email {
        Email {
            sender: "a@x.com".to_string(),
            subject: "Hi".to_string(),
            timestamp: "T".to_string(),
            body: "B".to_string(),
            ..email(1)
        }
    }

    #[test]
    fn prefill_on_empty_body() {
        let mut form = ComposeForm::default();
        form.prefill_reply(&original());

        assert_eq!(form.recipients, "a@x.com");
        assert_eq!(form.subject, "Re: Hi");
        assert_eq!(form.body, "On T a@x.com wrote:\nB");
    }

    #[test]
    fn prefill_keeps_existing_body_above_quote() {
        let mut form = ComposeForm {
            body: "my draft".to_string(),
            ..ComposeForm::default()
        };
        form.prefill_reply(&original());

        assert_eq!(form.body, "my draft\n\n\n---\n\nOn T a@x.com wrote:\nB");
    }

    #[test]
    fn prefill_twice_appends_one_quote_and_one_separator_per_call() {
        let mut form = ComposeForm::default();
        form.prefill_reply(&original());
        form.prefill_reply(&original());

        assert_eq!(form.body.matches("On T a@x.com wrote:").count(), 2);
        assert_eq!(form.body.matches("---").count(), 1);
        assert_eq!(form.subject, "Re: Hi");
    }

    #[test]
    fn reply_to_a_reply_stacks_subject_prefix() {
        let mut form = ComposeForm::default();
        let reply = Email {
            subject: "Re: Hi".to_string(),
            ..original()
        };
        form.prefill_reply(&reply);
        assert_eq!(form.subject, "Re: Re: Hi");
    }

    #[test]
    fn clear_is_idempotent() {
        let mut form = ComposeForm {
            recipients: "a@x.com".to_string(),
            subject: "s".to_string(),
            body: "b".to_string(),
        };
        form.clear();
        form.clear();
        assert_eq!(form, ComposeForm::default());
    }

    #[test]
    fn submit_without_recipients_is_local_and_issues_no_call() {
        let api = FakeApi::default();
        let form = ComposeForm {
            subject: "s".to_string(),
            body: "b".to_string(),
            ..ComposeForm::default()
        };

        let err = form.submit(&api).unwrap_err();
        match err {
            ApiError::Validation(message) => {
                assert_eq!(message, "At least one recipient is required.");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(api.calls().is_empty());
    }

    #[test]
    fn submit_sends_the_three_fields() {
        let api = FakeApi::default();
        let form = ComposeForm {
            recipients: "b@x.com".to_string(),
            subject: "s".to_string(),
            body: "b".to_string(),
        };

        form.submit(&api).unwrap();
        assert_eq!(
            api.calls(),
            vec![Call::Send {
                recipients: "b@x.com".to_string(),
                subject: "s".to_string(),
                body: "b".to_string(),
            }]
        );
    }
}
