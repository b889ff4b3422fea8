use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::COOKIE;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::api::{EmailPatch, MailApi};
use crate::domain::email::{Email, EmailId, Mailbox};
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
struct CountPayload {
    count: u64,
}

/// Body of a 400 response on send.
#[derive(Debug, Deserialize)]
struct ErrorPayload {
    error: String,
}

#[derive(Debug, Serialize)]
struct SendPayload<'a> {
    recipients: &'a str,
    subject: &'a str,
    body: &'a str,
}

/// Blocking HTTP implementation of [`MailApi`]. The session is assumed
/// already established; its cookie is attached verbatim to every request.
pub struct HttpMailApi {
    client: Client,
    base: String,
    session_cookie: Option<String>,
}

impl HttpMailApi {
    pub fn new(base: Url, session_cookie: Option<String>) -> Result<Self, ApiError> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            base: base.as_str().trim_end_matches('/').to_string(),
            session_cookie,
        })
    }

    fn with_cookie(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.session_cookie {
            Some(cookie) => req.header(COOKIE, cookie),
            None => req,
        }
    }

    fn get(&self, path: &str) -> Result<Response, ApiError> {
        let req = self.client.get(format!("{}/{path}", self.base));
        Ok(self.with_cookie(req).send()?)
    }
}

impl MailApi for HttpMailApi {
    fn list_mailbox(&self, mailbox: Mailbox) -> Result<Vec<Email>, ApiError> {
        let resp = self.get(&format!("emails/{mailbox}"))?;
        if !resp.status().is_success() {
            return Err(ApiError::Fetch(resp.status().as_u16()));
        }
        Ok(resp.json()?)
    }

    fn inbox_count(&self) -> Result<u64, ApiError> {
        let resp = self.get("emails/inbox/count")?;
        if !resp.status().is_success() {
            return Err(ApiError::Fetch(resp.status().as_u16()));
        }
        let payload: CountPayload = resp.json()?;
        Ok(payload.count)
    }

    fn get_email(&self, id: EmailId) -> Result<Email, ApiError> {
        let resp = self.get(&format!("emails/{id}"))?;
        match resp.status() {
            StatusCode::NOT_FOUND => Err(ApiError::NotFound(id)),
            status if !status.is_success() => Err(ApiError::Fetch(status.as_u16())),
            _ => Ok(resp.json()?),
        }
    }

    fn update_email(&self, id: EmailId, patch: EmailPatch) -> Result<(), ApiError> {
        let req = self
            .client
            .put(format!("{}/emails/{id}", self.base))
            .json(&patch);
        let resp = self.with_cookie(req).send()?;
        if !resp.status().is_success() {
            return Err(ApiError::Update(resp.status().as_u16()));
        }
        Ok(())
    }

    fn send_email(&self, recipients: &str, subject: &str, body: &str) -> Result<(), ApiError> {
        let req = self.client.post(format!("{}/emails", self.base)).json(&SendPayload {
            recipients,
            subject,
            body,
        });
        let resp = self.with_cookie(req).send()?;
        let status = resp.status();

        if status == StatusCode::BAD_REQUEST {
            // Surface the server's own message when it sent one.
            let text = resp.text().unwrap_or_default();
            return match serde_json::from_str::<ErrorPayload>(&text) {
                Ok(payload) => Err(ApiError::Validation(payload.error)),
                Err(_) => Err(ApiError::Send(status.as_u16())),
            };
        }
        if !status.is_success() {
            return Err(ApiError::Send(status.as_u16()));
        }
        Ok(())
    }
}
