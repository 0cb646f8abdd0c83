//! Email relay for the contact form.
//!
//! Messages go to EmailJS's REST endpoint.  Without credentials the relay
//! falls back to a simulated send that waits a moment and succeeds, so the
//! form is usable in a demo setup.

use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

use super::contact::ContactPayload;

pub const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com";
const SEND_PATH: &str = "/api/v1.0/email/send";
const SIMULATED_DELAY: Duration = Duration::from_secs(1);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
/// Cap on how much of an error body ends up in the status line.
const MAX_ERROR_BODY: usize = 200;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("relay request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("relay rejected the message (HTTP {status}): {body}")]
    Rejected { status: u16, body: String },
}

/// Credentials and destination for the relay.
#[derive(Debug, Clone, PartialEq)]
pub struct RelayConfig {
    pub service_id: Option<String>,
    pub template_id: Option<String>,
    pub public_key: Option<String>,
    pub to_email: String,
    pub endpoint: String,
}

impl RelayConfig {
    pub fn new(to_email: &str) -> Self {
        Self {
            service_id: None,
            template_id: None,
            public_key: None,
            to_email: to_email.to_string(),
            endpoint: EMAILJS_ENDPOINT.to_string(),
        }
    }

    pub fn is_configured(&self) -> bool {
        [&self.service_id, &self.template_id, &self.public_key]
            .iter()
            .all(|v| v.as_deref().is_some_and(|s| !s.trim().is_empty()))
    }

    /// Let `FOLIO_EMAILJS_*` environment variables override file settings.
    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let slots = [
            ("FOLIO_EMAILJS_SERVICE_ID", &mut self.service_id),
            ("FOLIO_EMAILJS_TEMPLATE_ID", &mut self.template_id),
            ("FOLIO_EMAILJS_PUBLIC_KEY", &mut self.public_key),
        ];
        for (key, slot) in slots {
            if let Some(value) = lookup(key).filter(|v| !v.trim().is_empty()) {
                *slot = Some(value);
            }
        }
    }
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

#[derive(Serialize)]
struct TemplateParams<'a> {
    from_name: &'a str,
    from_email: &'a str,
    message: &'a str,
    to_email: &'a str,
}

#[derive(Debug, Clone)]
pub struct EmailJs {
    client: reqwest::Client,
    url: String,
    service_id: String,
    template_id: String,
    public_key: String,
    to_email: String,
}

impl EmailJs {
    async fn send(&self, payload: &ContactPayload) -> Result<(), RelayError> {
        let body = SendRequest {
            service_id: &self.service_id,
            template_id: &self.template_id,
            user_id: &self.public_key,
            template_params: TemplateParams {
                from_name: &payload.name,
                from_email: &payload.email,
                message: &payload.message,
                to_email: &self.to_email,
            },
        };

        let response = self.client.post(&self.url).json(&body).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let mut body = response.text().await.unwrap_or_default();
        if body.len() > MAX_ERROR_BODY {
            let cut = (0..=MAX_ERROR_BODY)
                .rev()
                .find(|&i| body.is_char_boundary(i))
                .unwrap_or(0);
            body.truncate(cut);
        }
        Err(RelayError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

/// The `submit(payload) -> succeeds | fails` collaborator.
#[derive(Debug, Clone)]
pub enum Relay {
    EmailJs(EmailJs),
    Simulated { delay: Duration },
}

impl Relay {
    pub fn from_config(config: &RelayConfig) -> Result<Self, RelayError> {
        if !config.is_configured() {
            return Ok(Relay::Simulated {
                delay: SIMULATED_DELAY,
            });
        }
        let owned = |v: &Option<String>| v.as_deref().unwrap_or_default().trim().to_string();

        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Relay::EmailJs(EmailJs {
            client,
            url: format!("{}{SEND_PATH}", config.endpoint.trim_end_matches('/')),
            service_id: owned(&config.service_id),
            template_id: owned(&config.template_id),
            public_key: owned(&config.public_key),
            to_email: config.to_email.clone(),
        }))
    }

    pub fn is_simulated(&self) -> bool {
        matches!(self, Relay::Simulated { .. })
    }

    pub async fn submit(&self, payload: &ContactPayload) -> Result<(), RelayError> {
        match self {
            Relay::EmailJs(emailjs) => emailjs.send(payload).await,
            Relay::Simulated { delay } => {
                tokio::time::sleep(*delay).await;
                Ok(())
            }
        }
    }
}
