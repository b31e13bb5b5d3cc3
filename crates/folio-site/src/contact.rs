//! Contact form submission.
//!
//! The contact page is an HTML fragment containing a form with
//! `id="contactForm"`. Its `action` names the endpoint that accepts the
//! form fields. Two spam checks run before posting: a hidden `_gotcha`
//! field must stay empty, and the form must have been open for a minimum
//! time.

use std::sync::LazyLock;
use std::time::Duration;

use async_trait::async_trait;
use folio_renderer::escape_html;
use regex::Regex;
use ureq::Agent;

use crate::error::ContactError;
use crate::ui::UiText;

/// Honeypot field left empty by people and filled by bots.
pub const HONEYPOT_FIELD: &str = "_gotcha";

/// Default minimum time between showing the form and submitting it.
pub const DEFAULT_MIN_ELAPSED: Duration = Duration::from_secs(2);

static FORM_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?is)<form\b[^>]*\bid\s*=\s*["']contactForm["'][^>]*>"#).unwrap());

static ACTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)\baction\s*=\s*["']([^"']*)["']"#).unwrap());

/// Posts form fields to an endpoint.
#[async_trait]
pub trait FormTransport: Send + Sync {
    async fn post(&self, endpoint: &str, fields: &[(String, String)]) -> Result<(), ContactError>;
}

/// Form transport over blocking HTTP on the tokio blocking pool.
#[derive(Clone)]
pub struct HttpFormTransport {
    agent: Agent,
}

impl HttpFormTransport {
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();
        Self { agent }
    }
}

fn post_form(agent: &Agent, endpoint: &str, fields: &[(String, String)]) -> Result<(), ContactError> {
    let pairs: Vec<(&str, &str)> = fields.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
    let response = agent
        .post(endpoint)
        .header("Accept", "application/json")
        .send_form(pairs)
        .map_err(|e| ContactError::Transport(e.to_string()))?;

    let status = response.status().as_u16();
    if !(200..300).contains(&status) {
        return Err(ContactError::Status(status));
    }
    Ok(())
}

#[async_trait]
impl FormTransport for HttpFormTransport {
    async fn post(&self, endpoint: &str, fields: &[(String, String)]) -> Result<(), ContactError> {
        let agent = self.agent.clone();
        let endpoint = endpoint.to_owned();
        let fields = fields.to_vec();
        tokio::task::spawn_blocking(move || post_form(&agent, &endpoint, &fields))
            .await
            .map_err(|e| ContactError::Transport(e.to_string()))?
    }
}

/// Filled-in form ready to submit.
#[derive(Debug, Clone, Default)]
pub struct Submission {
    pub fields: Vec<(String, String)>,
    /// Time since the form was shown.
    pub elapsed: Duration,
}

impl Submission {
    fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Result of a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Honeypot was filled; nothing was sent.
    Ignored,
    /// Submitted too soon; carries the status message to show.
    TooFast(String),
    /// Sent; carries the success panel that replaces the form.
    Sent(String),
    /// Sending failed; carries the status message to show.
    Failed(String),
}

/// Contact form found in the contact page fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    endpoint: String,
}

impl ContactForm {
    /// Find the contact form and its `action` in an HTML fragment.
    #[must_use]
    pub fn from_fragment(html: &str) -> Option<Self> {
        let tag = FORM_TAG_RE.find(html)?;
        let endpoint = ACTION_RE.captures(tag.as_str())?.get(1)?.as_str().trim();
        if endpoint.is_empty() {
            return None;
        }
        Some(Self {
            endpoint: endpoint.to_owned(),
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Run the spam checks and post the submission.
    pub async fn submit(
        &self,
        transport: &dyn FormTransport,
        submission: &Submission,
        min_elapsed: Duration,
        ui: &UiText,
    ) -> SubmitOutcome {
        if submission.field(HONEYPOT_FIELD).is_some_and(|v| !v.is_empty()) {
            tracing::debug!("honeypot filled, ignoring submission");
            return SubmitOutcome::Ignored;
        }
        if submission.elapsed < min_elapsed {
            return SubmitOutcome::TooFast(ui.spam_wait.to_owned());
        }

        match transport.post(&self.endpoint, &submission.fields).await {
            Ok(()) => {
                tracing::info!(endpoint = %self.endpoint, "contact form sent");
                SubmitOutcome::Sent(success_panel(ui))
            }
            Err(err) => {
                tracing::error!(endpoint = %self.endpoint, error = %err, "contact form failed");
                SubmitOutcome::Failed(ui.send_failed.to_owned())
            }
        }
    }
}

fn success_panel(ui: &UiText) -> String {
    format!(r#"<div class="card contact-success">{}</div>"#, escape_html(ui.sent))
}
