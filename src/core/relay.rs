use crate::core::validation::ContactForm;
use serde::Serialize;
use thiserror::Error;

pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Identifiers of the third-party email-delivery service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelayConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub recipient_name: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            endpoint: EMAILJS_SEND_URL.to_string(),
            service_id: "service_e38iyv4".to_string(),
            template_id: "template_3nyenng".to_string(),
            public_key: "dQmrhnlupg0TUCIgL".to_string(),
            recipient_name: "Smit Malaviya".to_string(),
        }
    }
}

impl RelayConfig {
    /// Replace identifiers with non-empty values from `lookup`, keyed by the
    /// form's `data-*` attribute suffix (`service-id`, `template-id`,
    /// `public-key`, `recipient-name`).
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let pick = |key: &str, slot: &mut String| {
            if let Some(v) = lookup(key).map(|v| v.trim().to_string()) {
                if !v.is_empty() {
                    *slot = v;
                }
            }
        };
        pick("service-id", &mut self.service_id);
        pick("template-id", &mut self.template_id);
        pick("public-key", &mut self.public_key);
        pick("recipient-name", &mut self.recipient_name);
        self
    }

    pub fn template_params<'a>(&'a self, form: &'a ContactForm) -> TemplateParams<'a> {
        TemplateParams {
            from_name: &form.name,
            from_email: &form.email,
            subject: &form.subject,
            message: &form.message,
            to_name: &self.recipient_name,
            reply_to: &form.email,
        }
    }

    /// JSON body for the send endpoint. `form` should already be trimmed.
    pub fn request_body(&self, form: &ContactForm) -> serde_json::Result<String> {
        serde_json::to_string(&SendRequest {
            service_id: &self.service_id,
            template_id: &self.template_id,
            user_id: &self.public_key,
            template_params: self.template_params(form),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TemplateParams<'a> {
    pub from_name: &'a str,
    pub from_email: &'a str,
    pub subject: &'a str,
    pub message: &'a str,
    pub to_name: &'a str,
    pub reply_to: &'a str,
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

/// Relay failure; `Display` is the message shown to the visitor.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RelayError {
    #[error("Invalid request. Please check the email service configuration.")]
    BadRequest,
    #[error("Authentication failed. Please check the email service public key.")]
    Unauthorized,
    #[error("Service or template not found. Please check the email service and template IDs.")]
    NotFound,
    #[error("Too many requests. Please wait a moment and try again.")]
    RateLimited,
    #[error("Server error. Please try again later.")]
    Server(u16),
    #[error("Failed to send message. Please try again or email me directly.")]
    Other(Option<u16>),
    #[error("Unexpected error occurred. Please try again.")]
    Unexpected(String),
}

impl RelayError {
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => RelayError::BadRequest,
            401 => RelayError::Unauthorized,
            404 => RelayError::NotFound,
            429 => RelayError::RateLimited,
            s if s >= 500 => RelayError::Server(s),
            s => RelayError::Other(Some(s)),
        }
    }
}

/// Map an HTTP status from the relay to success or a classified error.
pub fn check_status(status: u16) -> Result<(), RelayError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(RelayError::from_status(status))
    }
}
