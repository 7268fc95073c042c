//! Contact submission payload and the call to the remote endpoint.

use serde::Serialize;
use thiserror::Error;

/// Fixed endpoint the contact form posts to.
pub const CONTACT_API_URL: &str = "https://mkmivua3t9.execute-api.us-east-1.amazonaws.com/contact";

/// Address surfaced in the failure message as a manual fallback.
pub const FALLBACK_EMAIL: &str = "hola@softwivo.com";

/// The three-field payload sent to the contact endpoint. Fields are taken
/// verbatim from the form at submit time apart from whitespace trimming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    /// Build a submission from raw field values, trimming surrounding
    /// whitespace. No further validation happens client-side.
    pub fn from_fields(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            message: message.trim().to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    /// The endpoint answered with a non-2xx status.
    #[error("contact endpoint returned HTTP {0}")]
    Status(u16),
    /// The request never completed (network unreachable, DNS, CORS).
    #[error("contact request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// POST the submission as JSON. The form renders both error variants
/// identically; the distinction only matters for diagnostics.
pub async fn submit(
    client: &reqwest::Client,
    endpoint: &str,
    submission: &ContactSubmission,
) -> Result<(), SubmitError> {
    let response = client.post(endpoint).json(submission).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(SubmitError::Status(status.as_u16()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_fields_trims_surrounding_whitespace() {
        let submission = ContactSubmission::from_fields("  Ana ", " a@b.com", "Hola\n");
        assert_eq!(submission.name, "Ana");
        assert_eq!(submission.email, "a@b.com");
        assert_eq!(submission.message, "Hola");
    }

    #[test]
    fn interior_whitespace_is_preserved() {
        let submission = ContactSubmission::from_fields("Ana María", "a@b.com", "Hola,\n¿qué tal?");
        assert_eq!(submission.name, "Ana María");
        assert_eq!(submission.message, "Hola,\n¿qué tal?");
    }

    #[test]
    fn failure_strings_offer_the_fallback_address() {
        // Every locale's send-failure message must point users at the
        // fallback mailbox.
        const ES_ES: &str = include_str!("../../i18n/es-ES/softwivo-ui.ftl");
        const EN_US: &str = include_str!("../../i18n/en-US/softwivo-ui.ftl");

        for (locale, src) in [("es-ES", ES_ES), ("en-US", EN_US)] {
            let line = src
                .lines()
                .find(|line| line.trim_start().starts_with("contact-status-error"))
                .unwrap_or_else(|| panic!("{locale} is missing contact-status-error"));
            assert!(
                line.contains(FALLBACK_EMAIL),
                "{locale} failure message does not mention {FALLBACK_EMAIL}"
            );
        }
    }

    #[test]
    fn payload_serializes_to_the_wire_shape() {
        let submission = ContactSubmission::from_fields("Ana", "a@b.com", "Hola");
        let value = serde_json::to_value(&submission).expect("serializable payload");
        assert_eq!(
            value,
            serde_json::json!({
                "name": "Ana",
                "email": "a@b.com",
                "message": "Hola",
            })
        );
    }
}
