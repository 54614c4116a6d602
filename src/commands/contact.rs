//! Contact Form Commands
//!
//! POSTs a contact submission to the configured endpoint.

use storefront_core::contact::api_error_message;
use storefront_core::{ContactError, ContactSubmission, SiteConfig};

/// Submit the form; returns the endpoint's JSON reply
pub async fn submit_contact_form(
    config: &SiteConfig,
    submission: &ContactSubmission,
) -> Result<serde_json::Value, ContactError> {
    tracing::info!(endpoint = %config.contact_endpoint, "submitting contact form");

    let body = submission.to_body().inspect_err(|e| tracing::error!(error = %e, "contact payload not encoded"))?;
    let mut request = reqwest::Client::new()
        .post(&config.contact_endpoint)
        .header("Content-Type", "application/json")
        .body(body);
    if !config.contact_api_key.is_empty() {
        request = request
            .header("apikey", &config.contact_api_key)
            .header("Authorization", format!("Bearer {}", config.contact_api_key));
    }

    let response = request.send().await.map_err(|e| {
        tracing::error!(error = %e, "contact request failed");
        ContactError::Network(e.to_string())
    })?;

    let status = response.status();
    tracing::debug!(status = status.as_u16(), "contact response received");

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let error = ContactError::Api {
            status: status.as_u16(),
            message: api_error_message(&body),
        };
        tracing::error!(%error, "contact endpoint rejected submission");
        return Err(error);
    }

    response.json::<serde_json::Value>().await.map_err(|e| ContactError::Api {
        status: status.as_u16(),
        message: format!("Invalid response body: {}", e),
    })
}
