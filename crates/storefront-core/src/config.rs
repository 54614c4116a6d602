//! Site Configuration
//!
//! Endpoint and timing settings. Every field has a default so pages work
//! without any embedded config block.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Where the contact form is POSTed
    pub contact_endpoint: String,
    /// Public (anon) key sent as `apikey` and bearer token; empty sends neither
    pub contact_api_key: String,
    pub testimonial_interval_ms: u32,
    pub step_interval_ms: u32,
    pub cookie_banner_delay_ms: u32,
    pub notification_duration_ms: u32,
    /// Height of the fixed header subtracted when scrolling to anchors
    pub header_offset_px: f64,
    /// tracing filter directive, e.g. "info" or "storefront_core=debug"
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            contact_endpoint: "https://efjlxcrlttzwussbbjnw.supabase.co/functions/v1/save-contact-info".to_string(),
            contact_api_key: String::new(),
            testimonial_interval_ms: 5000,
            step_interval_ms: 4000,
            cookie_banner_delay_ms: 1000,
            notification_duration_ms: 5000,
            header_offset_px: 80.0,
            log_level: "info".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if !value.is_object() {
            return Err(ConfigError::Parse(serde::de::Error::custom(
                "site config must be a JSON object",
            )));
        }
        let config: SiteConfig = serde_json::from_value(value)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.contact_endpoint.starts_with("https://") || self.contact_endpoint.starts_with("http://")) {
            return Err(ConfigError::Invalid {
                field: "contact_endpoint",
                reason: format!("expected an absolute http(s) URL, got {:?}", self.contact_endpoint),
            });
        }
        for (field, value) in [
            ("testimonial_interval_ms", self.testimonial_interval_ms),
            ("step_interval_ms", self.step_interval_ms),
        ] {
            if value == 0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "interval must be positive".to_string(),
                });
            }
        }
        if !self.header_offset_px.is_finite() || self.header_offset_px < 0.0 {
            return Err(ConfigError::Invalid {
                field: "header_offset_px",
                reason: format!("{} is not a valid offset", self.header_offset_px),
            });
        }
        Ok(())
    }
}
