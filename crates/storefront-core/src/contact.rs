//! Contact Form Model
//!
//! Field validation, honeypot spam check and the JSON payload posted to the
//! contact endpoint. The network call itself lives in the UI crate.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Form fields in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Company,
    Email,
    Phone,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 5] = [
        ContactField::Name,
        ContactField::Company,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Message,
    ];

    /// Position in `ALL`
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn required(self) -> bool {
        matches!(self, ContactField::Name | ContactField::Email | ContactField::Message)
    }

    /// Form control name attribute
    pub fn name(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Company => "company",
            ContactField::Email => "email",
            ContactField::Phone => "phone",
            ContactField::Message => "message",
        }
    }
}

/// Validation outcome for a single field, mirrored as a CSS class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    /// Not yet checked (no class)
    Pristine,
    Valid,
    Invalid,
}

impl FieldStatus {
    pub fn css_class(self) -> &'static str {
        match self {
            FieldStatus::Pristine => "",
            FieldStatus::Valid => "valid",
            FieldStatus::Invalid => "invalid",
        }
    }
}

/// Check one field value
pub fn validate_field(field: ContactField, value: &str) -> FieldStatus {
    let value = value.trim();
    if value.is_empty() {
        return if field.required() { FieldStatus::Invalid } else { FieldStatus::Valid };
    }
    if field == ContactField::Email && !is_email(value) {
        return FieldStatus::Invalid;
    }
    FieldStatus::Valid
}

/// Status shown on a field's control. Only required fields are marked.
pub fn field_status(field: ContactField, value: &str) -> FieldStatus {
    if field.required() {
        validate_field(field, value)
    } else {
        FieldStatus::Pristine
    }
}

/// Loose `local@domain` check matching what browsers accept for type=email
fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !domain.is_empty()
        && domain.split('.').all(|label| {
            !label.is_empty()
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        })
}

/// Raw form contents as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    /// Honeypot, hidden from humans
    pub website: String,
}

impl ContactDraft {
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Company => &self.company,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Company => self.company = value,
            ContactField::Email => self.email = value,
            ContactField::Phone => self.phone = value,
            ContactField::Message => self.message = value,
        }
    }

    /// Bots fill the hidden field; such submissions are dropped silently
    pub fn is_spam(&self) -> bool {
        !self.website.is_empty()
    }

    /// Every invalid field, in form order
    pub fn validate(&self) -> Result<(), Vec<ContactField>> {
        let invalid: Vec<ContactField> = ContactField::ALL
            .into_iter()
            .filter(|field| validate_field(*field, self.value(*field)) == FieldStatus::Invalid)
            .collect();
        if invalid.is_empty() {
            Ok(())
        } else {
            Err(invalid)
        }
    }

    /// Control statuses after a submit attempt, indexed like `ContactField::ALL`
    pub fn statuses(&self) -> [FieldStatus; 5] {
        ContactField::ALL.map(|field| field_status(field, self.value(field)))
    }

    pub fn to_submission(&self) -> ContactSubmission {
        ContactSubmission {
            name: self.name.trim().to_string(),
            company: non_blank(&self.company),
            email: self.email.trim().to_string(),
            phone: non_blank(&self.phone),
            message: self.message.trim().to_string(),
            source: SUBMISSION_SOURCE.to_string(),
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

pub const SUBMISSION_SOURCE: &str = "website";

/// JSON body posted to the contact endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub company: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub source: String,
}

/// Contact submission failures
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContactError {
    #[error("Network error: Unable to connect to server. Please check your internet connection or try again later.")]
    Network(String),

    #[error("API Error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to encode submission: {0}")]
    Serialize(String),
}

impl From<serde_json::Error> for ContactError {
    fn from(error: serde_json::Error) -> Self {
        ContactError::Serialize(error.to_string())
    }
}

impl ContactSubmission {
    /// JSON request body
    pub fn to_body(&self) -> Result<String, ContactError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Best-effort message from an error response body
pub fn api_error_message(body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => ["error", "message"]
            .iter()
            .find_map(|key| value.get(*key).and_then(|v| v.as_str()).map(str::to_string))
            .unwrap_or_else(|| value.to_string()),
        Err(_) => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactDraft {
        ContactDraft {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_required_fields() {
        assert_eq!(validate_field(ContactField::Name, "  "), FieldStatus::Invalid);
        assert_eq!(validate_field(ContactField::Company, ""), FieldStatus::Valid);
        assert_eq!(validate_field(ContactField::Phone, ""), FieldStatus::Valid);
        assert_eq!(validate_field(ContactField::Message, "hi"), FieldStatus::Valid);
    }

    #[test]
    fn test_email_format() {
        assert_eq!(validate_field(ContactField::Email, "a@b"), FieldStatus::Valid);
        assert_eq!(validate_field(ContactField::Email, "a@b.co"), FieldStatus::Valid);
        assert_eq!(validate_field(ContactField::Email, "a b@c.com"), FieldStatus::Invalid);
        assert_eq!(validate_field(ContactField::Email, "@c.com"), FieldStatus::Invalid);
        assert_eq!(validate_field(ContactField::Email, "a@c..com"), FieldStatus::Invalid);
        assert_eq!(validate_field(ContactField::Email, "a@@c.com"), FieldStatus::Invalid);
        assert_eq!(validate_field(ContactField::Email, "plain"), FieldStatus::Invalid);
    }

    #[test]
    fn test_validate_lists_fields_in_order() {
        let draft = ContactDraft {
            email: "broken".to_string(),
            ..Default::default()
        };
        assert_eq!(
            draft.validate(),
            Err(vec![ContactField::Name, ContactField::Email, ContactField::Message])
        );
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn test_optional_fields_stay_unmarked() {
        let mut draft = filled();
        draft.company = "Engines Ltd".to_string();
        assert_eq!(
            draft.statuses(),
            [
                FieldStatus::Valid,
                FieldStatus::Pristine,
                FieldStatus::Valid,
                FieldStatus::Pristine,
                FieldStatus::Valid,
            ]
        );

        let empty = ContactDraft::default().statuses();
        assert_eq!(empty[ContactField::Name.index()], FieldStatus::Invalid);
        assert_eq!(empty[ContactField::Phone.index()], FieldStatus::Pristine);
        assert_eq!(field_status(ContactField::Company, ""), FieldStatus::Pristine);
    }

    #[test]
    fn test_field_index_matches_order() {
        for (i, field) in ContactField::ALL.into_iter().enumerate() {
            assert_eq!(field.index(), i);
        }
    }

    #[test]
    fn test_honeypot() {
        let mut draft = filled();
        assert!(!draft.is_spam());
        draft.website = "http://spam.example".to_string();
        assert!(draft.is_spam());
    }

    #[test]
    fn test_submission_payload() {
        let mut draft = filled();
        draft.phone = "   ".to_string();
        draft.company = " Analytical Engines ".to_string();

        let json = serde_json::to_value(draft.to_submission()).unwrap();
        assert_eq!(json["company"], "Analytical Engines");
        assert!(json["phone"].is_null());
        assert_eq!(json["source"], "website");
        assert_eq!(json["email"], "ada@example.com");
    }

    #[test]
    fn test_request_body() {
        let body = filled().to_submission().to_body().unwrap();
        let decoded: ContactSubmission = serde_json::from_str(&body).unwrap();
        assert_eq!(decoded, filled().to_submission());

        let error: ContactError = serde_json::from_str::<ContactSubmission>("{").unwrap_err().into();
        assert!(matches!(error, ContactError::Serialize(_)));
    }

    #[test]
    fn test_api_error_message() {
        assert_eq!(api_error_message(r#"{"error":"bad email"}"#), "bad email");
        assert_eq!(api_error_message(r#"{"message":"rate limited"}"#), "rate limited");
        assert_eq!(api_error_message(r#"{"code":42}"#), r#"{"code":42}"#);
        assert_eq!(api_error_message("Gateway Timeout"), "Gateway Timeout");
    }

    #[test]
    fn test_error_display() {
        let error = ContactError::Api { status: 500, message: "boom".to_string() };
        assert_eq!(format!("{}", error), "API Error (500): boom");
        assert!(ContactError::Network("dns".to_string()).to_string().starts_with("Network error"));
        assert_eq!(
            ContactError::Serialize("bad float".to_string()).to_string(),
            "Failed to encode submission: bad float"
        );
    }
}
