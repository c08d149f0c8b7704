use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should compile")
});

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{field} is required")]
    Missing { field: &'static str },
    #[error("'{value}' is not a valid email address")]
    InvalidEmail { value: String },
}

impl ContactError {
    pub fn field(&self) -> &'static str {
        match self {
            Self::Missing { field } => *field,
            Self::InvalidEmail { .. } => "email",
        }
    }
}

pub trait Validate {
    fn validate(&self) -> Result<(), Vec<ContactError>>;
}

/// Raw form input, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// A validated message, ready to be handed to whatever delivers it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

fn require(field: &'static str, value: &str, errors: &mut Vec<ContactError>) {
    if value.trim().is_empty() {
        errors.push(ContactError::Missing { field });
    }
}

pub fn is_email(value: &str) -> bool {
    EMAIL_RE.is_match(value.trim())
}

impl Validate for ContactForm {
    fn validate(&self) -> Result<(), Vec<ContactError>> {
        let mut errors = Vec::new();
        require("name", &self.name, &mut errors);
        require("email", &self.email, &mut errors);
        if !self.email.trim().is_empty() && !is_email(&self.email) {
            errors.push(ContactError::InvalidEmail {
                value: self.email.trim().to_string(),
            });
        }
        require("message", &self.message, &mut errors);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl TryFrom<ContactForm> for ContactMessage {
    type Error = Vec<ContactError>;

    fn try_from(form: ContactForm) -> Result<Self, Self::Error> {
        form.validate()?;
        Ok(Self {
            name: form.name.trim().to_string(),
            email: form.email.trim().to_string(),
            message: form.message.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_valid_form() {
        let msg = ContactMessage::try_from(form(
            " Ada ",
            "ada@example.com",
            "Let's build something.",
        ))
        .expect("form should validate");
        assert_eq!(msg.name, "Ada");
        assert_eq!(msg.email, "ada@example.com");
    }

    #[test]
    fn test_missing_fields() {
        let errors = form("", "  ", "\n").validate().unwrap_err();
        let fields = errors.iter().map(ContactError::field).collect::<Vec<_>>();
        assert_eq!(fields, vec!["name", "email", "message"]);
        assert!(errors
            .iter()
            .all(|e| matches!(e, ContactError::Missing { .. })));
    }

    #[test]
    fn test_email_shape() {
        assert!(is_email("jane@doe.dev"));
        assert!(is_email(" jane.doe+site@mail.example.org "));
        assert!(!is_email("jane"));
        assert!(!is_email("jane@doe"));
        assert!(!is_email("jane doe@example.com"));
        assert!(!is_email("@example.com"));

        let errors = form("Jane", "jane-at-example", "hi").validate().unwrap_err();
        assert_eq!(
            errors,
            vec![ContactError::InvalidEmail {
                value: "jane-at-example".to_string()
            }]
        );
        assert_eq!(
            errors[0].to_string(),
            "'jane-at-example' is not a valid email address"
        );
    }

    #[test]
    fn test_handoff_payload() {
        let msg = ContactMessage::try_from(form("Jane", "jane@doe.dev", "Hello"))
            .expect("form should validate");
        let json = msg.to_json().expect("message should serialize");
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["name"], "Jane");
        assert_eq!(value["email"], "jane@doe.dev");
        assert_eq!(value["message"], "Hello");
    }
}
