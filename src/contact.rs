use std::{sync::LazyLock, time::Duration};

use regex::Regex;
use thiserror::Error;

/// Submission is simulated; nothing leaves the browser.
pub const SUBMIT_DELAY: Duration = Duration::from_secs(2);
pub const SUBMIT_SUCCESS: &str = "Message sent successfully! I will get back to you soon.";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Blank checks ignore surrounding whitespace; the email is matched as entered.
    pub fn validate(&self) -> Result<(), ContactError> {
        if [&self.name, &self.email, &self.message]
            .iter()
            .any(|s| s.trim().is_empty())
        {
            return Err(ContactError::MissingFields);
        }
        if !is_valid_email(&self.email) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}
