use serde::Serialize;
use std::fmt;
use std::ops::Deref;
use thiserror::Error;

/// A validated email address. Surrounding whitespace is dropped.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Email(String);

#[derive(Error, Debug, PartialEq)]
pub enum EmailError {
    #[error("'{0}' is not a valid email: must contain only one '@'")]
    InvalidFormat(String),
    #[error("'{0}' is not a valid email: missing local part")]
    MissingLocalPart(String),
    #[error("'{0}' is not a valid email: invalid domain part")]
    InvalidDomainPart(String),
}

impl TryFrom<&str> for Email {
    type Error = EmailError;

    /// Validates a string and converts it into an `Email`.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let value = value.trim();
        let mut parts = value.split('@');
        let local_part = parts.next();
        let domain_part = parts.next();
        let extra_part = parts.next();

        if extra_part.is_some() {
            return Err(EmailError::InvalidFormat(value.to_string()));
        }

        if local_part.unwrap_or_default().trim().is_empty() {
            return Err(EmailError::MissingLocalPart(value.to_string()));
        }

        let domain = domain_part.unwrap_or_default();
        if domain.trim().is_empty()
            || !domain.contains('.')
            || domain.starts_with('.')
            || domain.ends_with('.')
        {
            return Err(EmailError::InvalidDomainPart(value.to_string()));
        }

        Ok(Self(value.to_string()))
    }
}

impl TryFrom<String> for Email {
    type Error = EmailError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl Deref for Email {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
