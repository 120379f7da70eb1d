//! Client-side checks for the auth and contact forms.
//!
//! Only the obvious mistakes are caught here; the server validates again.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

use crate::api::{ContactRequest, LoginRequest, RegisterRequest};

/// Password length limits accepted by the register endpoint (bcrypt caps at 72)
pub const MIN_PASSWORD_LEN: usize = 8;
pub const MAX_PASSWORD_LEN: usize = 72;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all fields")]
    MissingFields,

    #[error("Password must have at least 8 characters")]
    PasswordTooShort,

    #[error("Password must have at most 72 characters")]
    PasswordTooLong,

    #[error("Fill in name, email and message")]
    MissingContactFields,

    #[error("Invalid email address")]
    InvalidEmail,
}

/// Something@something.tld, no whitespace
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("Invalid regex pattern")
});

pub fn looks_like_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value.trim())
}

#[derive(Clone, Debug, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<LoginRequest, ValidationError> {
        let email = self.email.trim();
        let password = self.password.trim();

        if email.is_empty() || password.is_empty() {
            return Err(ValidationError::MissingFields);
        }

        Ok(LoginRequest {
            email: email.to_string(),
            senha: password.to_string(),
        })
    }
}

#[derive(Clone, Debug, Default)]
pub struct RegisterForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<RegisterRequest, ValidationError> {
        let password = self.password.trim();

        if [&self.first_name, &self.last_name, &self.email]
            .iter()
            .any(|field| field.trim().is_empty())
            || password.is_empty()
        {
            return Err(ValidationError::MissingFields);
        }

        let len = password.chars().count();
        if len < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort);
        }
        if len > MAX_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooLong);
        }

        Ok(RegisterRequest {
            email: self.email.trim().to_string(),
            senha: password.to_string(),
        })
    }
}

#[derive(Clone, Debug, Default)]
pub struct ContactForm {
    pub name: String,
    pub company: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<ContactRequest, ValidationError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();

        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(ValidationError::MissingContactFields);
        }
        if !looks_like_email(email) {
            return Err(ValidationError::InvalidEmail);
        }

        let company = self.company.trim();
        Ok(ContactRequest {
            nome: name.to_string(),
            empresa: (!company.is_empty()).then(|| company.to_string()),
            email: email.to_string(),
            mensagem: message.to_string(),
        })
    }
}

/// Human-readable size: `bytes`, `KB`, `MB`, `GB`, `TB` in steps of 1024
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["bytes", "KB", "MB", "GB", "TB"];

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    format!("{:.2} {}", value, UNITS[unit])
}
