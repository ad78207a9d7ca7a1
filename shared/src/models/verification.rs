use serde::{Deserialize, Serialize};
use validator::Validate;
use lazy_static::lazy_static;
use regex::Regex;
use crate::error::Result;

lazy_static! {
    static ref CODE_REGEX: Regex = Regex::new(r"^[0-9]{6}$").unwrap();
}

/// Email verification submission
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct VerificationRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(regex(path = "CODE_REGEX", message = "Code must be 6 digits"))]
    pub code: String,
}

impl VerificationRequest {
    pub fn new(email: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            email: email.into().trim().to_string(),
            code: code.into().trim().to_string(),
        }
    }

    pub fn check(&self) -> Result<()> {
        self.validate()?;
        Ok(())
    }
}
