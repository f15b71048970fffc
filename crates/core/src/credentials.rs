//! Phone/password credential lookup contract.
//!
//! Credentials are compared by plain equality against stored plaintext.
//! This is a known weakness carried over from the existing data set and is
//! not a security boundary.

use serde::Deserialize;
use validator::Validate;

/// Message returned when no user matches the supplied credentials.
pub const CREDENTIAL_MISMATCH_MESSAGE: &str = "Wrong User Name Or Password";

/// Message returned on a successful match.
pub const CREDENTIAL_MATCH_MESSAGE: &str = "Success";

/// Login request body.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    #[serde(alias = "PhoneNumber")]
    #[validate(length(min = 1, message = "phone number is required"))]
    pub phone_number: String,

    #[serde(alias = "Password")]
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// Outcome of a credential lookup. A mismatch is a normal result, not an
/// error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialCheck {
    Matched { role_name: String },
    Mismatch,
}
