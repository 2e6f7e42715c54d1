//! Form validation rules.
//!
//! Both checks are total: every input yields either `Ok(())` or exactly one
//! [`Rejection`]. Nothing here touches shared state.

use crate::dto::{ContactDto, SubscribeDto};

/// Reason a request body was refused. The `Display` text is the message sent
/// back to the caller.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    #[error("Email is required")]
    EmailRequired,

    #[error("Invalid email format")]
    InvalidEmailFormat,

    #[error("All fields are required")]
    AllFieldsRequired,

    #[error("Malformed request body")]
    MalformedBody,
}

pub type Validation = Result<(), Rejection>;

/// Email must be present, non-empty and contain `@`. The name is ignored.
pub fn validate_subscription(dto: &SubscribeDto) -> Validation {
    match dto.email.as_deref() {
        None | Some("") => Err(Rejection::EmailRequired),
        Some(email) if !email.contains('@') => Err(Rejection::InvalidEmailFormat),
        Some(_) => Ok(()),
    }
}

/// Name, email and message must all be present. Empty strings pass.
pub fn validate_contact(dto: &ContactDto) -> Validation {
    if dto.name.is_none() || dto.email.is_none() || dto.message.is_none() {
        return Err(Rejection::AllFieldsRequired);
    }
    Ok(())
}
