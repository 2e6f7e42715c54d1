pub mod catalog;
pub mod usage;
pub mod validator;

pub use usage::{ConnectionGuard, UsageMetrics};
pub use validator::{Rejection, Validation, validate_contact, validate_subscription};
