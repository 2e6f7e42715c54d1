use serde::{Deserialize, Serialize};

/// Newsletter subscription form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubscribeDto {
    pub email: Option<String>,
    /// Accepted but never validated.
    pub name: Option<String>,
}

/// Contact form. All three fields are required, but only their presence is
/// checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactDto {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}
