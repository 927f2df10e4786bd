use serde::{Deserialize, Serialize};
use std::fmt;

/// Role a user plays in the modeled system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    #[serde(alias = "cliente")]
    Client,
    Admin,
    #[serde(alias = "recepcionista")]
    Receptionist,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Client => write!(f, "client"),
            Role::Admin => write!(f, "admin"),
            Role::Receptionist => write!(f, "receptionist"),
        }
    }
}

/// A stored user record.
///
/// The secret is kept in plain text: this is a teaching prototype, not an
/// authentication system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(alias = "nombre")]
    pub name: String,
    #[serde(default, alias = "rol")]
    pub role: Role,
    #[serde(alias = "password")]
    pub secret: String,
}

/// Input for creating a user; the id is assigned on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub role: Role,
    pub secret: String,
}

impl NewUser {
    pub fn new(name: impl Into<String>, role: Role, secret: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role,
            secret: secret.into(),
        }
    }
}
