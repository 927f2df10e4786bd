use thiserror::Error;

/// Errors raised while building a stage catalog or a rule table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Stage '{0}' is defined more than once in the catalog")]
    DuplicateStage(String),

    #[error("Rule '{0}' is defined more than once in the rule table")]
    DuplicateRule(String),

    #[error("Rule '{0}' has no alternatives; at least one stage pair is required")]
    EmptyRule(String),

    #[error("Rule '{rule_id}' references stage '{stage_id}', which is not in the catalog")]
    UnknownStage { rule_id: String, stage_id: String },

    #[error("Mandatory rule '{0}' is not part of the rule table")]
    UnknownMandatoryRule(String),

    #[error("Failed to parse rule table JSON: {0}")]
    JsonParseError(String),
}

/// Errors raised by a `StateStore` backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Could not read store entry '{key}': {message}")]
    Read { key: String, message: String },

    #[error("Could not write store entry '{key}': {message}")]
    Write { key: String, message: String },

    #[error("Could not serialize store entry '{key}': {message}")]
    Serialize { key: String, message: String },
}

/// Errors from the account and login helpers.
///
/// These are meant to be shown to the user as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    #[error("User not found")]
    UserNotFound(String),

    #[error("Invalid password")]
    InvalidSecret,

    #[error("Invalid user: {0}")]
    InvalidUser(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors that can occur when converting a diagram's edge list into connections.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("Edge #{index} has an empty '{field}' endpoint")]
    EmptyEndpoint { index: usize, field: &'static str },

    #[error("Failed to parse diagram JSON: {0}")]
    JsonParseError(String),
}

/// Errors raised while loading `Settings`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("Could not read settings file '{path}': {message}")]
    Read { path: String, message: String },

    #[error("Failed to parse settings file '{path}': {message}")]
    Parse { path: String, message: String },

    #[error(transparent)]
    Rules(#[from] CatalogError),
}
