//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and functions from the
//! lifelink crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use lifelink::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let settings = Settings::load(None)?;
//! let integration = Integration::new(StageCatalog::integration(), settings.rule_table()?)?;
//! let state = AppState::load(JsonFileStore::new(&settings.store_dir));
//!
//! let evaluation = integration.evaluate(&state);
//! let document = integration.report(&evaluation, &state).structured();
//! println!("{}", document.to_json_pretty()?);
//! # Ok(())
//! # }
//! ```

// Model
pub use crate::catalog::{Flow, Position, Stage, StageCatalog};
pub use crate::completion::{CompletionRecord, DoneMap};
pub use crate::connection::{Connection, EdgeStyle};
pub use crate::rules::{Alternative, Rule, RuleTable};

// Core operations
pub use crate::decorator::{DecoratedConnection, decorate};
pub use crate::evaluator::{Evaluation, RuleResult, evaluate, integration_score};
pub use crate::integration::{Integration, IntegrationView};
pub use crate::report::{ExportFormat, ReportGenerator, RtmDocument, RuleStatus};

// State & configuration
pub use crate::config::Settings;
pub use crate::store::{AppState, JsonFileStore, MemoryStore, NewUser, Role, StateStore, User};

// Adapter
pub use crate::adapter::IntoConnections;

// Error types
pub use crate::error::{AccountError, CatalogError, ConversionError, SettingsError, StoreError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
