//! # lifelink - SDLC × STLC Traceability Checker
//!
//! **lifelink** scores how well a user-drawn set of connections links the
//! stages of a build lifecycle (SDLC) to the stages of a verification
//! lifecycle (STLC). It is the decision logic behind an educational
//! diagramming tool; the diagram renderer itself lives elsewhere and talks
//! to this crate through plain node/edge JSON.
//!
//! ## Core Workflow
//!
//! 1.  **Catalog**: `StageCatalog::integration()` holds both flows' stages with fixed ids and positions.
//! 2.  **Rules**: `RuleTable::standard()` lists the traceability rules. Each rule is satisfied by any one of its alternative stage pairs, in either direction.
//! 3.  **Evaluate**: `evaluate` turns the current connections into per-rule results, an integration score and the mandatory-rule flag.
//! 4.  **Decorate**: `decorate` marks the connections whose endpoints are both completed, using a `DoneMap` built from the completion record.
//! 5.  **Report**: `ReportGenerator` renders a JSON traceability matrix or a plain-text narrative.
//!
//! `AppState` owns the mutable data (users, completion record, connections)
//! and persists every change through a `StateStore`. `Integration` ties the
//! pieces together for one render.
//!
//! ## Quick Start
//!
//! ```rust
//! use lifelink::prelude::*;
//!
//! let integration = Integration::standard();
//! let mut state = AppState::in_memory();
//!
//! // The user draws a link on the diagram (direction does not matter).
//! state
//!     .add_connection(Connection::new("t-requirements", "s-analysis"))
//!     .unwrap();
//!
//! let view = integration.view(&state);
//! assert!(view.evaluation.rule("r1").unwrap().satisfied);
//! assert!(view.warning.is_none());
//! assert_eq!(view.evaluation.score, 17); // 1 of 6 rules
//!
//! // Neither endpoint is completed yet, so the edge is not confirmed.
//! assert!(!view.edges[0].confirmed);
//!
//! let report = integration
//!     .report(&view.evaluation, &state)
//!     .narrative(chrono::Utc::now())
//!     .to_string();
//! assert!(report.contains("Integration score: 17%"));
//! ```

pub mod adapter;
pub mod catalog;
pub mod completion;
pub mod config;
pub mod connection;
pub mod decorator;
pub mod error;
pub mod evaluator;
pub mod integration;
pub mod prelude;
pub mod report;
pub mod rules;
pub mod store;
