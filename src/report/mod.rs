//! Exportable audit reports built from an `Evaluation`.
//!
//! Both exports are pure functions of the evaluation and the connection list.
//! Delivering the content (writing a file, offering a download) is up to the
//! caller.

use crate::catalog::StageCatalog;
use crate::connection::Connection;
use crate::evaluator::Evaluation;
use chrono::{DateTime, Utc};

mod narrative;
mod structured;

pub use narrative::NarrativeReport;
pub use structured::{RtmDocument, RtmEntry, RuleStatus};

/// Suggested file name for the structured export.
pub const STRUCTURED_FILE_NAME: &str = "rtm-integration.json";
/// Suggested file name for the narrative export.
pub const NARRATIVE_FILE_NAME: &str = "rtm-integration.txt";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Machine-readable JSON document.
    Json,
    /// Plain-text narrative.
    Text,
}

impl ExportFormat {
    pub fn file_name(self) -> &'static str {
        match self {
            ExportFormat::Json => STRUCTURED_FILE_NAME,
            ExportFormat::Text => NARRATIVE_FILE_NAME,
        }
    }
}

/// Produces both export documents for one evaluation.
pub struct ReportGenerator<'a> {
    evaluation: &'a Evaluation,
    connections: &'a [Connection],
    catalog: Option<&'a StageCatalog>,
}

impl<'a> ReportGenerator<'a> {
    pub fn new(evaluation: &'a Evaluation, connections: &'a [Connection]) -> Self {
        Self {
            evaluation,
            connections,
            catalog: None,
        }
    }

    /// Use stage labels from `catalog` in the narrative instead of bare ids.
    pub fn with_catalog(mut self, catalog: &'a StageCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn structured(&self) -> RtmDocument {
        RtmDocument::build(self.evaluation, self.connections)
    }

    pub fn narrative(&self, generated_at: DateTime<Utc>) -> NarrativeReport<'a> {
        NarrativeReport {
            evaluation: self.evaluation,
            connections: self.connections,
            catalog: self.catalog,
            generated_at,
        }
    }

    /// Renders the requested export, returning `(file name, content)`.
    pub fn render(
        &self,
        format: ExportFormat,
        generated_at: DateTime<Utc>,
    ) -> Result<(&'static str, String), serde_json::Error> {
        let content = match format {
            ExportFormat::Json => self.structured().to_json_pretty()?,
            ExportFormat::Text => self.narrative(generated_at).to_string(),
        };
        Ok((format.file_name(), content))
    }
}
