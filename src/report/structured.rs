use crate::connection::Connection;
use crate::evaluator::Evaluation;
use crate::rules::Alternative;
use serde::{Deserialize, Serialize};

/// Whether a rule is covered by the drawn connections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RuleStatus {
    Ok,
    #[serde(alias = "FALTA")]
    Missing,
}

/// One row of the requirements traceability matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RtmEntry {
    pub id: String,
    pub label: String,
    /// Endpoints of the rule's first alternative.
    pub from: String,
    pub to: String,
    pub alternatives: Vec<Alternative>,
    pub status: RuleStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched: Option<Alternative>,
}

/// The machine-readable export: rule statuses, score and the raw edge list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RtmDocument {
    pub rtm: Vec<RtmEntry>,
    pub score: u8,
    pub edges: Vec<Connection>,
}

impl RtmDocument {
    pub fn build(evaluation: &Evaluation, connections: &[Connection]) -> Self {
        let rtm = evaluation
            .results
            .iter()
            .map(|result| {
                let (from, to) = result
                    .alternatives
                    .first()
                    .map(|alt| (alt.source.clone(), alt.target.clone()))
                    .unwrap_or_default();
                RtmEntry {
                    id: result.id.clone(),
                    label: result.label.clone(),
                    from,
                    to,
                    alternatives: result.alternatives.clone(),
                    status: if result.satisfied {
                        RuleStatus::Ok
                    } else {
                        RuleStatus::Missing
                    },
                    matched: result.matched.clone(),
                }
            })
            .collect();

        Self {
            rtm,
            score: evaluation.score,
            edges: connections.to_vec(),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Rule ids split into `(satisfied, pending)`, in document order.
    pub fn partition(&self) -> (Vec<String>, Vec<String>) {
        let (ok, missing): (Vec<_>, Vec<_>) = self
            .rtm
            .iter()
            .partition(|entry| entry.status == RuleStatus::Ok);
        (
            ok.into_iter().map(|e| e.id.clone()).collect(),
            missing.into_iter().map(|e| e.id.clone()).collect(),
        )
    }
}
