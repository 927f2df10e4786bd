//! Bridges the renderer's node/edge JSON and the checker's model.

use crate::catalog::{Position, StageCatalog};
use crate::completion::DoneMap;
use crate::connection::Connection;
use crate::decorator::DecoratedConnection;
use serde::{Deserialize, Serialize};

mod conversion;

pub use conversion::IntoConnections;

/// Node type registered with the renderer for stage boxes.
pub const STAGE_NODE_TYPE: &str = "stage";

/// Payload of a stage node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramNodeData {
    pub label: String,
    pub desc: String,
    #[serde(default)]
    pub done: bool,
}

/// A node as the renderer expects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramNode {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: String,
    pub position: Position,
    pub data: DiagramNodeData,
}

/// Builds renderer nodes for every catalog stage, carrying its done flag.
pub fn diagram_nodes(catalog: &StageCatalog, done: &DoneMap) -> Vec<DiagramNode> {
    catalog
        .iter()
        .map(|stage| DiagramNode {
            id: stage.id.clone(),
            node_type: STAGE_NODE_TYPE.to_string(),
            position: stage.position,
            data: DiagramNodeData {
                label: stage.label.clone(),
                desc: stage.description.clone(),
                done: done.is_done(&stage.id),
            },
        })
        .collect()
}

/// Strips decoration metadata, leaving the edges the renderer draws.
pub fn diagram_edges(decorated: &[DecoratedConnection]) -> Vec<Connection> {
    decorated.iter().map(|d| d.connection.clone()).collect()
}
