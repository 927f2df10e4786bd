use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Visual style of a connection, mirroring the renderer's style object.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
    /// A number or a CSS length such as `"2px"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<Value>,
    /// Any other style keys, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A user-drawn directed link between two stages.
///
/// The serialized form matches the renderer's edge objects, so a persisted
/// edge list can be read back without a translation step. Unknown keys are
/// preserved in `extra`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub source: String,
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_handle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_handle: Option<String>,
    #[serde(default)]
    pub animated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<EdgeStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Connection {
    /// A freshly drawn connection. New links are animated, as on the diagram.
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        let source = source.into();
        let target = target.into();
        Self {
            id: Some(Self::edge_id(&source, &target)),
            source,
            target,
            animated: true,
            ..Self::default()
        }
    }

    /// The id the renderer assigns to an edge between two handles-less nodes.
    pub fn edge_id(source: &str, target: &str) -> String {
        format!("reactflow__edge-{}-{}", source, target)
    }

    /// True if this connection links `a` and `b`, in either direction.
    pub fn links(&self, a: &str, b: &str) -> bool {
        (self.source == a && self.target == b) || (self.source == b && self.target == a)
    }
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}
