use crate::completion::DoneMap;
use crate::connection::{Connection, EdgeStyle};
use serde::Serialize;
use serde_json::Value;

/// Stroke colour of a confirmed connection.
pub const CONFIRMED_STROKE: &str = "#10b981";
/// Stroke width of a confirmed connection.
pub const CONFIRMED_STROKE_WIDTH: f64 = 2.0;
/// Label shown on a confirmed connection.
pub const CONFIRMED_LABEL: &str = "OK";

/// A connection ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecoratedConnection {
    #[serde(flatten)]
    pub connection: Connection,
    /// Both endpoints are marked done.
    pub confirmed: bool,
}

/// Marks each connection as confirmed when both of its endpoints are done.
///
/// This only looks at completion state, never at the rule table: a connection
/// that satisfies a rule may still be unconfirmed, and the other way round.
pub fn decorate(connections: &[Connection], done: &DoneMap) -> Vec<DecoratedConnection> {
    connections
        .iter()
        .map(|connection| {
            let confirmed = done.is_done(&connection.source) && done.is_done(&connection.target);
            let mut connection = connection.clone();
            if confirmed {
                connection.style = Some(EdgeStyle {
                    stroke: Some(CONFIRMED_STROKE.to_string()),
                    stroke_width: Some(Value::from(CONFIRMED_STROKE_WIDTH)),
                    ..EdgeStyle::default()
                });
                connection.label = Some(CONFIRMED_LABEL.to_string());
            }
            DecoratedConnection {
                connection,
                confirmed,
            }
        })
        .collect()
}
