use crate::connection::Connection;
use crate::error::ConversionError;

/// A trait for diagram edge formats that can be converted into lifelink `Connection`s.
///
/// This is the seam between a rendering surface and the checker. Implement it
/// on your renderer's edge type to feed its current edge list to the evaluator.
///
/// # Example
///
/// ```rust
/// use lifelink::adapter::IntoConnections;
/// use lifelink::connection::Connection;
/// use lifelink::error::ConversionError;
///
/// // 1. Your renderer's edge type.
/// struct Link { from: String, to: String }
/// struct Canvas { links: Vec<Link> }
///
/// // 2. Map it onto connections.
/// impl IntoConnections for Canvas {
///     fn into_connections(self) -> Result<Vec<Connection>, ConversionError> {
///         Ok(self
///             .links
///             .into_iter()
///             .map(|l| Connection::new(l.from, l.to))
///             .collect())
///     }
/// }
///
/// let canvas = Canvas { links: vec![Link { from: "s-analysis".into(), to: "t-requirements".into() }] };
/// assert_eq!(canvas.into_connections().unwrap().len(), 1);
/// ```
pub trait IntoConnections {
    /// Consumes the object and converts it into a connection list.
    fn into_connections(self) -> Result<Vec<Connection>, ConversionError>;
}

/// Edge lists already in renderer shape only need their endpoints checked.
impl IntoConnections for Vec<Connection> {
    fn into_connections(self) -> Result<Vec<Connection>, ConversionError> {
        for (index, connection) in self.iter().enumerate() {
            if connection.source.trim().is_empty() {
                return Err(ConversionError::EmptyEndpoint {
                    index,
                    field: "source",
                });
            }
            if connection.target.trim().is_empty() {
                return Err(ConversionError::EmptyEndpoint {
                    index,
                    field: "target",
                });
            }
        }
        Ok(self)
    }
}

/// A JSON array of renderer edges.
impl IntoConnections for &str {
    fn into_connections(self) -> Result<Vec<Connection>, ConversionError> {
        let edges: Vec<Connection> = serde_json::from_str(self)
            .map_err(|e| ConversionError::JsonParseError(e.to_string()))?;
        edges.into_connections()
    }
}
