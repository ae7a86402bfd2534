use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::algorithms::routing::WaypointUpdate;
use crate::algorithms::validation::get_connection_error;
use crate::model::{edge_id, Connection, Edge, EdgeData, Node, Waypoints};
use crate::DocumentError;

/// The editor's in-memory node and edge collections.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineDocument {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl PipelineDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(s: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str::<PipelineDocument>(s)?)
    }

    pub fn to_json(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn edge(&self, id: &str) -> Option<&Edge> {
        self.edges.iter().find(|e| e.id == id)
    }

    /// Validate then commit. Nothing changes when the connection is refused.
    pub fn connect(&mut self, connection: &Connection) -> Result<&Edge, DocumentError> {
        if let Some(e) = get_connection_error(connection, &self.nodes, &self.edges) {
            return Err(e.into());
        }
        // the validator guarantees both ids are present
        let (Some(source), Some(target)) = (&connection.source, &connection.target) else {
            return Err(crate::ConnectionError::MissingEndpoint.into());
        };
        let edge = Edge::new(source.as_str(), target.as_str());
        debug!(id = %edge.id, "edge added");
        self.edges.push(edge);
        let idx = self.edges.len() - 1;
        Ok(&self.edges[idx])
    }

    pub fn remove_edge(&mut self, id: &str) -> Option<Edge> {
        let idx = self.edges.iter().position(|e| e.id == id)?;
        Some(self.edges.remove(idx))
    }

    pub fn remove_connection(&mut self, source: &str, target: &str) -> Option<Edge> {
        self.remove_edge(&edge_id(source, target))
    }

    pub fn set_waypoints(&mut self, id: &str, waypoints: Option<Waypoints>) -> Result<(), DocumentError> {
        let edge = self
            .edges
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| DocumentError::UnknownEdge(id.to_string()))?;
        edge.data = waypoints.map(|w| EdgeData { waypoints: w.to_vec() });
        Ok(())
    }

    /// Write back the outcome of a re-route. Returns whether anything changed.
    pub fn apply_waypoint_update(&mut self, id: &str, update: WaypointUpdate) -> Result<bool, DocumentError> {
        match update {
            WaypointUpdate::Keep => {
                if self.edge(id).is_none() {
                    return Err(DocumentError::UnknownEdge(id.to_string()));
                }
                Ok(false)
            }
            WaypointUpdate::Replace(w) => self.set_waypoints(id, Some(w)).map(|_| true),
            WaypointUpdate::Clear => self.set_waypoints(id, None).map(|_| true),
        }
    }
}
