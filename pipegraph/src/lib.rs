//! Edge routing geometry and connection rules for the pipeline graph editor.
//!
//! The browser editing surface owns node positions and each edge's persisted
//! waypoints. On every render or drag update it asks [`Router`] for a route,
//! places drag handles with [`get_handles`], and before committing a new edge
//! it asks [`get_connection_error`] whether the connection is legal.

pub mod model;
pub mod config;
pub mod document;
pub mod geometry {
    pub mod math;
    pub mod path;
    pub mod tolerance;
}
pub mod algorithms {
    pub mod drag;
    pub mod handles;
    pub mod routing;
    pub mod validation;
}
mod error;

pub use algorithms::drag::drag_handle;
pub use algorithms::handles::{get_handles, handles_for, Cursor, Handle};
pub use algorithms::routing::{
    compute_edge_config, EdgeRoute, RoutePoints, Router, SegmentConfig, WaypointUpdate,
};
pub use algorithms::validation::{get_connection_error, is_valid_connection};
pub use config::RoutingConfig;
pub use document::PipelineDocument;
pub use error::{ConnectionError, DocumentError, RouteError};
pub use model::{Connection, Edge, EdgeData, Endpoints, Node, NodeKind, Point, Waypoints};
