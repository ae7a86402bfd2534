use thiserror::Error;

/// Failures of the strictly typed routing entry points.
///
/// The geometry engine itself never returns these for persisted data; it
/// falls back to the default route instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RouteError {
    #[error("waypoint list must have 2 or 4 points, got {0}")]
    WaypointCount(usize),

    #[error("{config} route needs {expected} points, got {got}")]
    PointCount {
        config: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("handle index {index} out of range for {config} route")]
    HandleIndex { config: &'static str, index: usize },

    #[error("{0} must be finite")]
    NonFinite(String),

    #[error("invalid routing config: {0}")]
    Config(String),
}

/// Why a candidate connection was refused. `Display` is the user-facing reason.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionError {
    #[error("connection must have a source and target")]
    MissingEndpoint,

    #[error("cannot connect a node to itself")]
    SelfLoop,

    #[error("capture nodes cannot receive incoming edges")]
    CaptureTarget,

    #[error("termination nodes cannot have outgoing edges")]
    TerminationSource,

    #[error("this connection already exists")]
    Duplicate,
}

impl ConnectionError {
    /// Stable machine-readable code for the binding layer.
    pub fn code(&self) -> &'static str {
        match self {
            ConnectionError::MissingEndpoint => "missing_endpoint",
            ConnectionError::SelfLoop => "self_loop",
            ConnectionError::CaptureTarget => "capture_target",
            ConnectionError::TerminationSource => "termination_source",
            ConnectionError::Duplicate => "duplicate",
        }
    }
}

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("invalid pipeline json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown edge {0}")]
    UnknownEdge(String),

    #[error(transparent)]
    Connection(#[from] ConnectionError),
}
