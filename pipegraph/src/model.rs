use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::RouteError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Live anchor coordinates of an edge, recomputed from node positions on every render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Endpoints {
    pub source: Point,
    pub target: Point,
}

impl Endpoints {
    pub const fn new(sx: f64, sy: f64, tx: f64, ty: f64) -> Self {
        Self {
            source: Point::new(sx, sy),
            target: Point::new(tx, ty),
        }
    }

    /// Target not strictly below source.
    pub fn is_loopback(&self) -> bool {
        self.source.y >= self.target.y
    }

    pub fn is_finite(&self) -> bool {
        self.source.is_finite() && self.target.is_finite()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Capture,
    File,
    Process,
    Pairing,
    Branching,
    Termination,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Point>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub properties: Map<String, Value>,
}

impl Node {
    pub fn new(id: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            kind,
            position: None,
            properties: Map::new(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeData {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub waypoints: Vec<Point>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<EdgeData>,
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        let source = source.into();
        let target = target.into();
        Self {
            id: edge_id(&source, &target),
            source,
            target,
            data: None,
        }
    }

    /// Persisted manual route, empty when the edge has never been dragged.
    pub fn waypoints(&self) -> &[Point] {
        self.data.as_ref().map(|d| d.waypoints.as_slice()).unwrap_or(&[])
    }
}

pub fn edge_id(source: &str, target: &str) -> String {
    format!("{}->{}", source, target)
}

/// A proposed edge, evaluated once and discarded.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub target: Option<String>,
}

impl Connection {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: Some(source.into()),
            target: Some(target.into()),
        }
    }
}

/// A stored manual route: two points for a three-segment route, four for a five-segment one.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Point>", into = "Vec<Point>")]
pub enum Waypoints {
    Pair([Point; 2]),
    Detour([Point; 4]),
}

impl Waypoints {
    pub fn as_slice(&self) -> &[Point] {
        match self {
            Waypoints::Pair(p) => p,
            Waypoints::Detour(p) => p,
        }
    }

    pub fn to_vec(&self) -> Vec<Point> {
        self.as_slice().to_vec()
    }
}

impl TryFrom<&[Point]> for Waypoints {
    type Error = RouteError;

    fn try_from(points: &[Point]) -> Result<Self, Self::Error> {
        if let Some(bad) = points.iter().position(|p| !p.is_finite()) {
            return Err(RouteError::NonFinite(format!("waypoint {}", bad)));
        }
        match *points {
            [a, b] => Ok(Waypoints::Pair([a, b])),
            [a, b, c, d] => Ok(Waypoints::Detour([a, b, c, d])),
            _ => Err(RouteError::WaypointCount(points.len())),
        }
    }
}

impl TryFrom<Vec<Point>> for Waypoints {
    type Error = RouteError;

    fn try_from(points: Vec<Point>) -> Result<Self, Self::Error> {
        Waypoints::try_from(points.as_slice())
    }
}

impl From<Waypoints> for Vec<Point> {
    fn from(w: Waypoints) -> Self {
        w.to_vec()
    }
}
