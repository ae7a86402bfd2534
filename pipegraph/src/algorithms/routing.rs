//! Edge geometry engine.
//!
//! Decides how many segments a connector needs between two anchors, where its
//! bends sit, and whether a persisted manual route is honored, ignored, or
//! collapsed back to a straight line.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};
use tracing::{debug, warn};

use crate::config::RoutingConfig;
use crate::geometry::tolerance::within;
use crate::model::{Endpoints, Point, Waypoints};
use crate::RouteError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SegmentConfig {
    #[serde(rename = "single-segment")]
    Single,
    #[serde(rename = "three-segment")]
    Three,
    #[serde(rename = "five-segment")]
    Five,
}

impl SegmentConfig {
    pub fn as_str(&self) -> &'static str {
        match self {
            SegmentConfig::Single => "single-segment",
            SegmentConfig::Three => "three-segment",
            SegmentConfig::Five => "five-segment",
        }
    }

    pub fn point_count(&self) -> usize {
        match self {
            SegmentConfig::Single => 2,
            SegmentConfig::Three => 4,
            SegmentConfig::Five => 6,
        }
    }
}

impl fmt::Display for SegmentConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SegmentConfig {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single-segment" | "1-seg" => Ok(SegmentConfig::Single),
            "three-segment" | "3-seg" => Ok(SegmentConfig::Three),
            "five-segment" | "5-seg" => Ok(SegmentConfig::Five),
            other => Err(RouteError::Config(format!("unknown segment config '{}'", other))),
        }
    }
}

/// Path of a connector. The variant fixes the point count.
///
/// - `Single`: source, target
/// - `Three`: source, bend1, bend2, target
/// - `Five`: source, h1, v1, v2, h2, target
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RoutePoints {
    Single([Point; 2]),
    Three([Point; 4]),
    Five([Point; 6]),
}

impl RoutePoints {
    pub fn config(&self) -> SegmentConfig {
        match self {
            RoutePoints::Single(_) => SegmentConfig::Single,
            RoutePoints::Three(_) => SegmentConfig::Three,
            RoutePoints::Five(_) => SegmentConfig::Five,
        }
    }

    pub fn as_slice(&self) -> &[Point] {
        match self {
            RoutePoints::Single(p) => p,
            RoutePoints::Three(p) => p,
            RoutePoints::Five(p) => p,
        }
    }

    /// Rebuild from a loose point list, as handed over by a script caller.
    pub fn from_slice(config: SegmentConfig, points: &[Point]) -> Result<Self, RouteError> {
        let mismatch = || RouteError::PointCount {
            config: config.as_str(),
            expected: config.point_count(),
            got: points.len(),
        };
        match config {
            SegmentConfig::Single => points.try_into().map(RoutePoints::Single).map_err(|_| mismatch()),
            SegmentConfig::Three => points.try_into().map(RoutePoints::Three).map_err(|_| mismatch()),
            SegmentConfig::Five => points.try_into().map(RoutePoints::Five).map_err(|_| mismatch()),
        }
    }
}

/// Result of one geometry query. Always freshly computed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeRoute {
    pub points: RoutePoints,
    /// The caller's stored waypoints as actually used (x re-pinned to live endpoints).
    /// `None` when the route was synthesized from defaults.
    pub effective_waypoints: Option<Waypoints>,
}

impl EdgeRoute {
    pub fn config(&self) -> SegmentConfig {
        self.points.config()
    }

    pub fn points(&self) -> &[Point] {
        self.points.as_slice()
    }
}

impl Serialize for EdgeRoute {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct RouteSer<'a> {
            config: SegmentConfig,
            points: &'a [Point],
            #[serde(skip_serializing_if = "Option::is_none")]
            effective_waypoints: Option<&'a [Point]>,
        }
        RouteSer {
            config: self.config(),
            points: self.points(),
            effective_waypoints: self.effective_waypoints.as_ref().map(|w| w.as_slice()),
        }
        .serialize(serializer)
    }
}

/// What the editing surface should do with its stored waypoint list after a re-route.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WaypointUpdate {
    Keep,
    Replace(Waypoints),
    Clear,
}

impl WaypointUpdate {
    pub fn between(stored: &[Point], route: &EdgeRoute) -> Self {
        match route.effective_waypoints {
            Some(w) if w.as_slice() == stored => WaypointUpdate::Keep,
            Some(w) => WaypointUpdate::Replace(w),
            None if stored.is_empty() => WaypointUpdate::Keep,
            None => WaypointUpdate::Clear,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Router {
    config: RoutingConfig,
}

impl Router {
    pub fn new(config: RoutingConfig) -> Result<Self, RouteError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RoutingConfig {
        &self.config
    }

    /// Route an edge, reading persisted waypoints leniently: any list that is
    /// not 2 or 4 finite points is ignored.
    pub fn route(&self, ends: Endpoints, stored: Option<&[Point]>) -> EdgeRoute {
        let waypoints = match stored {
            None | Some([]) => None,
            Some(raw) => match Waypoints::try_from(raw) {
                Ok(w) => Some(w),
                Err(e) => {
                    warn!(error = %e, "ignoring stored waypoints");
                    None
                }
            },
        };
        self.route_with(ends, waypoints)
    }

    pub fn route_with(&self, ends: Endpoints, waypoints: Option<Waypoints>) -> EdgeRoute {
        let snap = self.config.snap_threshold;
        let Endpoints { source: s, target: t } = ends;

        if ends.is_loopback() {
            let route = match waypoints {
                Some(Waypoints::Detour(w)) => five(s, t, w[0].y, w[1].x, w[3].y, true),
                _ => {
                    let off = self.config.vertical_offset;
                    let jog_x = s.x.max(t.x) + self.config.lateral_offset;
                    five(s, t, s.y + off, jog_x, t.y - off, false)
                }
            };
            debug!(stored = route.effective_waypoints.is_some(), "loopback route");
            return route;
        }

        let aligned = within(s.x, t.x, snap);
        let route = match waypoints {
            Some(Waypoints::Detour(w)) if !within(w[1].x, s.x, snap) => {
                five(s, t, w[0].y, w[1].x, w[3].y, true)
            }
            Some(Waypoints::Pair(w)) if !aligned => three(s, t, w[0].y, true),
            _ if aligned => {
                if waypoints.is_some() {
                    debug!("collapsing stored route to a straight connector");
                }
                single(s, t)
            }
            _ => three(s, t, 0.5 * (s.y + t.y), false),
        };
        debug!(config = %route.config(), "edge route");
        route
    }
}

/// Route with the default configuration.
pub fn compute_edge_config(
    sx: f64,
    sy: f64,
    tx: f64,
    ty: f64,
    waypoints: Option<&[Point]>,
) -> EdgeRoute {
    Router::default().route(Endpoints::new(sx, sy, tx, ty), waypoints)
}

fn single(s: Point, t: Point) -> EdgeRoute {
    EdgeRoute {
        points: RoutePoints::Single([s, t]),
        effective_waypoints: None,
    }
}

fn three(s: Point, t: Point, mid_y: f64, stored: bool) -> EdgeRoute {
    let bend1 = Point::new(s.x, mid_y);
    let bend2 = Point::new(t.x, mid_y);
    EdgeRoute {
        points: RoutePoints::Three([s, bend1, bend2, t]),
        effective_waypoints: stored.then_some(Waypoints::Pair([bend1, bend2])),
    }
}

fn five(s: Point, t: Point, h1_y: f64, jog_x: f64, h2_y: f64, stored: bool) -> EdgeRoute {
    let h1 = Point::new(s.x, h1_y);
    let v1 = Point::new(jog_x, h1_y);
    let v2 = Point::new(jog_x, h2_y);
    let h2 = Point::new(t.x, h2_y);
    EdgeRoute {
        points: RoutePoints::Five([s, h1, v1, v2, h2, t]),
        effective_waypoints: stored.then_some(Waypoints::Detour([h1, v1, v2, h2])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::tolerance::{LOOPBACK_LATERAL_OFFSET, LOOPBACK_VERTICAL_OFFSET};

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn aligned_downward_is_single() {
        let r = compute_edge_config(100.0, 0.0, 104.0, 200.0, None);
        assert_eq!(r.points, RoutePoints::Single([p(100.0, 0.0), p(104.0, 200.0)]));
        assert_eq!(r.effective_waypoints, None);
    }

    #[test]
    fn offset_downward_is_three_at_mid() {
        let r = compute_edge_config(0.0, 0.0, 100.0, 200.0, None);
        assert_eq!(
            r.points,
            RoutePoints::Three([p(0.0, 0.0), p(0.0, 100.0), p(100.0, 100.0), p(100.0, 200.0)])
        );
        assert_eq!(r.effective_waypoints, None);
    }

    #[test]
    fn stored_pair_keeps_y_and_repins_x() {
        let stored = [p(-500.0, 30.0), p(900.0, 30.0)];
        let r = compute_edge_config(0.0, 0.0, 100.0, 200.0, Some(&stored[..]));
        let pts = r.points();
        assert_eq!(r.config(), SegmentConfig::Three);
        assert_eq!(pts[1], p(0.0, 30.0));
        assert_eq!(pts[2], p(100.0, 30.0));
        assert_eq!(r.effective_waypoints, Some(Waypoints::Pair([p(0.0, 30.0), p(100.0, 30.0)])));
    }

    #[test]
    fn pair_collapses_once_aligned() {
        let stored = [p(0.0, 30.0), p(100.0, 30.0)];
        let r = compute_edge_config(50.0, 0.0, 50.0, 200.0, Some(&stored[..]));
        assert_eq!(r.config(), SegmentConfig::Single);
        assert_eq!(r.effective_waypoints, None);
    }

    #[test]
    fn loopback_default_geometry() {
        let r = compute_edge_config(10.0, 300.0, 10.0, 0.0, None);
        let off = LOOPBACK_VERTICAL_OFFSET;
        let jog = 10.0 + LOOPBACK_LATERAL_OFFSET;
        assert_eq!(
            r.points,
            RoutePoints::Five([
                p(10.0, 300.0),
                p(10.0, 300.0 + off),
                p(jog, 300.0 + off),
                p(jog, -off),
                p(10.0, -off),
                p(10.0, 0.0),
            ])
        );
        assert_eq!(r.effective_waypoints, None);
    }

    #[test]
    fn level_endpoints_are_a_loopback() {
        let r = compute_edge_config(0.0, 50.0, 200.0, 50.0, None);
        assert_eq!(r.config(), SegmentConfig::Five);
    }

    #[test]
    fn loopback_never_collapses() {
        let stored = [p(10.0, 340.0), p(12.0, 340.0), p(12.0, -40.0), p(10.0, -40.0)];
        let r = compute_edge_config(10.0, 300.0, 10.0, 0.0, Some(&stored[..]));
        assert_eq!(r.config(), SegmentConfig::Five);
        assert_eq!(r.points()[2], p(12.0, 340.0));
        assert!(r.effective_waypoints.is_some());
    }

    #[test]
    fn detour_on_aligned_edge_is_honored() {
        let stored = [p(0.0, 20.0), p(80.0, 20.0), p(80.0, 180.0), p(0.0, 180.0)];
        let r = compute_edge_config(5.0, 0.0, 5.0, 200.0, Some(&stored[..]));
        assert_eq!(r.config(), SegmentConfig::Five);
        let pts = r.points();
        assert_eq!(pts[1], p(5.0, 20.0));
        assert_eq!(pts[3], p(80.0, 180.0));
        assert_eq!(pts[4], p(5.0, 180.0));
    }

    #[test]
    fn detour_snaps_back_when_jog_returns() {
        let stored = [p(0.0, 20.0), p(7.0, 20.0), p(7.0, 180.0), p(0.0, 180.0)];
        let r = compute_edge_config(0.0, 0.0, 0.0, 200.0, Some(&stored[..]));
        assert_eq!(r.config(), SegmentConfig::Single);
        assert_eq!(r.effective_waypoints, None);
    }

    #[test]
    fn unusable_detour_on_offset_edge_uses_default_three() {
        let stored = [p(0.0, 20.0), p(3.0, 20.0), p(3.0, 180.0), p(100.0, 180.0)];
        let r = compute_edge_config(0.0, 0.0, 100.0, 200.0, Some(&stored[..]));
        assert_eq!(r.config(), SegmentConfig::Three);
        assert_eq!(r.points()[1], p(0.0, 100.0));
        assert_eq!(r.effective_waypoints, None);
    }

    #[test]
    fn malformed_waypoints_fall_back() {
        let stored = [p(1.0, 1.0), p(2.0, 2.0), p(3.0, 3.0)];
        let r = compute_edge_config(0.0, 0.0, 100.0, 200.0, Some(&stored[..]));
        assert_eq!(r, compute_edge_config(0.0, 0.0, 100.0, 200.0, None));
    }

    #[test]
    fn waypoint_update_decisions() {
        let stored = [p(0.0, 30.0), p(100.0, 30.0)];
        let kept = compute_edge_config(0.0, 0.0, 100.0, 200.0, Some(&stored[..]));
        assert_eq!(WaypointUpdate::between(&stored, &kept), WaypointUpdate::Keep);

        let moved = compute_edge_config(20.0, 0.0, 100.0, 200.0, Some(&stored[..]));
        assert_eq!(
            WaypointUpdate::between(&stored, &moved),
            WaypointUpdate::Replace(Waypoints::Pair([p(20.0, 30.0), p(100.0, 30.0)]))
        );

        let collapsed = compute_edge_config(100.0, 0.0, 100.0, 200.0, Some(&stored[..]));
        assert_eq!(WaypointUpdate::between(&stored, &collapsed), WaypointUpdate::Clear);
        assert_eq!(WaypointUpdate::between(&[], &collapsed), WaypointUpdate::Keep);
    }

    #[test]
    fn route_json_shape() {
        let r = compute_edge_config(0.0, 0.0, 100.0, 200.0, Some(&[p(0.0, 30.0), p(100.0, 30.0)][..]));
        let v = serde_json::to_value(r).unwrap();
        assert_eq!(v["config"], "three-segment");
        assert_eq!(v["points"].as_array().unwrap().len(), 4);
        assert_eq!(v["effectiveWaypoints"][1]["x"], 100.0);
        let plain = serde_json::to_value(compute_edge_config(0.0, 0.0, 0.0, 10.0, None)).unwrap();
        assert!(plain.get("effectiveWaypoints").is_none());
    }

    #[test]
    fn from_slice_checks_count() {
        let pts = [p(0.0, 0.0), p(0.0, 1.0), p(1.0, 1.0)];
        assert!(matches!(
            RoutePoints::from_slice(SegmentConfig::Three, &pts),
            Err(RouteError::PointCount { expected: 4, got: 3, .. })
        ));
        assert_eq!("5-seg".parse::<SegmentConfig>().unwrap(), SegmentConfig::Five);
    }
}
