//! Translate a handle drag into the waypoint list the editing surface persists.
//!
//! The result is fed back through the router, so a drag that lands within
//! snap distance simplifies on the next render rather than here.

use crate::algorithms::routing::RoutePoints;
use crate::config::RoutingConfig;
use crate::model::{Point, Waypoints};
use crate::RouteError;

pub fn drag_handle(
    route: &RoutePoints,
    handle: usize,
    x: f64,
    y: f64,
    config: &RoutingConfig,
) -> Result<Waypoints, RouteError> {
    if !x.is_finite() || !y.is_finite() {
        return Err(RouteError::NonFinite("drag position".to_string()));
    }
    let out_of_range = || RouteError::HandleIndex {
        config: route.config().as_str(),
        index: handle,
    };
    match (route, handle) {
        (RoutePoints::Single([s, t]), 0) => {
            let inset = if s.y >= t.y {
                config.vertical_offset
            } else {
                config.vertical_offset.min((t.y - s.y) / 3.0)
            };
            Ok(detour(*s, *t, s.y + inset, x, t.y - inset))
        }
        (RoutePoints::Three([s, _, _, t]), 0) => {
            Ok(Waypoints::Pair([Point::new(s.x, y), Point::new(t.x, y)]))
        }
        (RoutePoints::Five([s, h1, v1, _, h2, t]), i) => match i {
            0 => Ok(detour(*s, *t, y, v1.x, h2.y)),
            1 => Ok(detour(*s, *t, h1.y, x, h2.y)),
            2 => Ok(detour(*s, *t, h1.y, v1.x, y)),
            _ => Err(out_of_range()),
        },
        _ => Err(out_of_range()),
    }
}

fn detour(s: Point, t: Point, h1_y: f64, jog_x: f64, h2_y: f64) -> Waypoints {
    Waypoints::Detour([
        Point::new(s.x, h1_y),
        Point::new(jog_x, h1_y),
        Point::new(jog_x, h2_y),
        Point::new(t.x, h2_y),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::routing::{compute_edge_config, SegmentConfig};

    #[test]
    fn pulling_a_straight_edge_sideways_makes_a_detour() {
        let cfg = RoutingConfig::default();
        let r = compute_edge_config(0.0, 0.0, 0.0, 300.0, None);
        let w = drag_handle(&r.points, 0, 120.0, 150.0, &cfg).unwrap();
        let rerouted = compute_edge_config(0.0, 0.0, 0.0, 300.0, Some(w.as_slice()));
        assert_eq!(rerouted.config(), SegmentConfig::Five);
        assert_eq!(rerouted.points()[2].x, 120.0);
        assert_eq!(rerouted.points()[1].y, cfg.vertical_offset);
    }

    #[test]
    fn short_edges_keep_runs_ordered() {
        let cfg = RoutingConfig::default();
        let r = compute_edge_config(0.0, 0.0, 0.0, 30.0, None);
        let w = drag_handle(&r.points, 0, 50.0, 15.0, &cfg).unwrap();
        let pts = w.as_slice();
        assert_eq!(pts[0].y, 10.0);
        assert_eq!(pts[3].y, 20.0);
    }

    #[test]
    fn nudge_within_snap_collapses_on_reroute() {
        let cfg = RoutingConfig::default();
        let r = compute_edge_config(0.0, 0.0, 0.0, 300.0, None);
        let w = drag_handle(&r.points, 0, 6.0, 150.0, &cfg).unwrap();
        let rerouted = compute_edge_config(0.0, 0.0, 0.0, 300.0, Some(w.as_slice()));
        assert_eq!(rerouted.config(), SegmentConfig::Single);
    }

    #[test]
    fn mid_run_drag_moves_y_only() {
        let cfg = RoutingConfig::default();
        let r = compute_edge_config(0.0, 0.0, 100.0, 300.0, None);
        let w = drag_handle(&r.points, 0, 999.0, 60.0, &cfg).unwrap();
        assert_eq!(w, Waypoints::Pair([Point::new(0.0, 60.0), Point::new(100.0, 60.0)]));
    }

    #[test]
    fn five_segment_handles_edit_their_own_run() {
        let cfg = RoutingConfig::default();
        let r = compute_edge_config(0.0, 200.0, 0.0, 0.0, None);
        let before = r.points();
        let w = drag_handle(&r.points, 1, 150.0, 0.0, &cfg).unwrap();
        assert_eq!(w.as_slice()[1], Point::new(150.0, before[1].y));
        let w = drag_handle(&r.points, 2, 0.0, -90.0, &cfg).unwrap();
        assert_eq!(w.as_slice()[3], Point::new(0.0, -90.0));
        assert_eq!(w.as_slice()[1].x, before[2].x);
    }

    #[test]
    fn bad_drags_are_errors() {
        let cfg = RoutingConfig::default();
        let r = compute_edge_config(0.0, 0.0, 0.0, 300.0, None);
        assert!(matches!(
            drag_handle(&r.points, 1, 0.0, 0.0, &cfg),
            Err(RouteError::HandleIndex { index: 1, .. })
        ));
        assert!(matches!(
            drag_handle(&r.points, 0, f64::NAN, 0.0, &cfg),
            Err(RouteError::NonFinite(_))
        ));
    }
}
