use serde::{Deserialize, Serialize};

use crate::algorithms::routing::{RoutePoints, SegmentConfig};
use crate::geometry::math::midpoint;
use crate::model::Point;
use crate::RouteError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cursor {
    HorizontalResize,
    VerticalResize,
}

/// Draggable overlay point. Carries no behavior; the editing surface maps drags
/// back to waypoints (see `drag_handle`).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Handle {
    pub x: f64,
    pub y: f64,
    pub cursor: Cursor,
}

impl Handle {
    fn at(p: Point, cursor: Cursor) -> Self {
        Handle { x: p.x, y: p.y, cursor }
    }
}

pub fn get_handles(points: &RoutePoints) -> Vec<Handle> {
    match points {
        RoutePoints::Single([s, t]) => vec![Handle::at(midpoint(*s, *t), Cursor::HorizontalResize)],
        RoutePoints::Three([_, b1, b2, _]) => vec![Handle::at(midpoint(*b1, *b2), Cursor::VerticalResize)],
        RoutePoints::Five([_, h1, v1, v2, h2, _]) => vec![
            Handle::at(midpoint(*h1, *v1), Cursor::VerticalResize),
            Handle::at(midpoint(*v1, *v2), Cursor::HorizontalResize),
            Handle::at(midpoint(*v2, *h2), Cursor::VerticalResize),
        ],
    }
}

/// `get_handles` for callers holding the tag and an untyped point list.
pub fn handles_for(config: SegmentConfig, points: &[Point]) -> Result<Vec<Handle>, RouteError> {
    RoutePoints::from_slice(config, points).map(|rp| get_handles(&rp))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::routing::compute_edge_config;

    #[test]
    fn single_handle_sits_mid_line() {
        let r = compute_edge_config(0.0, 0.0, 0.0, 100.0, None);
        assert_eq!(
            get_handles(&r.points),
            vec![Handle { x: 0.0, y: 50.0, cursor: Cursor::HorizontalResize }]
        );
    }

    #[test]
    fn three_handle_sits_mid_run() {
        let r = compute_edge_config(0.0, 0.0, 80.0, 100.0, None);
        assert_eq!(
            get_handles(&r.points),
            vec![Handle { x: 40.0, y: 50.0, cursor: Cursor::VerticalResize }]
        );
    }

    #[test]
    fn five_handles_follow_the_runs() {
        let r = compute_edge_config(0.0, 100.0, 0.0, 0.0, None);
        let pts = r.points();
        let hs = get_handles(&r.points);
        let cursors: Vec<_> = hs.iter().map(|h| h.cursor).collect();
        assert_eq!(cursors, [Cursor::VerticalResize, Cursor::HorizontalResize, Cursor::VerticalResize]);
        assert_eq!((hs[0].x, hs[0].y), (0.5 * (pts[1].x + pts[2].x), pts[1].y));
        assert_eq!(hs[1].x, pts[2].x);
        assert_eq!(hs[2].y, pts[4].y);
    }

    #[test]
    fn loose_points_must_match_tag() {
        let pts = [Point::new(0.0, 0.0), Point::new(0.0, 10.0)];
        assert_eq!(handles_for(SegmentConfig::Single, &pts).unwrap().len(), 1);
        assert!(handles_for(SegmentConfig::Five, &pts).is_err());
        assert_eq!(
            serde_json::to_value(Cursor::HorizontalResize).unwrap(),
            serde_json::json!("horizontal-resize")
        );
    }
}
