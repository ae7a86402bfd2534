//! Drawing helpers for routed connectors.
//!
//! Multi-segment routes are drawn with every interior corner replaced by a
//! quadratic curve, so the connector reads as one continuous stroke.

use crate::algorithms::routing::RoutePoints;
use crate::geometry::math::{distance, point_at_length, polyline_length, step_toward};
use crate::geometry::tolerance::clamp;
use crate::model::Point;

impl RoutePoints {
    /// SVG `d` attribute for this route.
    pub fn to_svg_path(&self, corner_radius: f64) -> String {
        match self {
            RoutePoints::Single([s, t]) => format!("M {} {} L {} {}", s.x, s.y, t.x, t.y),
            RoutePoints::Three(pts) => rounded_path(pts, corner_radius),
            RoutePoints::Five(pts) => rounded_path(pts, corner_radius),
        }
    }

    pub fn length(&self) -> f64 {
        polyline_length(self.as_slice())
    }

    /// Anchor for an edge label: halfway along the route.
    pub fn label_position(&self) -> Point {
        let pts = self.as_slice();
        point_at_length(pts, 0.5 * self.length()).unwrap_or(pts[0])
    }
}

fn rounded_path(pts: &[Point], radius: f64) -> String {
    let Some((first, rest)) = pts.split_first() else { return String::new(); };
    let mut d = format!("M {} {}", first.x, first.y);
    for i in 1..pts.len() - 1 {
        let (prev, corner, next) = (pts[i - 1], pts[i], pts[i + 1]);
        // never eat more than half of either adjoining run
        let r = clamp(radius, 0.0, 0.5 * distance(prev, corner).min(distance(corner, next)));
        let enter = step_toward(corner, prev, r);
        let leave = step_toward(corner, next, r);
        d.push_str(&format!(" L {} {} Q {} {} {} {}", enter.x, enter.y, corner.x, corner.y, leave.x, leave.y));
    }
    if let Some(last) = rest.last() {
        d.push_str(&format!(" L {} {}", last.x, last.y));
    }
    d
}
