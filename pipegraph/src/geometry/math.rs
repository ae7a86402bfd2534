use crate::model::Point;

use super::tolerance::EPS_LEN;

#[inline]
pub fn midpoint(a: Point, b: Point) -> Point {
    Point { x: 0.5 * (a.x + b.x), y: 0.5 * (a.y + b.y) }
}

#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    let dx = b.x - a.x; let dy = b.y - a.y;
    (dx*dx + dy*dy).sqrt()
}

#[inline]
pub fn lerp(a: Point, b: Point, t: f64) -> Point {
    Point { x: a.x + (b.x - a.x) * t, y: a.y + (b.y - a.y) * t }
}

/// Point `dist` along `from -> to`; `from` itself for a zero-length run.
pub fn step_toward(from: Point, to: Point, dist: f64) -> Point {
    let len = distance(from, to);
    if len <= EPS_LEN { return from; }
    lerp(from, to, dist / len)
}

pub fn polyline_length(points: &[Point]) -> f64 {
    points.windows(2).map(|w| distance(w[0], w[1])).sum()
}

/// Point at arc length `target` along the polyline, clamped to its ends.
pub fn point_at_length(points: &[Point], target: f64) -> Option<Point> {
    let first = *points.first()?;
    if target <= 0.0 { return Some(first); }
    let mut acc = 0.0;
    for w in points.windows(2) {
        let seg = distance(w[0], w[1]);
        if seg > EPS_LEN && acc + seg >= target {
            return Some(lerp(w[0], w[1], (target - acc) / seg));
        }
        acc += seg;
    }
    points.last().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_and_sampling() {
        let pts = [Point::new(0.0, 0.0), Point::new(0.0, 10.0), Point::new(30.0, 10.0)];
        assert_eq!(polyline_length(&pts), 40.0);
        assert_eq!(point_at_length(&pts, 20.0), Some(Point::new(10.0, 10.0)));
        assert_eq!(point_at_length(&pts, 500.0), Some(Point::new(30.0, 10.0)));
        assert_eq!(point_at_length(&[], 1.0), None);
        assert_eq!(step_toward(pts[0], pts[0], 5.0), pts[0]);
    }
}
