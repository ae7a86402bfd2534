// Default routing constants (px) and comparison helpers

pub const SNAP_THRESHOLD: f64 = 10.0;           // x alignment tolerance for collapsing routes
pub const LOOPBACK_VERTICAL_OFFSET: f64 = 40.0; // h1 below source, h2 above target
pub const LOOPBACK_LATERAL_OFFSET: f64 = 60.0;  // default jog past the widest endpoint
pub const CORNER_RADIUS: f64 = 8.0;             // rounding of route corners when drawn

pub const EPS_LEN: f64 = 1e-9;                  // zero-length run threshold

#[inline] pub fn within(a: f64, b: f64, tol: f64) -> bool { (a - b).abs() <= tol }
#[inline] pub fn clamp(x: f64, lo: f64, hi: f64) -> f64 { x.max(lo).min(hi) }
