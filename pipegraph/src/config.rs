use serde::{Deserialize, Serialize};

use crate::geometry::tolerance::{
    CORNER_RADIUS, LOOPBACK_LATERAL_OFFSET, LOOPBACK_VERTICAL_OFFSET, SNAP_THRESHOLD,
};
use crate::RouteError;

/// Tunables for the geometry engine. Missing JSON fields take the defaults.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RoutingConfig {
    /// Distance (px) within which two x coordinates count as aligned.
    pub snap_threshold: f64,
    /// Vertical distance of the loopback runs from their endpoints.
    pub vertical_offset: f64,
    /// Horizontal distance of the default loopback jog past the widest endpoint.
    pub lateral_offset: f64,
    /// Corner rounding used when drawing multi-segment routes.
    pub corner_radius: f64,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            snap_threshold: SNAP_THRESHOLD,
            vertical_offset: LOOPBACK_VERTICAL_OFFSET,
            lateral_offset: LOOPBACK_LATERAL_OFFSET,
            corner_radius: CORNER_RADIUS,
        }
    }
}

impl RoutingConfig {
    pub fn from_json(s: &str) -> Result<Self, RouteError> {
        let value: serde_json::Value =
            serde_json::from_str(s).map_err(|e| RouteError::Config(e.to_string()))?;
        Self::from_value(value)
    }

    /// Config from an already parsed document. Only objects are accepted.
    pub fn from_value(value: serde_json::Value) -> Result<Self, RouteError> {
        // serde would also fill the struct positionally from an array
        if !value.is_object() {
            return Err(RouteError::Config("routing config must be a JSON object".to_string()));
        }
        let config = serde_json::from_value::<RoutingConfig>(value)
            .map_err(|e| RouteError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), RouteError> {
        let fields = [
            ("snapThreshold", self.snap_threshold, false),
            ("verticalOffset", self.vertical_offset, true),
            ("lateralOffset", self.lateral_offset, true),
            ("cornerRadius", self.corner_radius, false),
        ];
        for (name, value, strictly_positive) in fields {
            if !value.is_finite() {
                return Err(RouteError::Config(format!("{} must be finite", name)));
            }
            if value < 0.0 || (strictly_positive && value == 0.0) {
                return Err(RouteError::Config(format!("{} out of range: {}", name, value)));
            }
        }
        Ok(())
    }
}
