use crate::EdgeRouter;
use crate::{error, interop};
use pipegraph::{
    Connection, EdgeRoute, Endpoints, Point, RoutePoints, RoutingConfig, SegmentConfig,
    WaypointUpdate,
};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn to_js<T: serde::Serialize + ?Sized>(v: &T) -> JsValue {
    serde_wasm_bindgen::to_value(v).unwrap_or(JsValue::NULL)
}

fn check_finite(sx: f64, sy: f64, tx: f64, ty: f64) -> Result<Endpoints, JsValue> {
    let ends = Endpoints::new(sx, sy, tx, ty);
    if ends.is_finite() {
        return Ok(ends);
    }
    for (name, v) in [("sourceX", sx), ("sourceY", sy), ("targetX", tx), ("targetY", ty)] {
        if !v.is_finite() {
            return Err(error::non_finite(name));
        }
    }
    Ok(ends)
}

fn route_points(config: &str, points: JsValue) -> Result<RoutePoints, JsValue> {
    let config: SegmentConfig = config.parse().map_err(|e| error::route(&e))?;
    let pts: Vec<Point> = interop::decode("points", points).map_err(error::invalid_input)?;
    RoutePoints::from_slice(config, &pts).map_err(|e| error::route(&e))
}

fn update_js(update: WaypointUpdate) -> JsValue {
    let o = interop::new_obj();
    let action = match update {
        WaypointUpdate::Keep => "keep",
        WaypointUpdate::Replace(w) => {
            interop::set_kv(&o, "waypoints", &to_js(w.as_slice()));
            "replace"
        }
        WaypointUpdate::Clear => "clear",
    };
    interop::set_kv(&o, "action", &JsValue::from_str(action));
    o.into()
}

// Free functions use the default routing configuration.

#[wasm_bindgen(js_name = computeEdgeConfig)]
pub fn compute_edge_config(sx: f64, sy: f64, tx: f64, ty: f64, waypoints: JsValue) -> JsValue {
    EdgeRouter::rs_new().route(sx, sy, tx, ty, waypoints)
}

#[wasm_bindgen(js_name = computeEdgeConfigRes)]
pub fn compute_edge_config_res(sx: f64, sy: f64, tx: f64, ty: f64, waypoints: JsValue) -> JsValue {
    EdgeRouter::rs_new().route_res(sx, sy, tx, ty, waypoints)
}

#[wasm_bindgen(js_name = getHandles)]
pub fn get_handles(config: &str, points: JsValue) -> JsValue {
    match route_points(config, points) {
        Ok(rp) => to_js(&pipegraph::get_handles(&rp)),
        Err(_) => to_js::<[pipegraph::Handle]>(&[]),
    }
}

#[wasm_bindgen(js_name = getHandlesRes)]
pub fn get_handles_res(config: &str, points: JsValue) -> JsValue {
    match route_points(config, points) {
        Ok(rp) => error::ok(to_js(&pipegraph::get_handles(&rp))),
        Err(e) => e,
    }
}

#[wasm_bindgen(js_name = isValidConnection)]
pub fn is_valid_connection(candidate: JsValue, nodes: JsValue, edges: JsValue) -> bool {
    connection_error(candidate, nodes, edges).is_none()
}

/// `null` when legal, otherwise the reason to show the user.
#[wasm_bindgen(js_name = getConnectionError)]
pub fn get_connection_error(candidate: JsValue, nodes: JsValue, edges: JsValue) -> Option<String> {
    connection_error(candidate, nodes, edges)
}

#[wasm_bindgen(js_name = getConnectionErrorRes)]
pub fn get_connection_error_res(candidate: JsValue, nodes: JsValue, edges: JsValue) -> JsValue {
    let connection: Connection = match interop::decode("connection", candidate) {
        Ok(c) => c,
        Err(e) => return error::invalid_input(e),
    };
    let (nodes, edges) = match interop::graph(nodes, edges) {
        Ok(g) => g,
        Err(e) => return error::invalid_input(e),
    };
    match pipegraph::get_connection_error(&connection, &nodes, &edges) {
        None => error::ok(JsValue::NULL),
        Some(e) => error::connection(e),
    }
}

// Undecodable graph data refuses the connection with the decode message.
fn connection_error(candidate: JsValue, nodes: JsValue, edges: JsValue) -> Option<String> {
    let decoded = interop::decode::<Connection>("connection", candidate)
        .and_then(|c| interop::graph(nodes, edges).map(|(n, e)| (c, n, e)));
    match decoded {
        Ok((c, n, e)) => pipegraph::get_connection_error(&c, &n, &e).map(|e| e.to_string()),
        Err(msg) => {
            interop::warn(&msg);
            Some(msg)
        }
    }
}

#[wasm_bindgen]
impl EdgeRouter {
    #[wasm_bindgen(constructor)]
    pub fn new() -> EdgeRouter {
        EdgeRouter::rs_new()
    }

    /// `{ok, value: EdgeRouter}` or `{ok: false, error}` for a bad config.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(json: &str) -> JsValue {
        match RoutingConfig::from_json(json).and_then(pipegraph::Router::new) {
            Ok(inner) => error::ok(JsValue::from(EdgeRouter { inner })),
            Err(e) => error::route(&e),
        }
    }

    /// Same as `withConfig`, for callers holding a plain object.
    #[wasm_bindgen(js_name = withConfigObject)]
    pub fn with_config_object(v: JsValue) -> JsValue {
        let value = match serde_wasm_bindgen::from_value::<serde_json::Value>(v) {
            Ok(value) => value,
            Err(e) => return error::invalid_input(format!("invalid config: {}", e)),
        };
        match RoutingConfig::from_value(value).and_then(pipegraph::Router::new) {
            Ok(inner) => error::ok(JsValue::from(EdgeRouter { inner })),
            Err(e) => error::route(&e),
        }
    }

    #[wasm_bindgen(getter = snapThreshold)]
    pub fn snap_threshold(&self) -> f64 {
        self.rs_config().snap_threshold
    }

    #[wasm_bindgen(getter = cornerRadius)]
    pub fn corner_radius(&self) -> f64 {
        self.rs_config().corner_radius
    }

    pub fn route(&self, sx: f64, sy: f64, tx: f64, ty: f64, waypoints: JsValue) -> JsValue {
        to_js(&self.rs_route(sx, sy, tx, ty, waypoints))
    }

    #[wasm_bindgen(js_name = routeRes)]
    pub fn route_res(&self, sx: f64, sy: f64, tx: f64, ty: f64, waypoints: JsValue) -> JsValue {
        if let Err(e) = check_finite(sx, sy, tx, ty) {
            return e;
        }
        error::ok(self.route(sx, sy, tx, ty, waypoints))
    }

    /// Route points flattened as `[x0, y0, x1, y1, ...]`.
    #[wasm_bindgen(js_name = routeFlat)]
    pub fn route_flat(&self, sx: f64, sy: f64, tx: f64, ty: f64, waypoints: JsValue) -> JsValue {
        interop::arr_f64(self.rs_route(sx, sy, tx, ty, waypoints).points()).into()
    }

    #[wasm_bindgen(js_name = dragHandle)]
    pub fn drag_handle(&self, config: &str, points: JsValue, handle: u32, x: f64, y: f64) -> JsValue {
        let rp = match route_points(config, points) {
            Ok(rp) => rp,
            Err(e) => return e,
        };
        match pipegraph::drag_handle(&rp, handle as usize, x, y, self.rs_config()) {
            Ok(w) => error::ok(to_js(w.as_slice())),
            Err(e) => error::route(&e),
        }
    }

    #[wasm_bindgen(js_name = svgPath)]
    pub fn svg_path(&self, config: &str, points: JsValue) -> Option<String> {
        route_points(config, points)
            .ok()
            .map(|rp| rp.to_svg_path(self.rs_config().corner_radius))
    }

    #[wasm_bindgen(js_name = labelPosition)]
    pub fn label_position(&self, config: &str, points: JsValue) -> JsValue {
        match route_points(config, points) {
            Ok(rp) => to_js(&rp.label_position()),
            Err(_) => JsValue::NULL,
        }
    }

    /// `{action: "keep" | "replace" | "clear", waypoints?}` for the surface to persist.
    #[wasm_bindgen(js_name = waypointUpdate)]
    pub fn waypoint_update(&self, sx: f64, sy: f64, tx: f64, ty: f64, stored: JsValue) -> JsValue {
        let present = !(stored.is_null() || stored.is_undefined());
        let Some(stored) = interop::stored_waypoints(stored) else {
            // an undecodable stored value is as unusable as a malformed list
            let update = if present { WaypointUpdate::Clear } else { WaypointUpdate::Keep };
            return update_js(update);
        };
        let route = self.inner.route(Endpoints::new(sx, sy, tx, ty), Some(&stored[..]));
        update_js(WaypointUpdate::between(&stored, &route))
    }
}

impl Default for EdgeRouter {
    fn default() -> Self {
        EdgeRouter::rs_new()
    }
}

impl EdgeRouter {
    pub fn rs_route(&self, sx: f64, sy: f64, tx: f64, ty: f64, waypoints: JsValue) -> EdgeRoute {
        let stored = interop::stored_waypoints(waypoints);
        self.inner.route(Endpoints::new(sx, sy, tx, ty), stored.as_deref())
    }
}
