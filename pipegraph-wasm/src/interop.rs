use js_sys::{Float64Array, Object, Reflect};
use pipegraph::{Edge, Node, Point};
use serde::de::DeserializeOwned;
use wasm_bindgen::JsValue;

pub fn new_obj() -> Object { Object::new() }
pub fn set_kv(obj: &Object, k: &str, v: &JsValue) {
    let _ = Reflect::set(obj, &JsValue::from_str(k), v);
}
pub fn arr_f64(points: &[Point]) -> Float64Array {
    let flat: Vec<f64> = points.iter().flat_map(|p| [p.x, p.y]).collect();
    Float64Array::from(flat.as_slice())
}

pub fn warn(msg: &str) {
    web_sys::console::warn_1(&JsValue::from_str(msg));
}

pub fn decode<T: DeserializeOwned>(what: &str, v: JsValue) -> Result<T, String> {
    serde_wasm_bindgen::from_value(v).map_err(|e| format!("invalid {}: {}", what, e))
}

/// Persisted waypoints are read leniently: anything undecodable counts as none.
pub fn stored_waypoints(v: JsValue) -> Option<Vec<Point>> {
    if v.is_null() || v.is_undefined() { return None; }
    match decode::<Vec<Point>>("waypoints", v) {
        Ok(pts) => Some(pts),
        Err(e) => { warn(&e); None }
    }
}

pub fn graph(nodes: JsValue, edges: JsValue) -> Result<(Vec<Node>, Vec<Edge>), String> {
    let nodes = decode::<Vec<Node>>("nodes", nodes)?;
    let edges = if edges.is_null() || edges.is_undefined() { Vec::new() } else { decode::<Vec<Edge>>("edges", edges)? };
    Ok((nodes, edges))
}
