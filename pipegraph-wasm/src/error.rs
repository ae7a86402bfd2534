use js_sys::Object;
use pipegraph::{ConnectionError, RouteError};
use wasm_bindgen::prelude::*;

use crate::interop::{new_obj, set_kv};

pub fn ok(v: JsValue) -> JsValue {
    let o = new_obj();
    set_kv(&o, "ok", &JsValue::from_bool(true));
    set_kv(&o, "value", &v);
    o.into()
}

pub fn err(code: &'static str, message: impl Into<String>, data: Option<JsValue>) -> JsValue {
    let root = new_obj();
    set_kv(&root, "ok", &JsValue::from_bool(false));
    let e = new_obj();
    set_kv(&e, "code", &JsValue::from_str(code));
    set_kv(&e, "message", &JsValue::from_str(&message.into()));
    if let Some(d) = data { set_kv(&e, "data", &d); }
    set_kv(&root, "error", &e.into());
    root.into()
}

fn data(pairs: &[(&str, JsValue)]) -> JsValue {
    let d: Object = new_obj();
    for (k, v) in pairs { set_kv(&d, k, v); }
    d.into()
}

#[inline]
pub fn non_finite(param: &str) -> JsValue {
    err("non_finite", format!("parameter '{}' must be finite", param), Some(data(&[("param", JsValue::from_str(param))])))
}

#[inline]
pub fn invalid_input(message: impl Into<String>) -> JsValue {
    err("invalid_input", message, None)
}

pub fn route(e: &RouteError) -> JsValue {
    match e {
        RouteError::WaypointCount(n) => err("invalid_waypoints", e.to_string(), Some(data(&[("got", JsValue::from_f64(*n as f64))]))),
        RouteError::PointCount { config, expected, got } => err(
            "point_count",
            e.to_string(),
            Some(data(&[
                ("config", JsValue::from_str(config)),
                ("expected", JsValue::from_f64(*expected as f64)),
                ("got", JsValue::from_f64(*got as f64)),
            ])),
        ),
        RouteError::HandleIndex { index, .. } => err("invalid_handle", e.to_string(), Some(data(&[("index", JsValue::from_f64(*index as f64))]))),
        RouteError::NonFinite(what) => non_finite(what),
        RouteError::Config(_) => err("invalid_config", e.to_string(), None),
    }
}

pub fn connection(e: ConnectionError) -> JsValue {
    err(e.code(), e.to_string(), None)
}
