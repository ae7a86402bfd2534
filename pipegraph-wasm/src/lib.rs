use wasm_bindgen::prelude::*;
mod api;
mod error;
mod interop;

pub use api::{
    compute_edge_config, compute_edge_config_res, get_connection_error, get_connection_error_res,
    get_handles, get_handles_res, is_valid_connection, set_panic_hook,
};

/// Edge router bound to one routing configuration.
#[wasm_bindgen]
pub struct EdgeRouter { pub(crate) inner: pipegraph::Router }

impl EdgeRouter {
    pub fn rs_new() -> EdgeRouter { EdgeRouter { inner: pipegraph::Router::default() } }
    pub fn rs_config(&self) -> &pipegraph::RoutingConfig { self.inner.config() }
}
