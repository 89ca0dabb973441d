//! Loading the simulation from the backend.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::error::{FetchError, FetchResult};
use crate::state::frames::{LoadedFrames, decode_simulation};

fn network(err: JsValue) -> FetchError {
    FetchError::Network(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

/// One GET against the simulation endpoint. No retry, no fallback.
pub async fn fetch_simulation(url: &str, default_radius: f64) -> FetchResult<LoadedFrames> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;
    let started = js_sys::Date::now();
    log::info!("fetching simulation from {}", url);

    let response: Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(network)?
        .dyn_into()
        .map_err(network)?;
    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }
    let body = JsFuture::from(response.text().map_err(network)?)
        .await
        .map_err(network)?
        .as_string()
        .ok_or_else(|| FetchError::Network("response body is not text".into()))?;

    let loaded = decode_simulation(&body, default_radius)?;
    log::info!(
        "simulation loaded in {:.0} ms: {} frames",
        js_sys::Date::now() - started,
        loaded.frames.len()
    );
    Ok(loaded)
}
