//! I/O shell around the render pipeline: the state fetch, the embedded
//! bootstrap payload, and service worker registration.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::Response;

use crate::model::PowerState;
use crate::util::cerror;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("no window in this context")]
    NoWindow,
    #[error("request failed: {0}")]
    Request(String),
    #[error("unexpected response status, expected 200, was {0}")]
    Status(u16),
    #[error("failed to read response body: {0}")]
    Body(String),
    #[error("failed to decode power state: {0}")]
    Decode(#[from] serde_json::Error),
}

fn js_err(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

pub async fn fetch_state(url: &str) -> Result<PowerState, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|err| FetchError::Request(js_err(err)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|err| FetchError::Request(js_err(err)))?;
    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }
    let body = JsFuture::from(
        response
            .text()
            .map_err(|err| FetchError::Body(js_err(err)))?,
    )
    .await
    .map_err(|err| FetchError::Body(js_err(err)))?;
    let body = body.as_string().unwrap_or_default();
    Ok(serde_json::from_str(&body)?)
}

/// First paint uses the payload the host page embeds as
/// `window.INITIAL_STATE`, so it never waits on a network round trip. A
/// missing or unreadable value falls back to the pending state.
pub fn bootstrap_state() -> PowerState {
    match embedded_state() {
        Ok(Some(state)) => state,
        Ok(None) => PowerState::pending(),
        Err(err) => {
            cerror(&format!("failed to decode embedded state: {err}"));
            PowerState::pending()
        }
    }
}

fn embedded_state() -> Result<Option<PowerState>, serde_json::Error> {
    let Some(window) = web_sys::window() else {
        return Ok(None);
    };
    let raw = js_sys::Reflect::get(&window, &JsValue::from_str("INITIAL_STATE"))
        .unwrap_or(JsValue::UNDEFINED);
    if raw.is_undefined() || raw.is_null() {
        return Ok(None);
    }
    let Ok(json) = js_sys::JSON::stringify(&raw) else {
        return Ok(None);
    };
    let json: String = json.into();
    serde_json::from_str(&json).map(Some)
}

/// Passthrough worker registered once at load; it exists only to make the
/// page installable. Registration failure degrades silently.
pub fn register_service_worker(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let promise = window.navigator().service_worker().register(url);
    spawn_local(async move {
        if let Err(err) = JsFuture::from(promise).await {
            cerror(&format!(
                "service worker registration failed: {}",
                js_err(err)
            ));
        }
    });
}
