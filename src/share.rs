//! Share action: format the totals and hand them to the platform share
//! mechanism (the Web Share API).
//!
//! `navigator.share` only exists on some hosts (mobile browsers, mostly).
//! Its absence is the one externally visible failure in the app, surfaced
//! as [`ShareError::HandlerUnavailable`] and reported via a toast; the
//! sales engine is never consulted and never affected.

use std::fmt;

use crate::state::SalesState;

/// Failure to hand text to an external share handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShareError {
    /// No share handler exists on this host.
    HandlerUnavailable,
}

impl fmt::Display for ShareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShareError::HandlerUnavailable => write!(f, "no share handler available"),
        }
    }
}

/// The text handed to the share sheet.
pub fn share_message(state: &SalesState) -> String {
    format!(
        "{} desserts sold, total revenue ${}",
        state.total_sold, state.total_revenue
    )
}

/// Open the browser share sheet with `text`.
///
/// Detects `navigator.share` via reflection rather than a static binding:
/// desktop browsers commonly omit it, and a missing handler must map to
/// `HandlerUnavailable` instead of a JS exception. The returned promise is
/// fire-and-forget; a user cancelling the sheet is not an error we track.
#[cfg(target_arch = "wasm32")]
pub fn open_share_sheet(text: &str) -> Result<(), ShareError> {
    use js_sys::{Function, Object, Reflect};
    use web_sys::wasm_bindgen::{JsCast, JsValue};

    let window = web_sys::window().ok_or(ShareError::HandlerUnavailable)?;
    let navigator = window.navigator();

    let share_fn = Reflect::get(&navigator, &JsValue::from_str("share"))
        .ok()
        .and_then(|v| v.dyn_into::<Function>().ok())
        .ok_or(ShareError::HandlerUnavailable)?;

    let data = Object::new();
    Reflect::set(&data, &JsValue::from_str("text"), &JsValue::from_str(text))
        .map_err(|_| ShareError::HandlerUnavailable)?;

    share_fn
        .call1(&navigator, &data)
        .map(|_promise| ())
        .map_err(|_| ShareError::HandlerUnavailable)
}

/// Native builds have no share handler at all; tests exercise the failure
/// path through this stub.
#[cfg(not(target_arch = "wasm32"))]
pub fn open_share_sheet(_text: &str) -> Result<(), ShareError> {
    Err(ShareError::HandlerUnavailable)
}
