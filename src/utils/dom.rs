//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use web_sys::{Storage, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// High-resolution timestamp in milliseconds.
///
/// Falls back to `Date.now()` when the Performance API is unavailable.
pub fn now_ms() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}


/// Evaluate a media query right now.
///
/// `None` when there is no window or the query is not supported.
pub fn match_media(query: &str) -> Option<bool> {
    window()?.match_media(query).ok()?.map(|list| list.matches())
}
