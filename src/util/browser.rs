//! Window scroll helpers.
//!
//! Thin wrappers over `web-sys` so components never touch the window
//! directly. Outside a browser the getters return neutral values instead of
//! panicking, which keeps the pure callers testable on the host.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

/// Scroll offset, in px, past which the home header drops its transparency.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// Whether the given vertical offset counts as "scrolled" for the header.
pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD
}

/// Current vertical scroll offset of the window, or 0.0 without a browser.
pub fn scroll_offset() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Reset the window scroll position to the top. Performed on every
/// navigation so each screen opens at its beginning.
pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}
