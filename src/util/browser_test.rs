use super::*;

// =============================================================
// is_scrolled threshold
// =============================================================

#[test]
fn top_of_page_is_not_scrolled() {
    assert!(!is_scrolled(0.0));
}

#[test]
fn threshold_itself_is_not_scrolled() {
    assert!(!is_scrolled(SCROLL_THRESHOLD));
}

#[test]
fn past_threshold_is_scrolled() {
    assert!(is_scrolled(SCROLL_THRESHOLD + 1.0));
    assert!(is_scrolled(800.0));
}
