#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn scroll_y_is_zero_off_browser() {
    assert_eq!(scroll_y(), 0.0);
}

#[test]
fn viewport_height_is_zero_off_browser() {
    assert_eq!(viewport_height(), 0.0);
}

#[test]
fn scroll_and_lock_are_noops_but_callable() {
    scroll_window_to(120.0, true);
    scroll_window_to(0.0, false);
    set_body_scroll_locked(true);
    set_body_scroll_locked(false);
}

#[test]
fn watch_index_attribute_name_is_data_attribute() {
    assert!(WATCH_INDEX_ATTR.starts_with("data-"));
}
