//! Navigation shell state: scrolled styling and the mobile menu.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Scroll distance after which the navbar switches to its opaque style.
pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub scrolled: bool,
    pub mobile_open: bool,
}

impl NavState {
    pub fn on_scroll(&mut self, scroll_y: f64) {
        self.scrolled = scroll_y > SCROLLED_THRESHOLD_PX;
    }

    pub fn toggle_mobile(&mut self) {
        self.mobile_open = !self.mobile_open;
    }

    pub fn on_route_change(&mut self) {
        self.mobile_open = false;
    }
}

/// Whether a nav link for `link_path` is the current route.
pub fn is_current(pathname: &str, link_path: &str) -> bool {
    let trimmed = pathname.trim_end_matches('/');
    let current = if trimmed.is_empty() { "/" } else { trimmed };
    current == link_path
}

/// The floating scroll-to-top button shows once a full viewport is scrolled.
pub fn scroll_to_top_visible(scroll_y: f64, viewport_height: f64) -> bool {
    scroll_y > viewport_height
}
