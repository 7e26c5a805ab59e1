//! Browser helpers: window scrolling, body scroll lock, intersection watches.
//!
//! All functions are best effort. In the browser a failed DOM call is
//! ignored; on the server every helper is a no-op so SSR stays
//! deterministic. A browser without `IntersectionObserver` simply gets no
//! watch, which leaves scroll tracking inert.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, JsValue, closure::Closure};

/// Attribute carrying a target's position in an [`IntersectionWatch`].
pub const WATCH_INDEX_ATTR: &str = "data-watch-index";

/// Current vertical scroll offset of the window.
pub fn scroll_y() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Height of the layout viewport.
pub fn viewport_height() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.inner_height().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Scroll the window to `top`, smoothly or instantly.
pub fn scroll_window_to(top: f64, smooth: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let opts = web_sys::ScrollToOptions::new();
            opts.set_top(top);
            opts.set_behavior(scroll_behavior(smooth));
            window.scroll_to_with_scroll_to_options(&opts);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (top, smooth);
    }
}

/// Lock or release page scrolling behind a modal.
pub fn set_body_scroll_locked(locked: bool) {
    #[cfg(feature = "hydrate")]
    {
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return;
        };
        let style = body.style();
        if locked {
            let _ = style.set_property("overflow", "hidden");
        } else {
            let _ = style.remove_property("overflow");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = locked;
    }
}

/// Smoothly scroll `element` horizontally to `left`.
#[cfg(feature = "hydrate")]
pub fn scroll_element_left(element: &web_sys::Element, left: f64) {
    let opts = web_sys::ScrollToOptions::new();
    opts.set_left(left);
    opts.set_behavior(scroll_behavior(true));
    element.scroll_to_with_scroll_to_options(&opts);
}

#[cfg(feature = "hydrate")]
fn scroll_behavior(smooth: bool) -> web_sys::ScrollBehavior {
    if smooth { web_sys::ScrollBehavior::Smooth } else { web_sys::ScrollBehavior::Instant }
}

/// What an intersection callback wants to happen next.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WatchControl {
    Continue,
    Disconnect,
}

/// An `IntersectionObserver` plus its callback. Dropping it disconnects.
///
/// The callback receives `(index, is_intersecting)` for every entry of one
/// observer notification, in the order the browser reported them. The index
/// comes from [`WATCH_INDEX_ATTR`] on the target and defaults to 0.
#[cfg(feature = "hydrate")]
pub struct IntersectionWatch {
    observer: web_sys::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
}

#[cfg(feature = "hydrate")]
impl IntersectionWatch {
    pub fn new<F>(targets: &[web_sys::Element], root_margin: &str, threshold: f64, mut on_reports: F) -> Option<Self>
    where
        F: FnMut(Vec<(usize, bool)>) -> WatchControl + 'static,
    {
        let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                let reports = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<web_sys::IntersectionObserverEntry>().ok())
                    .map(|entry| (watch_index(&entry.target()), entry.is_intersecting()))
                    .collect();
                if on_reports(reports) == WatchControl::Disconnect {
                    observer.disconnect();
                }
            },
        );

        let init = web_sys::IntersectionObserverInit::new();
        init.set_root_margin(root_margin);
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            match web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
                Ok(observer) => observer,
                Err(_) => {
                    log::warn!("IntersectionObserver unavailable; scroll tracking disabled");
                    return None;
                }
            };
        for target in targets {
            observer.observe(target);
        }
        Some(Self { observer, _callback: callback })
    }
}

#[cfg(feature = "hydrate")]
impl Drop for IntersectionWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[cfg(feature = "hydrate")]
fn watch_index(target: &web_sys::Element) -> usize {
    target
        .get_attribute(WATCH_INDEX_ATTR)
        .and_then(|v| v.parse().ok())
        .unwrap_or(0)
}
