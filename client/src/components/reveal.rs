//! Fade content in the first time it scrolls into view.

use leptos::prelude::*;

/// Margin shrinking the viewport so content reveals slightly after entering.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

#[component]
pub fn Reveal(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    let visible = RwSignal::new(false);
    let node = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        use crate::util::dom::{IntersectionWatch, WatchControl};

        let watch = StoredValue::new_local(None::<IntersectionWatch>);
        Effect::new(move || {
            let Some(el) = node.get() else {
                return;
            };
            if visible.get_untracked() {
                return;
            }
            let target: web_sys::Element = el.into();
            let created = IntersectionWatch::new(&[target], REVEAL_ROOT_MARGIN, 0.0, move |reports| {
                if reports.iter().any(|(_, hit)| *hit) {
                    visible.set(true);
                    WatchControl::Disconnect
                } else {
                    WatchControl::Continue
                }
            });
            // Without an observer, show everything immediately.
            if created.is_none() {
                visible.set(true);
            }
            watch.set_value(created);
        });
    }

    view! {
        <div node_ref=node class=format!("reveal {class}") class:reveal--visible=move || visible.get()>
            {children()}
        </div>
    }
}
