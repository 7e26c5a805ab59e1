//! Floating "back to top" button.

use leptos::prelude::*;

use crate::util::dom;

#[component]
pub fn ScrollToTopButton() -> impl IntoView {
    let visible = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let next = crate::state::nav::scroll_to_top_visible(dom::scroll_y(), dom::viewport_height());
            if visible.get_untracked() != next {
                visible.set(next);
            }
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <Show when=move || visible.get()>
            <button
                class="scroll-top"
                aria-label="Scroll to top"
                on:click=move |_| dom::scroll_window_to(0.0, true)
            >
                "↑"
            </button>
        </Show>
    }
}
