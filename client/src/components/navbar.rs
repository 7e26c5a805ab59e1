//! Fixed top navigation with a mobile slide-out menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! The bar turns opaque once the page scrolls past a small threshold. A route
//! change closes the mobile menu and jumps the window back to the top.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::content::site::{NAV_LINKS, PRIMARY_PHONE};
use crate::state::nav::{NavState, is_current};
use crate::util::dom;

#[component]
pub fn Navbar() -> impl IntoView {
    let nav = RwSignal::new(NavState::default());
    let pathname = use_location().pathname;

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || nav.update(|n| n.on_scroll(dom::scroll_y())));
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let y = dom::scroll_y();
            nav.maybe_update(|n| {
                let before = n.scrolled;
                n.on_scroll(y);
                before != n.scrolled
            });
        });
        on_cleanup(move || handle.remove());
    }

    Effect::new(move |prev: Option<String>| {
        let current = pathname.get();
        if prev.is_some_and(|p| p != current) {
            nav.update(NavState::on_route_change);
            dom::scroll_window_to(0.0, false);
        }
        current
    });

    view! {
        <nav class="navbar" class:navbar--scrolled=move || nav.get().scrolled>
            <div class="navbar__inner">
                <a href="/" class="navbar__logo">
                    <span class="navbar__brand">"prithi"</span>
                    <span class="navbar__brand-sub">"cuisine"</span>
                </a>

                <div class="navbar__links">{nav_links(pathname, "navbar__link", "navbar__link--active")}</div>

                <div class="navbar__actions">
                    <a href=PRIMARY_PHONE.tel class="navbar__phone">{PRIMARY_PHONE.display}</a>
                    <a href="/contact" class="btn btn--primary navbar__cta">"Book a Table"</a>
                    <button
                        class="navbar__toggle"
                        aria-label="Toggle menu"
                        on:click=move |_| nav.update(NavState::toggle_mobile)
                    >
                        {move || if nav.get().mobile_open { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>
        </nav>

        <Show when=move || nav.get().mobile_open>
            <div class="mobile-menu">
                {nav_links(pathname, "mobile-menu__link", "mobile-menu__link--active")}
                <a href="/contact" class="btn btn--primary mobile-menu__cta">"Book a Table"</a>
                <a href=PRIMARY_PHONE.tel class="mobile-menu__phone">{PRIMARY_PHONE.display}</a>
            </div>
        </Show>
    }
}

fn nav_links(pathname: Memo<String>, class: &'static str, active_class: &'static str) -> impl IntoView {
    NAV_LINKS
        .iter()
        .map(|link| {
            let path = link.path;
            let link_class = move || {
                if is_current(&pathname.get(), path) { format!("{class} {active_class}") } else { class.to_owned() }
            };
            view! { <a href=path class=link_class>{link.label}</a> }
        })
        .collect_view()
}
