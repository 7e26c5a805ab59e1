//! Full-screen photo viewer for the gallery.
//!
//! Keyboard: Left/Right step through the filtered photos (wrapping), Escape
//! closes. Page scrolling is locked while the viewer is open.

use leptos::prelude::*;

use crate::content::gallery::GalleryImage;
use crate::state::gallery::GalleryState;
#[cfg(feature = "hydrate")]
use crate::state::gallery::LightboxKey;
use crate::util::dom;

#[component]
pub fn Lightbox(gallery: RwSignal<GalleryState>, images: Memo<Vec<GalleryImage>>) -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            if !gallery.with_untracked(GalleryState::is_open) {
                return;
            }
            let Some(key) = LightboxKey::from_key(&ev.key()) else {
                return;
            };
            let len = images.with_untracked(Vec::len);
            ev.prevent_default();
            gallery.update(|g| {
                g.handle_key(key, len);
            });
        });
        on_cleanup(move || handle.remove());
    }

    Effect::new(move || dom::set_body_scroll_locked(gallery.with(GalleryState::is_open)));
    on_cleanup(|| dom::set_body_scroll_locked(false));

    let current = move || {
        let index = gallery.with(GalleryState::open_index)?;
        images.with(|list| list.get(index).copied().map(|img| (index, list.len(), img)))
    };

    view! {
        {move || {
            current()
                .map(|(index, total, image)| {
                    view! {
                        <div
                            class="lightbox"
                            role="dialog"
                            aria-modal="true"
                            on:click=move |_| gallery.update(GalleryState::close)
                        >
                            <button
                                class="lightbox__close"
                                aria-label="Close"
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    gallery.update(GalleryState::close);
                                }
                            >
                                "✕"
                            </button>
                            <button
                                class="lightbox__nav lightbox__nav--prev"
                                aria-label="Previous image"
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    gallery.update(|g| g.prev(total));
                                }
                            >
                                "‹"
                            </button>
                            <figure class="lightbox__figure" on:click=|ev| ev.stop_propagation()>
                                <img class="lightbox__image" src=image.src alt=image.alt />
                                <figcaption class="lightbox__caption">
                                    <span class="lightbox__category">{image.category.label()}</span>
                                    <span class="lightbox__counter">{format!("{} / {total}", index + 1)}</span>
                                </figcaption>
                            </figure>
                            <button
                                class="lightbox__nav lightbox__nav--next"
                                aria-label="Next image"
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    gallery.update(|g| g.next(total));
                                }
                            >
                                "›"
                            </button>
                        </div>
                    }
                })
        }}
    }
}
