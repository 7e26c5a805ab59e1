//! Photo gallery with category filters and a lightbox viewer.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::lightbox::Lightbox;
use crate::components::page_header::PageHeader;
use crate::content::gallery::{GALLERY_IMAGES, GalleryImage};
use crate::state::gallery::{GalleryFilter, GalleryState};

#[component]
pub fn GalleryPage() -> impl IntoView {
    let gallery = RwSignal::new(GalleryState::default());
    let images = Memo::new(move |_| {
        let filter = gallery.with(|g| g.filter);
        filter.apply(GALLERY_IMAGES).into_iter().copied().collect::<Vec<GalleryImage>>()
    });

    view! {
        <Title text="Gallery"/>
        <PageHeader
            eyebrow="Moments at Prithi"
            title="Gallery"
            subtitle="Our dishes, our dining room and the guests who make it special."
        />

        <section class="section gallery">
            <div class="gallery__filters" role="tablist">
                {GalleryFilter::OPTIONS
                    .into_iter()
                    .map(|filter| {
                        view! {
                            <button
                                class="gallery__filter"
                                class:gallery__filter--active=move || gallery.with(|g| g.filter == filter)
                                role="tab"
                                aria-selected=move || gallery.with(|g| g.filter == filter).to_string()
                                on:click=move |_| gallery.update(|g| g.set_filter(filter))
                            >
                                {filter.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <Show
                when=move || images.with(|list| !list.is_empty())
                fallback=|| view! { <p class="gallery__empty">"No images in this category yet."</p> }
            >
                <div class="gallery__grid">
                    <For
                        each=move || images.get().into_iter().enumerate()
                        key=|(i, image)| (*i, image.src)
                        children=move |(i, image)| {
                            view! {
                                <button
                                    class="gallery__item"
                                    aria-label=format!("Open image: {}", image.alt)
                                    on:click=move |_| {
                                        let len = images.with_untracked(Vec::len);
                                        gallery.update(|g| g.open(i, len));
                                    }
                                >
                                    <img src=image.src alt=image.alt loading="lazy"/>
                                    <span class="gallery__label">{image.category.label()}</span>
                                </button>
                            }
                        }
                    />
                </div>
            </Show>
        </section>

        <Lightbox gallery=gallery images=images/>
    }
}
