//! About page: heritage story, values, kitchen craft and certificates.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::page_header::PageHeader;
use crate::components::reveal::Reveal;
use crate::content::site::{CERTIFICATES, CRAFT_HIGHLIGHTS, VALUES};

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text="About Us"/>
        <PageHeader
            eyebrow="Our Heritage"
            title="About Prithi Cuisine"
            subtitle="A family kitchen bringing the flavours of Bangladesh and India to Surbiton."
        />

        <section class="section heritage">
            <Reveal class="heritage__inner">
                <div class="heritage__text">
                    <p class="section__eyebrow">"Our Story"</p>
                    <h2 class="section__title">"Rooted in Tradition"</h2>
                    <p>
                        "Prithi began with a simple idea: cook the food we grew up with, honestly and generously. "
                        "Our chefs trained in family kitchens and bring recipes that have been refined over generations."
                    </p>
                    <p>
                        "Today we pair that heritage with a contemporary dining room, a warm team and a menu that "
                        "celebrates the clay oven, slow-cooked curries and fresh, whole spices."
                    </p>
                </div>
                <div class="heritage__image">
                    <img src="/images/shop-front.jpeg" alt="Prithi Cuisine shop front" loading="lazy"/>
                </div>
            </Reveal>
        </section>

        <section class="section values">
            <p class="section__eyebrow">"What We Believe"</p>
            <h2 class="section__title">"Our Values"</h2>
            <div class="values__grid">
                {VALUES
                    .iter()
                    .map(|value| {
                        view! {
                            <Reveal class="value-card">
                                <h3>{value.title}</h3>
                                <p>{value.body}</p>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </section>

        <section class="section craft">
            <p class="section__eyebrow">"In the Kitchen"</p>
            <h2 class="section__title">"The Art of Our Craft"</h2>
            <ol class="craft__list">
                {CRAFT_HIGHLIGHTS
                    .iter()
                    .enumerate()
                    .map(|(i, item)| {
                        view! {
                            <li class="craft__item">
                                <span class="craft__number">{format!("{:02}", i + 1)}</span>
                                <div>
                                    <h3>{item.title}</h3>
                                    <p>{item.body}</p>
                                </div>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </section>

        <section class="section certificates">
            <p class="section__eyebrow">"Recognition"</p>
            <h2 class="section__title">"Awards & Certificates"</h2>
            <div class="certificates__grid">
                {CERTIFICATES
                    .iter()
                    .map(|cert| {
                        view! {
                            <figure class="certificate">
                                <img src=cert.src alt=cert.alt loading="lazy"/>
                                <figcaption>{cert.alt}</figcaption>
                            </figure>
                        }
                    })
                    .collect_view()}
            </div>
        </section>

        <section class="section cta">
            <h2 class="section__title">"Come and Dine With Us"</h2>
            <div class="cta__actions">
                <a href="/contact" class="btn btn--primary">"Book a Table"</a>
                <a href="/menu" class="btn btn--outline">"View Menu"</a>
            </div>
        </section>
    }
}
