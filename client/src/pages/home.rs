//! Landing page: hero, story teaser, signature dishes, testimonials and the
//! reservation call to action.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::reveal::Reveal;
use crate::content::site::{BANQUET_PRICE_PENCE, FEATURED_DISHES, PRIMARY_PHONE, TAGLINE, TESTIMONIALS};
use crate::util::format::{format_price, rating_stars};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Authentic Indian Dining in Surbiton"/>

        <section class="hero">
            <div class="hero__overlay"></div>
            <div class="hero__content">
                <p class="hero__eyebrow">"Surbiton, Surrey"</p>
                <h1 class="hero__title">"A Taste of Tradition"</h1>
                <p class="hero__subtitle">{TAGLINE}</p>
                <div class="hero__actions">
                    <a href="/menu" class="btn btn--primary">"View Menu"</a>
                    <a href="/contact" class="btn btn--outline">"Book a Table"</a>
                </div>
            </div>
        </section>

        <section class="section story">
            <Reveal class="story__inner">
                <div class="story__image">
                    <img src="/images/interior-1.jpg" alt="Prithi Cuisine dining room" loading="lazy"/>
                </div>
                <div class="story__text">
                    <p class="section__eyebrow">"Our Story"</p>
                    <h2 class="section__title">"Where Heritage Meets the Table"</h2>
                    <p>
                        "For years Prithi Cuisine has welcomed Surbiton to a table built on family recipes, "
                        "hand-ground spices and the slow patience of the clay oven."
                    </p>
                    <a href="/about" class="btn btn--link">"Discover More"</a>
                </div>
            </Reveal>
        </section>

        <section class="section signatures">
            <p class="section__eyebrow">"From Our Kitchen"</p>
            <h2 class="section__title">"Signature Dishes"</h2>
            <div class="signatures__grid">
                {FEATURED_DISHES
                    .iter()
                    .map(|dish| {
                        view! {
                            <Reveal class="dish-card">
                                <img class="dish-card__image" src=dish.image alt=dish.name loading="lazy"/>
                                <div class="dish-card__body">
                                    <div class="dish-card__header">
                                        <h3>{dish.name}</h3>
                                        <span class="price">{format_price(dish.price_pence)}</span>
                                    </div>
                                    <p>{dish.description}</p>
                                </div>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
            <a href="/menu" class="btn btn--outline">"Explore the Full Menu"</a>
        </section>

        <section class="section banquet">
            <Reveal class="banquet__inner">
                <p class="section__eyebrow">"Every Sunday to Thursday"</p>
                <h2 class="section__title">"Banquet Night"</h2>
                <p class="banquet__price">{format!("{} per person", format_price(BANQUET_PRICE_PENCE))}</p>
                <p>"Papadoms, a starter, any main, a side, rice or naan, and dessert."</p>
            </Reveal>
        </section>

        <section class="section testimonials">
            <p class="section__eyebrow">"Guest Reviews"</p>
            <h2 class="section__title">"What Our Guests Say"</h2>
            <div class="testimonials__grid">
                {TESTIMONIALS
                    .iter()
                    .map(|review| {
                        view! {
                            <Reveal class="testimonial">
                                <p class="testimonial__stars" aria-label=format!("{} out of 5", review.rating)>
                                    {rating_stars(review.rating)}
                                </p>
                                <blockquote class="testimonial__text">{review.text}</blockquote>
                                <p class="testimonial__name">{review.name}</p>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </section>

        <section class="section cta">
            <h2 class="section__title">"Reserve Your Table"</h2>
            <p>"Book online or call us and we will have a table ready for you."</p>
            <div class="cta__actions">
                <a href="/contact" class="btn btn--primary">"Make a Reservation"</a>
                <a href=PRIMARY_PHONE.tel class="btn btn--outline">{PRIMARY_PHONE.display}</a>
            </div>
        </section>
    }
}
