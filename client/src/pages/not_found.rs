use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text="Page Not Found"/>
        <section class="not-found">
            <p class="page-header__eyebrow">"404"</p>
            <h1 class="page-header__title">"Page not found"</h1>
            <p>"The page you are looking for has moved or never existed."</p>
            <a href="/" class="btn btn--primary">"Back to Home"</a>
        </section>
    }
}
