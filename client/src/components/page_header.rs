//! Hero heading shared by the inner pages.

use leptos::prelude::*;

#[component]
pub fn PageHeader(
    eyebrow: &'static str,
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
) -> impl IntoView {
    view! {
        <header class="page-header">
            <div class="page-header__rule"></div>
            <p class="page-header__eyebrow">{eyebrow}</p>
            <h1 class="page-header__title">{title}</h1>
            {subtitle.map(|text| view! { <p class="page-header__subtitle">{text}</p> })}
            <div class="page-header__rule page-header__rule--wide"></div>
        </header>
    }
}
