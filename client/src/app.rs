//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{footer::Footer, navbar::Navbar, scroll_to_top::ScrollToTopButton};
use crate::config::SiteConfig;
use crate::content::site::RESTAURANT_NAME;
use crate::pages::{
    about::AboutPage, contact::ContactPage, gallery::GalleryPage, home::HomePage, menu::MenuPage,
    not_found::NotFoundPage,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta
                    name="description"
                    content="Prithi Cuisine: contemporary Bangladeshi and Indian dining on Ewell Road, Surbiton."
                />
                <link rel="icon" href="/images/favicon.png"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the read-only site configuration and sets up client-side
/// routing. Page state is owned by each page, not by context.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(SiteConfig::from_build_env());

    view! {
        <Stylesheet id="leptos" href="/pkg/prithi.css"/>
        <Title formatter=|text: String| format!("{text} | {RESTAURANT_NAME}")/>

        <Router>
            <Navbar/>
            <main class="main">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("menu") view=MenuPage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("gallery") view=GalleryPage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                </Routes>
            </main>
            <Footer/>
            <ScrollToTopButton/>
        </Router>
    }
}
