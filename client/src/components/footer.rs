//! Site footer: offer banner, quick links, hours and contact details.

use leptos::prelude::*;

use crate::content::site::{
    ADDRESS, EMAIL, NAV_LINKS, OFFER_SUMMARY, OPENING_HOURS, PRIMARY_PHONE, RESTAURANT_NAME, SECONDARY_PHONE,
    SOCIAL_LINKS, TAGLINE,
};
use crate::util::format::current_year;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__offer">
                <p>{OFFER_SUMMARY}</p>
            </div>

            <div class="footer__grid">
                <div class="footer__brand">
                    <a href="/" class="footer__logo">
                        <span class="navbar__brand">"prithi"</span>
                        <span class="navbar__brand-sub">"cuisine"</span>
                    </a>
                    <p class="footer__tagline">{TAGLINE}</p>
                    <div class="footer__social">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.path
                                        class="footer__social-link"
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label=link.label
                                    >
                                        {link.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="footer__column">
                    <h4 class="footer__heading">"Quick Links"</h4>
                    <ul class="footer__list">
                        {NAV_LINKS
                            .iter()
                            .map(|link| view! { <li><a href=link.path>{link.label}</a></li> })
                            .collect_view()}
                    </ul>
                </div>

                <div class="footer__column">
                    <h4 class="footer__heading">"Opening Hours"</h4>
                    <ul class="footer__list">
                        {OPENING_HOURS
                            .iter()
                            .map(|row| {
                                view! {
                                    <li class="footer__hours">
                                        <span class="footer__days">{row.days}</span>
                                        <span>{row.hours}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>

                <div class="footer__column">
                    <h4 class="footer__heading">"Contact"</h4>
                    <ul class="footer__list">
                        <li>{ADDRESS}</li>
                        <li><a href=PRIMARY_PHONE.tel>{PRIMARY_PHONE.display}</a></li>
                        <li><a href=SECONDARY_PHONE.tel>{SECONDARY_PHONE.display}</a></li>
                        <li><a href=format!("mailto:{EMAIL}")>{EMAIL}</a></li>
                    </ul>
                </div>
            </div>

            <div class="footer__bottom">
                <p>{format!("© {} {RESTAURANT_NAME}. All rights reserved.", current_year())}</p>
            </div>
        </footer>
    }
}
