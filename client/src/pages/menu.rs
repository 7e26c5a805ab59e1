//! Menu page with a sticky category tab strip kept in sync with scrolling.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two inputs drive the active tab: intersection reports for the category
//! sections (passive scrolling) and tab clicks (programmatic scrolling). A
//! click suppresses passive reports until its settle timer fires, so the
//! smooth scroll it starts cannot drag the highlight through intermediate
//! sections. All transitions live in `state::menu_scroll`; this page only
//! wires the browser to it.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::page_header::PageHeader;
use crate::components::reveal::Reveal;
use crate::content::menu::{MENU, MenuCategory, MenuItem};
use crate::content::site::{BANQUET_PRICE_PENCE, PRIMARY_PHONE};
use crate::state::menu_scroll::MenuScrollSync;
#[cfg(feature = "hydrate")]
use crate::state::menu_scroll::{SECTION_ROOT_MARGIN, SETTLE_DELAY_MS, centered_strip_offset, scroll_target_y};
#[cfg(feature = "hydrate")]
use crate::util::dom;
use crate::util::format::{format_price, spice_dots};

/// Observer margin for the 1px sentinel above the tab strip.
#[cfg(feature = "hydrate")]
const STICKY_ROOT_MARGIN: &str = "-1px 0px 0px 0px";

type SectionRef = NodeRef<leptos::html::Section>;
type TabRef = NodeRef<leptos::html::Button>;

#[component]
pub fn MenuPage() -> impl IntoView {
    let sync = RwSignal::new(MenuScrollSync::new(MENU.len()));
    let active = Memo::new(move |_| sync.with(MenuScrollSync::active_index));
    let tab_bar_stuck = RwSignal::new(false);

    let sentinel = NodeRef::<leptos::html::Div>::new();
    let strip = NodeRef::<leptos::html::Div>::new();
    let section_refs: Vec<SectionRef> = MENU.iter().map(|_| NodeRef::new()).collect();
    let tab_refs: Vec<TabRef> = MENU.iter().map(|_| NodeRef::new()).collect();
    #[cfg(feature = "hydrate")]
    let sections = StoredValue::new(section_refs.clone());
    #[cfg(feature = "hydrate")]
    let tabs = StoredValue::new(tab_refs.clone());

    #[cfg(feature = "hydrate")]
    {
        use crate::util::dom::{IntersectionWatch, WatchControl};

        let watches = StoredValue::new_local(Vec::<IntersectionWatch>::new());
        Effect::new(move || {
            let Some(sentinel_el) = sentinel.get() else {
                return;
            };
            let targets: Vec<web_sys::Element> =
                sections.with_value(|refs| refs.iter().filter_map(|r| r.get().map(Into::into)).collect());
            if targets.len() != MENU.len() {
                return;
            }

            let sticky = IntersectionWatch::new(&[sentinel_el.into()], STICKY_ROOT_MARGIN, 1.0, move |reports| {
                if let Some((_, visible)) = reports.last() {
                    tab_bar_stuck.set(!visible);
                }
                WatchControl::Continue
            });
            let tracking = IntersectionWatch::new(&targets, SECTION_ROOT_MARGIN, 0.0, move |reports| {
                sync.maybe_update(|s| s.observe_batch(reports));
                WatchControl::Continue
            });
            watches.set_value(sticky.into_iter().chain(tracking).collect());
        });

        Effect::new(move || {
            let index = active.get();
            let Some(strip_el) = strip.get_untracked() else {
                return;
            };
            let Some(tab) = tabs.with_value(|refs| refs.get(index).and_then(NodeRef::get_untracked)) else {
                return;
            };
            let left = centered_strip_offset(
                f64::from(tab.offset_left()),
                f64::from(tab.offset_width()),
                f64::from(strip_el.client_width()),
            );
            dom::scroll_element_left(&strip_el, left);
        });
    }

    let jump_to = move |index: usize| {
        let Some(jump) = sync.try_update(|s| s.click_tab(index)).flatten() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            if let Some(section) = sections.with_value(|refs| refs.get(jump.index).and_then(NodeRef::get_untracked)) {
                let top = section.get_bounding_client_rect().top();
                dom::scroll_window_to(scroll_target_y(top, dom::scroll_y()), true);
            }
            let generation = jump.generation;
            gloo_timers::callback::Timeout::new(SETTLE_DELAY_MS, move || {
                sync.maybe_update(|s| s.settle(generation));
            })
            .forget();
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = jump;
    };

    view! {
        <Title text="Menu"/>
        <PageHeader
            eyebrow="Fine Indian Dining"
            title="Our Menu"
            subtitle="Traditional recipes, hand-ground spices and the heat of the clay oven."
        />

        <div node_ref=sentinel class="menu-tabs__sentinel" aria-hidden="true"></div>
        <nav class="menu-tabs" class:menu-tabs--stuck=move || tab_bar_stuck.get()>
            <div node_ref=strip class="menu-tabs__strip" role="tablist">
                {MENU
                    .iter()
                    .zip(tab_refs)
                    .enumerate()
                    .map(|(index, (category, tab_ref))| {
                        view! {
                            <button
                                node_ref=tab_ref
                                class="menu-tabs__tab"
                                class:menu-tabs__tab--active=move || active.get() == index
                                role="tab"
                                aria-selected=move || (active.get() == index).to_string()
                                on:click=move |_| jump_to(index)
                            >
                                {category.name}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </nav>

        <div class="menu">
            {MENU
                .iter()
                .zip(section_refs)
                .enumerate()
                .map(|(index, (category, section_ref))| category_section(index, category, section_ref))
                .collect_view()}
        </div>

        <section class="section banquet">
            <Reveal class="banquet__inner">
                <p class="section__eyebrow">"Sunday to Thursday"</p>
                <h2 class="section__title">"Banquet Night"</h2>
                <p class="banquet__price">{format!("{} per person", format_price(BANQUET_PRICE_PENCE))}</p>
                <p>"Papadoms and chutneys, any starter, any main, a side, rice or naan, then dessert or coffee."</p>
            </Reveal>
        </section>

        <section class="section cta">
            <h2 class="section__title">"Ready to Order?"</h2>
            <p>"Call for collection or delivery, or book a table and dine with us."</p>
            <div class="cta__actions">
                <a href=PRIMARY_PHONE.tel class="btn btn--primary">{format!("Call {}", PRIMARY_PHONE.display)}</a>
                <a href="/contact" class="btn btn--outline">"Book a Table"</a>
            </div>
        </section>
    }
}

fn category_section(index: usize, category: &'static MenuCategory, section_ref: SectionRef) -> impl IntoView {
    view! {
        <section node_ref=section_ref class="menu-category" data-watch-index=index.to_string()>
            <header class="menu-category__header">
                <h2 class="menu-category__title">{category.name}</h2>
                {category.description.map(|text| view! { <p class="menu-category__description">{text}</p> })}
            </header>
            <ul class="menu-category__items">
                {category.items.iter().map(menu_item_row).collect_view()}
            </ul>
        </section>
    }
}

fn menu_item_row(item: &'static MenuItem) -> impl IntoView {
    view! {
        <li class="menu-item">
            <div class="menu-item__main">
                <div class="menu-item__heading">
                    <h3 class="menu-item__name">{item.name}</h3>
                    {item.popular.then(|| view! { <span class="badge badge--popular">"Popular"</span> })}
                    {item
                        .spicy
                        .then(|| {
                            view! {
                                <span class="spice" aria-label=format!("Spice level {}", item.spice_level)>
                                    {spice_dots(item.spice_level)
                                        .into_iter()
                                        .map(|filled| {
                                            view! { <span class="spice__dot" class:spice__dot--filled=filled></span> }
                                        })
                                        .collect_view()}
                                </span>
                            }
                        })}
                </div>
                {item.description.map(|text| view! { <p class="menu-item__description">{text}</p> })}
            </div>
            <span class="menu-item__price price">{format_price(item.price_pence)}</span>
        </li>
    }
}
