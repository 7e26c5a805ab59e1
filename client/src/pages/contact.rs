//! Contact page: reservation form, opening hours, map and contact details.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::page_header::PageHeader;
use crate::config::SiteConfig;
use crate::content::site::{ADDRESS, EMAIL, MAP_EMBED_URL, OPENING_HOURS, PRIMARY_PHONE, SECONDARY_PHONE};
use crate::state::reservation::{FormField, GUEST_OPTIONS, ReservationState, guest_option_label};

#[component]
pub fn ContactPage() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let access_key = StoredValue::new(config.web3forms_access_key);
    let reservation = RwSignal::new(ReservationState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let payload =
            access_key.with_value(|key| reservation.try_update(|r| r.begin_submit(key.as_deref()))).flatten();
        let Some(payload) = payload else {
            #[cfg(feature = "hydrate")]
            if let Some(err) = reservation.with_untracked(|r| r.error().cloned()) {
                log::warn!("reservation not sent: {err}");
            }
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::web3forms::submit(&payload).await;
            reservation.update(|r| r.finish_submit(result));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = payload;
    };

    view! {
        <Title text="Contact & Reservations"/>
        <PageHeader
            eyebrow="Get in Touch"
            title="Contact & Reservations"
            subtitle="Reserve your table online or give us a call. We look forward to welcoming you."
        />

        <section class="section contact">
            <div class="contact__grid">
                <div class="contact__form-card">
                    <Show
                        when=move || reservation.with(ReservationState::is_submitted)
                        fallback=move || reservation_form(reservation, on_submit)
                    >
                        <div class="reservation-confirmation">
                            <h2>"Reservation Received"</h2>
                            <p>
                                {move || {
                                    reservation
                                        .with(|r| {
                                            format!(
                                                "Thank you, {}. We have your request for {} and will confirm by email shortly.",
                                                r.confirmation_name(),
                                                r.confirmation_guests(),
                                            )
                                        })
                                }}
                            </p>
                            <button class="btn btn--outline" on:click=move |_| reservation.update(ReservationState::reset)>
                                "Make another reservation"
                            </button>
                        </div>
                    </Show>
                </div>

                <aside class="contact__info">
                    <div class="info-card">
                        <h3>"Call Us"</h3>
                        <a href=PRIMARY_PHONE.tel>{PRIMARY_PHONE.display}</a>
                        <a href=SECONDARY_PHONE.tel>{SECONDARY_PHONE.display}</a>
                    </div>
                    <div class="info-card">
                        <h3>"Email"</h3>
                        <a href=format!("mailto:{EMAIL}")>{EMAIL}</a>
                    </div>
                    <div class="info-card">
                        <h3>"Visit Us"</h3>
                        <p>{ADDRESS}</p>
                    </div>
                    <div class="info-card">
                        <h3>"Opening Hours"</h3>
                        <ul class="hours">
                            {OPENING_HOURS
                                .iter()
                                .map(|row| {
                                    view! {
                                        <li class="hours__row">
                                            <span class="hours__days">{row.days}</span>
                                            <span class="hours__time">{row.hours}</span>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                </aside>
            </div>
        </section>

        <section class="section private-events">
            <h2 class="section__title">"Private Events & Parties"</h2>
            <p>
                "Birthdays, anniversaries and office gatherings. Call us to plan a set menu for your group "
                "and we will take care of the rest."
            </p>
            <a href=PRIMARY_PHONE.tel class="btn btn--primary">{format!("Call {}", PRIMARY_PHONE.display)}</a>
        </section>

        <section class="map">
            <iframe
                class="map__frame"
                title="Prithi Cuisine location"
                src=MAP_EMBED_URL
                referrerpolicy="no-referrer-when-downgrade"
                {leptos::tachys::html::attribute::custom::custom_attribute("loading", "lazy")}
                allowfullscreen=true
            ></iframe>
        </section>
    }
}

fn reservation_form<F>(reservation: RwSignal<ReservationState>, on_submit: F) -> impl IntoView
where
    F: Fn(leptos::ev::SubmitEvent) + Copy + Send + Sync + 'static,
{
    let busy = move || reservation.with(ReservationState::is_submitting);

    view! {
        <form class="reservation-form" on:submit=on_submit>
            <h2>"Book a Table"</h2>
            <div class="reservation-form__row">
                {text_input(reservation, FormField::Name, "Full Name", "text", true)}
                {text_input(reservation, FormField::Email, "Email", "email", true)}
            </div>
            <div class="reservation-form__row">
                {text_input(reservation, FormField::Phone, "Phone", "tel", false)}
                <label class="field">
                    <span class="field__label">"Guests"</span>
                    <select
                        class="field__input"
                        required=true
                        prop:value=move || reservation.with(|r| r.form.guests.clone())
                        on:change=move |ev| reservation.update(|r| r.form.set(FormField::Guests, event_target_value(&ev)))
                    >
                        <option value="">"Select"</option>
                        {GUEST_OPTIONS
                            .iter()
                            .map(|value| view! { <option value=*value>{guest_option_label(value)}</option> })
                            .collect_view()}
                    </select>
                </label>
            </div>
            <div class="reservation-form__row">
                {text_input(reservation, FormField::Date, "Date", "date", true)}
                {text_input(reservation, FormField::Time, "Time", "time", true)}
            </div>
            <label class="field">
                <span class="field__label">"Special Requests"</span>
                <textarea
                    class="field__input"
                    rows="4"
                    placeholder="Allergies, celebrations, seating preferences..."
                    prop:value=move || reservation.with(|r| r.form.requests.clone())
                    on:input=move |ev| reservation.update(|r| r.form.set(FormField::Requests, event_target_value(&ev)))
                ></textarea>
            </label>

            {move || {
                reservation
                    .with(|r| r.error().map(ToString::to_string))
                    .map(|message| view! { <p class="reservation-form__error" role="alert">{message}</p> })
            }}

            <button class="btn btn--primary reservation-form__submit" type="submit" disabled=busy>
                {move || if busy() { "Sending..." } else { "Reserve Table" }}
            </button>
        </form>
    }
}

fn text_input(
    reservation: RwSignal<ReservationState>,
    field: FormField,
    label: &'static str,
    input_type: &'static str,
    required: bool,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <input
                class="field__input"
                type=input_type
                required=required
                prop:value=move || reservation.with(|r| r.form.field(field).to_owned())
                on:input=move |ev| reservation.update(|r| r.form.set(field, event_target_value(&ev)))
            />
        </label>
    }
}
