//! Web3Forms relay client for table reservations.
//!
//! Client-side (hydrate): real HTTP call via `gloo-net`.
//! Server-side (SSR): the call is unavailable and reports a network error,
//! since reservations are only ever submitted from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure maps to a [`ReservationError`] whose `Display` text is the
//! message shown under the form. Nothing is retried.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "web3forms_test.rs"]
mod web3forms_test;

use serde::{Deserialize, Serialize};

use crate::content::site::PRIMARY_PHONE;
use crate::state::reservation::ReservationForm;

pub const SUBMIT_URL: &str = "https://api.web3forms.com/submit";
pub const FROM_NAME: &str = "Prithi Cuisine Website";
const NO_SPECIAL_REQUESTS: &str = "None";

/// Failures surfaced to the guest.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ReservationError {
    /// No access key was configured at build time.
    #[error("Reservation system is not configured. Please call us to book.")]
    NotConfigured,

    /// The relay answered but did not accept the submission.
    #[error("Something went wrong. Please try again or call us directly.")]
    Rejected,

    /// The request could not complete or the reply was unreadable.
    #[error("Network error. Please try again or call us on {}.", PRIMARY_PHONE.display)]
    Network { detail: String },
}

/// JSON body posted to the relay.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ReservationPayload {
    pub access_key: String,
    pub subject: String,
    pub from_name: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: String,
    pub time: String,
    pub guests: String,
    pub special_requests: String,
}

impl ReservationPayload {
    pub fn new(access_key: &str, form: &ReservationForm) -> Self {
        let special_requests = if form.requests.trim().is_empty() {
            NO_SPECIAL_REQUESTS.to_owned()
        } else {
            form.requests.clone()
        };
        Self {
            access_key: access_key.to_owned(),
            subject: format!("New Reservation: {} - {} at {}", form.name, form.date, form.time),
            from_name: FROM_NAME.to_owned(),
            name: form.name.clone(),
            email: form.email.clone(),
            phone: form.phone.clone(),
            date: form.date.clone(),
            time: form.time.clone(),
            guests: form.guests.clone(),
            special_requests,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RelayResponse {
    #[serde(default)]
    success: bool,
}

/// Interpret the relay's reply body. The HTTP status is not consulted; the
/// relay reports acceptance through its `success` field.
///
/// # Errors
///
/// `Rejected` when `success` is false, `Network` when the body is not JSON.
pub fn classify_response(body: &str) -> Result<(), ReservationError> {
    let parsed: RelayResponse =
        serde_json::from_str(body).map_err(|e| ReservationError::Network { detail: e.to_string() })?;
    if parsed.success {
        Ok(())
    } else {
        Err(ReservationError::Rejected)
    }
}

/// POST a reservation to the relay.
///
/// # Errors
///
/// See [`classify_response`]; transport failures map to `Network`.
pub async fn submit(payload: &ReservationPayload) -> Result<(), ReservationError> {
    #[cfg(feature = "hydrate")]
    {
        let network = |e: gloo_net::Error| ReservationError::Network { detail: e.to_string() };
        let resp = gloo_net::http::Request::post(SUBMIT_URL)
            .json(payload)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        let status = resp.status();
        let body = resp.text().await.map_err(network)?;
        let result = classify_response(&body);
        match &result {
            Ok(()) => log::info!("reservation accepted by relay"),
            Err(e) => log::warn!("reservation failed (status {status}): {e:?}"),
        }
        result
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(ReservationError::Network { detail: "not available on server".to_owned() })
    }
}
