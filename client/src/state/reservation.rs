//! Reservation form controller.
//!
//! DESIGN
//! ======
//! `begin_submit` is the only way to obtain a relay payload, and it refuses
//! when no access key is configured, so an unconfigured site can never issue
//! the network call. The page posts the payload and hands the outcome back to
//! `finish_submit`.

#[cfg(test)]
#[path = "reservation_test.rs"]
mod reservation_test;

use crate::net::web3forms::{ReservationError, ReservationPayload};

/// Guest-count choices offered by the form, in display order.
pub const GUEST_OPTIONS: &[&str] = &["1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "10+"];

/// Raw form inputs. Native form constraints enforce the required fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReservationForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: String,
    pub time: String,
    pub guests: String,
    pub requests: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Phone,
    Date,
    Time,
    Guests,
    Requests,
}

impl ReservationForm {
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::Date => &self.date,
            FormField::Time => &self.time,
            FormField::Guests => &self.guests,
            FormField::Requests => &self.requests,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Phone => &mut self.phone,
            FormField::Date => &mut self.date,
            FormField::Time => &mut self.time,
            FormField::Guests => &mut self.guests,
            FormField::Requests => &mut self.requests,
        };
        *slot = value;
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Submitted,
    /// Idle with an inline error; the form can be submitted again.
    Failed(ReservationError),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReservationState {
    pub form: ReservationForm,
    pub status: SubmitStatus,
}

impl ReservationState {
    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.status == SubmitStatus::Submitted
    }

    pub fn error(&self) -> Option<&ReservationError> {
        match &self.status {
            SubmitStatus::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Start a submission. Returns the payload to post, or `None` when the
    /// call must not happen (busy, already submitted, or not configured).
    pub fn begin_submit(&mut self, access_key: Option<&str>) -> Option<ReservationPayload> {
        if matches!(self.status, SubmitStatus::Submitting | SubmitStatus::Submitted) {
            return None;
        }
        let Some(key) = access_key else {
            self.status = SubmitStatus::Failed(ReservationError::NotConfigured);
            return None;
        };
        self.status = SubmitStatus::Submitting;
        Some(ReservationPayload::new(key, &self.form))
    }

    /// Record the relay outcome. Ignored unless a submission is in flight.
    pub fn finish_submit(&mut self, result: Result<(), ReservationError>) {
        if !self.is_submitting() {
            return;
        }
        self.status = match result {
            Ok(()) => SubmitStatus::Submitted,
            Err(err) => SubmitStatus::Failed(err),
        };
    }

    /// "Make another reservation": clear every field and return to idle.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Name shown in the confirmation message.
    pub fn confirmation_name(&self) -> &str {
        if self.form.name.trim().is_empty() { "Guest" } else { &self.form.name }
    }

    /// Guest count shown in the confirmation, e.g. `"4 guests"`.
    pub fn confirmation_guests(&self) -> String {
        let count = if self.form.guests.is_empty() { "—" } else { self.form.guests.as_str() };
        let noun = if self.form.guests == "1" { "guest" } else { "guests" };
        format!("{count} {noun}")
    }
}

/// Label for a guest-count `<option>`.
pub fn guest_option_label(value: &str) -> String {
    if value == "1" { "1 Guest".to_owned() } else { format!("{value} Guests") }
}
