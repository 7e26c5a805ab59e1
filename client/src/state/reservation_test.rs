use super::*;

fn filled_state() -> ReservationState {
    let mut state = ReservationState::default();
    state.form.set(FormField::Name, "Tom Hart".to_owned());
    state.form.set(FormField::Email, "tom@example.com".to_owned());
    state.form.set(FormField::Date, "2026-12-24".to_owned());
    state.form.set(FormField::Time, "20:00".to_owned());
    state.form.set(FormField::Guests, "2".to_owned());
    state
}

// =============================================================
// Field editing
// =============================================================

#[test]
fn set_and_read_every_field() {
    let fields = [
        FormField::Name,
        FormField::Email,
        FormField::Phone,
        FormField::Date,
        FormField::Time,
        FormField::Guests,
        FormField::Requests,
    ];
    let mut form = ReservationForm::default();
    for (i, field) in fields.iter().enumerate() {
        form.set(*field, format!("value-{i}"));
    }
    for (i, field) in fields.iter().enumerate() {
        assert_eq!(form.field(*field), format!("value-{i}"));
    }
}

// =============================================================
// Submission
// =============================================================

#[test]
fn missing_credential_never_yields_payload() {
    let mut state = filled_state();
    assert_eq!(state.begin_submit(None), None);
    assert_eq!(state.status, SubmitStatus::Failed(ReservationError::NotConfigured));
    assert_eq!(state.error(), Some(&ReservationError::NotConfigured));
}

#[test]
fn configured_submit_moves_to_submitting() {
    let mut state = filled_state();
    let payload = state.begin_submit(Some("key")).unwrap();
    assert_eq!(payload.access_key, "key");
    assert_eq!(payload.name, "Tom Hart");
    assert!(state.is_submitting());
    assert_eq!(state.error(), None);
}

#[test]
fn duplicate_submit_while_in_flight_is_ignored() {
    let mut state = filled_state();
    assert!(state.begin_submit(Some("key")).is_some());
    assert_eq!(state.begin_submit(Some("key")), None);
    assert!(state.is_submitting());
}

#[test]
fn success_transitions_to_submitted() {
    let mut state = filled_state();
    state.begin_submit(Some("key"));
    state.finish_submit(Ok(()));
    assert!(state.is_submitted());
}

#[test]
fn rejection_returns_to_idle_with_error() {
    let mut state = filled_state();
    state.begin_submit(Some("key"));
    state.finish_submit(Err(ReservationError::Rejected));
    assert_eq!(state.error(), Some(&ReservationError::Rejected));
    assert!(!state.is_submitting());
    assert_eq!(state.form.name, "Tom Hart");
}

#[test]
fn network_failure_is_distinct_from_rejection() {
    let mut state = filled_state();
    state.begin_submit(Some("key"));
    state.finish_submit(Err(ReservationError::Network { detail: "offline".to_owned() }));
    assert!(matches!(state.error(), Some(ReservationError::Network { .. })));
}

#[test]
fn resubmit_after_error_clears_error() {
    let mut state = filled_state();
    state.begin_submit(None);
    assert!(state.error().is_some());
    assert!(state.begin_submit(Some("key")).is_some());
    assert_eq!(state.error(), None);
}

#[test]
fn finish_without_begin_is_ignored() {
    let mut state = filled_state();
    state.finish_submit(Ok(()));
    assert_eq!(state.status, SubmitStatus::Idle);
}

#[test]
fn submit_after_success_is_ignored() {
    let mut state = filled_state();
    state.begin_submit(Some("key"));
    state.finish_submit(Ok(()));
    assert_eq!(state.begin_submit(Some("key")), None);
    assert!(state.is_submitted());
}

#[test]
fn reset_after_success_clears_all_fields() {
    let mut state = filled_state();
    state.form.set(FormField::Phone, "0123".to_owned());
    state.form.set(FormField::Requests, "Birthday".to_owned());
    state.begin_submit(Some("key"));
    state.finish_submit(Ok(()));

    state.reset();
    assert_eq!(state.status, SubmitStatus::Idle);
    assert_eq!(state.form, ReservationForm::default());
    assert!(state.form.name.is_empty());
    assert!(state.form.requests.is_empty());
}

// =============================================================
// Confirmation text
// =============================================================

#[test]
fn confirmation_uses_name_or_guest() {
    let mut state = filled_state();
    assert_eq!(state.confirmation_name(), "Tom Hart");
    state.form.name.clear();
    assert_eq!(state.confirmation_name(), "Guest");
}

#[test]
fn confirmation_guests_pluralizes() {
    let mut state = filled_state();
    assert_eq!(state.confirmation_guests(), "2 guests");
    state.form.guests = "1".to_owned();
    assert_eq!(state.confirmation_guests(), "1 guest");
    state.form.guests = "10+".to_owned();
    assert_eq!(state.confirmation_guests(), "10+ guests");
    state.form.guests.clear();
    assert_eq!(state.confirmation_guests(), "— guests");
}

#[test]
fn guest_options_cover_one_to_ten_plus() {
    assert_eq!(GUEST_OPTIONS.len(), 11);
    assert_eq!(GUEST_OPTIONS.first(), Some(&"1"));
    assert_eq!(GUEST_OPTIONS.last(), Some(&"10+"));
    assert_eq!(guest_option_label("1"), "1 Guest");
    assert_eq!(guest_option_label("10+"), "10+ Guests");
}
