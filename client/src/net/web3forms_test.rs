use super::*;

fn sample_form() -> ReservationForm {
    ReservationForm {
        name: "Asha Rahman".to_owned(),
        email: "asha@example.com".to_owned(),
        phone: "07700 900123".to_owned(),
        date: "2026-11-06".to_owned(),
        time: "19:30".to_owned(),
        guests: "4".to_owned(),
        requests: "Window table please".to_owned(),
    }
}

// =============================================================
// Payload
// =============================================================

#[test]
fn payload_maps_every_field() {
    let payload = ReservationPayload::new("key-1", &sample_form());
    assert_eq!(payload.access_key, "key-1");
    assert_eq!(payload.subject, "New Reservation: Asha Rahman - 2026-11-06 at 19:30");
    assert_eq!(payload.from_name, FROM_NAME);
    assert_eq!(payload.name, "Asha Rahman");
    assert_eq!(payload.email, "asha@example.com");
    assert_eq!(payload.phone, "07700 900123");
    assert_eq!(payload.date, "2026-11-06");
    assert_eq!(payload.time, "19:30");
    assert_eq!(payload.guests, "4");
    assert_eq!(payload.special_requests, "Window table please");
}

#[test]
fn payload_defaults_blank_requests_to_none() {
    let mut form = sample_form();
    form.requests = "  ".to_owned();
    let payload = ReservationPayload::new("k", &form);
    assert_eq!(payload.special_requests, "None");
}

#[test]
fn payload_keeps_empty_optional_phone() {
    let mut form = sample_form();
    form.phone.clear();
    let payload = ReservationPayload::new("k", &form);
    assert_eq!(payload.phone, "");
}

#[test]
fn payload_serializes_with_relay_field_names() {
    let payload = ReservationPayload::new("key-1", &sample_form());
    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "access_key": "key-1",
            "subject": "New Reservation: Asha Rahman - 2026-11-06 at 19:30",
            "from_name": "Prithi Cuisine Website",
            "name": "Asha Rahman",
            "email": "asha@example.com",
            "phone": "07700 900123",
            "date": "2026-11-06",
            "time": "19:30",
            "guests": "4",
            "special_requests": "Window table please",
        })
    );
}

// =============================================================
// Response classification
// =============================================================

#[test]
fn success_true_is_ok() {
    assert_eq!(classify_response(r#"{"success":true,"message":"Email sent"}"#), Ok(()));
}

#[test]
fn success_false_is_rejected() {
    assert_eq!(
        classify_response(r#"{"success":false,"message":"Invalid access key"}"#),
        Err(ReservationError::Rejected)
    );
}

#[test]
fn missing_success_field_is_rejected() {
    assert_eq!(classify_response("{}"), Err(ReservationError::Rejected));
}

#[test]
fn unreadable_body_is_network_error() {
    let err = classify_response("<html>bad gateway</html>").unwrap_err();
    assert!(matches!(err, ReservationError::Network { .. }));
}

// =============================================================
// Messages
// =============================================================

#[test]
fn error_messages_are_distinct() {
    let not_configured = ReservationError::NotConfigured.to_string();
    let rejected = ReservationError::Rejected.to_string();
    let network = ReservationError::Network { detail: "offline".to_owned() }.to_string();
    assert_eq!(not_configured, "Reservation system is not configured. Please call us to book.");
    assert_eq!(rejected, "Something went wrong. Please try again or call us directly.");
    assert_eq!(network, "Network error. Please try again or call us on 020 8399 0030.");
}

#[test]
fn network_message_hides_detail() {
    let msg = ReservationError::Network { detail: "ECONNRESET".to_owned() }.to_string();
    assert!(!msg.contains("ECONNRESET"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn submit_is_unavailable_off_browser() {
    let payload = ReservationPayload::new("k", &sample_form());
    let result = futures::executor::block_on(submit(&payload));
    assert!(matches!(result, Err(ReservationError::Network { .. })));
}
