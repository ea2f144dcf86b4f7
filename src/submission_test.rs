use super::*;

use serde_json::json;

// =============================================================
// Lifecycle gates
// =============================================================

#[test]
fn begin_moves_to_in_flight() {
    let mut submission = Submission::default();
    let form = FormState::with_defaults();
    assert!(submission.begin(&form).is_ok());
    assert!(submission.in_flight());
}

#[test]
fn second_begin_while_outstanding_is_dropped() {
    let mut submission = Submission::default();
    let form = FormState::with_defaults();
    submission.begin(&form).expect("first begin");
    assert_eq!(submission.begin(&form), Err(SubmitBlocked::InFlight));
    assert!(submission.in_flight());
}

#[test]
fn invalid_form_is_rejected_before_any_payload_exists() {
    let mut submission = Submission::default();
    let mut form = FormState::with_defaults();
    form.set(FieldKey::RegYear, "1960");
    let blocked = submission.begin(&form).unwrap_err();
    assert_eq!(
        blocked,
        SubmitBlocked::Validation([FieldKey::RegYear].into_iter().collect())
    );
    assert_eq!(submission, Submission::Idle);
}

#[test]
fn begin_discards_the_previous_outcome() {
    let mut submission = Submission::Done(12_000.0);
    let form = FormState::with_defaults();
    submission.begin(&form).expect("begin");
    assert_eq!(submission, Submission::InFlight);
}

#[test]
fn settle_success_yields_done() {
    let mut submission = Submission::InFlight;
    submission.settle(Ok(45_231.7));
    assert_eq!(submission, Submission::Done(45_231.7));
    assert!(!submission.in_flight());
}

#[test]
fn settle_failure_clears_the_flag_so_a_retry_can_begin() {
    let form = FormState::with_defaults();
    for error in [
        PredictError::ServiceUnavailable(500),
        PredictError::Transport("connection refused".to_string()),
    ] {
        let mut submission = Submission::InFlight;
        submission.settle(Err(error.clone()));
        assert_eq!(submission, Submission::Failed(error));
        assert!(submission.begin(&form).is_ok());
    }
}

// =============================================================
// Request body
// =============================================================

#[test]
fn request_nests_every_key_under_features() {
    let form = FormState::with_defaults();
    let request = PredictRequest::from_form(&form);
    assert_eq!(request.features.len(), FieldKey::ALL.len());
    assert_eq!(request.features["Brand"], json!("Toyota"));
    assert_eq!(request.features["Reg_year"], json!(2020));
    assert_eq!(request.features["Mileage"], json!(30000));
    assert_eq!(request.features["Transmission"], json!("Automatic"));
}

#[test]
fn request_serializes_as_a_single_features_object() {
    let form = FormState::with_defaults();
    let body = serde_json::to_value(PredictRequest::from_form(&form)).expect("serialize");
    let object = body.as_object().expect("top-level object");
    assert_eq!(object.len(), 1);
    assert!(object["features"].is_object());
}

#[test]
fn request_keeps_unparsable_numeric_text_as_entered() {
    let mut form = FormState::with_defaults();
    form.set(FieldKey::Power, "one fifty");
    let request = PredictRequest::from_form(&form);
    assert_eq!(request.features["Power"], json!("one fifty"));
}

// =============================================================
// Response body
// =============================================================

#[test]
fn response_parses_a_numeric_prediction() {
    let body: PredictResponse =
        serde_json::from_str(r#"{"prediction": 45231.7}"#).expect("parse");
    assert_eq!(body.prediction, 45231.7);
}

#[test]
fn response_without_a_prediction_field_is_malformed() {
    assert!(serde_json::from_str::<PredictResponse>("{}").is_err());
    assert!(serde_json::from_str::<PredictResponse>(r#"{"price": 45231.7}"#).is_err());
}

// =============================================================
// Price formatting
// =============================================================

#[test]
fn prices_round_to_whole_dollars_with_separators() {
    assert_eq!(format_price(45231.7), "45,232");
    assert_eq!(format_price(999.0), "999");
    assert_eq!(format_price(1000.0), "1,000");
    assert_eq!(format_price(1_234_567.2), "1,234,567");
    assert_eq!(format_price(0.0), "0");
}

#[test]
fn service_error_message_carries_the_status() {
    let message = PredictError::ServiceUnavailable(500).to_string();
    assert!(message.contains("500"));
}
