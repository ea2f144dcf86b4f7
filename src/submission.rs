//! Submission lifecycle and the prediction service's wire types.
//!
//! At most one request is outstanding at a time. The lifecycle is
//! `Idle → InFlight → Done | Failed`, where `Done` and `Failed` act as
//! idle states for the next attempt; `settle` always leaves `InFlight`,
//! so the mutual-exclusion flag cannot stay stuck after any outcome.

#[cfg(test)]
#[path = "submission_test.rs"]
mod submission_test;

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::form::{compute_validity, FormState};
use crate::schema::{field_spec, FieldKey, ValueKind};

/// Failure modes of a completed network round trip.
#[derive(Clone, Debug, PartialEq)]
pub enum PredictError {
    /// The service answered with a non-success status.
    ServiceUnavailable(u16),
    /// The request could not complete, or a 2xx body was malformed.
    Transport(String),
}

impl fmt::Display for PredictError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredictError::ServiceUnavailable(status) => {
                write!(f, "The prediction service is unavailable (HTTP {})", status)
            }
            PredictError::Transport(_) => {
                write!(f, "The prediction request could not be completed")
            }
        }
    }
}

impl std::error::Error for PredictError {}

/// Why `Submission::begin` refused to start a request.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitBlocked {
    /// A request is already outstanding; the attempt is dropped, not queued.
    InFlight,
    /// These fields failed validation; no network call was made.
    Validation(HashSet<FieldKey>),
}

/// Request body: the full form nested under a `features` wrapper, the
/// shape the deployed service reads.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PredictRequest {
    pub features: Map<String, Value>,
}

impl PredictRequest {
    /// Serialize every schema key: bounded-integer fields become JSON
    /// numbers when their text parses, everything else travels as the
    /// string the user entered.
    pub fn from_form(form: &FormState) -> Self {
        let mut features = Map::new();
        for &key in FieldKey::ALL.iter() {
            let raw = form.get(key).trim();
            let value = match field_spec(key).kind {
                ValueKind::BoundedInt { .. } => raw
                    .parse::<i64>()
                    .map(Value::from)
                    .unwrap_or_else(|_| Value::from(raw)),
                ValueKind::FreeText | ValueKind::Choice(_) => Value::from(raw),
            };
            features.insert(key.as_str().to_string(), value);
        }
        Self { features }
    }
}

/// Success body from the prediction endpoint.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PredictResponse {
    pub prediction: f64,
}

/// State of the single allowed prediction request.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Submission {
    #[default]
    Idle,
    InFlight,
    Done(f64),
    Failed(PredictError),
}

impl Submission {
    pub fn in_flight(&self) -> bool {
        matches!(self, Submission::InFlight)
    }

    /// Gate a new attempt.
    ///
    /// Refused while a request is outstanding; rejected with the
    /// offending field set when validation fails, before any payload is
    /// built. On success the previous result or error is discarded and
    /// the body to send is handed back.
    pub fn begin(&mut self, form: &FormState) -> Result<PredictRequest, SubmitBlocked> {
        if self.in_flight() {
            return Err(SubmitBlocked::InFlight);
        }
        let invalid = compute_validity(form);
        if !invalid.is_empty() {
            return Err(SubmitBlocked::Validation(invalid));
        }
        *self = Submission::InFlight;
        Ok(PredictRequest::from_form(form))
    }

    /// Record the outcome of the round trip. Always leaves `InFlight`,
    /// so another attempt can begin regardless of how this one ended.
    pub fn settle(&mut self, outcome: Result<f64, PredictError>) {
        *self = match outcome {
            Ok(price) => Submission::Done(price),
            Err(err) => Submission::Failed(err),
        };
    }
}

/// Round to whole dollars and insert thousands separators.
pub fn format_price(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}
