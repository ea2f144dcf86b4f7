//! Form state, validation, and submission logic for a car price
//! prediction single-page app.
//!
//! The rendered surface lives in the binary; this crate holds
//! everything that is testable without a browser: the static field
//! schema, the raw-text form state, the derived invalid-field set, the
//! submission state machine, and the prediction service's wire types.

pub mod api;
pub mod form;
pub mod schema;
pub mod submission;

pub use form::{compute_validity, update_field, validate_field, FormState};
pub use schema::{field_spec, FieldKey, FieldSpec, ValueKind};
pub use submission::{
    format_price, PredictError, PredictRequest, PredictResponse, SubmitBlocked, Submission,
};
