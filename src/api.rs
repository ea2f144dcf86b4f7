//! HTTP access to the external prediction service.
//!
//! One `POST` per submission, no retry, no cancellation; the browser's
//! default fetch timeout applies. Callers get a `PredictError` instead
//! of a panic so every failure degrades to a message in the UI.

use gloo_net::http::Request;
use log::warn;

use crate::submission::{PredictError, PredictRequest, PredictResponse};

/// Send the form to `endpoint` and extract the numeric prediction.
///
/// Non-2xx statuses map to `ServiceUnavailable`; anything that keeps the
/// round trip from completing, including a malformed 2xx body, maps to
/// `Transport`.
pub async fn request_prediction(
    endpoint: &str,
    request: &PredictRequest,
) -> Result<f64, PredictError> {
    let response = Request::post(endpoint)
        .json(request)
        .map_err(|e| PredictError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| {
            warn!("prediction request failed: {}", e);
            PredictError::Transport(e.to_string())
        })?;

    if !response.ok() {
        warn!("prediction service answered HTTP {}", response.status());
        return Err(PredictError::ServiceUnavailable(response.status()));
    }

    let body: PredictResponse = response.json().await.map_err(|e| {
        warn!("malformed prediction response: {}", e);
        PredictError::Transport(e.to_string())
    })?;
    Ok(body.prediction)
}
