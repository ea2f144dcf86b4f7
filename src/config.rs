//! Application-level configuration constants.

/// Prediction service endpoint.
pub const PREDICT_ENDPOINT: &str =
    "https://ml-sg-car-price-predictor-7ab800aa71be.herokuapp.com/predict";

/// Currency label shown next to the predicted price.
pub const CURRENCY: &str = "SGD";
