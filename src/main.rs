//! Car price prediction form using Yew.
//! Wires form state, field validation, and the submission round trip.

use std::collections::HashSet;

use car_price_predictor::{
    api, update_field, validate_field, FieldKey, FormState, SubmitBlocked, Submission,
};
use yew::prelude::*;

mod components;
mod config;

use components::{render_error, render_field_row, render_result};
use config::PREDICT_ENDPOINT;

/// Primary application component wiring state, handlers, and UI elements.
#[function_component(App)]
fn app() -> Html {
    let form = use_state(FormState::with_defaults);
    let invalid = use_state(HashSet::<FieldKey>::new);
    let submission = use_state(Submission::default);

    // Store the raw text and revalidate just the edited field.
    let on_field_input = {
        let form = form.clone();
        let invalid = invalid.clone();
        Callback::from(move |(key, raw): (FieldKey, String)| {
            let mut next_form = (*form).clone();
            let mut next_invalid = (*invalid).clone();
            update_field(&mut next_form, &mut next_invalid, key, raw);
            form.set(next_form);
            invalid.set(next_invalid);
        })
    };

    let on_submit = {
        let form = form.clone();
        let invalid = invalid.clone();
        let submission = submission.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*submission).clone();
            match next.begin(&form) {
                Ok(request) => {
                    submission.set(next);
                    let submission = submission.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        let outcome = api::request_prediction(PREDICT_ENDPOINT, &request).await;
                        let mut settled = Submission::InFlight;
                        settled.settle(outcome);
                        submission.set(settled);
                    });
                }
                // A second submit while one is outstanding is dropped.
                Err(SubmitBlocked::InFlight) => {}
                Err(SubmitBlocked::Validation(fields)) => {
                    invalid.set(fields);
                }
            }
        })
    };

    let busy = submission.in_flight();
    let submit_disabled = busy || !invalid.is_empty();

    html! {
        <div class="container">
            <h1>{ "Car Price Prediction" }</h1>
            <p class="description">{ "Fill in the car details to predict the price." }</p>

            <form onsubmit={on_submit}>
                { FieldKey::ALL.iter().map(|&key| {
                    let error = invalid
                        .contains(&key)
                        .then(|| validate_field(key, form.get(key)).err())
                        .flatten();
                    render_field_row(key, form.get(key), error, &on_field_input)
                }).collect::<Html>() }

                <button type="submit" disabled={submit_disabled}>
                    { if busy { "Predicting…" } else { "Predict Price" } }
                </button>
            </form>

            <div class="results-area">
                { match &*submission {
                    Submission::Done(price) => render_result(*price),
                    Submission::Failed(error) => render_error(error),
                    _ => html! {},
                } }
            </div>
        </div>
    }
}

/// Entry point: installs logging and the panic hook, then renders.
fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    yew::Renderer::<App>::new().render();
}
