//! Pure Yew view components for the prediction form.
//!
//! Rendering is table-driven: each row is produced from the field's
//! static spec, so adding a schema key never touches this module.

use car_price_predictor::{field_spec, format_price, FieldKey, PredictError, ValueKind};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::config::CURRENCY;

/// Renders one labeled input or select for a schema field, with its
/// help text and, when the field is invalid, the validation message.
pub fn render_field_row(
    key: FieldKey,
    value: &str,
    error: Option<String>,
    on_input: &Callback<(FieldKey, String)>,
) -> Html {
    let spec = field_spec(key);
    let invalid_class = if error.is_some() { "invalid" } else { "" };

    let widget = match spec.kind {
        ValueKind::Choice(options) => {
            let onchange = {
                let on_input = on_input.clone();
                Callback::from(move |e: Event| {
                    let select: HtmlSelectElement = e.target_unchecked_into();
                    on_input.emit((key, select.value()));
                })
            };
            html! {
                <select
                    id={spec.name}
                    name={spec.name}
                    class={invalid_class}
                    onchange={onchange}
                >
                    { options.iter().map(|&option| html! {
                        <option value={option} selected={option == value}>{ option }</option>
                    }).collect::<Html>() }
                </select>
            }
        }
        ValueKind::BoundedInt { min, max } => {
            let oninput = {
                let on_input = on_input.clone();
                Callback::from(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    on_input.emit((key, input.value()));
                })
            };
            html! {
                <input
                    type="number"
                    id={spec.name}
                    name={spec.name}
                    min={min.to_string()}
                    max={max.to_string()}
                    placeholder={format!("Enter {}", spec.label)}
                    value={value.to_string()}
                    class={invalid_class}
                    oninput={oninput}
                />
            }
        }
        ValueKind::FreeText => {
            let oninput = {
                let on_input = on_input.clone();
                Callback::from(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    on_input.emit((key, input.value()));
                })
            };
            html! {
                <input
                    type="text"
                    id={spec.name}
                    name={spec.name}
                    placeholder={format!("Enter {}", spec.label)}
                    value={value.to_string()}
                    class={invalid_class}
                    oninput={oninput}
                />
            }
        }
    };

    html! {
        <div class="form-group" key={spec.name}>
            <label for={spec.name}>
                { spec.label }
                if error.is_some() {
                    <span class="invalid-marker">{ " ❌" }</span>
                }
            </label>
            <p class="field-help">{ spec.help }</p>
            { widget }
            if let Some(ref message) = error {
                <div class="input-error">{ message }</div>
            }
        </div>
    }
}

/// Renders the predicted price, rounded and grouped with separators.
pub fn render_result(price: f64) -> Html {
    html! {
        <h3 class="prediction">
            { "Predicted Price: " }
            <span>{ format!("{} {}", CURRENCY, format_price(price)) }</span>
        </h3>
    }
}

/// Renders the single user-visible message for a failed round trip.
pub fn render_error(error: &PredictError) -> Html {
    html! {
        <div class="error">{ error.to_string() }</div>
    }
}
