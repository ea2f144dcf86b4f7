//! Live form state and validation.
//!
//! Values are stored exactly as typed; numeric parsing happens only
//! inside validation, so in-progress text like "19" (on the way to
//! "1990") survives the round trip through an edit.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::collections::HashSet;

use crate::schema::{field_spec, FieldKey, ValueKind};

/// One raw string per schema key. Every key is always present; values
/// may be empty while the user is editing.
#[derive(Clone, Debug, PartialEq)]
pub struct FormState {
    values: [String; FieldKey::ALL.len()],
}

impl FormState {
    /// Session-start state with every field at its documented default.
    pub fn with_defaults() -> Self {
        Self {
            values: std::array::from_fn(|i| field_spec(FieldKey::ALL[i]).default.to_string()),
        }
    }

    pub fn get(&self, key: FieldKey) -> &str {
        &self.values[key as usize]
    }

    pub fn set(&mut self, key: FieldKey, raw: impl Into<String>) {
        self.values[key as usize] = raw.into();
    }
}

/// Check a single raw value against its field's spec.
///
/// Bounds are inclusive: a value equal to `min` or `max` passes.
pub fn validate_field(key: FieldKey, raw: &str) -> Result<(), String> {
    let spec = field_spec(key);
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(format!("{} cannot be empty", spec.label));
    }
    match spec.kind {
        ValueKind::BoundedInt { min, max } => match trimmed.parse::<i64>() {
            Ok(v) if v < min => Err(format!("{} must be at least {}", spec.label, min)),
            Ok(v) if v > max => Err(format!("{} cannot exceed {}", spec.label, max)),
            Ok(_) => Ok(()),
            Err(_) => Err(format!("{} must be a valid number", spec.label)),
        },
        ValueKind::FreeText | ValueKind::Choice(_) => Ok(()),
    }
}

/// Store `raw` under `key` verbatim, then revalidate that field only.
///
/// Exactly one entry of `invalid` is added or removed per call; no other
/// field's validity is touched.
pub fn update_field(
    form: &mut FormState,
    invalid: &mut HashSet<FieldKey>,
    key: FieldKey,
    raw: String,
) {
    form.set(key, raw);
    match validate_field(key, form.get(key)) {
        Ok(()) => {
            invalid.remove(&key);
        }
        Err(_) => {
            invalid.insert(key);
        }
    }
}

/// Full recomputation over every schema key.
///
/// Pure and idempotent; run at submit time to catch fields left in a
/// default-but-invalid state that no edit ever touched.
pub fn compute_validity(form: &FormState) -> HashSet<FieldKey> {
    FieldKey::ALL
        .iter()
        .copied()
        .filter(|&key| validate_field(key, form.get(key)).is_err())
        .collect()
}
