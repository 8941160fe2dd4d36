//! Typed access to a submitted form body.

use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    #[error("missing field `{field}`")]
    Missing { field: String },

    #[error("field `{field}` is not a valid number: {value:?}")]
    Invalid { field: String, value: String },
}

/// Field name to raw value, as parsed from an `application/x-www-form-urlencoded` body.
#[derive(Debug, Clone, Default)]
pub struct FormInput {
    fields: HashMap<String, String>,
}

impl FormInput {
    pub fn new(fields: HashMap<String, String>) -> Self {
        Self { fields }
    }

    pub fn text(&self, field: &str) -> Result<&str, FormError> {
        self.fields
            .get(field)
            .map(String::as_str)
            .ok_or_else(|| FormError::Missing {
                field: field.to_string(),
            })
    }

    /// Parses a finite decimal number. `inf` and `NaN` are rejected.
    pub fn decimal(&self, field: &str) -> Result<f64, FormError> {
        let raw = self.text(field)?;
        raw.trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| invalid(field, raw))
    }

    /// Parses a whole number. A decimal such as `5.5` is rejected rather than truncated.
    pub fn integer(&self, field: &str) -> Result<i64, FormError> {
        let raw = self.text(field)?;
        raw.trim().parse::<i64>().map_err(|_| invalid(field, raw))
    }
}

impl From<HashMap<String, String>> for FormInput {
    fn from(fields: HashMap<String, String>) -> Self {
        Self::new(fields)
    }
}

impl<const N: usize> From<[(&str, &str); N]> for FormInput {
    fn from(pairs: [(&str, &str); N]) -> Self {
        Self::new(
            pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}

fn invalid(field: &str, raw: &str) -> FormError {
    FormError::Invalid {
        field: field.to_string(),
        value: raw.to_string(),
    }
}
