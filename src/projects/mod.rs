//! The project catalog.
//!
//! Every feature turns a submitted form into `Result<Output, ProjectError>`.
//! The output writes its named fields into the page's [`RenderContext`]; on
//! error the feature's declared fallback is written instead, so a failed
//! computation still renders the same page.

pub mod band_name;
pub mod bmi;
pub mod games;
pub mod geo;
pub mod guessers;
pub mod leap_year;
pub mod life_in_weeks;
pub mod tip;
pub mod workout;

use crate::{form::FormError, render::RenderContext};
use thiserror::Error;
use tracing::warn;

/// Shown in place of a result that could not be computed.
pub const SENTINEL: &str = "N/A";

#[derive(Error, Debug)]
pub enum ProjectError {
    #[error(transparent)]
    Input(#[from] FormError),

    #[error("no result: {0}")]
    Undefined(String),

    #[error("service call failed: {0}")]
    Service(#[from] crate::Error),
}

impl ProjectError {
    pub fn undefined(msg: impl Into<String>) -> Self {
        Self::Undefined(msg.into())
    }
}

pub trait ProjectOutput: Sized {
    /// Used in logs when the fallback is taken.
    const FEATURE: &'static str;

    fn write(self, ctx: &mut RenderContext);

    fn fallback(error: &ProjectError, ctx: &mut RenderContext);
}

/// Writes either the result or the feature's fallback into `ctx`.
pub fn settle<T: ProjectOutput>(result: Result<T, ProjectError>, ctx: &mut RenderContext) {
    match result {
        Ok(output) => output.write(ctx),
        Err(error) => {
            warn!(feature = T::FEATURE, "Falling back: {}", error);
            T::fallback(&error, ctx);
        }
    }
}

/// Upper-cases the first letter of every run of letters and lower-cases the rest.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

/// Rounds the exact binary value to two decimals, exact ties going to even.
pub fn round_to_cents(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

/// Shortest round-trip form of `value`, always with a fractional part (`95` -> `95.0`).
pub fn format_decimal(value: f64) -> String {
    let text = value.to_string();
    if value.is_finite() && !text.contains('.') {
        format!("{text}.0")
    } else {
        text
    }
}
