use super::title_case;
use crate::{form::{FormError, FormInput}, render::RenderContext};

#[derive(Debug, Clone, PartialEq)]
pub struct BandName(pub String);

/// There is no fallback: a form without both fields is a bad request.
pub fn generate(form: &FormInput) -> Result<BandName, FormError> {
    let city = title_case(form.text("cityName")?);
    let pet = title_case(form.text("petName")?);
    Ok(BandName(format!("{city} {pet}")))
}

impl BandName {
    pub fn write(self, ctx: &mut RenderContext) {
        ctx.insert("band_name", self.0);
    }
}
