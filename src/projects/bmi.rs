use super::{ProjectError, ProjectOutput, SENTINEL, round_to_cents};
use crate::{form::FormInput, render::RenderContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiRange {
    Underweight,
    NormalWeight,
    Overweight,
    Obese,
}

impl BmiRange {
    /// Classifies an already rounded BMI.
    pub fn classify(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if bmi < 25.0 {
            Self::NormalWeight
        } else if bmi < 30.0 {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::NormalWeight => "Normal weight",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }

    pub fn info(self) -> &'static str {
        match self {
            Self::Underweight => {
                "Your BMI indicates that you are underweight for your height. It's important to \
                 ensure you're getting enough nutrition to support your health and well-being. \
                 Consider consulting with a healthcare professional to determine a healthy \
                 approach to gaining weight."
            }
            Self::NormalWeight => {
                "Congratulations! Your BMI falls within the normal weight range for your height. \
                 This indicates a healthy weight, which is associated with a lower risk of \
                 developing weight-related health problems. Keep up the good work with your \
                 healthy lifestyle!"
            }
            Self::Overweight => {
                "Your BMI suggests that you are overweight for your height. This can increase \
                 your risk of developing health problems like heart disease, high blood \
                 pressure, and type 2 diabetes. Consider making lifestyle changes such as \
                 eating a balanced diet and increasing physical activity to achieve a healthier \
                 weight."
            }
            Self::Obese => {
                "Your BMI indicates that you are in the obese range for your height. Obesity \
                 significantly increases your risk of developing serious health conditions, \
                 including heart disease, stroke, type 2 diabetes, and certain cancers. It's \
                 important to prioritize healthy eating habits, regular physical activity, and \
                 possibly seek guidance from a healthcare provider to manage your weight and \
                 improve your overall health."
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bmi {
    pub value: f64,
    pub range: BmiRange,
}

/// Imperial BMI: `weight_lb * 703 / height_in²`, rounded to two decimals.
pub fn body_mass_index(height_feet: i64, height_inches: f64, weight_lb: f64) -> Result<Bmi, ProjectError> {
    let total_inches = height_feet as f64 * 12.0 + height_inches;
    let squared = total_inches * total_inches;
    if squared == 0.0 {
        return Err(ProjectError::undefined("height must not be zero"));
    }
    let raw = weight_lb * 703.0 / squared;
    if !raw.is_finite() || !squared.is_finite() {
        return Err(ProjectError::undefined("height or weight out of range"));
    }
    let value = round_to_cents(raw);
    Ok(Bmi {
        value,
        range: BmiRange::classify(value),
    })
}

pub fn calculate(form: &FormInput) -> Result<Bmi, ProjectError> {
    let feet = form.integer("heightFeet")?;
    let inches = form.decimal("heightInches")?;
    let weight = form.decimal("weight")?;
    body_mass_index(feet, inches, weight)
}

impl ProjectOutput for Bmi {
    const FEATURE: &'static str = "bmi-calculator";

    fn write(self, ctx: &mut RenderContext) {
        ctx.insert("bmi_formatted", format!("{:.2}", self.value));
        ctx.insert("bmi_range", self.range.label());
        ctx.insert("bmi_range_info", self.range.info());
    }

    /// Only the headline value is replaced; no class or description is shown.
    fn fallback(_: &ProjectError, ctx: &mut RenderContext) {
        ctx.insert("bmi_formatted", SENTINEL);
    }
}
