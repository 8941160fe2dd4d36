use super::{ProjectError, ProjectOutput, SENTINEL, format_decimal, title_case};
use crate::{clients::DemographicsApi, form::FormInput, render::RenderContext};

#[derive(Debug, Clone, PartialEq)]
pub struct GenderGuess {
    pub gender: String,
    pub probability: f64,
}

impl GenderGuess {
    /// e.g. `Male (Probability: 95.0%)`
    pub fn display(&self) -> String {
        format!(
            "{} (Probability: {}%)",
            title_case(&self.gender),
            format_decimal(self.probability * 100.0)
        )
    }
}

pub async fn guess_gender(
    form: &FormInput,
    api: &dyn DemographicsApi,
) -> Result<GenderGuess, ProjectError> {
    let name = form.text("name")?;
    let estimate = api.gender(name).await?;

    match (estimate.gender, estimate.probability) {
        (Some(gender), Some(probability)) => Ok(GenderGuess {
            gender,
            probability,
        }),
        _ => Err(ProjectError::undefined(format!("no gender known for {name:?}"))),
    }
}

impl ProjectOutput for GenderGuess {
    const FEATURE: &'static str = "gender-guesser";

    fn write(self, ctx: &mut RenderContext) {
        ctx.insert("gender_data", self.display());
    }

    fn fallback(_: &ProjectError, ctx: &mut RenderContext) {
        ctx.insert("gender_data", SENTINEL);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeGuess(pub u32);

pub async fn guess_age(form: &FormInput, api: &dyn DemographicsApi) -> Result<AgeGuess, ProjectError> {
    let name = form.text("name")?;
    let estimate = api.age(name).await?;

    estimate
        .age
        .map(AgeGuess)
        .ok_or_else(|| ProjectError::undefined(format!("no age known for {name:?}")))
}

impl ProjectOutput for AgeGuess {
    const FEATURE: &'static str = "age-guesser";

    fn write(self, ctx: &mut RenderContext) {
        ctx.insert("age_data", self.0);
    }

    fn fallback(_: &ProjectError, ctx: &mut RenderContext) {
        ctx.insert("age_data", SENTINEL);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_gender_display() {
        let guess = GenderGuess {
            gender: "male".to_string(),
            probability: 0.95,
        };
        assert_eq!(guess.display(), "Male (Probability: 95.0%)");

        let guess = GenderGuess {
            gender: "female".to_string(),
            probability: 1.0,
        };
        assert_eq!(guess.display(), "Female (Probability: 100.0%)");
    }
}
