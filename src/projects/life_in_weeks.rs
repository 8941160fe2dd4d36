use super::{ProjectError, ProjectOutput, SENTINEL};
use crate::{form::FormInput, render::RenderContext};

const LIFESPAN_YEARS: f64 = 90.0;
const WEEKS_PER_YEAR: f64 = 52.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeeksRemaining(pub i64);

/// Weeks left until the age of 90. Halves round to the nearest even week.
pub fn weeks_remaining(age_years: f64) -> WeeksRemaining {
    let weeks = (LIFESPAN_YEARS - age_years) * WEEKS_PER_YEAR;
    WeeksRemaining(weeks.round_ties_even() as i64)
}

pub fn calculate(form: &FormInput) -> Result<WeeksRemaining, ProjectError> {
    Ok(weeks_remaining(form.decimal("ageYears")?))
}

impl ProjectOutput for WeeksRemaining {
    const FEATURE: &'static str = "life-in-weeks";

    fn write(self, ctx: &mut RenderContext) {
        ctx.insert("weeks_remaining_rounded", self.0);
    }

    fn fallback(_: &ProjectError, ctx: &mut RenderContext) {
        ctx.insert("weeks_remaining_rounded", SENTINEL);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_weeks_remaining() {
        assert_eq!(weeks_remaining(30.0), WeeksRemaining(3120));
        assert_eq!(weeks_remaining(90.0), WeeksRemaining(0));
        assert_eq!(weeks_remaining(95.0), WeeksRemaining(-260));
    }

    #[test]
    fn test_half_weeks_round_to_even() {
        // (90 - 89.125) * 52 = 45.5
        assert_eq!(weeks_remaining(89.125), WeeksRemaining(46));
        // (90 - 89.875) * 52 = 6.5
        assert_eq!(weeks_remaining(89.875), WeeksRemaining(6));
        assert_eq!(weeks_remaining(89.0625), WeeksRemaining(49));
    }

    #[test]
    fn test_calculate_rejects_text() {
        let form = FormInput::from([("ageYears", "thirty")]);
        assert!(matches!(calculate(&form), Err(ProjectError::Input(_))));
    }
}
