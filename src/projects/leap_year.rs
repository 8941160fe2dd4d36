use super::{ProjectError, ProjectOutput, SENTINEL};
use crate::{form::FormInput, render::RenderContext};

pub fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeapYearVerdict {
    pub year: i64,
    pub leap: bool,
}

pub fn check(form: &FormInput) -> Result<LeapYearVerdict, ProjectError> {
    let year = form.integer("year")?;
    Ok(LeapYearVerdict {
        year,
        leap: is_leap_year(year),
    })
}

impl LeapYearVerdict {
    pub fn sentence(&self) -> String {
        if self.leap {
            format!("{} is a Leap Year", self.year)
        } else {
            format!("{} is not a Leap Year", self.year)
        }
    }
}

impl ProjectOutput for LeapYearVerdict {
    const FEATURE: &'static str = "leap-year-checker";

    fn write(self, ctx: &mut RenderContext) {
        ctx.insert("leap_year_result", self.sentence());
    }

    fn fallback(_: &ProjectError, ctx: &mut RenderContext) {
        ctx.insert("leap_year_result", SENTINEL);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(1900, false)]
    #[case(2000, true)]
    #[case(2023, false)]
    #[case(2024, true)]
    #[case(2100, false)]
    #[case(1600, true)]
    #[case(0, true)]
    #[case(-4, true)]
    fn test_gregorian_rule(#[case] year: i64, #[case] expected: bool) {
        assert_eq!(is_leap_year(year), expected);
    }

    #[test]
    fn test_sentence() {
        let form = FormInput::from([("year", "2024")]);
        assert_eq!(check(&form).unwrap().sentence(), "2024 is a Leap Year");

        let form = FormInput::from([("year", "1900")]);
        assert_eq!(check(&form).unwrap().sentence(), "1900 is not a Leap Year");
    }

    #[test]
    fn test_check_rejects_decimal_year() {
        let form = FormInput::from([("year", "2024.5")]);
        assert!(matches!(check(&form), Err(ProjectError::Input(_))));
    }
}
