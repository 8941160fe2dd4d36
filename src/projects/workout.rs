use super::{ProjectError, ProjectOutput};
use crate::{
    clients::{ExerciseApi, ExerciseQuery, ExerciseRecord},
    form::FormInput,
    render::RenderContext,
};

const POUNDS_PER_KG: f64 = 2.2046;
const CM_PER_INCH: f64 = 2.54;

/// Converts the imperial form fields into the metric query the exercise API expects.
/// Both conversions truncate toward zero.
pub fn exercise_query(form: &FormInput) -> Result<ExerciseQuery, ProjectError> {
    let weight_lb = form.decimal("weight")?;
    let height_feet = form.integer("heightFeet")?;
    let height_inches = form.decimal("heightInches")?;
    let age = form.integer("age")?;
    let query = form.text("query")?;

    let total_inches = height_feet as f64 * 12.0 + height_inches;

    Ok(ExerciseQuery {
        query: query.to_string(),
        weight_kg: (weight_lb / POUNDS_PER_KG) as i64,
        height_cm: (total_inches * CM_PER_INCH) as i64,
        age,
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct Workout(pub ExerciseRecord);

pub async fn calculate(form: &FormInput, api: &dyn ExerciseApi) -> Result<Workout, ProjectError> {
    let query = exercise_query(form)?;
    let records = api.estimate(&query).await?;

    records
        .into_iter()
        .next()
        .map(Workout)
        .ok_or_else(|| ProjectError::undefined(format!("no exercise recognised in {:?}", query.query)))
}

impl ProjectOutput for Workout {
    const FEATURE: &'static str = "workout-calculator";

    fn write(self, ctx: &mut RenderContext) {
        ctx.insert("calculate_workout", true);
        ctx.insert("result", self.0);
    }

    fn fallback(_: &ProjectError, ctx: &mut RenderContext) {
        ctx.insert("calculate_workout", false);
    }
}
