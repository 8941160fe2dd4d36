use super::{ProjectError, ProjectOutput, SENTINEL, round_to_cents};
use crate::{form::FormInput, render::RenderContext};

#[derive(Debug, Clone, PartialEq)]
pub struct TipSplit {
    pub per_person: f64,
}

pub fn split_bill(bill: f64, tip_percent: f64, people: i64) -> Result<TipSplit, ProjectError> {
    if people == 0 {
        return Err(ProjectError::undefined("cannot split a bill between zero people"));
    }
    let with_tip = bill * (1.0 + tip_percent / 100.0);
    Ok(TipSplit {
        per_person: round_to_cents(with_tip / people as f64),
    })
}

pub fn calculate(form: &FormInput) -> Result<TipSplit, ProjectError> {
    let bill = form.decimal("bill")?;
    let tip = form.decimal("tip")?;
    let people = form.integer("people")?;
    split_bill(bill, tip, people)
}

impl TipSplit {
    pub fn formatted(&self) -> String {
        format!("${:.2}", self.per_person)
    }
}

impl ProjectOutput for TipSplit {
    const FEATURE: &'static str = "tip-calculator";

    fn write(self, ctx: &mut RenderContext) {
        ctx.insert("final_bill_per_person", self.formatted());
    }

    fn fallback(_: &ProjectError, ctx: &mut RenderContext) {
        ctx.insert("final_bill_per_person", SENTINEL);
    }
}
