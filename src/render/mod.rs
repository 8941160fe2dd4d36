//! Render instructions and the template set they are rendered with.

use crate::Result;
use minijinja::Environment;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Index,
    Projects,
    ThankYou,
    BandNameGenerator,
    TipCalculator,
    BmiCalculator,
    LifeInWeeks,
    LeapYearChecker,
    HeadsOrTails,
    RockPaperScissors,
    GenderGuesser,
    AgeGuesser,
    CityCoordinatesFinder,
    WeatherForecaster,
    WorkoutCalculator,
}

impl Page {
    pub const ALL: [Page; 15] = [
        Page::Index,
        Page::Projects,
        Page::ThankYou,
        Page::BandNameGenerator,
        Page::TipCalculator,
        Page::BmiCalculator,
        Page::LifeInWeeks,
        Page::LeapYearChecker,
        Page::HeadsOrTails,
        Page::RockPaperScissors,
        Page::GenderGuesser,
        Page::AgeGuesser,
        Page::CityCoordinatesFinder,
        Page::WeatherForecaster,
        Page::WorkoutCalculator,
    ];

    pub fn template_name(self) -> &'static str {
        match self {
            Page::Index => "index.html",
            Page::Projects => "projects.html",
            Page::ThankYou => "thank-you.html",
            Page::BandNameGenerator => "band-name-generator.html",
            Page::TipCalculator => "tip-calculator.html",
            Page::BmiCalculator => "bmi-calculator.html",
            Page::LifeInWeeks => "life-in-weeks.html",
            Page::LeapYearChecker => "leap-year-checker.html",
            Page::HeadsOrTails => "heads-or-tails.html",
            Page::RockPaperScissors => "rock-paper-scissors.html",
            Page::GenderGuesser => "gender-guesser.html",
            Page::AgeGuesser => "age-guesser.html",
            Page::CityCoordinatesFinder => "city-coordinates-finder.html",
            Page::WeatherForecaster => "weather-forecaster.html",
            Page::WorkoutCalculator => "workout-calculator.html",
        }
    }

    fn source(self) -> &'static str {
        match self {
            Page::Index => include_str!("../../templates/index.html"),
            Page::Projects => include_str!("../../templates/projects.html"),
            Page::ThankYou => include_str!("../../templates/thank-you.html"),
            Page::BandNameGenerator => include_str!("../../templates/band-name-generator.html"),
            Page::TipCalculator => include_str!("../../templates/tip-calculator.html"),
            Page::BmiCalculator => include_str!("../../templates/bmi-calculator.html"),
            Page::LifeInWeeks => include_str!("../../templates/life-in-weeks.html"),
            Page::LeapYearChecker => include_str!("../../templates/leap-year-checker.html"),
            Page::HeadsOrTails => include_str!("../../templates/heads-or-tails.html"),
            Page::RockPaperScissors => include_str!("../../templates/rock-paper-scissors.html"),
            Page::GenderGuesser => include_str!("../../templates/gender-guesser.html"),
            Page::AgeGuesser => include_str!("../../templates/age-guesser.html"),
            Page::CityCoordinatesFinder => {
                include_str!("../../templates/city-coordinates-finder.html")
            }
            Page::WeatherForecaster => include_str!("../../templates/weather-forecaster.html"),
            Page::WorkoutCalculator => include_str!("../../templates/workout-calculator.html"),
        }
    }
}

/// A page plus the named fields it is rendered with.
///
/// Built fresh for every response; `current_year` is always present so the
/// shared footer can use it.
#[derive(Debug, Clone)]
pub struct RenderContext {
    page: Page,
    fields: Map<String, Value>,
}

impl RenderContext {
    pub fn new(page: Page, current_year: i32) -> Self {
        let mut fields = Map::new();
        fields.insert("current_year".to_string(), Value::from(current_year));
        Self { page, fields }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    /// Values that fail to serialize are logged and stored as `null`.
    pub fn insert(&mut self, key: &str, value: impl Serialize) {
        let value = serde_json::to_value(value).unwrap_or_else(|e| {
            warn!(page = self.page.template_name(), "Cannot serialize field {}: {}", key, e);
            Value::Null
        });
        self.fields.insert(key.to_string(), value);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    /// Loads the base layout and every page template compiled into the binary.
    pub fn embedded() -> Result<Self> {
        let mut env = Environment::new();
        env.add_template("base.html", include_str!("../../templates/base.html"))?;
        for page in Page::ALL {
            env.add_template(page.template_name(), page.source())?;
        }
        Ok(Self { env })
    }

    pub fn render(&self, context: &RenderContext) -> Result<String> {
        let template = self.env.get_template(context.page.template_name())?;
        Ok(template.render(&context.fields)?)
    }
}
