use crate::{
    Result,
    clients::{DemographicsApi, ExerciseApi, WeatherApi},
    form::FormInput,
    mail::{ContactMessage, Notifier},
    projects::{self, settle},
    render::{Page, RenderContext, Templates},
};
use axum::{
    Form,
    extract::State,
    response::Html,
};
use chrono::{Datelike, Local};
use std::{collections::HashMap, sync::Arc};
use tracing::info;

type FormFields = Form<HashMap<String, String>>;

/// Immutable collaborators shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub templates: Arc<Templates>,
    pub demographics: Arc<dyn DemographicsApi>,
    pub weather: Arc<dyn WeatherApi>,
    pub exercise: Arc<dyn ExerciseApi>,
    pub notifier: Arc<dyn Notifier>,
}

fn context(page: Page) -> RenderContext {
    RenderContext::new(page, Local::now().year())
}

fn render(state: &AppState, ctx: &RenderContext) -> Result<Html<String>> {
    Ok(Html(state.templates.render(ctx)?))
}

/// GET for any page: the form with no result.
pub async fn view(State(state): State<AppState>, page: Page) -> Result<Html<String>> {
    render(&state, &context(page))
}

pub async fn contact(
    State(state): State<AppState>,
    Form(fields): FormFields,
) -> Result<Html<String>> {
    let form = FormInput::from(fields);
    let message = ContactMessage {
        subject: form.text("subject")?.to_string(),
        full_name: form.text("fullName")?.to_string(),
        email: form.text("email")?.to_string(),
        phone_number: form.text("phoneNumber")?.to_string(),
        message: form.text("message")?.to_string(),
    };

    info!("Contact form submitted by {:?}", message.full_name);
    state.notifier.send(&message).await?;

    render(&state, &context(Page::ThankYou))
}

pub async fn band_name_generator(
    State(state): State<AppState>,
    Form(fields): FormFields,
) -> Result<Html<String>> {
    let mut ctx = context(Page::BandNameGenerator);
    projects::band_name::generate(&FormInput::from(fields))?.write(&mut ctx);
    render(&state, &ctx)
}

pub async fn tip_calculator(
    State(state): State<AppState>,
    Form(fields): FormFields,
) -> Result<Html<String>> {
    let mut ctx = context(Page::TipCalculator);
    settle(projects::tip::calculate(&FormInput::from(fields)), &mut ctx);
    render(&state, &ctx)
}

pub async fn bmi_calculator(
    State(state): State<AppState>,
    Form(fields): FormFields,
) -> Result<Html<String>> {
    let mut ctx = context(Page::BmiCalculator);
    settle(projects::bmi::calculate(&FormInput::from(fields)), &mut ctx);
    render(&state, &ctx)
}

pub async fn life_in_weeks(
    State(state): State<AppState>,
    Form(fields): FormFields,
) -> Result<Html<String>> {
    let mut ctx = context(Page::LifeInWeeks);
    settle(projects::life_in_weeks::calculate(&FormInput::from(fields)), &mut ctx);
    render(&state, &ctx)
}

pub async fn leap_year_checker(
    State(state): State<AppState>,
    Form(fields): FormFields,
) -> Result<Html<String>> {
    let mut ctx = context(Page::LeapYearChecker);
    settle(projects::leap_year::check(&FormInput::from(fields)), &mut ctx);
    render(&state, &ctx)
}

pub async fn heads_or_tails(State(state): State<AppState>) -> Result<Html<String>> {
    let mut ctx = context(Page::HeadsOrTails);
    projects::games::flip_coin(&mut rand::thread_rng()).write(&mut ctx);
    render(&state, &ctx)
}

pub async fn rock_paper_scissors(
    State(state): State<AppState>,
    Form(fields): FormFields,
) -> Result<Html<String>> {
    let form = FormInput::from(fields);
    let mut ctx = context(Page::RockPaperScissors);
    let round = projects::games::play(form.text("choice")?, &mut rand::thread_rng());
    settle(round, &mut ctx);
    render(&state, &ctx)
}

pub async fn gender_guesser(
    State(state): State<AppState>,
    Form(fields): FormFields,
) -> Result<Html<String>> {
    let form = FormInput::from(fields);
    let mut ctx = context(Page::GenderGuesser);
    settle(
        projects::guessers::guess_gender(&form, state.demographics.as_ref()).await,
        &mut ctx,
    );
    render(&state, &ctx)
}

pub async fn age_guesser(
    State(state): State<AppState>,
    Form(fields): FormFields,
) -> Result<Html<String>> {
    let form = FormInput::from(fields);
    let mut ctx = context(Page::AgeGuesser);
    settle(
        projects::guessers::guess_age(&form, state.demographics.as_ref()).await,
        &mut ctx,
    );
    render(&state, &ctx)
}

pub async fn city_coordinates_finder(
    State(state): State<AppState>,
    Form(fields): FormFields,
) -> Result<Html<String>> {
    let form = FormInput::from(fields);
    let mut ctx = context(Page::CityCoordinatesFinder);
    settle(
        projects::geo::find_coordinates(&form, state.weather.as_ref()).await,
        &mut ctx,
    );
    render(&state, &ctx)
}

pub async fn weather_forecaster(
    State(state): State<AppState>,
    Form(fields): FormFields,
) -> Result<Html<String>> {
    let form = FormInput::from(fields);
    let now = Local::now().naive_local();
    let mut ctx = context(Page::WeatherForecaster);
    settle(
        projects::geo::forecast(&form, state.weather.as_ref(), now).await,
        &mut ctx,
    );
    render(&state, &ctx)
}

pub async fn workout_calculator(
    State(state): State<AppState>,
    Form(fields): FormFields,
) -> Result<Html<String>> {
    let form = FormInput::from(fields);
    let mut ctx = context(Page::WorkoutCalculator);
    settle(
        projects::workout::calculate(&form, state.exercise.as_ref()).await,
        &mut ctx,
    );
    render(&state, &ctx)
}
