pub mod handlers;

use crate::{
    Result,
    clients::{DemographicsClient, NutritionixClient, OpenWeatherClient},
    config::Config,
    mail::SmtpNotifier,
    render::{Page, Templates},
};
use axum::{
    Router,
    extract::State,
    routing::{MethodRouter, get},
};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Builds the HTTP clients, mail transport and templates from `config`.
pub fn build_state(config: &Config) -> Result<AppState> {
    let timeout = config.request_timeout();

    Ok(AppState {
        templates: Arc::new(Templates::embedded()?),
        demographics: Arc::new(DemographicsClient::new(&config.demographics, timeout)?),
        weather: Arc::new(OpenWeatherClient::new(&config.weather, timeout)?),
        exercise: Arc::new(NutritionixClient::new(&config.nutrition, timeout)?),
        notifier: Arc::new(SmtpNotifier::new(config)?),
    })
}

/// GET route rendering `page` with no result.
fn show(page: Page) -> MethodRouter<AppState> {
    get(move |state: State<AppState>| handlers::view(state, page))
}

pub fn router(state: AppState) -> Router {
    use handlers::*;

    Router::new()
        .route("/", show(Page::Index))
        .route("/thank-you", show(Page::Index).post(contact))
        .route("/projects", show(Page::Projects))
        .route(
            "/projects/band-name-generator",
            show(Page::BandNameGenerator).post(band_name_generator),
        )
        .route(
            "/projects/tip-calculator",
            show(Page::TipCalculator).post(tip_calculator),
        )
        .route(
            "/projects/bmi-calculator",
            show(Page::BmiCalculator).post(bmi_calculator),
        )
        .route(
            "/projects/life-in-weeks",
            show(Page::LifeInWeeks).post(life_in_weeks),
        )
        .route(
            "/projects/leap-year-checker",
            show(Page::LeapYearChecker).post(leap_year_checker),
        )
        .route(
            "/projects/heads-or-tails",
            show(Page::HeadsOrTails).post(heads_or_tails),
        )
        .route(
            "/projects/rock-paper-scissors",
            show(Page::RockPaperScissors).post(rock_paper_scissors),
        )
        .route(
            "/projects/gender-guesser",
            show(Page::GenderGuesser).post(gender_guesser),
        )
        .route(
            "/projects/age-guesser",
            show(Page::AgeGuesser).post(age_guesser),
        )
        .route(
            "/projects/city-coordinates-finder",
            show(Page::CityCoordinatesFinder).post(city_coordinates_finder),
        )
        .route(
            "/projects/weather-forecaster",
            show(Page::WeatherForecaster).post(weather_forecaster),
        )
        .route(
            "/projects/workout-calculator",
            show(Page::WorkoutCalculator).post(workout_calculator),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let app = router(build_state(&config)?);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
