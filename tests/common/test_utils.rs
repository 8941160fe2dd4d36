use super::mocks::{MockDemographics, MockExercise, MockNotifier, MockWeather};
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use portfolio_site::{
    clients::{ExerciseRecord, ForecastEntry, ForecastMain, GeoLocation, WeatherCondition},
    config::Config,
    render::Templates,
    server::{handlers::AppState, router},
};
use std::sync::Arc;
use tower::ServiceExt; // for `oneshot`

/// `SENTINEL` as it appears in rendered HTML; the template escaper encodes `/`.
pub const SENTINEL_HTML: &str = "N&#x2f;A";

/// Mocks wired into the app; keep the `Arc`s to inspect calls afterwards.
#[derive(Default)]
pub struct TestServices {
    pub demographics: Arc<MockDemographics>,
    pub weather: Arc<MockWeather>,
    pub exercise: Arc<MockExercise>,
    pub notifier: Arc<MockNotifier>,
}

impl TestServices {
    pub fn app(&self) -> Router {
        let state = AppState {
            templates: Arc::new(Templates::embedded().unwrap()),
            demographics: self.demographics.clone(),
            weather: self.weather.clone(),
            exercise: self.exercise.clone(),
            notifier: self.notifier.clone(),
        };
        router(state)
    }
}

pub fn test_app() -> Router {
    TestServices::default().app()
}

/// A config that passes validation, pointing every service at `base_url`.
pub fn create_test_config(base_url: &str) -> Config {
    let mut config = Config::default();
    config.server.request_timeout_secs = 2;
    config.mail.address = "owner@example.com".to_string();
    config.mail.password = "app-password".to_string();
    config.weather.api_key = "test-weather-key".to_string();
    config.weather.geocoding_url = format!("{base_url}/geo/1.0/direct");
    config.weather.forecast_url = format!("{base_url}/data/2.5/forecast");
    config.demographics.genderize_url = format!("{base_url}/genderize");
    config.demographics.agify_url = format!("{base_url}/agify");
    config.nutrition.app_id = "test-app-id".to_string();
    config.nutrition.app_key = "test-app-key".to_string();
    config.nutrition.endpoint = format!("{base_url}/v2/natural/exercise");
    config
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// POSTs `pairs` as an urlencoded form body.
pub async fn post_form(app: Router, uri: &str, pairs: &[(&str, &str)]) -> (StatusCode, String) {
    let body = serde_urlencoded::to_string(pairs).unwrap();

    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

pub fn new_york() -> GeoLocation {
    GeoLocation {
        name: "New York County".to_string(),
        lat: 40.7127281,
        lon: -74.0060152,
        country: "US".to_string(),
        state: Some("New York".to_string()),
    }
}

pub fn forecast_entry(dt: i64, temp: f64, description: &str) -> ForecastEntry {
    ForecastEntry {
        dt,
        main: ForecastMain {
            temp,
            feels_like: temp - 2.0,
            temp_min: None,
            temp_max: None,
            humidity: 60,
        },
        weather: vec![WeatherCondition {
            main: "Clouds".to_string(),
            description: description.to_string(),
            icon: "04d".to_string(),
        }],
        wind: None,
        pop: None,
        dt_txt: None,
    }
}

pub fn running() -> ExerciseRecord {
    ExerciseRecord {
        name: "running".to_string(),
        duration_min: 30.0,
        nf_calories: 372.5,
        met: Some(9.8),
        user_input: Some("ran".to_string()),
    }
}
