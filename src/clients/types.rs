use serde::{Deserialize, Serialize};

/// genderize.io reply. Unknown names come back with `gender: null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenderEstimate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub probability: Option<f64>,
    #[serde(default)]
    pub count: Option<u64>,
}

/// agify.io reply. Unknown names come back with `age: null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgeEstimate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub count: Option<u64>,
}

/// One match from the OpenWeather direct geocoding API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub country: String,
    #[serde(default)]
    pub state: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ForecastResponse {
    pub list: Vec<ForecastEntry>,
}

/// One 3-hour step of the OpenWeather forecast, in imperial units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub dt: i64,
    pub main: ForecastMain,
    #[serde(default)]
    pub weather: Vec<WeatherCondition>,
    #[serde(default)]
    pub wind: Option<Wind>,
    #[serde(default)]
    pub pop: Option<f64>,
    #[serde(default)]
    pub dt_txt: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastMain {
    pub temp: f64,
    pub feels_like: f64,
    #[serde(default)]
    pub temp_min: Option<f64>,
    #[serde(default)]
    pub temp_max: Option<f64>,
    pub humidity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherCondition {
    #[serde(default)]
    pub main: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    pub speed: f64,
}

/// Body of the Nutritionix natural-language exercise request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseQuery {
    pub query: String,
    pub weight_kg: i64,
    pub height_cm: i64,
    pub age: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ExerciseResponse {
    #[serde(default)]
    pub exercises: Vec<ExerciseRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseRecord {
    pub name: String,
    pub duration_min: f64,
    pub nf_calories: f64,
    #[serde(default)]
    pub met: Option<f64>,
    #[serde(default)]
    pub user_input: Option<String>,
}
