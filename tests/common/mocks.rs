use async_trait::async_trait;
use portfolio_site::{
    Error, Result,
    clients::{
        AgeEstimate, DemographicsApi, ExerciseApi, ExerciseQuery, ExerciseRecord, ForecastEntry,
        GenderEstimate, GeoLocation, WeatherApi,
    },
    mail::{ContactMessage, Notifier},
};
use std::sync::{Arc, Mutex};

/// Mock demographics service. A `None` reply simulates a failed call.
#[derive(Debug, Default)]
pub struct MockDemographics {
    pub gender: Option<GenderEstimate>,
    pub age: Option<AgeEstimate>,
    pub names: Arc<Mutex<Vec<String>>>,
}

impl MockDemographics {
    pub fn with_gender(mut self, gender: Option<&str>, probability: Option<f64>) -> Self {
        self.gender = Some(GenderEstimate {
            name: None,
            gender: gender.map(str::to_string),
            probability,
            count: Some(1),
        });
        self
    }

    pub fn with_age(mut self, age: Option<u32>) -> Self {
        self.age = Some(AgeEstimate {
            name: None,
            age,
            count: Some(1),
        });
        self
    }

    pub fn names(&self) -> Vec<String> {
        self.names.lock().unwrap().clone()
    }
}

#[async_trait]
impl DemographicsApi for MockDemographics {
    async fn gender(&self, name: &str) -> Result<GenderEstimate> {
        self.names.lock().unwrap().push(name.to_string());
        self.gender
            .clone()
            .ok_or_else(|| Error::unexpected("genderize", "mock failure"))
    }

    async fn age(&self, name: &str) -> Result<AgeEstimate> {
        self.names.lock().unwrap().push(name.to_string());
        self.age
            .clone()
            .ok_or_else(|| Error::unexpected("agify", "mock failure"))
    }
}

#[derive(Debug, Default)]
pub struct MockWeather {
    pub locations: Option<Vec<GeoLocation>>,
    pub forecast: Option<Vec<ForecastEntry>>,
    pub queries: Arc<Mutex<Vec<String>>>,
    pub coordinates: Arc<Mutex<Vec<(f64, f64)>>>,
}

impl MockWeather {
    pub fn with_locations(mut self, locations: Vec<GeoLocation>) -> Self {
        self.locations = Some(locations);
        self
    }

    pub fn with_forecast(mut self, forecast: Vec<ForecastEntry>) -> Self {
        self.forecast = Some(forecast);
        self
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }

    pub fn coordinates(&self) -> Vec<(f64, f64)> {
        self.coordinates.lock().unwrap().clone()
    }
}

#[async_trait]
impl WeatherApi for MockWeather {
    async fn geocode(&self, query: &str) -> Result<Vec<GeoLocation>> {
        self.queries.lock().unwrap().push(query.to_string());
        self.locations
            .clone()
            .ok_or_else(|| Error::unexpected("geocoding", "mock failure"))
    }

    async fn forecast(&self, lat: f64, lon: f64) -> Result<Vec<ForecastEntry>> {
        self.coordinates.lock().unwrap().push((lat, lon));
        self.forecast
            .clone()
            .ok_or_else(|| Error::unexpected("forecast", "mock failure"))
    }
}

#[derive(Debug, Default)]
pub struct MockExercise {
    pub records: Option<Vec<ExerciseRecord>>,
    pub queries: Arc<Mutex<Vec<ExerciseQuery>>>,
}

impl MockExercise {
    pub fn with_records(mut self, records: Vec<ExerciseRecord>) -> Self {
        self.records = Some(records);
        self
    }

    pub fn queries(&self) -> Vec<ExerciseQuery> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl ExerciseApi for MockExercise {
    async fn estimate(&self, query: &ExerciseQuery) -> Result<Vec<ExerciseRecord>> {
        self.queries.lock().unwrap().push(query.clone());
        self.records
            .clone()
            .ok_or_else(|| Error::unexpected("nutritionix", "mock failure"))
    }
}

/// Records every message; fails every send when `fail` is set.
#[derive(Debug, Default)]
pub struct MockNotifier {
    pub sent: Arc<Mutex<Vec<ContactMessage>>>,
    pub fail: bool,
}

impl MockNotifier {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<ContactMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for MockNotifier {
    async fn send(&self, message: &ContactMessage) -> Result<()> {
        if self.fail {
            return Err(Error::mail("relay refused the connection"));
        }
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}
