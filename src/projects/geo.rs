use super::{ProjectError, ProjectOutput, SENTINEL, format_decimal};
use crate::{
    Error,
    clients::{FORECAST_STEPS, ForecastEntry, GeoLocation, WeatherApi},
    form::FormInput,
    render::RenderContext,
};
use chrono::{Duration, NaiveDateTime, Timelike};

const FORECAST_STEP_HOURS: i64 = 3;

/// A geocoding match that carries every part of the location line.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCity {
    pub name: String,
    pub state: String,
    pub country: String,
    pub lat: f64,
    pub lon: f64,
}

impl ResolvedCity {
    pub fn location_line(&self) -> String {
        format!(
            "Location: {}, State: {}, Country: {}",
            self.name, self.state, self.country
        )
    }

    pub fn coordinates_line(&self) -> String {
        format!(
            "Latitude: {}, Longitude: {}",
            format_decimal(self.lat),
            format_decimal(self.lon)
        )
    }
}

/// Geocodes `"<city>, <state-country>"` and keeps the first match.
pub async fn resolve_city(form: &FormInput, api: &dyn WeatherApi) -> Result<ResolvedCity, ProjectError> {
    let query = format!("{}, {}", form.text("city")?, form.text("state-country")?);
    let locations = api.geocode(&query).await?;

    let GeoLocation {
        name,
        lat,
        lon,
        country,
        state,
    } = locations
        .into_iter()
        .next()
        .ok_or_else(|| ProjectError::undefined(format!("no location matches {query:?}")))?;

    let state = state.ok_or_else(|| Error::unexpected("geocoding", format!("{name} has no state")))?;

    Ok(ResolvedCity {
        name,
        state,
        country,
        lat,
        lon,
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct CityCoordinates(pub ResolvedCity);

pub async fn find_coordinates(
    form: &FormInput,
    api: &dyn WeatherApi,
) -> Result<CityCoordinates, ProjectError> {
    resolve_city(form, api).await.map(CityCoordinates)
}

impl ProjectOutput for CityCoordinates {
    const FEATURE: &'static str = "city-coordinates-finder";

    fn write(self, ctx: &mut RenderContext) {
        ctx.insert("result_location", self.0.location_line());
        ctx.insert("result", self.0.coordinates_line());
    }

    /// The page is shown as if nothing had been submitted.
    fn fallback(_: &ProjectError, _: &mut RenderContext) {}
}

/// Clock labels for each forecast step, `(now + 3k h).hour % 12` for k in 1..=8.
///
/// Noon and midnight read `0:00`.
pub fn forecast_hours(now: NaiveDateTime) -> Vec<String> {
    (1..=FORECAST_STEPS as i64)
        .map(|step| {
            let at = now + Duration::hours(step * FORECAST_STEP_HOURS);
            format!("{}:00", at.hour() % 12)
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    pub city: ResolvedCity,
    pub hours: Vec<String>,
    pub entries: Vec<ForecastEntry>,
}

pub async fn forecast(
    form: &FormInput,
    api: &dyn WeatherApi,
    now: NaiveDateTime,
) -> Result<Forecast, ProjectError> {
    let city = resolve_city(form, api).await?;
    let entries = api.forecast(city.lat, city.lon).await?;

    Ok(Forecast {
        city,
        hours: forecast_hours(now),
        entries,
    })
}

impl ProjectOutput for Forecast {
    const FEATURE: &'static str = "weather-forecaster";

    fn write(self, ctx: &mut RenderContext) {
        ctx.insert("forecast", true);
        ctx.insert("result_location", self.city.location_line());
        ctx.insert("hours", self.hours);
        ctx.insert("results", self.entries);
    }

    fn fallback(_: &ProjectError, ctx: &mut RenderContext) {
        ctx.insert("forecast", false);
        ctx.insert("result_location", SENTINEL);
    }
}
