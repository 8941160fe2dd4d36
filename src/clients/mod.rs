mod demographics;
mod nutritionix;
mod openweather;
mod types;

pub use demographics::*;
pub use nutritionix::*;
pub use openweather::*;
pub use types::*;

use crate::Result;
use std::time::Duration;

fn http_client(timeout: Duration) -> Result<reqwest::Client> {
    Ok(reqwest::Client::builder().timeout(timeout).build()?)
}
