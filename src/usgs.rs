use std::time::Duration;

use tracing::{debug, error, info};

use crate::error::AppError;

// API endpoint for the USGS earthquake event catalog
const USGS_ENDPOINT: &str = "https://earthquake.usgs.gov/fdsnws/event/1/query";

// Fixed query window: significant felt events from early 2016
const START_TIME: &str = "2016-01-01";
const END_TIME: &str = "2016-05-02";
const MIN_FELT: u32 = 50;
const MIN_MAGNITUDE: u32 = 5;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const READ_TIMEOUT: Duration = Duration::from_secs(15);

/// Builds the full request URL with the fixed query parameters.
pub fn request_url() -> String {
    format!(
        "{}?format=geojson&starttime={}&endtime={}&minfelt={}&minmagnitude={}",
        USGS_ENDPOINT, START_TIME, END_TIME, MIN_FELT, MIN_MAGNITUDE
    )
}

/// Performs a single GET request against the USGS API and returns the raw
/// response body.
///
/// # Arguments
/// * `url` - Full request URL, normally built by [`request_url`]
///
/// # Returns
/// * The response body text on a successful status code
/// * Error on transport failure, timeout, or an unsuccessful status code
pub async fn fetch(url: &str) -> Result<String, AppError> {
    info!("Fetching earthquake data from: {}", url);

    // Create HTTP client with fixed timeouts and send the request
    let client = reqwest::Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .timeout(READ_TIMEOUT)
        .build()?;
    let response = client.get(url).send().await?;

    if response.status().is_success() {
        let body = response.text().await?;
        debug!("Earthquake data fetched successfully ({} bytes)", body.len());
        Ok(body)
    } else {
        // Log and return error for unsuccessful responses
        error!("Failed to fetch earthquake data: {}", response.status());
        Err(AppError::ApiRequestFailed(format!(
            "Failed to fetch earthquake data: {}",
            response.status()
        )))
    }
}
