//! networking module
//! function:
//! - every call is one synchronous round trip to the fixture
//! - a non-success status is turned into `FixtureError::Device` carrying status and url
//! - a request that cannot be sent at all is `FixtureError::Transport`

use serde_json::Value;
use super::error::FixtureError;
use crate::trace;

const LOG_TAG: &str = "http";

/// join base url and api path, tolerating slashes on either side
pub fn join_url(base_url: &str, api_url: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), api_url.trim_start_matches('/'))
}

/// wrapper for put api with a plain text body
pub async fn api_put(client: &reqwest::Client, base_url: &str, api_url: &str, body: String) -> Result<(), FixtureError> {
    let url = join_url(base_url, api_url);
    trace!(LOG_TAG, "PUT {} body: {}", url, body);
    let resp = client
        .put(url.as_str())
        .header(reqwest::header::CONTENT_TYPE, "text/plain")
        .body(body)
        .send()
        .await?;
    check_status(&resp, url)?;
    Ok(())
}

/// wrapper for get api returning a json value
pub async fn api_get(client: &reqwest::Client, base_url: &str, api_url: &str) -> Result<Value, FixtureError> {
    let url = join_url(base_url, api_url);
    trace!(LOG_TAG, "GET {}", url);
    let resp = client.get(url.as_str()).send().await?;
    check_status(&resp, url)?;
    let data: Value = resp.json().await?;
    Ok(data)
}

/// check that the response status is a success, otherwise raise a device error
fn check_status(resp: &reqwest::Response, url: String) -> Result<(), FixtureError> {
    let status = resp.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(FixtureError::Device { status: status.to_string(), url })
    }
}
