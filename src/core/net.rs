// src/core/net.rs
//
// Blocking HTTPS GET. The only network call the app makes is the one-time
// states/LGAs fetch at startup.

use std::time::Duration;

use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};

/// GET `url` and return the body. Non-2xx statuses are errors.
pub fn http_get(url: &str) -> Result<String, reqwest::Error> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()?;

    logd!("Net: GET {url}");
    let body = client
        .get(url)
        .send()?
        .error_for_status()?
        .text()?;
    logd!("Net: {} bytes from {url}", body.len());
    Ok(body)
}
