// src/core/net.rs
// Single blocking GET for the drop-table page. No retries.

use std::time::Duration;

use crate::config::consts::USER_AGENT;
use crate::error::{Error, Result};

pub fn http_get(url: &str, timeout_secs: u64) -> Result<String> {
    let network = |source| Error::Network { url: url.to_string(), source };

    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .map_err(network)?;

    let resp = client.get(url).send().map_err(network)?;
    let status = resp.status();
    if !status.is_success() {
        return Err(Error::HttpStatus { url: url.to_string(), status: status.as_u16() });
    }

    let body = resp.text().map_err(network)?;
    logf!(url, bytes = body.len(), "fetched source page");
    Ok(body)
}
