//! REST side of the Lanyard API.
//!
//! Used for the initial snapshot before the socket delivers its first
//! event, and for the 1s activity poll.

use crate::api::ApiError;
use crate::lanyard::types::{ApiResponse, Presence};

pub const API_BASE: &str = "https://api.lanyard.rest/v1";

/// Fetch the current presence snapshot for one user.
///
/// `base` is [`API_BASE`] outside of tests.
pub async fn fetch_presence(
    client: &reqwest::Client,
    base: &str,
    discord_id: &str,
) -> Result<Presence, ApiError> {
    let url = format!("{}/users/{}", base, discord_id);
    let resp = client.get(&url).send().await?;

    let status = resp.status();
    if !status.is_success() {
        return Err(ApiError::Api(format!("HTTP {}", status)));
    }

    let body = resp.text().await?;
    let envelope: ApiResponse = serde_json::from_str(&body)?;

    if !envelope.success {
        let message = envelope
            .error
            .and_then(|e| e.message)
            .unwrap_or_else(|| format!("HTTP {}", status));
        return Err(ApiError::Api(message));
    }

    envelope
        .data
        .ok_or_else(|| ApiError::Api("missing presence data".to_string()))
}
