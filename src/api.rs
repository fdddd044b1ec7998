//! Shared plumbing for the remote APIs.
//!
//! Both clients degrade the same way: callers catch [`ApiError`] at the
//! widget boundary, log it, and hide or keep content. Nothing here
//! reaches the user as error text.

use thiserror::Error;

pub const USER_AGENT: &str = concat!("wraithdeck/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("api error: {0}")]
    Api(String),
    #[error("malformed payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// One client is shared by every fetch in the process. GitHub rejects
/// requests without a user agent, so it is set here once.
pub fn client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder().user_agent(USER_AGENT).build()
}
