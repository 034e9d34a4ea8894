use reqwest::Response;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Failures surfaced by the data clients. Never recovered here; the store
/// decides what is fatal for a cycle.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("{endpoint} request failed with status {status}: {message}")]
    Api {
        endpoint: &'static str,
        status: u16,
        message: String,
    },
    #[error("failed to decode provider payload: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("unexpected provider payload: {0}")]
    UnexpectedPayload(String),
}

impl DataError {
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Network(err) if err.is_timeout())
    }

    pub(crate) fn api(endpoint: &'static str, status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ProviderError>(body)
            .ok()
            .and_then(|payload| payload.message)
            .unwrap_or_else(|| truncate_body(body));
        Self::Api {
            endpoint,
            status,
            message,
        }
    }
}

/// Error body the provider returns alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
struct ProviderError {
    message: Option<String>,
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        format!("{}...", body.chars().take(MAX).collect::<String>())
    } else {
        body.to_string()
    }
}

/// Read a response body, mapping non-success statuses to [`DataError::Api`]
/// and undecodable payloads to [`DataError::Decode`].
pub(crate) async fn decode<T: DeserializeOwned>(
    endpoint: &'static str,
    response: Response,
) -> Result<T, DataError> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(DataError::api(endpoint, status.as_u16(), &body));
    }
    Ok(serde_json::from_str(&body)?)
}
