use gloo_net::http::Response;
use log::warn;
use serde::de::DeserializeOwned;
use shared::{ErrorResponse, Result, SharedError};

pub fn network_error(error: gloo_net::Error) -> SharedError {
    SharedError::Network(error.to_string())
}

/// Reads the body and decodes it according to the status code.
pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    let body = response.text().await.map_err(network_error)?;
    decode_response(status, &body)
}

/// Non-2xx statuses become `SharedError::Http` carrying the device's
/// `error` text when the body has one, otherwise the raw body.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<ErrorResponse>(body)
            .map(|response| response.error)
            .unwrap_or_else(|_| body.trim().to_string());
        warn!("Device API returned HTTP {}: {}", status, message);
        return Err(SharedError::Http { status, message });
    }
    Ok(serde_json::from_str(body)?)
}
