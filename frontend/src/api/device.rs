use gloo_net::http::Request;
use log::debug;
use shared::{DeviceConfig, DeviceStatus, MessageResponse, Result, SharedError, StatusReply};

use super::utils::{network_error, read_json};
use crate::config::EndpointConfig;

pub const CONFIG_PATH: &str = "/api/config";
pub const STATUS_PATH: &str = "/api/status";

/// Client for the phone's HTTP API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeviceApi {
    endpoint: EndpointConfig,
}

impl DeviceApi {
    pub fn new(endpoint: EndpointConfig) -> Self {
        Self { endpoint }
    }

    pub fn endpoint(&self) -> &EndpointConfig {
        &self.endpoint
    }

    /// Loads the saved SIP settings.
    pub async fn fetch_config(&self) -> Result<DeviceConfig> {
        let url = self.endpoint.url(CONFIG_PATH);
        debug!("GET {}", url);
        let response = Request::get(&url).send().await.map_err(network_error)?;
        read_json(response).await
    }

    /// Validates and stores the SIP settings, returning the device's
    /// confirmation text.
    pub async fn save_config(&self, config: &DeviceConfig) -> Result<String> {
        config.check()?;
        let url = self.endpoint.url(CONFIG_PATH);
        debug!("POST {}", url);
        let response = Request::post(&url)
            .json(config)
            .map_err(|e| SharedError::Conversion(e.to_string()))?
            .send()
            .await
            .map_err(network_error)?;
        let body: MessageResponse = read_json(response).await?;
        Ok(body.message)
    }

    pub async fn fetch_status(&self) -> Result<DeviceStatus> {
        let url = self.endpoint.url(STATUS_PATH);
        debug!("GET {}", url);
        let response = Request::get(&url).send().await.map_err(network_error)?;
        let reply: StatusReply = read_json(response).await?;
        reply.into_result()
    }
}
