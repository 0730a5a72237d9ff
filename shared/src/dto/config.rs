use log::debug;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::Result;

/// SIP account settings stored on the device.
///
/// Field names follow the device's JSON (`phoneNumber`, `password`, `sipIP`).
/// The device answers `GET /api/config` with empty strings when nothing has
/// been saved yet, so `Default` mirrors that.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct DeviceConfig {
    /// Number (SIP user) the phone registers as
    #[serde(rename = "phoneNumber")]
    #[validate(length(min = 1, message = "Phone number cannot be empty"))]
    pub phone_number: String,

    /// SIP account password
    pub password: String,

    /// Address of the SIP registrar
    #[serde(rename = "sipIP")]
    #[validate(length(min = 1, message = "SIP server address cannot be empty"))]
    pub sip_ip: String,
}

impl DeviceConfig {
    /// Validates the settings before they are posted to the device.
    pub fn check(&self) -> Result<()> {
        self.validate()?;
        debug!("Device config for {} passed validation", self.phone_number);
        Ok(())
    }
}
