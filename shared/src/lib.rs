pub mod dto {
    pub mod common;
    pub mod config;
    pub mod status;
}

pub mod error;

// Re-export commonly used items
pub use error::{SharedError, Result};

// Re-export DTOs
pub use dto::{
    common::{ErrorResponse, MessageResponse},
    config::DeviceConfig,
    status::{DeviceStatus, StatusReply},
};
