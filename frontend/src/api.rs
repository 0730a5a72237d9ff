// Re-export all API modules
pub mod context;
pub mod device;
pub mod utils;

pub use context::{use_api, ApiProvider, ApiProviderProps};
pub use device::DeviceApi;
