// Error types module
pub mod error;

// Backend client handle
pub mod client;

// Re-export commonly used types
pub use bcknd_config::BackendConfig;
pub use client::ApiClient;
pub use error::{ClientError, Result};
pub use reqwest::Method;
