// Connection resolution and tool normalization for brickgate

pub mod config;
pub mod connection;
pub mod error;
pub mod gateway;
pub mod store;

pub use connection::{ConnectionRecord, DEFAULT_CONNECTION};
pub use error::{CoreError, CoreResult};
pub use gateway::{GatewayError, GatewayResult, ToolGateway};
pub use store::CredentialStore;
