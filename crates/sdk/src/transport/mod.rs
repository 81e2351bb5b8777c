//! Transport layer for the brickgate SDK.

pub mod http;

pub use http::{HttpTransport, Paginated};
