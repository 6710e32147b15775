//! Inkwiz HTTP gateway
//!
//! Serves the landing page, the `/process` upload endpoint, and the health API.

pub mod admission;
pub mod error;
pub mod health_api;
pub mod landing;
pub mod process;
pub mod server;
pub mod upload;

pub use error::ApiError;
pub use server::{build_router, start_server, GatewayState};
