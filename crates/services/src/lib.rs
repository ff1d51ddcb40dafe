#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod generation_service;
pub mod relay;

pub use config::ServerConfig;
pub use error::{GenerationError, RelayError};
pub use generation_service::GenerationService;
pub use relay::{RelayHandle, RelayReply, RelayRequest, RelayService, spawn_relay};
