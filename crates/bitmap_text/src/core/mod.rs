//! # Core Module
//!
//! Shared configuration used by every text surface and host application.

pub mod config;

pub use config::{
    Config,
    ConfigError,
    ConfigFormat,
    EngineConfig,
    FontConfig,
    ScrollbarConfig,
    TextStyleConfig,
};
