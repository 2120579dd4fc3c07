//! Core types and shared functionality for linkseeker.
//!
//! This crate provides:
//! - Unified error types with process exit-code mapping
//! - Configuration structures with layered loading

pub mod config;
pub mod error;

pub use config::{AppConfig, BrowserConfig, ConfigError};
pub use error::Error;
