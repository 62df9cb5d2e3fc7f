//! # Core
//!
//! Error types and environment configuration for the host application.

pub mod config;
pub mod error;

pub use config::Config;
pub use error::{AppError, Result};
