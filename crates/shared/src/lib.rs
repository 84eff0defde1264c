//! Shared types, errors, and configuration for Bendahara.
//!
//! This crate provides common types used across all other crates:
//! - Money type with decimal precision and Rupiah formatting
//! - Typed IDs for type-safe entity references
//! - Pagination types for transaction feeds
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
