//! Configuration module for LCC lookups
//!
//! This module provides the `ClassifyConfig` struct and its builder. The
//! remote site's URL fragments, the fallback link budget and the catalog
//! paths all live here and are handed explicitly to the engine and session.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod types;

// Re-exports for public API
pub use builder::{ClassifyConfigBuilder, ConfigError};
pub use types::{ClassifyConfig, LinkBudget, SiteEndpoints};
