//! Version layer for targeting a revision of the admin API
//!
//! This module provides the core functionality for representing API versions
//! and resolving loosely-typed version identifiers into canonical values.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────────┐
//! │  ApiVersion  │◀────│  VersionRegistry │
//! │ (path rules) │     │ (lookup/coerce)  │
//! └──────────────┘     └──────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`api_version`]: The `ApiVersion` value and its URL path construction
//! - [`registry`]: Registry of known versions with coercion from raw input
//! - [`error`]: Error types for coercion and handle validation

pub mod api_version;
pub mod error;
pub mod registry;

pub use api_version::ApiVersion;
pub use error::VersionError;
pub use registry::{VersionInput, VersionRegistry};
