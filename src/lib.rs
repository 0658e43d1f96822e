//! API version handling for admin REST/GraphQL clients
//!
//! This crate provides the version layer a client uses to target a specific
//! revision of the admin API: the [`version::ApiVersion`] value knows how to
//! render itself into REST and GraphQL URL path prefixes, and the
//! [`version::VersionRegistry`] owns the set of known versions and coerces
//! loosely-typed identifiers into canonical version values.

pub mod config;
pub mod version;
