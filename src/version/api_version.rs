//! API version values and URL path construction
//!
//! An [`ApiVersion`] identifies which revision of the admin API a request
//! targets and knows how to render itself into REST and GraphQL URL paths:
//!
//! - `NoVersion` builds unversioned paths under `/admin/`
//! - `Unstable` targets the latest, potentially breaking, API surface
//! - `Release` targets a concrete named version (dated releases like
//!   `2024-01`, or a custom name)

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Serialize, Serializer};

/// Lookup name under which the null version is registered
pub const NO_VERSION_NAME: &str = "no_version";

/// Lookup name of the unstable channel
pub const UNSTABLE_NAME: &str = "unstable";

/// Format of a dated release handle: `YYYY-MM`
static HANDLE_FORMAT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}$").unwrap());

/// A revision of the admin API to target
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// No version: REST paths live directly under `/admin/`
    NoVersion,
    /// The unstable channel
    Unstable,
    /// A concrete named version, e.g. a dated release like `2024-01`
    Release(String),
}

impl ApiVersion {
    /// Creates a dated release version, validating the `YYYY-MM` handle format.
    ///
    /// # Examples
    ///
    /// ```
    /// use admin_api_version::version::ApiVersion;
    ///
    /// let version = ApiVersion::release("2024-01").unwrap();
    /// assert_eq!(version.name(), "2024-01");
    /// assert!(ApiVersion::release("next").is_err());
    /// ```
    pub fn release(handle: &str) -> Result<Self, super::VersionError> {
        if HANDLE_FORMAT.is_match(handle) {
            Ok(Self::Release(handle.to_string()))
        } else {
            Err(super::VersionError::InvalidHandle(handle.to_string()))
        }
    }

    /// Creates a version with an arbitrary name, skipping handle validation.
    ///
    /// Path construction accepts any name verbatim; use this for custom
    /// versions that do not follow the dated-release format.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Release(name.into())
    }

    /// Returns the name this version is registered and looked up under.
    pub fn name(&self) -> &str {
        match self {
            Self::NoVersion => NO_VERSION_NAME,
            Self::Unstable => UNSTABLE_NAME,
            Self::Release(handle) => handle,
        }
    }

    /// Returns true if this is a dated release (`YYYY-MM` handle).
    pub fn is_stable(&self) -> bool {
        match self {
            Self::Release(handle) => HANDLE_FORMAT.is_match(handle),
            _ => false,
        }
    }

    /// Builds the REST path for a resource sub-path.
    ///
    /// The resource path is concatenated verbatim; callers supply a clean
    /// relative path like `orders/1.json`.
    ///
    /// # Examples
    ///
    /// ```
    /// use admin_api_version::version::ApiVersion;
    ///
    /// assert_eq!(
    ///     ApiVersion::Unstable.construct_api_path("orders/1.json"),
    ///     "/admin/api/unstable/orders/1.json"
    /// );
    /// assert_eq!(
    ///     ApiVersion::NoVersion.construct_api_path("orders/1.json"),
    ///     "/admin/orders/1.json"
    /// );
    /// ```
    pub fn construct_api_path(&self, resource_path: &str) -> String {
        match self {
            Self::NoVersion => format!("/admin/{resource_path}"),
            versioned => format!("/admin/api/{}/{resource_path}", versioned.name()),
        }
    }

    /// Builds the GraphQL endpoint path.
    ///
    /// Unlike [`construct_api_path`](Self::construct_api_path), the
    /// no-version GraphQL path keeps the `api/` segment
    /// (`/admin/api/graphql.json`). The asymmetry matches the served
    /// endpoint layout and is intentional.
    pub fn construct_graphql_path(&self) -> String {
        match self {
            Self::NoVersion => "/admin/api/graphql.json".to_string(),
            versioned => format!("/admin/api/{}/graphql.json", versioned.name()),
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for ApiVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
