use serde::Deserialize;

use crate::version::{ApiVersion, VersionError, VersionRegistry};

/// Version targeted when the configuration names none
pub const DEFAULT_API_VERSION: &str = "unstable";

/// Client configuration structure
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ClientConfig {
    /// Name of the API version to target, resolved against a
    /// [`VersionRegistry`] before use
    pub api_version: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_version: DEFAULT_API_VERSION.to_string(),
        }
    }
}

impl ClientConfig {
    /// Resolves the configured version name against the registry.
    ///
    /// Fails with [`VersionError::UnknownVersion`] when the configured name
    /// has no registration.
    pub fn resolve_api_version(
        &self,
        registry: &VersionRegistry,
    ) -> Result<ApiVersion, VersionError> {
        registry.coerce_to_version(self.api_version.as_str())
    }
}
