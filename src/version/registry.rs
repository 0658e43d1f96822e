//! Registry of known API versions with coercion from raw identifiers

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::version::api_version::ApiVersion;
use crate::version::error::VersionError;

/// Dated releases shipped with the crate, oldest first
const KNOWN_RELEASES: [&str; 5] = ["2024-01", "2024-04", "2024-07", "2024-10", "2025-01"];

/// Raw input accepted by [`VersionRegistry::coerce_to_version`]
///
/// Built via `From`, so callers pass an [`ApiVersion`] or a name string
/// directly; any other type is rejected at compile time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionInput {
    /// An already-constructed version, returned unchanged by coercion
    Version(ApiVersion),
    /// A name to look up among the known versions
    Name(String),
}

impl From<ApiVersion> for VersionInput {
    fn from(version: ApiVersion) -> Self {
        Self::Version(version)
    }
}

impl From<&str> for VersionInput {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for VersionInput {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

/// Owns the set of known [`ApiVersion`] values, keyed by name.
///
/// The registry is an explicit object rather than process-global state;
/// construct one per client (or per test) and pass it by reference. Mutation
/// takes `&mut self` and is not internally synchronized.
#[derive(Debug, Clone)]
pub struct VersionRegistry {
    known_versions: IndexMap<String, ApiVersion>,
}

impl VersionRegistry {
    /// Creates a registry pre-seeded with the built-in versions.
    pub fn new() -> Self {
        let mut registry = Self {
            known_versions: IndexMap::new(),
        };
        registry.define_known_versions();
        registry
    }

    /// Registers a version under its name, overwriting any prior
    /// registration with the same name. Names are not validated.
    pub fn define_version(&mut self, version: ApiVersion) {
        let name = version.name().to_string();
        if self.known_versions.contains_key(&name) {
            warn!("Overwriting registered API version: {}", name);
        } else {
            debug!("Registered API version: {}", name);
        }
        self.known_versions.insert(name, version);
    }

    /// (Re-)seeds the built-in versions: `no_version`, `unstable`, and the
    /// shipped dated releases. Idempotent; used at construction and to
    /// restore defaults after [`clear_defined_versions`](Self::clear_defined_versions).
    pub fn define_known_versions(&mut self) {
        self.define_version(ApiVersion::NoVersion);
        self.define_version(ApiVersion::Unstable);
        for handle in KNOWN_RELEASES {
            self.define_version(ApiVersion::Release(handle.to_string()));
        }
    }

    /// Empties the registry. Coercion of any name fails until re-seeded.
    pub fn clear_defined_versions(&mut self) {
        debug!("Clearing {} registered API versions", self.known_versions.len());
        self.known_versions.clear();
    }

    /// Canonicalizes raw input into an [`ApiVersion`].
    ///
    /// An already-built version passes through unchanged without a registry
    /// lookup. A name is looked up among the known versions; an unregistered
    /// name fails with [`VersionError::UnknownVersion`].
    pub fn coerce_to_version(
        &self,
        input: impl Into<VersionInput>,
    ) -> Result<ApiVersion, VersionError> {
        match input.into() {
            VersionInput::Version(version) => Ok(version),
            VersionInput::Name(name) => self
                .known_versions
                .get(&name)
                .cloned()
                .ok_or(VersionError::UnknownVersion(name)),
        }
    }

    /// The most recent dated release currently registered, if any.
    pub fn latest_stable_version(&self) -> Option<&ApiVersion> {
        self.known_versions
            .values()
            .filter(|version| version.is_stable())
            .max_by(|a, b| a.name().cmp(b.name()))
    }

    /// Iterates registered versions in insertion order.
    pub fn known_versions(&self) -> impl Iterator<Item = &ApiVersion> {
        self.known_versions.values()
    }

    pub fn len(&self) -> usize {
        self.known_versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.known_versions.is_empty()
    }
}

impl Default for VersionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("no_version", ApiVersion::NoVersion)]
    #[case("unstable", ApiVersion::Unstable)]
    #[case("2024-01", ApiVersion::named("2024-01"))]
    fn coerce_to_version_resolves_built_in_names(
        #[case] name: &str,
        #[case] expected: ApiVersion,
    ) {
        let registry = VersionRegistry::new();
        assert_eq!(registry.coerce_to_version(name), Ok(expected));
    }

    #[test]
    fn coerce_to_version_passes_versions_through_unchanged() {
        let registry = VersionRegistry::new();
        let version = ApiVersion::named("not registered anywhere");

        // Pass-through skips the lookup entirely
        assert_eq!(registry.coerce_to_version(version.clone()), Ok(version));
    }

    #[test]
    fn coerce_to_version_accepts_owned_and_borrowed_names() {
        let registry = VersionRegistry::new();

        assert_eq!(
            registry.coerce_to_version("unstable"),
            registry.coerce_to_version("unstable".to_string())
        );
    }

    #[test]
    fn coerce_to_version_fails_for_unregistered_name() {
        let registry = VersionRegistry::new();

        assert_eq!(
            registry.coerce_to_version("made up version"),
            Err(VersionError::UnknownVersion("made up version".to_string()))
        );
    }

    #[test]
    fn define_version_overwrites_same_name() {
        let mut registry = VersionRegistry::new();
        let before = registry.len();

        registry.define_version(ApiVersion::named("unstable"));

        assert_eq!(registry.len(), before);
        assert_eq!(
            registry.coerce_to_version("unstable"),
            Ok(ApiVersion::named("unstable"))
        );
    }

    #[test]
    fn clear_then_define_known_versions_restores_built_in_set() {
        let mut registry = VersionRegistry::new();
        let original: Vec<String> = registry
            .known_versions()
            .map(|v| v.name().to_string())
            .collect();

        registry.clear_defined_versions();
        assert!(registry.is_empty());
        assert_eq!(
            registry.coerce_to_version("unstable"),
            Err(VersionError::UnknownVersion("unstable".to_string()))
        );

        registry.define_known_versions();
        let restored: Vec<String> = registry
            .known_versions()
            .map(|v| v.name().to_string())
            .collect();
        assert_eq!(restored, original);
    }

    #[test]
    fn define_known_versions_is_idempotent() {
        let mut registry = VersionRegistry::new();
        let before = registry.len();

        registry.define_known_versions();

        assert_eq!(registry.len(), before);
    }

    #[test]
    fn latest_stable_version_is_greatest_dated_release() {
        let registry = VersionRegistry::new();

        assert_eq!(
            registry.latest_stable_version(),
            Some(&ApiVersion::named("2025-01"))
        );
    }

    #[test]
    fn latest_stable_version_ignores_unstable_and_custom_names() {
        let mut registry = VersionRegistry::new();
        registry.clear_defined_versions();
        registry.define_version(ApiVersion::Unstable);
        registry.define_version(ApiVersion::named("zzz-custom"));

        assert_eq!(registry.latest_stable_version(), None);

        registry.define_version(ApiVersion::named("2023-10"));
        assert_eq!(
            registry.latest_stable_version(),
            Some(&ApiVersion::named("2023-10"))
        );
    }

    #[test]
    fn latest_stable_version_is_none_after_clear() {
        let mut registry = VersionRegistry::new();
        registry.clear_defined_versions();

        assert_eq!(registry.latest_stable_version(), None);
    }
}
