//! The finalized, immutable resolver configuration.
//!
//! [`ResolverConfig`] is the only value a resolver accepts. Its fields are
//! private and it has no setters: once built it never changes, so it can be
//! shared read-only across any number of resolver workers. To change a field,
//! turn it back into a draft with [`ResolverConfig::into_options`] and finalize
//! again.

use std::time::Duration;

use serde::Serialize;

use crate::options::duration_ms;
use crate::{ConfigError, ResolverOption, ResolverOptions};

/// Validated configuration for a ZooKeeper registry resolver.
///
/// Guarantees: `servers` and `interface_name` are non-empty, `registry_group`
/// is populated, and `session_timeout` is non-zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolverConfig {
    servers: Vec<String>,
    interface_name: String,
    registry_group: String,
    service_group: String,
    service_version: String,
    #[serde(rename = "session_timeout_ms", with = "duration_ms")]
    session_timeout: Duration,
}

impl ResolverConfig {
    /// Builds a configuration from options applied in order to an empty draft.
    ///
    /// # Errors
    ///
    /// See [`ResolverOptions::finalize`].
    pub fn from_options<I>(options: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = ResolverOption>,
    {
        let mut draft = ResolverOptions::new();
        draft.apply(options);
        draft.finalize()
    }

    /// Returns a chained builder over an empty draft.
    pub fn builder() -> ResolverConfigBuilder {
        ResolverConfigBuilder::default()
    }

    // Only `ResolverOptions::finalize` may call this, after validation.
    pub(crate) fn from_validated(options: ResolverOptions) -> Self {
        Self {
            servers: options.servers,
            interface_name: options.interface_name,
            registry_group: options.registry_group,
            service_group: options.service_group,
            service_version: options.service_version,
            session_timeout: options.session_timeout,
        }
    }

    /// ZooKeeper endpoints to connect to. Never empty.
    pub fn servers(&self) -> &[String] {
        &self.servers
    }

    /// Interface of the target Dubbo service. Never empty.
    pub fn interface_name(&self) -> &str {
        &self.interface_name
    }

    /// Registry group; [`crate::DEFAULT_REGISTRY_GROUP`] unless overridden.
    pub fn registry_group(&self) -> &str {
        &self.registry_group
    }

    /// Service group, or `""` when unset.
    pub fn service_group(&self) -> &str {
        &self.service_group
    }

    /// Service version, or `""` when unset.
    pub fn service_version(&self) -> &str {
        &self.service_version
    }

    /// Session timeout; [`crate::DEFAULT_SESSION_TIMEOUT`] unless overridden.
    pub fn session_timeout(&self) -> Duration {
        self.session_timeout
    }

    /// Converts back into a draft holding the finalized values.
    pub fn into_options(self) -> ResolverOptions {
        ResolverOptions {
            servers: self.servers,
            interface_name: self.interface_name,
            registry_group: self.registry_group,
            service_group: self.service_group,
            service_version: self.service_version,
            session_timeout: self.session_timeout,
        }
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Chained alternative to applying a `Vec<ResolverOption>`.
///
/// Calls may come in any order; the last call for a field wins.
///
/// ```
/// use resolver::ResolverConfig;
///
/// let config = ResolverConfig::builder()
///     .servers(["127.0.0.1:2181"])
///     .interface_name("org.example.GreetProvider")
///     .build()
///     .unwrap();
/// assert_eq!(config.session_timeout().as_secs(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ResolverConfigBuilder {
    draft: ResolverOptions,
}

impl ResolverConfigBuilder {
    /// Applies an arbitrary option.
    pub fn option(mut self, option: ResolverOption) -> Self {
        self.draft.apply([option]);
        self
    }

    /// See [`ResolverOption::servers`].
    pub fn servers<I, S>(self, servers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.option(ResolverOption::servers(servers))
    }

    /// See [`ResolverOption::interface_name`].
    pub fn interface_name(self, name: impl Into<String>) -> Self {
        self.option(ResolverOption::interface_name(name))
    }

    /// See [`ResolverOption::registry_group`].
    pub fn registry_group(self, group: impl Into<String>) -> Self {
        self.option(ResolverOption::registry_group(group))
    }

    /// See [`ResolverOption::service_group`].
    pub fn service_group(self, group: impl Into<String>) -> Self {
        self.option(ResolverOption::service_group(group))
    }

    /// See [`ResolverOption::service_version`].
    pub fn service_version(self, version: impl Into<String>) -> Self {
        self.option(ResolverOption::service_version(version))
    }

    /// See [`ResolverOption::session_timeout`].
    pub fn session_timeout(self, timeout: Duration) -> Self {
        self.option(ResolverOption::session_timeout(timeout))
    }

    /// Validates and finalizes the accumulated draft.
    ///
    /// # Errors
    ///
    /// See [`ResolverOptions::finalize`].
    pub fn build(self) -> Result<ResolverConfig, ConfigError> {
        self.draft.finalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_REGISTRY_GROUP;

    #[test]
    fn test_from_options_greet_provider() {
        let config = ResolverConfig::from_options([
            ResolverOption::servers(["127.0.0.1:2181"]),
            ResolverOption::interface_name("org.example.GreetProvider"),
        ])
        .unwrap();

        assert_eq!(config.servers(), ["127.0.0.1:2181"]);
        assert_eq!(config.interface_name(), "org.example.GreetProvider");
        assert_eq!(config.registry_group(), DEFAULT_REGISTRY_GROUP);
        assert_eq!(config.service_group(), "");
        assert_eq!(config.service_version(), "");
        assert_eq!(config.session_timeout(), Duration::from_secs(3));
    }

    #[test]
    fn test_builder_order_across_fields_is_irrelevant() {
        let a = ResolverConfig::builder()
            .servers(["a:1"])
            .interface_name("x")
            .service_version("2.0")
            .build()
            .unwrap();
        let b = ResolverConfig::builder()
            .service_version("2.0")
            .interface_name("x")
            .servers(["a:1"])
            .build()
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_builder_last_call_wins() {
        let config = ResolverConfig::builder()
            .interface_name("first")
            .servers(["a:1", "b:2"])
            .interface_name("second")
            .servers(["c:3"])
            .build()
            .unwrap();
        assert_eq!(config.interface_name(), "second");
        assert_eq!(config.servers(), ["c:3"]);
    }

    #[test]
    fn test_builder_reports_missing_fields() {
        assert_eq!(
            ResolverConfig::builder().interface_name("x").build(),
            Err(ConfigError::MissingServers)
        );
        assert_eq!(
            ResolverConfig::builder().servers(["a:1"]).build(),
            Err(ConfigError::MissingInterfaceName)
        );
    }

    #[test]
    fn test_into_options_rebuilds_modified_config() {
        let base = ResolverConfig::builder()
            .servers(["a:1"])
            .interface_name("x")
            .build()
            .unwrap();

        let mut draft = base.clone().into_options();
        draft.apply([ResolverOption::service_group("canary")]);
        let modified = draft.finalize().unwrap();

        assert_eq!(base.service_group(), "");
        assert_eq!(modified.service_group(), "canary");
        assert_eq!(modified.registry_group(), base.registry_group());
        assert_eq!(modified.session_timeout(), base.session_timeout());
    }

    #[test]
    fn test_serializes_with_millisecond_timeout() {
        let config = ResolverConfig::builder()
            .servers(["a:1"])
            .interface_name("x")
            .build()
            .unwrap();

        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["servers"], serde_json::json!(["a:1"]));
        assert_eq!(json["registry_group"], DEFAULT_REGISTRY_GROUP);
        assert_eq!(json["session_timeout_ms"], 3000);
    }

    #[test]
    fn test_config_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ResolverConfig>();
    }
}
