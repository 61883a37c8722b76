//! Draft resolver options and the setters that fill them in.
//!
//! A [`ResolverOptions`] value is the mutable, under-construction form of a
//! [`ResolverConfig`]. Callers fill it by applying [`ResolverOption`]s in order
//! (or by deserializing it from a config file) and then call
//! [`ResolverOptions::finalize`], which validates required fields and applies
//! defaults exactly once.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{ConfigError, ResolverConfig};

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Registry group used when none is configured.
///
/// Dubbo providers register under `/dubbo/<interface>/providers` unless their
/// `RegistryConfig.group` says otherwise, so the default group is `"dubbo"`.
/// Changing this value breaks every deployed caller that omits the group.
pub const DEFAULT_REGISTRY_GROUP: &str = "dubbo";

/// Session timeout used when none (or zero) is configured.
pub const DEFAULT_SESSION_TIMEOUT: Duration = Duration::from_secs(3);

// ---------------------------------------------------------------------------
// Draft
// ---------------------------------------------------------------------------

/// Under-construction resolver configuration.
///
/// Every field may be empty here; [`finalize`](Self::finalize) decides which
/// gaps are errors and which get defaults. Loaded from JSON, the session
/// timeout is read from `session_timeout_ms`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverOptions {
    /// ZooKeeper endpoints, e.g. `"127.0.0.1:2181"`.
    pub servers: Vec<String>,
    /// Interface of the target Dubbo service.
    pub interface_name: String,
    /// Group of the registry serving the target service (`RegistryConfig.group`).
    pub registry_group: String,
    /// Group of the target service (`ServiceConfig.group`). Empty means unset.
    pub service_group: String,
    /// Version of the target service (`ServiceConfig.version`). Empty means unset.
    pub service_version: String,
    /// How long a session survives after losing its server connection.
    #[serde(rename = "session_timeout_ms", with = "duration_ms")]
    pub session_timeout: Duration,
}

impl ResolverOptions {
    /// Creates an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies options in order. A later option for a field replaces an
    /// earlier one; options for different fields do not interact.
    pub fn apply<I>(&mut self, options: I)
    where
        I: IntoIterator<Item = ResolverOption>,
    {
        for option in options {
            option.apply_to(self);
        }
    }

    /// Validates the draft and fills in defaults.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingServers`] if no server address was configured.
    /// - [`ConfigError::MissingInterfaceName`] if the interface name is empty.
    pub fn finalize(mut self) -> Result<ResolverConfig, ConfigError> {
        if self.servers.is_empty() {
            warn!(
                interface_name = %self.interface_name,
                "Resolver options rejected: no zookeeper servers configured"
            );
            return Err(ConfigError::MissingServers);
        }
        if self.interface_name.is_empty() {
            warn!(
                servers = ?self.servers,
                "Resolver options rejected: no interface name configured"
            );
            return Err(ConfigError::MissingInterfaceName);
        }
        if self.registry_group.is_empty() {
            debug!(
                registry_group = DEFAULT_REGISTRY_GROUP,
                "Registry group not configured; using default"
            );
            self.registry_group = DEFAULT_REGISTRY_GROUP.to_string();
        }
        if self.session_timeout.is_zero() {
            debug!(
                session_timeout_ms = DEFAULT_SESSION_TIMEOUT.as_millis() as u64,
                "Session timeout not configured; using default"
            );
            self.session_timeout = DEFAULT_SESSION_TIMEOUT;
        }

        Ok(ResolverConfig::from_validated(self))
    }
}

// ---------------------------------------------------------------------------
// Setters
// ---------------------------------------------------------------------------

/// A single field assignment on a [`ResolverOptions`] draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolverOption {
    /// Replaces the whole server list.
    Servers(Vec<String>),
    /// Replaces the interface name.
    InterfaceName(String),
    /// Replaces the registry group.
    RegistryGroup(String),
    /// Replaces the service group.
    ServiceGroup(String),
    /// Replaces the service version.
    ServiceVersion(String),
    /// Replaces the session timeout.
    SessionTimeout(Duration),
}

impl ResolverOption {
    /// Configures the ZooKeeper servers the resolver connects to.
    ///
    /// At least one address is required, e.g. `servers(["127.0.0.1:2181"])`.
    pub fn servers<I, S>(servers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Servers(servers.into_iter().map(Into::into).collect())
    }

    /// Configures the interface of the target Dubbo service. Required.
    pub fn interface_name(name: impl Into<String>) -> Self {
        Self::InterfaceName(name.into())
    }

    /// Configures the registry group (Dubbo's `RegistryConfig.group`).
    pub fn registry_group(group: impl Into<String>) -> Self {
        Self::RegistryGroup(group.into())
    }

    /// Configures the service group (Dubbo's `ServiceConfig.group`).
    pub fn service_group(group: impl Into<String>) -> Self {
        Self::ServiceGroup(group.into())
    }

    /// Configures the service version (Dubbo's `ServiceConfig.version`).
    pub fn service_version(version: impl Into<String>) -> Self {
        Self::ServiceVersion(version.into())
    }

    /// Configures how long a session stays valid after losing its server.
    ///
    /// Within this window the client may reconnect to another server and
    /// keep the same session. Defaults to [`DEFAULT_SESSION_TIMEOUT`].
    pub fn session_timeout(timeout: Duration) -> Self {
        Self::SessionTimeout(timeout)
    }

    fn apply_to(self, draft: &mut ResolverOptions) {
        match self {
            Self::Servers(servers) => draft.servers = servers,
            Self::InterfaceName(name) => draft.interface_name = name,
            Self::RegistryGroup(group) => draft.registry_group = group,
            Self::ServiceGroup(group) => draft.service_group = group,
            Self::ServiceVersion(version) => draft.service_version = version,
            Self::SessionTimeout(timeout) => draft.session_timeout = timeout,
        }
    }
}

// ---------------------------------------------------------------------------
// Serde helpers
// ---------------------------------------------------------------------------

/// Serializes a [`Duration`] as whole milliseconds.
pub(crate) mod duration_ms {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let millis = u64::try_from(value.as_millis()).unwrap_or(u64::MAX);
        serializer.serialize_u64(millis)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
