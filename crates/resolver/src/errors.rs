//! Validation errors for resolver configuration.
//!
//! A [`ConfigError`] means the caller never supplied a field the resolver
//! cannot work without. Construction stops at the first missing field; no
//! partially valid [`crate::ResolverConfig`] is ever handed out. Retrying with
//! the same input will fail the same way.

use thiserror::Error;

/// Errors returned by [`crate::ResolverOptions::finalize`].
///
/// Messages name the missing field and show the option that supplies it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ConfigError {
    /// No ZooKeeper server address was configured.
    #[error(
        "Please specify at least one zookeeper server address. \
         e.g. ResolverOption::servers([\"127.0.0.1:2181\"])"
    )]
    MissingServers,

    /// No target service interface was configured.
    #[error(
        "Please specify target interface name. \
         e.g. ResolverOption::interface_name(\"org.cloudwego.kitex.samples.api.GreetProvider\")"
    )]
    MissingInterfaceName,
}

impl ConfigError {
    /// Returns the configuration field the error refers to.
    pub fn field(self) -> &'static str {
        match self {
            Self::MissingServers => "servers",
            Self::MissingInterfaceName => "interface_name",
        }
    }
}
