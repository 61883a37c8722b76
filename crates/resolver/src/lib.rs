//! Configuration for a ZooKeeper-backed Dubbo registry resolver.
//!
//! Callers describe the registry they want to resolve against (ZooKeeper
//! endpoints, target interface, registry and service groups, service version,
//! session timeout) as an ordered list of [`ResolverOption`]s or through
//! [`ResolverConfig::builder`]. Validation and defaulting happen once, in
//! [`ResolverOptions::finalize`]; the result is an immutable [`ResolverConfig`].
//!
//! ## Architectural Layer
//!
//! **Configuration contract.** This crate opens no connections. The resolver
//! that owns the ZooKeeper session, watches, and address resolution consumes
//! [`ResolverConfig`] and may rely on its guarantees.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`options`] | Draft [`ResolverOptions`], [`ResolverOption`] setters, defaults |
//! | [`config`] | Finalized [`ResolverConfig`] and its chained builder |
//! | [`errors`] | Validation errors |

pub mod config;
pub mod errors;
pub mod options;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use config::{ResolverConfig, ResolverConfigBuilder};
pub use errors::ConfigError;
pub use options::{
    ResolverOption, ResolverOptions, DEFAULT_REGISTRY_GROUP, DEFAULT_SESSION_TIMEOUT,
};
