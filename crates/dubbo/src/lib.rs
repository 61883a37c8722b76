//! Dubbo wire-protocol constants.
//!
//! A Dubbo response body starts with a small integer naming the shape of the
//! payload that follows it. This crate owns that closed set of codes and the
//! lookup a codec performs before deciding how to read the rest of the body.
//!
//! ## Architectural Layer
//!
//! **Protocol definitions.** This crate does no I/O and holds no state. The
//! binary encode/decode logic of the frame lives in the codec; it sees only
//! [`ResponsePayloadKind`] and [`PayloadError`].
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`payload`] | [`ResponsePayloadKind`] and its body-field layout |
//! | [`errors`] | Decode-time classification errors |

pub mod errors;
pub mod payload;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use errors::PayloadError;
pub use payload::{BodyField, PayloadBase, ResponsePayloadKind};
