//! Errors produced while classifying a Dubbo response frame.
//!
//! Every error here is recoverable: it fails the single response being
//! decoded and leaves other in-flight calls untouched. A peer running a newer
//! or older protocol revision can legitimately send a code this crate does not
//! know.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when a response payload code cannot be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum PayloadError {
    /// The code read from the frame is outside the known range `0..=5`.
    ///
    /// Produced by: [`crate::ResponsePayloadKind::classify`].
    #[error("unknown response payload kind: {code}")]
    UnknownPayloadKind {
        /// The offending code exactly as read from the wire.
        code: i32,
    },
}

impl PayloadError {
    /// Returns the wire code that triggered the error.
    pub fn code(self) -> i32 {
        match self {
            Self::UnknownPayloadKind { code } => code,
        }
    }
}
