//! Response payload kinds.
//!
//! The first field of a Dubbo response body is an `i32` selecting one of six
//! payload shapes. The codes are a wire contract shared with every Dubbo
//! implementation; they are never renumbered.

use serde::{Deserialize, Serialize};

use crate::PayloadError;

// ---------------------------------------------------------------------------
// Payload kind
// ---------------------------------------------------------------------------

/// Shape of a decoded Dubbo response body.
///
/// | code | variant | body after the code |
/// |------|---------|---------------------|
/// | 0 | [`Exception`](Self::Exception) | fault |
/// | 1 | [`Value`](Self::Value) | return value |
/// | 2 | [`NullValue`](Self::NullValue) | nothing |
/// | 3 | [`ExceptionWithAttachments`](Self::ExceptionWithAttachments) | fault, attachments |
/// | 4 | [`ValueWithAttachments`](Self::ValueWithAttachments) | return value, attachments |
/// | 5 | [`NullValueWithAttachments`](Self::NullValueWithAttachments) | attachments |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(i32)]
pub enum ResponsePayloadKind {
    /// The call failed; the body carries the decoded fault.
    Exception = 0,
    /// The call succeeded; the body carries the decoded return value.
    Value = 1,
    /// The call succeeded with no return value.
    NullValue = 2,
    /// As [`Exception`](Self::Exception), followed by an attachment map.
    ExceptionWithAttachments = 3,
    /// As [`Value`](Self::Value), followed by an attachment map.
    ValueWithAttachments = 4,
    /// As [`NullValue`](Self::NullValue), but an attachment map follows.
    NullValueWithAttachments = 5,
}

impl ResponsePayloadKind {
    /// Every kind, ordered by wire code.
    pub const ALL: [Self; 6] = [
        Self::Exception,
        Self::Value,
        Self::NullValue,
        Self::ExceptionWithAttachments,
        Self::ValueWithAttachments,
        Self::NullValueWithAttachments,
    ];

    /// Maps a wire code to its payload kind.
    ///
    /// Pure and reentrant. Returns [`PayloadError::UnknownPayloadKind`] for any
    /// code outside `0..=5`, carrying the code for diagnostics.
    pub fn classify(code: i32) -> Result<Self, PayloadError> {
        match code {
            0 => Ok(Self::Exception),
            1 => Ok(Self::Value),
            2 => Ok(Self::NullValue),
            3 => Ok(Self::ExceptionWithAttachments),
            4 => Ok(Self::ValueWithAttachments),
            5 => Ok(Self::NullValueWithAttachments),
            _ => Err(PayloadError::UnknownPayloadKind { code }),
        }
    }

    /// Returns the wire code for this kind.
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Combines a base shape and the attachment flag into a payload kind.
    ///
    /// Total over its inputs; an encoder uses this to pick the code it writes.
    pub const fn from_parts(base: PayloadBase, with_attachments: bool) -> Self {
        match (base, with_attachments) {
            (PayloadBase::Exception, false) => Self::Exception,
            (PayloadBase::Value, false) => Self::Value,
            (PayloadBase::NullValue, false) => Self::NullValue,
            (PayloadBase::Exception, true) => Self::ExceptionWithAttachments,
            (PayloadBase::Value, true) => Self::ValueWithAttachments,
            (PayloadBase::NullValue, true) => Self::NullValueWithAttachments,
        }
    }

    /// Returns the shape of this kind with the attachment flag stripped.
    pub const fn base(self) -> PayloadBase {
        match self {
            Self::Exception | Self::ExceptionWithAttachments => PayloadBase::Exception,
            Self::Value | Self::ValueWithAttachments => PayloadBase::Value,
            Self::NullValue | Self::NullValueWithAttachments => PayloadBase::NullValue,
        }
    }

    /// Returns `true` if the body carries a fault.
    pub const fn is_exception(self) -> bool {
        matches!(self.base(), PayloadBase::Exception)
    }

    /// Returns `true` if the body carries a return value.
    pub const fn is_value(self) -> bool {
        matches!(self.base(), PayloadBase::Value)
    }

    /// Returns `true` if the call produced no return value.
    pub const fn is_null_value(self) -> bool {
        matches!(self.base(), PayloadBase::NullValue)
    }

    /// Returns `true` if an attachment map trails the body.
    pub const fn has_attachments(self) -> bool {
        matches!(
            self,
            Self::ExceptionWithAttachments
                | Self::ValueWithAttachments
                | Self::NullValueWithAttachments
        )
    }

    /// Fields a decoder reads after the code, in frame order.
    pub const fn body_fields(self) -> &'static [BodyField] {
        match self {
            Self::Exception => &[BodyField::Fault],
            Self::Value => &[BodyField::Value],
            Self::NullValue => &[],
            Self::ExceptionWithAttachments => &[BodyField::Fault, BodyField::Attachments],
            Self::ValueWithAttachments => &[BodyField::Value, BodyField::Attachments],
            Self::NullValueWithAttachments => &[BodyField::Attachments],
        }
    }

    /// Returns the stable snake_case name of this kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Exception => "exception",
            Self::Value => "value",
            Self::NullValue => "null_value",
            Self::ExceptionWithAttachments => "exception_with_attachments",
            Self::ValueWithAttachments => "value_with_attachments",
            Self::NullValueWithAttachments => "null_value_with_attachments",
        }
    }
}

impl TryFrom<i32> for ResponsePayloadKind {
    type Error = PayloadError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::classify(code)
    }
}

impl From<ResponsePayloadKind> for i32 {
    fn from(kind: ResponsePayloadKind) -> Self {
        kind.code()
    }
}

impl std::fmt::Display for ResponsePayloadKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Shape components
// ---------------------------------------------------------------------------

/// Primary outcome of a call, independent of whether attachments follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayloadBase {
    /// The call raised a fault.
    Exception,
    /// The call returned a value.
    Value,
    /// The call returned nothing.
    NullValue,
}

/// A field in the response body that follows the payload code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyField {
    /// The serialized fault raised by the remote method.
    Fault,
    /// The serialized return value.
    Value,
    /// Trailing key/value metadata map.
    Attachments,
}

impl std::fmt::Display for BodyField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Fault => "fault",
            Self::Value => "value",
            Self::Attachments => "attachments",
        };
        write!(f, "{name}")
    }
}
