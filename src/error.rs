//! Error type for transform configuration lookups.

use thiserror::Error;

/// Errors raised when decoding transform selectors from raw integers.
///
/// The block transform itself is infallible once a valid selector pair is in
/// hand; the only failure point is converting untrusted bytes (bitstream
/// syntax elements, test harness inputs) into the closed selector enums.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum CfgError {
    /// The raw value does not name a 2-D transform type.
    #[error("Invalid transform type index: {0}")]
    InvalidTxType(u8),

    /// The raw value does not name a supported transform size.
    #[error("Invalid transform size index: {0}")]
    InvalidTxSize(u8),
}
