//! Error type shared by every part of the engine.

use thiserror::Error;

/// Failures reported by key construction, mode binding, the accumulator and
/// the I/O adapters. All of them are synchronous; nothing here is retried.
#[derive(Error, Debug)]
pub enum CipherError {
    /// Key byte count matches none of the sizes the cipher family supports.
    #[error("invalid key length for {cipher}: got {actual} bytes, expected one of {expected:?}")]
    InvalidKeyLength {
        cipher: &'static str,
        actual: usize,
        expected: &'static [usize],
    },

    /// A remainder the padding scheme cannot handle, or trailing bytes that
    /// do not carry the expected padding structure.
    #[error("padding violation ({scheme}): {reason}")]
    PaddingViolation {
        scheme: &'static str,
        reason: &'static str,
    },

    /// `absorb` or `finalize` called on an accumulator that already finalized.
    #[error("accumulator misuse: {0}")]
    AccumulatorMisuse(&'static str),

    /// Mode constructed with a missing, superfluous or wrongly sized IV.
    #[error("unsupported mode state for {mode}: {reason}")]
    UnsupportedModeState {
        mode: &'static str,
        reason: String,
    },

    /// Mode or padding name that does not parse.
    #[error("unknown algorithm name: {0}")]
    UnknownAlgorithm(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CipherError>;

impl CipherError {
    pub(crate) fn padding(scheme: &'static str, reason: &'static str) -> Self {
        CipherError::PaddingViolation { scheme, reason }
    }

    pub(crate) fn mode_state(mode: &'static str, reason: impl Into<String>) -> Self {
        CipherError::UnsupportedModeState {
            mode,
            reason: reason.into(),
        }
    }
}
