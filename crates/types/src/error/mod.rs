// Path: crates/types/src/error/mod.rs
//! Core error types for the admission gate.
//!
//! Two families live here. Admission failures are not errors at all; they are
//! `ResponseCode`s. What remains are internal faults (`KeyError`), collaborator
//! failures that the precheck folds into a response code (`VerifyFailure`,
//! `FeeError`), and plumbing errors (`CryptoError`, `CoreError`).

use crate::app::KeyKind;
use thiserror::Error;

/// A trait for assigning a stable, machine-readable string code to an error.
pub trait ErrorCode {
    /// Returns the unique, stable string identifier for this error variant.
    fn code(&self) -> &'static str;
}

/// Internal faults raised while ordering keys.
///
/// These are protocol-level gaps, never a property of a bad transaction, and
/// must not be mistaken for an ordering result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    /// Two keys of a kind that is accepted on the wire but has no defined ordering.
    #[error("Key type {0} is not supported")]
    UnsupportedKeyType(KeyKind),
    /// The key tree is nested deeper than the configured bound.
    #[error("Key nesting exceeds the limit of {limit} levels")]
    DepthExceeded {
        /// The configured nesting bound.
        limit: usize,
    },
}

impl ErrorCode for KeyError {
    fn code(&self) -> &'static str {
        match self {
            Self::UnsupportedKeyType(_) => "KEY_UNSUPPORTED_TYPE",
            Self::DepthExceeded { .. } => "KEY_DEPTH_EXCEEDED",
        }
    }
}

/// The ways a signature verifier can fail to reach a yes/no answer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerifyFailure {
    /// A signature's public key prefix matched more than one candidate key.
    #[error("Signature prefix is ambiguous for the given key")]
    PrefixMismatch,
    /// The transaction refers to an account that cannot exist.
    #[error("Invalid account reference")]
    InvalidAccountId,
    /// Any other failure.
    #[error("Signature verification failed: {0}")]
    Other(String),
}

impl ErrorCode for VerifyFailure {
    fn code(&self) -> &'static str {
        match self {
            Self::PrefixMismatch => "SIG_PREFIX_MISMATCH",
            Self::InvalidAccountId => "SIG_INVALID_ACCOUNT_ID",
            Self::Other(_) => "SIG_OTHER",
        }
    }
}

impl From<KeyError> for VerifyFailure {
    fn from(e: KeyError) -> Self {
        VerifyFailure::Other(e.to_string())
    }
}

impl From<CryptoError> for VerifyFailure {
    fn from(e: CryptoError) -> Self {
        VerifyFailure::Other(e.to_string())
    }
}

/// Errors from fee estimation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeeError {
    /// No fee schedule is available for the transaction's type or time.
    #[error("Fee schedule unavailable: {0}")]
    ScheduleUnavailable(String),
    /// The estimator failed while pricing the transaction.
    #[error("Fee estimation failed: {0}")]
    Estimation(String),
}

impl ErrorCode for FeeError {
    fn code(&self) -> &'static str {
        match self {
            Self::ScheduleUnavailable(_) => "FEE_SCHEDULE_UNAVAILABLE",
            Self::Estimation(_) => "FEE_ESTIMATION_FAILED",
        }
    }
}

/// Errors from cryptographic operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// The signature failed cryptographic verification.
    #[error("Signature verification failed")]
    VerificationFailed,
    /// The provided key material is malformed or invalid for the specified algorithm.
    #[error("Invalid cryptographic key: {0}")]
    InvalidKey(String),
    /// The provided signature material is malformed or invalid for the specified algorithm.
    #[error("Invalid signature format: {0}")]
    InvalidSignature(String),
}

impl ErrorCode for CryptoError {
    fn code(&self) -> &'static str {
        match self {
            Self::VerificationFailed => "CRYPTO_VERIFICATION_FAILED",
            Self::InvalidKey(_) => "CRYPTO_INVALID_KEY",
            Self::InvalidSignature(_) => "CRYPTO_INVALID_SIGNATURE",
        }
    }
}

/// General errors for configuration and encoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The configuration could not be parsed or failed validation.
    #[error("Configuration error: {0}")]
    Config(String),
    /// Canonical encoding or decoding failed.
    #[error("Codec error: {0}")]
    Codec(String),
    /// A textual identifier was malformed.
    #[error("Invalid identifier: {0}")]
    InvalidId(String),
}

impl ErrorCode for CoreError {
    fn code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CORE_CONFIG",
            Self::Codec(_) => "CORE_CODEC",
            Self::InvalidId(_) => "CORE_INVALID_ID",
        }
    }
}

impl From<toml::de::Error> for CoreError {
    fn from(e: toml::de::Error) -> Self {
        CoreError::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_faults_fold_into_other() {
        let folded: VerifyFailure = KeyError::UnsupportedKeyType(KeyKind::Rsa3072).into();
        assert_eq!(
            folded,
            VerifyFailure::Other("Key type RSA_3072 is not supported".to_string())
        );
        assert_eq!(folded.code(), "SIG_OTHER");
    }

    #[test]
    fn test_codes_are_distinct_per_variant() {
        assert_eq!(KeyError::DepthExceeded { limit: 3 }.code(), "KEY_DEPTH_EXCEEDED");
        assert_eq!(VerifyFailure::PrefixMismatch.code(), "SIG_PREFIX_MISMATCH");
        assert_eq!(FeeError::Estimation("x".into()).code(), "FEE_ESTIMATION_FAILED");
        assert_eq!(CryptoError::VerificationFailed.code(), "CRYPTO_VERIFICATION_FAILED");
    }
}
