// Path: crates/types/src/app/precheck.rs

//! The outcome of an admission precheck.

use parity_scale_codec::{Decode, Encode};
use serde::{Deserialize, Serialize};

/// The validity code reported to the submitter of a transaction.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Encode, Decode)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseCode {
    /// The transaction passed every precheck stage.
    Ok,
    /// The payer account does not exist.
    PayerAccountNotFound,
    /// A signature prefix matched more than one key.
    KeyPrefixMismatch,
    /// The transaction referenced an account that cannot be valid.
    InvalidAccountId,
    /// The payer's key was not satisfied by the attached signatures.
    InvalidSignature,
    /// The fee for the transaction could not be computed.
    FailFee,
    /// The fee offered by the transaction is below the required fee.
    InsufficientTxFee,
    /// The payer cannot cover the required fee.
    InsufficientPayerBalance,
}

impl ResponseCode {
    /// Returns the stable upper-snake name of the code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::PayerAccountNotFound => "PAYER_ACCOUNT_NOT_FOUND",
            Self::KeyPrefixMismatch => "KEY_PREFIX_MISMATCH",
            Self::InvalidAccountId => "INVALID_ACCOUNT_ID",
            Self::InvalidSignature => "INVALID_SIGNATURE",
            Self::FailFee => "FAIL_FEE",
            Self::InsufficientTxFee => "INSUFFICIENT_TX_FEE",
            Self::InsufficientPayerBalance => "INSUFFICIENT_PAYER_BALANCE",
        }
    }

    /// True for codes that are allowed to carry a non-zero required fee.
    pub const fn carries_fee(&self) -> bool {
        matches!(
            self,
            Self::Ok | Self::InsufficientTxFee | Self::InsufficientPayerBalance
        )
    }
}

impl core::fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validity code plus the fee the network requires for the transaction.
///
/// `required_fee` is only non-zero for `OK` and the fee/solvency failures;
/// the constructors enforce this.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Encode, Decode)]
pub struct PrecheckResult {
    validity: ResponseCode,
    required_fee: u64,
}

impl PrecheckResult {
    /// A result that carries no fee information.
    pub const fn just(validity: ResponseCode) -> Self {
        Self {
            validity,
            required_fee: 0,
        }
    }

    /// A result carrying the computed fee. The fee is dropped for codes that
    /// cannot carry one.
    pub const fn with_fee(validity: ResponseCode, required_fee: u64) -> Self {
        Self {
            validity,
            required_fee: if validity.carries_fee() {
                required_fee
            } else {
                0
            },
        }
    }

    /// The validity code.
    pub const fn validity(&self) -> ResponseCode {
        self.validity
    }

    /// The fee the network requires, or zero if it was never computed.
    pub const fn required_fee(&self) -> u64 {
        self.required_fee
    }

    /// True if the transaction may be admitted.
    pub const fn is_ok(&self) -> bool {
        matches!(self.validity, ResponseCode::Ok)
    }
}
