// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Error types.
//!
//! [`ContractError`] is what a contract call fails with; every such failure
//! is rolled back by the session. [`Error`] is everything else the crate can
//! report: rejected transactions, decoding failures, configuration and I/O.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::session::Address;
use crate::units::Wei;

/// Result type alias using the crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Classification of a contract panic, carrying the numeric code the host
/// environment reports for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum PanicCode {
    /// Arithmetic operation resulted in underflow or overflow.
    ArithmeticUnderOrOverflow,
}

impl PanicCode {
    /// Numeric panic code.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::ArithmeticUnderOrOverflow => 0x11,
        }
    }

    /// Human-readable description of the panic.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::ArithmeticUnderOrOverflow => {
                "arithmetic operation overflowed outside of an unchecked block"
            }
        }
    }
}

impl fmt::Display for PanicCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#04x} ({})", self.code(), self.description())
    }
}

/// Failure of a contract call. Any state change made by the call is
/// discarded.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ContractError {
    /// A precondition of the call did not hold.
    #[error("reverted with reason string '{0}'")]
    Revert(String),

    /// The call hit a runtime panic such as an arithmetic underflow.
    #[error("reverted with panic code {0}")]
    Panic(PanicCode),

    /// Value was attached to a function that does not accept payments.
    #[error("function '{function}' is not payable")]
    NonPayable {
        /// Name of the called function.
        function: String,
    },
}

impl ContractError {
    /// The revert reason, if this error is a revert.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Revert(reason) => Some(reason),
            _ => None,
        }
    }

    /// The panic code, if this error is a panic.
    #[must_use]
    pub fn panic_code(&self) -> Option<PanicCode> {
        match self {
            Self::Panic(code) => Some(*code),
            _ => None,
        }
    }
}

/// Errors reported by the session, the codecs and the configuration layer.
#[derive(Debug, Error)]
pub enum Error {
    /// The call was executed and failed; nothing was committed.
    #[error("contract call failed: {0}")]
    Contract(#[from] ContractError),

    /// The sender cannot cover the value attached to the call.
    #[error("insufficient funds in {address}: balance {balance} wei, required {required} wei")]
    InsufficientFunds {
        /// The sending account.
        address: Address,
        /// The sender's balance.
        balance: Wei,
        /// The attached value.
        required: Wei,
    },

    /// Crediting the attached value would overflow the recipient's balance.
    #[error("balance of {address} would overflow")]
    BalanceOverflow {
        /// The account that would be credited.
        address: Address,
    },

    /// No contract is deployed at the address.
    #[error("no contract deployed at {0}")]
    UnknownContract(Address),

    /// A contract is already deployed at the derived address.
    #[error("a contract is already deployed at {0}")]
    ContractExists(Address),

    /// The function name is not part of the contract's call surface.
    #[error("unknown function '{0}'")]
    UnknownFunction(String),

    /// The JSON input could not be decoded for the function.
    #[error("invalid input for '{function}': {source}")]
    InvalidInput {
        /// Name of the called function.
        function: String,
        /// Underlying decoding error.
        source: serde_json::Error,
    },

    /// The binary call payload could not be decoded.
    #[error("malformed call payload")]
    MalformedPayload,

    /// An amount could not be parsed.
    #[error("invalid amount '{0}'")]
    InvalidAmount(String),

    /// An address could not be parsed.
    #[error("invalid address '{0}'")]
    InvalidAddress(String),

    /// The genesis configuration is inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parse error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// I/O error, with the path involved.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// The file being read or written.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },
}

impl Error {
    /// The contract error, if the call was executed and failed.
    #[must_use]
    pub fn contract_error(&self) -> Option<&ContractError> {
        match self {
            Self::Contract(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panic_code_matches_host_classification() {
        let err = ContractError::Panic(PanicCode::ArithmeticUnderOrOverflow);
        assert_eq!(err.panic_code().map(PanicCode::code), Some(0x11));
        assert_eq!(err.reason(), None);
        assert!(err.to_string().contains("0x11"));
    }

    #[test]
    fn revert_exposes_reason() {
        let err = ContractError::Revert("must pay 0.01 Eth".to_string());
        assert_eq!(err.reason(), Some("must pay 0.01 Eth"));
        assert_eq!(err.panic_code(), None);
        assert_eq!(
            err.to_string(),
            "reverted with reason string 'must pay 0.01 Eth'"
        );
    }

    #[test]
    fn wrapped_contract_error_is_reachable() {
        let err = Error::from(ContractError::Revert("nope".to_string()));
        assert!(matches!(
            err.contract_error(),
            Some(ContractError::Revert(reason)) if reason == "nope"
        ));
        assert!(Error::MalformedPayload.contract_error().is_none());
    }
}
