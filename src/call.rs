// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Typed calls into the contract and their encodings.
//!
//! A call can be built from a function name and a JSON input, the way
//! wallets and the CLI address the contract, or decoded from the binary
//! payload carried by a transaction.

use bytecheck::CheckBytes;
use rkyv::{Archive, Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// A single invocation of a contract function with its decoded input.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Archive,
    Serialize,
    Deserialize,
    serde::Serialize,
    serde::Deserialize,
)]
#[archive_attr(derive(CheckBytes))]
#[serde(tag = "function", content = "input", rename_all = "camelCase")]
#[allow(clippy::used_underscore_binding)]
pub enum Call {
    /// `get()`
    Get,
    /// `inc()`
    Inc,
    /// `incWith(amount)`
    IncWith(u64),
    /// `paymeToIncrement(amount)`
    PaymeToIncrement(u64),
    /// `payExactToIncrement(amount)`
    PayExactToIncrement(u64),
    /// `dec()`
    Dec,
}

impl Call {
    /// The function name as exposed by the contract.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Inc => "inc",
            Self::IncWith(_) => "incWith",
            Self::PaymeToIncrement(_) => "paymeToIncrement",
            Self::PayExactToIncrement(_) => "payExactToIncrement",
            Self::Dec => "dec",
        }
    }

    /// Whether the function accepts an attached value.
    #[must_use]
    pub const fn is_payable(&self) -> bool {
        matches!(self, Self::PaymeToIncrement(_) | Self::PayExactToIncrement(_))
    }

    /// Whether the function changes contract state.
    #[must_use]
    pub const fn mutates(&self) -> bool {
        !matches!(self, Self::Get)
    }

    /// Builds a call from a function name and its JSON input.
    ///
    /// Functions without arguments take `null` or an empty input; the
    /// increment variants take a non-negative JSON integer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownFunction`] for names outside the contract's
    /// call surface and [`Error::InvalidInput`] if the input does not decode.
    pub fn from_json(fn_name: &str, json: &str) -> Result<Self> {
        let json = json.trim();
        let input: Value = if json.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(json).map_err(|source| Error::InvalidInput {
                function: fn_name.to_string(),
                source,
            })?
        };

        match fn_name {
            "get" => no_input(fn_name, input).map(|()| Self::Get),
            "inc" => no_input(fn_name, input).map(|()| Self::Inc),
            "dec" => no_input(fn_name, input).map(|()| Self::Dec),
            "incWith" => amount(fn_name, input).map(Self::IncWith),
            "paymeToIncrement" => amount(fn_name, input).map(Self::PaymeToIncrement),
            "payExactToIncrement" => amount(fn_name, input).map(Self::PayExactToIncrement),
            name => Err(Error::UnknownFunction(name.to_string())),
        }
    }

    /// The call's input as JSON.
    #[must_use]
    pub fn input_json(&self) -> Value {
        match self {
            Self::Get | Self::Inc | Self::Dec => Value::Null,
            Self::IncWith(amount)
            | Self::PaymeToIncrement(amount)
            | Self::PayExactToIncrement(amount) => Value::from(*amount),
        }
    }

    /// Encodes the call as a binary transaction payload.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedPayload`] if the call cannot be serialized.
    pub fn to_payload(&self) -> Result<Vec<u8>> {
        rkyv::to_bytes::<_, 64>(self)
            .map(|bytes| bytes.to_vec())
            .map_err(|_| Error::MalformedPayload)
    }

    /// Decodes a call from a binary transaction payload, validating it first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedPayload`] if the bytes are not a valid
    /// encoded call.
    pub fn from_payload(bytes: &[u8]) -> Result<Self> {
        let mut aligned = rkyv::AlignedVec::with_capacity(bytes.len());
        aligned.extend_from_slice(bytes);
        rkyv::from_bytes::<Self>(&aligned).map_err(|_| Error::MalformedPayload)
    }
}

/// The value returned by a contract call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Output {
    /// The call returns nothing.
    Unit,
    /// The current count.
    Count(u64),
}

impl Output {
    /// The output as JSON: `null` for [`Output::Unit`], a number otherwise.
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::Unit => Value::Null,
            Self::Count(count) => Value::from(*count),
        }
    }
}

fn no_input(fn_name: &str, input: Value) -> Result<()> {
    serde_json::from_value::<()>(input).map_err(|source| Error::InvalidInput {
        function: fn_name.to_string(),
        source,
    })
}

fn amount(fn_name: &str, input: Value) -> Result<u64> {
    serde_json::from_value::<u64>(input).map_err(|source| Error::InvalidInput {
        function: fn_name.to_string(),
        source,
    })
}
