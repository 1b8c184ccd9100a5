// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Schema types for contract metadata.
//!
//! The schema describes the callable functions and emitted events of the
//! `FuncVariation` contract. It is what tooling reads to encode inputs and
//! to know which functions accept an attached value.

use serde::Serialize;

use crate::contract::{COUNT_CHANGED, PAYMENT_RECEIVED};

/// Schema for a contract function.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FunctionSchema {
    /// Function name.
    pub name: &'static str,
    /// Documentation string.
    pub doc: &'static str,
    /// Input type name (or "()" for no input).
    pub input: &'static str,
    /// Output type name (or "()" for no output).
    pub output: &'static str,
    /// Whether the function accepts an attached value.
    pub payable: bool,
    /// Whether the function only reads state.
    pub view: bool,
}

/// Schema for a contract event.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EventSchema {
    /// Event topic string.
    pub topic: &'static str,
    /// Event data type name.
    pub data: &'static str,
}

/// Complete schema for a contract.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ContractSchema {
    /// Contract name.
    pub name: &'static str,
    /// List of contract functions.
    pub functions: &'static [FunctionSchema],
    /// List of contract events.
    pub events: &'static [EventSchema],
}

impl ContractSchema {
    /// Find a function by name.
    #[must_use]
    pub fn get_function(&self, name: &str) -> Option<&FunctionSchema> {
        self.functions.iter().find(|f| f.name == name)
    }

    /// Find an event by topic.
    #[must_use]
    pub fn get_event(&self, topic: &str) -> Option<&EventSchema> {
        self.events.iter().find(|e| e.topic == topic)
    }

    /// Serializes the schema to a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Serializes the schema to an indented JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Schema of the `FuncVariation` contract.
pub const FUNC_VARIATION_SCHEMA: ContractSchema = ContractSchema {
    name: "FuncVariation",
    functions: &[
        FunctionSchema {
            name: "get",
            doc: "Returns the current count.",
            input: "()",
            output: "u64",
            payable: false,
            view: true,
        },
        FunctionSchema {
            name: "inc",
            doc: "Increments the count by one.",
            input: "()",
            output: "()",
            payable: false,
            view: false,
        },
        FunctionSchema {
            name: "incWith",
            doc: "Adds the given amount to the count.",
            input: "u64",
            output: "()",
            payable: false,
            view: false,
        },
        FunctionSchema {
            name: "paymeToIncrement",
            doc: "Adds the given amount to the count, keeping any attached value.",
            input: "u64",
            output: "()",
            payable: true,
            view: false,
        },
        FunctionSchema {
            name: "payExactToIncrement",
            doc: "Adds the given amount to the count; requires exactly 0.01 ether attached.",
            input: "u64",
            output: "()",
            payable: true,
            view: false,
        },
        FunctionSchema {
            name: "dec",
            doc: "Decrements the count by one; panics on underflow.",
            input: "()",
            output: "()",
            payable: false,
            view: false,
        },
    ],
    events: &[
        EventSchema {
            topic: COUNT_CHANGED,
            data: "CountChanged",
        },
        EventSchema {
            topic: PAYMENT_RECEIVED,
            data: "PaymentReceived",
        },
    ],
};
