// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! The `FuncVariation` counter contract and the ledger session it runs on.
//!
//! ```
//! use func_variation::{Address, Call, Session, FIXED_FEE};
//!
//! let owner = Address::from_name("owner");
//! let mut session = Session::new(1);
//! session.fund(owner, FIXED_FEE);
//!
//! let contract = session.deploy(owner).unwrap();
//! session
//!     .transact(owner, contract, Call::PayExactToIncrement(10), FIXED_FEE)
//!     .unwrap();
//!
//! assert_eq!(session.count(&contract).unwrap(), 10);
//! assert_eq!(session.balance(&contract), FIXED_FEE);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unused_must_use)]
#![deny(unused_extern_crates)]
#![deny(clippy::pedantic)]
#![warn(missing_debug_implementations, unreachable_pub, rustdoc::all)]

/// Typed calls and their JSON and binary encodings.
pub mod call;
/// Genesis configuration.
pub mod config;
/// The counter contract.
pub mod contract;
/// Error types.
pub mod error;
/// Contract schema types and the contract's schema.
pub mod schema;
/// The ledger session.
pub mod session;
/// Value denominations.
pub mod units;

pub use call::{Call, Output};
pub use config::GenesisConfig;
pub use contract::{CallContext, Event, FuncVariation, FIXED_FEE, FIXED_FEE_REASON};
pub use error::{ContractError, Error, PanicCode, Result};
pub use schema::FUNC_VARIATION_SCHEMA;
pub use session::{Address, CallReceipt, Session};
pub use units::Wei;
