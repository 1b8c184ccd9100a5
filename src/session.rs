// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! In-process ledger the contract runs on.
//!
//! A [`Session`] holds funded accounts and deployed contracts and executes
//! calls one at a time. Every call runs against a copy of the contract state
//! and is committed only if it succeeds, so a failed call leaves the counter,
//! all balances and the emitted events exactly as they were.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::call::{Call, Output};
use crate::config::GenesisConfig;
use crate::contract::{CallContext, Event, FuncVariation};
use crate::error::{Error, Result};
use crate::units::{format_ether, Wei};

/// Number of bytes in an [`Address`].
pub const ADDRESS_BYTES: usize = 20;

/// Address of an account or a contract.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address([u8; ADDRESS_BYTES]);

impl Address {
    /// Creates an address from its raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; ADDRESS_BYTES]) -> Self {
        Self(bytes)
    }

    /// Derives the address of a named account.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(b"account:");
        hasher.update(name.as_bytes());
        Self::from_hash(&hasher.finalize())
    }

    /// Derives the address of the contract `deployer` creates with `nonce`.
    #[must_use]
    pub fn contract(deployer: &Address, nonce: u64) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(b"contract:");
        hasher.update(&deployer.0);
        hasher.update(&nonce.to_le_bytes());
        Self::from_hash(&hasher.finalize())
    }

    fn from_hash(hash: &blake3::Hash) -> Self {
        let mut bytes = [0u8; ADDRESS_BYTES];
        bytes.copy_from_slice(&hash.as_bytes()[..ADDRESS_BYTES]);
        Self(bytes)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("0x")?;
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl FromStr for Address {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidAddress(s.to_string());

        let hex = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .ok_or_else(invalid)?;
        if hex.len() != ADDRESS_BYTES * 2 || !hex.bytes().all(|b| b.is_ascii_hexdigit())
        {
            return Err(invalid());
        }

        let mut bytes = [0u8; ADDRESS_BYTES];
        for (byte, pair) in bytes.iter_mut().zip(hex.as_bytes().chunks_exact(2)) {
            let pair = std::str::from_utf8(pair).map_err(|_| invalid())?;
            *byte = u8::from_str_radix(pair, 16).map_err(|_| invalid())?;
        }
        Ok(Self(bytes))
    }
}

impl TryFrom<String> for Address {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.to_string()
    }
}

/// Ledger entry of an account or a contract.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Held value.
    pub balance: Wei,
    /// Number of calls and deployments sent from this account.
    pub nonce: u64,
}

/// Outcome of a successful call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallReceipt {
    /// The called contract.
    pub contract: Address,
    /// The executed call.
    pub call: Call,
    /// Value transferred to the contract.
    pub value: Wei,
    /// Block height the call was committed at.
    pub block_height: u64,
    /// Returned value.
    pub data: Output,
    /// Events emitted by the call.
    pub events: Vec<Event>,
}

/// Ledger with funded accounts and deployed `FuncVariation` contracts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    chain_id: u64,
    block_height: u64,
    accounts: BTreeMap<Address, Account>,
    contracts: BTreeMap<Address, FuncVariation>,
}

impl Session {
    /// Creates an empty session.
    #[must_use]
    pub fn new(chain_id: u64) -> Self {
        Self {
            chain_id,
            block_height: 0,
            accounts: BTreeMap::new(),
            contracts: BTreeMap::new(),
        }
    }

    /// Creates a session with the accounts of `config` funded.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration does not validate.
    pub fn genesis(config: &GenesisConfig) -> Result<Self> {
        let mut session = Self::new(config.chain_id);
        for (address, balance) in config.funded_accounts()? {
            session.fund(address, balance);
        }
        Ok(session)
    }

    /// Loads a session previously written with [`Session::save`].
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid
    /// session.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Writes the session to `path` as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be serialized or written.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_vec_pretty(self)?;
        fs::write(path, json).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The chain id.
    #[must_use]
    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// The number of committed calls and deployments.
    #[must_use]
    pub fn block_height(&self) -> u64 {
        self.block_height
    }

    /// Credits `value` to `address`, creating the account if needed. The
    /// balance saturates at `Wei::MAX`.
    pub fn fund(&mut self, address: Address, value: Wei) {
        let account = self.accounts.entry(address).or_default();
        account.balance = account.balance.saturating_add(value);
    }

    /// The balance held by `address`; zero for unknown addresses.
    #[must_use]
    pub fn balance(&self, address: &Address) -> Wei {
        self.accounts.get(address).map_or(0, |account| account.balance)
    }

    /// The nonce of `address`; zero for unknown addresses.
    #[must_use]
    pub fn nonce(&self, address: &Address) -> u64 {
        self.accounts.get(address).map_or(0, |account| account.nonce)
    }

    /// Addresses of the deployed contracts.
    pub fn contracts(&self) -> impl Iterator<Item = &Address> {
        self.contracts.keys()
    }

    /// Deploys a fresh `FuncVariation` contract from `deployer`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ContractExists`] if the derived address is taken.
    pub fn deploy(&mut self, deployer: Address) -> Result<Address> {
        let nonce = self.nonce(&deployer);
        let address = Address::contract(&deployer, nonce);
        if self.contracts.contains_key(&address) {
            return Err(Error::ContractExists(address));
        }

        self.accounts.entry(deployer).or_default().nonce += 1;
        self.accounts.entry(address).or_default();
        self.contracts.insert(address, FuncVariation::new());
        self.block_height += 1;

        info!(%deployer, contract = %address, "deployed FuncVariation");
        Ok(address)
    }

    /// Executes `call` without committing anything.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownContract`] if nothing is deployed at
    /// `contract`, or the call's error.
    pub fn query(&self, contract: &Address, call: Call) -> Result<Output> {
        let mut state = self
            .contracts
            .get(contract)
            .cloned()
            .ok_or(Error::UnknownContract(*contract))?;
        let mut ctx = CallContext::new(Address::from_bytes([0; ADDRESS_BYTES]), 0);
        Ok(state.execute(call, &mut ctx)?)
    }

    /// The current count of the contract at `contract`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownContract`] if nothing is deployed there.
    pub fn count(&self, contract: &Address) -> Result<u64> {
        let state = self
            .contracts
            .get(contract)
            .ok_or(Error::UnknownContract(*contract))?;
        Ok(state.get())
    }

    /// Sends `call` from `sender` to `contract` with `value` attached.
    ///
    /// The call runs against a copy of the contract state. On success the
    /// copy replaces the stored state and `value` moves from the sender to
    /// the contract. On failure only the sender's nonce advances.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownContract`], [`Error::InsufficientFunds`] or
    /// [`Error::BalanceOverflow`] if the call cannot be executed at all, and
    /// [`Error::Contract`] if it executed and failed.
    pub fn transact(
        &mut self,
        sender: Address,
        contract: Address,
        call: Call,
        value: Wei,
    ) -> Result<CallReceipt> {
        let mut state = self
            .contracts
            .get(&contract)
            .cloned()
            .ok_or(Error::UnknownContract(contract))?;

        let balance = self.balance(&sender);
        if balance < value {
            return Err(Error::InsufficientFunds {
                address: sender,
                balance,
                required: value,
            });
        }
        if self.balance(&contract).checked_add(value).is_none() {
            return Err(Error::BalanceOverflow { address: contract });
        }

        debug!(
            %sender,
            %contract,
            function = call.name(),
            value = %format_ether(value),
            "executing call"
        );

        let mut ctx = CallContext::new(sender, value);
        let result = state.execute(call, &mut ctx);
        self.accounts.entry(sender).or_default().nonce += 1;

        let data = match result {
            Ok(data) => data,
            Err(err) => {
                warn!(%sender, %contract, function = call.name(), error = %err, "call reverted");
                return Err(err.into());
            }
        };

        if let Some(account) = self.accounts.get_mut(&sender) {
            account.balance -= value;
        }
        self.accounts.entry(contract).or_default().balance += value;
        self.contracts.insert(contract, state);
        self.block_height += 1;

        Ok(CallReceipt {
            contract,
            call,
            value,
            block_height: self.block_height,
            data,
            events: ctx.into_events(),
        })
    }

    /// Decodes `json` as the input of `fn_name` and sends the call.
    ///
    /// # Errors
    ///
    /// Returns a decoding error, or any error of [`Session::transact`].
    pub fn transact_json(
        &mut self,
        sender: Address,
        contract: Address,
        fn_name: &str,
        json: &str,
        value: Wei,
    ) -> Result<CallReceipt> {
        let call = Call::from_json(fn_name, json)?;
        self.transact(sender, contract, call, value)
    }

    /// Decodes a binary call payload and sends the call.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedPayload`], or any error of
    /// [`Session::transact`].
    pub fn transact_payload(
        &mut self,
        sender: Address,
        contract: Address,
        payload: &[u8],
        value: Wei,
    ) -> Result<CallReceipt> {
        let call = Call::from_payload(payload)?;
        self.transact(sender, contract, call, value)
    }
}
