// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Genesis configuration of a session.
//!
//! ```toml
//! chain_id = 31337
//!
//! [[accounts]]
//! name = "owner"
//! balance = "10000"
//! ```
//!
//! Balances are decimal ether amounts. Without a configuration file the
//! session starts with the accounts `owner` and `other`, each holding 10000
//! ether.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::session::Address;
use crate::units::{parse_ether, Wei};

/// Chain id used when none is configured.
pub const DEFAULT_CHAIN_ID: u64 = 31337;

/// Name of the account that deploys and calls by default.
pub const DEFAULT_OWNER: &str = "owner";

/// Name of the second default account.
pub const DEFAULT_OTHER: &str = "other";

const DEFAULT_BALANCE: &str = "10000";

/// A funded account at genesis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AccountConfig {
    /// Account name; the address is derived from it.
    pub name: String,
    /// Initial balance in ether.
    pub balance: String,
}

impl AccountConfig {
    /// The account's address.
    #[must_use]
    pub fn address(&self) -> Address {
        Address::from_name(&self.name)
    }
}

/// Genesis configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenesisConfig {
    /// Chain id of the session.
    #[serde(default = "default_chain_id")]
    pub chain_id: u64,
    /// Accounts funded at genesis.
    #[serde(default = "default_accounts")]
    pub accounts: Vec<AccountConfig>,
}

impl Default for GenesisConfig {
    fn default() -> Self {
        Self {
            chain_id: DEFAULT_CHAIN_ID,
            accounts: default_accounts(),
        }
    }
}

impl GenesisConfig {
    /// Parses a configuration from TOML.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Toml`] on malformed input and
    /// [`Error::InvalidConfig`] if the accounts do not validate.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse.
    pub fn load(path: &Path) -> Result<Self> {
        let input = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&input)
    }

    /// Checks that account names are non-empty and unique, that every
    /// balance parses and that the balances sum to at most `Wei::MAX`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] describing the first problem found.
    pub fn validate(&self) -> Result<()> {
        let mut seen = BTreeSet::new();
        let mut supply: Wei = 0;
        for account in &self.accounts {
            if account.name.trim().is_empty() {
                return Err(Error::InvalidConfig("account name cannot be empty".to_string()));
            }
            if !seen.insert(account.name.as_str()) {
                return Err(Error::InvalidConfig(format!(
                    "duplicate account '{}'",
                    account.name
                )));
            }
            let balance = parse_ether(&account.balance).map_err(|_| {
                Error::InvalidConfig(format!(
                    "invalid balance '{}' for account '{}'",
                    account.balance, account.name
                ))
            })?;
            supply = supply.checked_add(balance).ok_or_else(|| {
                Error::InvalidConfig("total genesis supply overflows".to_string())
            })?;
        }
        Ok(())
    }

    /// The genesis accounts with their balances in wei.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the configuration does not
    /// validate.
    pub fn funded_accounts(&self) -> Result<Vec<(Address, Wei)>> {
        self.validate()?;
        self.accounts
            .iter()
            .map(|account| parse_ether(&account.balance).map(|wei| (account.address(), wei)))
            .collect()
    }
}

fn default_chain_id() -> u64 {
    DEFAULT_CHAIN_ID
}

fn default_accounts() -> Vec<AccountConfig> {
    [DEFAULT_OWNER, DEFAULT_OTHER]
        .into_iter()
        .map(|name| AccountConfig {
            name: name.to_string(),
            balance: DEFAULT_BALANCE.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{format_ether, ETHER};

    #[test]
    fn defaults_fund_owner_and_other() {
        let config = GenesisConfig::default();
        let funded = config.funded_accounts().expect("defaults validate");

        assert_eq!(config.chain_id, DEFAULT_CHAIN_ID);
        assert_eq!(
            funded,
            vec![
                (Address::from_name("owner"), 10_000 * ETHER),
                (Address::from_name("other"), 10_000 * ETHER),
            ]
        );
    }

    #[test]
    fn parses_toml_accounts() {
        let config = GenesisConfig::from_toml_str(
            r#"
            chain_id = 7

            [[accounts]]
            name = "alice"
            balance = "1.5"
            "#,
        )
        .expect("valid config");

        assert_eq!(config.chain_id, 7);
        assert_eq!(
            config.funded_accounts().expect("valid"),
            vec![(Address::from_name("alice"), 3 * ETHER / 2)]
        );
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = GenesisConfig::from_toml_str("").expect("empty config is valid");
        assert_eq!(config, GenesisConfig::default());
    }

    #[test]
    fn rejects_duplicate_and_unfunded_accounts() {
        let err = GenesisConfig::from_toml_str(
            r#"
            [[accounts]]
            name = "alice"
            balance = "1"

            [[accounts]]
            name = "alice"
            balance = "2"
            "#,
        )
        .expect_err("duplicate names");
        assert!(err.to_string().contains("duplicate account 'alice'"));

        let err = GenesisConfig::from_toml_str(
            r#"
            [[accounts]]
            name = "bob"
            balance = "plenty"
            "#,
        )
        .expect_err("bad balance");
        assert!(err.to_string().contains("invalid balance 'plenty'"));

        let err = GenesisConfig::from_toml_str("chain = 1").expect_err("unknown field");
        assert!(matches!(err, Error::Toml(_)));
    }

    #[test]
    fn rejects_overflowing_total_supply() {
        let half = format_ether(Wei::MAX / 2 + 1);
        let config = GenesisConfig {
            chain_id: DEFAULT_CHAIN_ID,
            accounts: ["alice", "bob"]
                .into_iter()
                .map(|name| AccountConfig {
                    name: name.to_string(),
                    balance: half.clone(),
                })
                .collect(),
        };

        let err = config.validate().expect_err("supply exceeds the maximum");
        assert!(err.to_string().contains("total genesis supply overflows"));
        assert!(GenesisConfig {
            accounts: config.accounts[..1].to_vec(),
            ..config
        }
        .validate()
        .is_ok());
    }
}
