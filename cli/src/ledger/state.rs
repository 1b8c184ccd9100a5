use std::{fs, path::Path};

use func_variation::{Address, Session};
use serde::{Deserialize, Serialize};

use crate::error::{CliError, Result};

/// A persisted ledger together with the contract the CLI talks to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerState {
    pub contract: Address,
    pub session: Session,
}

pub fn load(path: &Path) -> Result<LedgerState> {
    if !path.exists() {
        return Err(CliError::StateNotFound(path.to_path_buf()));
    }

    let bytes = fs::read(path)?;
    let state: LedgerState = serde_json::from_slice(&bytes)?;
    if !state.session.contracts().any(|address| *address == state.contract) {
        return Err(func_variation::Error::UnknownContract(state.contract).into());
    }
    Ok(state)
}

pub fn save(path: &Path, state: &LedgerState) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, serde_json::to_vec_pretty(state)?)?;
    Ok(())
}

/// Resolves an account given either as a 0x-prefixed address or as a
/// genesis account name.
pub fn resolve_account(account: &str) -> Result<Address> {
    if account.starts_with("0x") || account.starts_with("0X") {
        Ok(account.parse()?)
    } else if account.trim().is_empty() {
        Err(CliError::Message("account cannot be empty".to_string()))
    } else {
        Ok(Address::from_name(account))
    }
}
