use func_variation::{config::DEFAULT_OWNER, Address, GenesisConfig, Session};
use tracing::debug;

use crate::{
    cli::InitArgs,
    error::{CliError, Result},
    ledger::state::{self, LedgerState},
    ui,
};

pub fn run(args: InitArgs) -> Result<()> {
    let path = &args.state.state;
    if path.exists() {
        if !args.force {
            return Err(CliError::StateExists(path.clone()));
        }
        ui::warn(format!("Overwriting ledger state at {}", path.display()));
    }

    let config = match &args.config {
        Some(config_path) => {
            ui::status(format!("Loading genesis from {}", config_path.display()));
            GenesisConfig::load(config_path)?
        }
        None => GenesisConfig::default(),
    };

    let mut session = Session::genesis(&config)?;
    for account in &config.accounts {
        debug!(name = %account.name, address = %account.address(), "funded genesis account");
    }

    let contract = session.deploy(Address::from_name(DEFAULT_OWNER))?;

    state::save(path, &LedgerState { contract, session })?;

    println!("{contract}");
    ui::success(format!(
        "Deployed FuncVariation at {contract} (state: {})",
        path.display()
    ));
    Ok(())
}
