use crate::{
    cli::BalanceArgs,
    error::Result,
    ledger::state::{self, resolve_account},
    ui,
};

pub fn run(args: BalanceArgs) -> Result<()> {
    let ledger = state::load(&args.state.state)?;

    let address = match &args.account {
        Some(account) => resolve_account(account)?,
        None => ledger.contract,
    };

    let balance = ledger.session.balance(&address);
    println!("{balance}");
    ui::status(format!("{address}: {}", ui::format_wei(balance)));
    Ok(())
}
