use crate::{cli::StateOptions, error::Result, ledger::state};

pub fn run(args: StateOptions) -> Result<()> {
    let ledger = state::load(&args.state)?;
    println!("{}", ledger.session.count(&ledger.contract)?);
    Ok(())
}
