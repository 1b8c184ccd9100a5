use func_variation::{units::parse_amount, Call, Error};

use crate::{
    cli::CallArgs,
    error::Result,
    ledger::state::{self, resolve_account},
    ui,
};

pub fn run(args: CallArgs) -> Result<()> {
    let path = &args.state.state;
    let mut ledger = state::load(path)?;

    let call = Call::from_json(&args.function, &args.input)?;
    let sender = resolve_account(&args.from)?;
    let value = parse_amount(&args.value)?;

    ui::status(format!(
        "Calling '{}' with input {} from {sender} with {}",
        call.name(),
        call.input_json(),
        ui::format_wei(value)
    ));

    let result = ledger.session.transact(sender, ledger.contract, call, value);

    // Reverted calls still consume the sender's nonce.
    if matches!(result, Ok(_) | Err(Error::Contract(_))) {
        state::save(path, &ledger)?;
    }

    let receipt = result?;
    println!("{}", serde_json::to_string(&receipt.data.to_json())?);
    for event in &receipt.events {
        println!("{}", serde_json::to_string(event)?);
    }

    ui::success(format!(
        "'{}' committed at block {}",
        call.name(),
        receipt.block_height
    ));
    Ok(())
}
