use func_variation::Call;

use crate::{cli::EncodeArgs, error::Result, ui};

pub fn run(args: EncodeArgs) -> Result<()> {
    let call = Call::from_json(&args.function, &args.input)?;
    let encoded = call.to_payload()?;

    println!("{}", ui::to_hex_prefixed(&encoded));
    ui::success(format!("Encoded {} bytes for '{}'", encoded.len(), call.name()));
    Ok(())
}
