use func_variation::FUNC_VARIATION_SCHEMA;

use crate::{cli::SchemaArgs, error::Result};

pub fn run(args: SchemaArgs) -> Result<()> {
    let json = if args.pretty {
        FUNC_VARIATION_SCHEMA.to_json_pretty()?
    } else {
        FUNC_VARIATION_SCHEMA.to_json()?
    };

    println!("{json}");
    Ok(())
}
