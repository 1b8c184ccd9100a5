use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

pub const DEFAULT_STATE: &str = "func-variation.json";

#[derive(Debug, Parser)]
#[command(name = "func-variation")]
#[command(bin_name = "func-variation")]
#[command(about = "Run the FuncVariation counter contract on a local ledger")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a ledger from genesis and deploy the contract.
    Init(InitArgs),
    /// Send a transaction calling a contract function.
    Call(CallArgs),
    /// Print the current count.
    Get(StateOptions),
    /// Print the balance of an account or of the contract.
    Balance(BalanceArgs),
    /// Print the binary payload of a call.
    Encode(EncodeArgs),
    /// Print the contract schema as JSON.
    Schema(SchemaArgs),
    /// Generate shell completion scripts.
    Completions(CompletionsArgs),
}

#[derive(Debug, Args)]
pub struct StateOptions {
    /// Path to the ledger state file.
    #[arg(long, default_value = DEFAULT_STATE)]
    pub state: PathBuf,
}

#[derive(Debug, Args)]
pub struct InitArgs {
    #[command(flatten)]
    pub state: StateOptions,

    /// Genesis configuration (TOML). Defaults to two funded accounts,
    /// `owner` and `other`. The contract is always deployed from `owner`.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Overwrite an existing state file.
    #[arg(long)]
    pub force: bool,
}

#[derive(Debug, Args)]
pub struct CallArgs {
    #[command(flatten)]
    pub state: StateOptions,

    /// Function to call, e.g. `incWith`.
    pub function: String,

    /// JSON input of the function, e.g. `10`.
    #[arg(default_value = "")]
    pub input: String,

    /// Sending account: a genesis account name or a 0x-prefixed address.
    #[arg(long, default_value = func_variation::config::DEFAULT_OWNER)]
    pub from: String,

    /// Value to attach: ether by default, or suffixed with `wei`/`gwei`/`eth`.
    #[arg(long, default_value = "0")]
    pub value: String,
}

#[derive(Debug, Args)]
pub struct BalanceArgs {
    #[command(flatten)]
    pub state: StateOptions,

    /// Account name or 0x-prefixed address; the contract if omitted.
    pub account: Option<String>,
}

#[derive(Debug, Args)]
pub struct EncodeArgs {
    /// Function to encode, e.g. `payExactToIncrement`.
    pub function: String,

    /// JSON input of the function.
    #[arg(default_value = "")]
    pub input: String,
}

#[derive(Debug, Args)]
pub struct SchemaArgs {
    /// Pretty-print the JSON.
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for.
    #[arg(value_enum)]
    pub shell: Shell,
}
