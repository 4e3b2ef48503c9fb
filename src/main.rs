//! quadbake - inspect the bit-packed quad encoding
//!
//! - `quadbake layout` - print strides, vertex offsets and header bit ranges
//! - `quadbake decode 34` - split a header word into its fields
//! - `quadbake encode --cull north --light up` - pack fields into a header word
//!
//! Every command accepts `--config <FILE>` (TOML, see `quadbake_encoding::config`).

mod commands;
mod parse;

use std::error::Error;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "quadbake")]
#[command(about = "Inspect the bit-packed quad buffer encoding")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
pub struct CommonArgs {
    /// Encoding config (TOML). Defaults to the stock vertex format.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print strides, vertex attribute offsets and header bit ranges
    Layout,

    /// Decode a header word (decimal, 0x or 0b)
    Decode {
        #[arg(value_parser = parse::parse_u32)]
        header: u32,
    },

    /// Encode header fields into a word
    Encode(commands::EncodeArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    let format = commands::load_format(&cli.common)?;

    match cli.command {
        Commands::Layout => commands::layout(&format),
        Commands::Decode { header } => commands::decode(&format, header),
        Commands::Encode(args) => commands::encode(&format, &args),
    }
    Ok(())
}
