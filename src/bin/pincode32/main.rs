//! `pincode32` CLI.

#[cfg(feature = "cli")]
fn main() {
    if let Err(err) = run() {
        output::Output::error_user(&err);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("pincode32 CLI not enabled. Build with: cargo build --features cli --bin pincode32");
    std::process::exit(1);
}

#[cfg(feature = "cli")]
/// Internal module.
mod commands;
#[cfg(feature = "cli")]
/// Internal module.
mod error;
#[cfg(feature = "cli")]
/// Internal module.
mod output;
#[cfg(feature = "cli")]
/// Internal module.
mod util;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use error::{CliError, Result};
#[cfg(feature = "cli")]
use output::Output;
#[cfg(feature = "cli")]
use pincode32::{Codec, CodecConfig};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "pincode32")]
#[command(about = "Base32 text <-> integer converter", version)]
#[command(arg_required_else_help = true)]
/// Internal struct.
struct Cli {
    /// Verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode (only errors).
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Config file (TOML). Defaults to the platform config directory.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override how characters outside the alphabet are handled when decoding.
    #[arg(long, global = true, value_enum, value_name = "POLICY")]
    policy: Option<util::CliPolicy>,

    #[command(subcommand)]
    /// Internal field.
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
/// Internal enum.
enum Commands {
    /// Convert inputs, picking the direction from each input.
    Convert(commands::convert::CmdArgs),

    /// Encode a decimal integer into a code.
    Encode(commands::encode::CmdArgs),

    /// Decode text, a URL, or a code into a decimal integer.
    Decode(commands::decode::CmdArgs),

    /// Turn a decimal integer back into (approximate) text.
    Recover(commands::recover::CmdArgs),

    /// Apply the escape table to text.
    Escape(commands::text::CmdArgs),

    /// Reverse the escape table.
    Unescape(commands::text::CmdArgs),

    /// Show the normalized code for text or a URL.
    Normalize(commands::text::CmdArgs),

    /// Configuration helpers.
    Config {
        #[command(subcommand)]
        /// Internal field.
        command: commands::config::Command,
    },
}

#[cfg(feature = "cli")]
/// Internal struct.
struct Context {
    /// Internal field.
    out: Output,
    /// Internal field.
    codec: Codec,
    /// Internal field.
    config: CodecConfig,
    /// Internal field.
    config_path: Option<PathBuf>,
}

#[cfg(feature = "cli")]
/// Internal helper function.
fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.quiet && cli.verbose {
        return Err(CliError::Message(
            "--quiet and --verbose cannot be used together".to_string(),
        ));
    }

    let out = Output::new(cli.quiet, cli.verbose);
    let (mut config, config_path) = util::load_config(&out, cli.config)?;
    if let Some(policy) = cli.policy {
        config.policy = policy.into();
        out.info_diag(format!("policy override: {:?}", config.policy));
    }
    let codec = Codec::new(&config)?;

    let ctx = Context {
        out,
        codec,
        config,
        config_path,
    };

    match cli.command {
        Commands::Convert(args) => commands::convert::run(&ctx, &args),
        Commands::Encode(args) => commands::encode::run(&ctx, &args),
        Commands::Decode(args) => commands::decode::run(&ctx, &args),
        Commands::Recover(args) => commands::recover::run(&ctx, &args),
        Commands::Escape(args) => commands::text::escape(&ctx, &args),
        Commands::Unescape(args) => commands::text::unescape(&ctx, &args),
        Commands::Normalize(args) => commands::text::normalize(&ctx, &args),
        Commands::Config { command } => commands::config::run(&ctx, &command),
    }
}
