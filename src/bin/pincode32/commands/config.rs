use crate::error::Result;
use crate::Context;
use clap::Subcommand;
use pincode32::settings;

#[derive(Subcommand)]
/// Internal enum.
pub enum Command {
    /// Print the effective configuration as TOML.
    Show,

    /// Print the config file location.
    Path,
}

/// Internal helper function.
pub fn run(ctx: &Context, command: &Command) -> Result<()> {
    match command {
        Command::Show => {
            ctx.out.info_user(settings::to_toml(&ctx.config)?.trim_end());
        }
        Command::Path => match &ctx.config_path {
            Some(path) => ctx.out.info_user(path.display()),
            None => ctx.out.warn_user("no config location on this platform"),
        },
    }
    Ok(())
}
