use crate::error::Result;
use crate::Context;
use clap::Args;
use pincode32::Mode;

#[derive(Args)]
/// Internal struct.
pub struct CmdArgs {
    /// Non-negative decimal integer (any size).
    pub number: String,
}

/// Internal helper function.
pub fn run(ctx: &Context, args: &CmdArgs) -> Result<()> {
    let conversion = ctx.codec.convert(&args.number, Mode::Encode)?;
    ctx.out.info_user(conversion.output);
    Ok(())
}
