use crate::error::Result;
use crate::Context;
use clap::Args;
use pincode32::Mode;

#[derive(Args)]
/// Internal struct.
pub struct CmdArgs {
    /// Decimal integer produced by `decode`.
    pub number: String,
}

/// Internal helper function.
pub fn run(ctx: &Context, args: &CmdArgs) -> Result<()> {
    let conversion = ctx.codec.convert(&args.number, Mode::Recover)?;
    if let Some(code) = &conversion.payload {
        ctx.out.stage("code", code);
    }
    ctx.out.info_user(conversion.output);
    Ok(())
}
