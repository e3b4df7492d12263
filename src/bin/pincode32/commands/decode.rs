use crate::error::Result;
use crate::Context;
use clap::Args;
use pincode32::Mode;

#[derive(Args)]
/// Internal struct.
pub struct CmdArgs {
    /// Text, URL, or code to decode.
    pub text: String,

    /// Treat the input as a code: only fold case and look-alikes.
    #[arg(long)]
    pub code: bool,
}

/// Internal helper function.
pub fn run(ctx: &Context, args: &CmdArgs) -> Result<()> {
    let mode = if args.code {
        Mode::DecodeCode
    } else {
        Mode::Decode
    };
    let conversion = ctx.codec.convert(&args.text, mode)?;
    if let Some(payload) = &conversion.payload {
        ctx.out.stage("payload", payload);
    }
    ctx.out.info_user(conversion.output);
    Ok(())
}
