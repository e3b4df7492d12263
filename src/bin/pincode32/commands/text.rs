use crate::error::Result;
use crate::Context;
use clap::Args;

#[derive(Args)]
/// Internal struct.
pub struct CmdArgs {
    /// Input text.
    pub text: String,
}

/// Internal helper function.
pub fn escape(ctx: &Context, args: &CmdArgs) -> Result<()> {
    ctx.out.info_user(ctx.codec.escape(&args.text));
    Ok(())
}

/// Internal helper function.
pub fn unescape(ctx: &Context, args: &CmdArgs) -> Result<()> {
    ctx.out.info_user(ctx.codec.unescape(&args.text));
    Ok(())
}

/// Internal helper function.
pub fn normalize(ctx: &Context, args: &CmdArgs) -> Result<()> {
    let payload = ctx.codec.extract_payload(&args.text);
    ctx.out.stage("payload", &payload);
    let escaped = ctx.codec.escape(&payload);
    ctx.out.stage("escaped", &escaped);
    let folded = ctx.codec.fold(&escaped);
    if folded.is_empty() {
        ctx.out.warn_user("nothing left after normalization");
    }
    ctx.out.info_user(folded);
    Ok(())
}
