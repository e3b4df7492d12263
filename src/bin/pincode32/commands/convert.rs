use crate::error::{CliError, Result};
use crate::output::Output;
use crate::Context;
use clap::Args;
use pincode32::Conversion;
use rayon::prelude::*;
use serde::Serialize;
use std::io::BufRead;

#[derive(Args)]
/// Internal struct.
pub struct CmdArgs {
    /// Inputs: digits encode, `...b32` decodes a code, anything else is normalized and decoded.
    /// Reads one input per line from stdin when omitted.
    pub inputs: Vec<String>,

    /// Output as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
#[serde(untagged)]
/// Internal enum.
enum Entry {
    /// Internal variant.
    Ok(Conversion),
    /// Internal variant.
    Err {
        /// Internal field.
        input: String,
        /// Internal field.
        error: String,
    },
}

/// Internal helper function.
pub fn run(ctx: &Context, args: &CmdArgs) -> Result<()> {
    let inputs = if args.inputs.is_empty() {
        read_stdin_lines()?
    } else {
        args.inputs.clone()
    };
    if inputs.is_empty() {
        return Err(CliError::NoInput);
    }

    // 表只读，逐条并行转换；collect 保持输入顺序
    let results: Vec<_> = inputs
        .par_iter()
        .map(|input| (input, ctx.codec.convert_auto(input)))
        .collect();

    let mut failed = 0;
    let mut entries = Vec::with_capacity(results.len());
    for (input, result) in results {
        match result {
            Ok(conversion) => {
                ctx.out
                    .info_diag(format!("{input} -> {:?}", conversion.mode));
                if args.json {
                    entries.push(Entry::Ok(conversion));
                } else {
                    ctx.out.info_user(conversion.output);
                }
            }
            Err(err) => {
                failed += 1;
                if args.json {
                    entries.push(Entry::Err {
                        input: input.trim().to_string(),
                        error: err.to_string(),
                    });
                } else {
                    Output::error_input(input, err);
                }
            }
        }
    }

    if args.json {
        ctx.out.info_json(&entries)?;
    }

    if failed > 0 {
        return Err(CliError::Failed {
            failed,
            total: inputs.len(),
        });
    }
    Ok(())
}

/// Internal helper function.
fn read_stdin_lines() -> Result<Vec<String>> {
    let stdin = std::io::stdin();
    let mut lines = Vec::new();
    for line in stdin.lock().lines() {
        let line = line?;
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }
    Ok(lines)
}
