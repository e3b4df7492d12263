use crate::error::{CliError, Result};
use crate::output::Output;
use clap::ValueEnum;
use pincode32::{settings, CodecConfig, Policy};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CliPolicy {
    Reject,
    Skip,
    Zero,
}

impl From<CliPolicy> for Policy {
    fn from(value: CliPolicy) -> Self {
        match value {
            CliPolicy::Reject => Self::Reject,
            CliPolicy::Skip => Self::Skip,
            CliPolicy::Zero => Self::Zero,
        }
    }
}

/// An explicit `--config` must exist; the default location falls back to built-in defaults.
pub fn load_config(
    out: &Output,
    explicit: Option<PathBuf>,
) -> Result<(CodecConfig, Option<PathBuf>)> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(CliError::ConfigNotFound(path.display().to_string()));
        }
        let config = settings::load_from(&path)?;
        out.info_diag(format!("config: {}", path.display()));
        return Ok((config, Some(path)));
    }

    match settings::config_path() {
        Ok(path) => {
            let config = settings::load_from(&path)?;
            if path.is_file() {
                out.info_diag(format!("config: {}", path.display()));
            } else {
                out.info_diag(format!("config: defaults ({} not found)", path.display()));
            }
            Ok((config, Some(path)))
        }
        Err(err) => {
            out.warn_user(format!("{err}; using built-in defaults"));
            Ok((CodecConfig::default(), None))
        }
    }
}
