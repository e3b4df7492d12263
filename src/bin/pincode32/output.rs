use crate::error::Result;
use serde::Serialize;
use std::fmt::Display;

/// Internal struct.
pub struct Output {
    /// Internal field.
    quiet: bool,
    /// Internal field.
    verbose: bool,
}

impl Output {
    /// Internal associated function.
    pub const fn new(quiet: bool, verbose: bool) -> Self {
        Self { quiet, verbose }
    }

    /// Converted values go to stdout, one per line.
    pub fn info_user(&self, msg: impl Display) {
        if !self.quiet {
            println!("{msg}");
        }
    }

    /// Internal helper method.
    pub fn warn_user(&self, msg: impl Display) {
        if !self.quiet {
            eprintln!("WARN: {msg}");
        }
    }

    /// Internal associated function.
    pub fn error_user(msg: impl Display) {
        eprintln!("ERROR: {msg}");
    }

    /// A failed input in a batch; printed even when quiet so the exit code has a reason.
    pub fn error_input(input: &str, err: impl Display) {
        eprintln!("ERROR: {}: {err}", input.trim());
    }

    /// Internal helper method.
    pub fn info_diag(&self, msg: impl Display) {
        if self.verbose && !self.quiet {
            eprintln!("DIAG: {msg}");
        }
    }

    /// One intermediate pipeline value (`payload`, `escaped`, `code`).
    pub fn stage(&self, name: &str, value: impl Display) {
        self.info_diag(format_args!("{name}: {value}"));
    }

    /// Pretty JSON on stdout.
    pub fn info_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        let text = serde_json::to_string_pretty(value)?;
        self.info_user(text);
        Ok(())
    }
}
