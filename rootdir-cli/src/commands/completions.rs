//! Shell completion generation command.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary.
const BIN_NAME: &str = "rootdir";

/// Generate shell completion scripts
#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if !global.quiet {
            if let Some(hint) = install_hint(self.shell) {
                eprintln!("# To enable completions:");
                eprintln!("#   {hint}");
                eprintln!();
            }
        }

        let mut cmd = Cli::command();
        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());
        Ok(())
    }
}

fn install_hint(shell: Shell) -> Option<&'static str> {
    match shell {
        Shell::Bash => Some("eval \"$(rootdir completions bash)\""),
        Shell::Zsh => Some("rootdir completions zsh > ~/.zsh/completions/_rootdir"),
        Shell::Fish => Some("rootdir completions fish | source"),
        Shell::PowerShell => Some("rootdir completions powershell | Out-String | Invoke-Expression"),
        _ => None,
    }
}
