//! Shell completions handler

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use vbscout::cli::Cli;

#[cfg(not(tarpaulin_include))]
pub fn handle(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "vbscout", &mut std::io::stdout());
}
