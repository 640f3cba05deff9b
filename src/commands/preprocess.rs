//! Preprocess command handler

use std::fs;
use std::io::{self, Write};

use anyhow::{Context, Result};

use vbscout::cli::PreprocessArgs;
use vbscout::preprocess::{bound_lines, preprocess};
use vbscout::theme::current_theme;
use vbscout::Config;

/// Rewrite `!` lines with the configured keybindings.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: PreprocessArgs) -> Result<()> {
    let config = Config::load()?;
    let bindings = config.keybindings()?;
    let theme = current_theme();

    let text = fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;
    let rewritten = preprocess(&text, &bindings);

    let target = if args.in_place {
        Some(args.file.clone())
    } else {
        args.output.clone()
    };

    match target {
        Some(path) => {
            fs::write(&path, rewritten)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!(
                "{}",
                theme.success_text(&format!(
                    "Rewrote {} lines into {}",
                    bound_lines(&text),
                    path.display()
                ))
            );
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(rewritten.as_bytes())
                .context("Failed to write to stdout")?;
            stdout.flush().context("Failed to write to stdout")?;
        }
    }
    Ok(())
}
