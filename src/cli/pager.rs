//! Terminal output, optionally through the user's pager
//!
//! Pretty output longer than one screen goes through `$PAGER` (default
//! `less -R`, so colors survive) when stdout is a terminal.

use std::io::{self, Write};
use std::process::{Command, Stdio};

use anyhow::{Context, Result};
use tracing::debug;

/// Below this many lines the output is printed directly
const PAGER_MIN_LINES: usize = 40;

/// Write output to stdout, through the pager when enabled and worthwhile
pub fn emit(output: &str, use_pager: bool) -> Result<()> {
    let long = output.lines().count() >= PAGER_MIN_LINES;

    if use_pager && long && atty::is(atty::Stream::Stdout) {
        let pager = std::env::var("PAGER").unwrap_or_else(|_| "less".to_string());
        return output_through_pager(&pager, output);
    }

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle.write_all(output.as_bytes())?;
    handle.flush()?;
    Ok(())
}

/// Split a `$PAGER` value into program and arguments, adding `-R` for less
fn pager_command(pager: &str) -> Option<(String, Vec<String>)> {
    let mut parts = pager.split_whitespace().map(str::to_string);
    let program = parts.next()?;
    let mut args: Vec<String> = parts.collect();

    if program.ends_with("less") && !args.iter().any(|a| a.starts_with("-R")) {
        args.push("-R".to_string());
    }

    Some((program, args))
}

/// Output through the system pager (less, more, etc.)
fn output_through_pager(pager: &str, output: &str) -> Result<()> {
    let Some((program, args)) = pager_command(pager) else {
        print!("{}", output);
        return Ok(());
    };

    debug!(%program, "spawning pager");

    let mut child = Command::new(&program)
        .args(&args)
        .stdin(Stdio::piped())
        .spawn()
        .with_context(|| format!("Failed to spawn pager '{}'", program))?;

    if let Some(mut stdin) = child.stdin.take() {
        // The user may quit the pager before reading everything
        if let Err(e) = stdin.write_all(output.as_bytes()) {
            if e.kind() != io::ErrorKind::BrokenPipe {
                return Err(e).context("Failed to write to pager");
            }
        }
    }

    child.wait().context("Pager failed")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pager_command_less_gets_raw_flag() {
        let (program, args) = pager_command("less").unwrap();
        assert_eq!(program, "less");
        assert_eq!(args, vec!["-R"]);

        let (_, args) = pager_command("/usr/bin/less -RS").unwrap();
        assert_eq!(args, vec!["-RS"]);
    }

    #[test]
    fn test_pager_command_other_pager() {
        let (program, args) = pager_command("more -d").unwrap();
        assert_eq!(program, "more");
        assert_eq!(args, vec!["-d"]);
    }

    #[test]
    fn test_pager_command_empty() {
        assert!(pager_command("   ").is_none());
    }
}
