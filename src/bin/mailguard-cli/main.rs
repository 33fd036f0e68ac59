mod args;
#[cfg(feature = "with-serde")]
mod claims;
mod output;

use anyhow::{Context, Result};
use mailguard_lib::{EmailInput, extract_domain, is_from_domain, normalize_email};

use std::io::{self, BufRead};

use crate::args::{Cli, Commands, check_format};
use crate::output::{OutputRow, any_invalid, make_row, write_reports};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();
    check_format(&cli.format)?;
    let options = cli.validation_options()?;
    let mut rows: Vec<OutputRow> = Vec::new();

    if cli.stdin {
        for line in io::stdin().lock().lines() {
            let line = line.context("read stdin")?;
            rows.push(row_from_line(line, cli.json_input, &options)?);
        }
    } else {
        match &cli.cmd {
            Some(Commands::Validate { email }) => {
                rows.push(make_row(email.clone(), EmailInput::Text(email.as_str()), &options));
            }
            Some(Commands::Domain { email, expect }) => {
                match extract_domain(email.as_str()) {
                    Some(domain) => println!("{domain}"),
                    None => println!("-"),
                }
                if let Some(expected) = expect {
                    if !is_from_domain(email.as_str(), expected) {
                        std::process::exit(2);
                    }
                }
                return Ok(());
            }
            Some(Commands::Normalize { email }) => {
                println!("{}", normalize_email(email.as_str()));
                return Ok(());
            }
            #[cfg(feature = "with-serde")]
            Some(Commands::Claims { path }) => {
                rows.push(claims::run_claims(path, &options)?);
            }
            None => {
                Cli::clap_command().print_help()?;
                println!();
                return Ok(());
            }
        }
    }

    write_reports(&rows, &cli)?;

    // codes de sortie : 0 OK, 2 invalids, 1 fatal
    if any_invalid(&rows) {
        std::process::exit(2);
    }
    Ok(())
}

#[cfg(feature = "with-serde")]
fn row_from_line(
    line: String,
    json_input: bool,
    options: &mailguard_lib::ValidationOptions,
) -> Result<OutputRow> {
    if json_input {
        let value: serde_json::Value =
            serde_json::from_str(&line).with_context(|| format!("parse JSON line '{line}'"))?;
        return Ok(make_row(line.clone(), EmailInput::from(&value), options));
    }
    Ok(make_row(line.clone(), EmailInput::Text(&line), options))
}

#[cfg(not(feature = "with-serde"))]
fn row_from_line(
    line: String,
    json_input: bool,
    options: &mailguard_lib::ValidationOptions,
) -> Result<OutputRow> {
    if json_input {
        anyhow::bail!("--json-input nécessite la feature 'with-serde'");
    }
    Ok(make_row(line.clone(), EmailInput::Text(&line), options))
}

#[cfg(feature = "with-tracing")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

#[cfg(not(feature = "with-tracing"))]
fn init_tracing() {}
