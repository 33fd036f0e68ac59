#[cfg(any(feature = "with-serde", feature = "with-csv"))]
use anyhow::Context;
use anyhow::{Result, bail};

use crate::args::Cli;
use mailguard_lib::{
    EmailInput, ValidationMode, ValidationOptions, ValidationResult, extract_domain,
    normalize_email, validate_email_with,
};

#[cfg_attr(feature = "with-serde", derive(serde::Serialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase"))]
#[cfg_attr(not(feature = "with-serde"), allow(dead_code))]
pub struct OutputRow {
    pub original: String,
    pub normalized: String,
    #[cfg_attr(feature = "with-serde", serde(skip_serializing_if = "Option::is_none"))]
    pub domain: Option<String>,
    pub mode: ValidationMode,
    #[cfg_attr(feature = "with-serde", serde(flatten))]
    pub result: ValidationResult,
}

/// `original` is what gets printed: the raw line, or the JSON text for
/// non-string input.
pub fn make_row(original: String, input: EmailInput<'_>, options: &ValidationOptions) -> OutputRow {
    OutputRow {
        normalized: normalize_email(input),
        domain: extract_domain(input),
        mode: options.resolve().mode(),
        result: validate_email_with(input, options),
        original,
    }
}

pub fn write_reports(rows: &[OutputRow], cli: &Cli) -> Result<()> {
    match cli.format.as_str() {
        "human" => write_human(rows),
        "json" => write_json(rows, cli),
        "ndjson" => write_ndjson(rows, cli),
        "csv" => write_csv(rows, cli),
        other => bail!("unknown --format '{other}', use: human|json|ndjson|csv"),
    }
}

pub fn any_invalid(rows: &[OutputRow]) -> bool {
    rows.iter().any(|row| !row.result.is_valid)
}

pub fn format_human(row: &OutputRow) -> String {
    let result = &row.result;
    let mut lines = Vec::with_capacity(1 + result.warnings.len());
    if result.is_valid {
        lines.push(format!("[OK]    {}", row.original));
    } else {
        lines.push(format!(
            "[INVALID] {} :: {}",
            row.original,
            result.error_messages().join("; ")
        ));
    }
    for warning in &result.warnings {
        lines.push(format!("        warning: {warning}"));
    }
    lines.join("\n")
}

fn write_human(rows: &[OutputRow]) -> Result<()> {
    for row in rows {
        println!("{}", format_human(row));
    }
    Ok(())
}

#[cfg(feature = "with-serde")]
fn write_json(rows: &[OutputRow], cli: &Cli) -> Result<()> {
    let s = serde_json::to_string_pretty(rows)?;
    if let Some(path) = &cli.out {
        write_all_atomically(path, s.as_bytes())?;
    } else {
        println!("{s}");
    }
    Ok(())
}

#[cfg(not(feature = "with-serde"))]
fn write_json(_: &[OutputRow], _: &Cli) -> Result<()> {
    bail!("format=json nécessite la feature 'with-serde'")
}

#[cfg(feature = "with-serde")]
fn write_ndjson(rows: &[OutputRow], cli: &Cli) -> Result<()> {
    if let Some(path) = &cli.out {
        let mut buf = Vec::new();
        for row in rows {
            let line = serde_json::to_string(row)?;
            buf.extend_from_slice(line.as_bytes());
            buf.push(b'\n');
        }
        write_all_atomically(path, &buf)?;
    } else {
        for row in rows {
            println!("{}", serde_json::to_string(row)?);
        }
    }
    Ok(())
}

#[cfg(not(feature = "with-serde"))]
fn write_ndjson(_: &[OutputRow], _: &Cli) -> Result<()> {
    bail!("format=ndjson nécessite la feature 'with-serde'")
}

#[cfg(feature = "with-csv")]
fn write_csv(rows: &[OutputRow], cli: &Cli) -> Result<()> {
    if let Some(path) = &cli.out {
        let mut wtr = csv::Writer::from_writer(Vec::new());
        for row in rows {
            wtr.write_record(&csv_record(row))?;
        }
        let data = wtr.into_inner()?;
        write_all_atomically(path, &data)?;
    } else {
        let mut wtr = csv::Writer::from_writer(std::io::stdout());
        for row in rows {
            wtr.write_record(&csv_record(row))?;
        }
        wtr.flush()?;
    }
    Ok(())
}

#[cfg(not(feature = "with-csv"))]
fn write_csv(_: &[OutputRow], _: &Cli) -> Result<()> {
    bail!("format=csv nécessite la feature 'with-csv'")
}

#[cfg(feature = "with-csv")]
fn csv_record(row: &OutputRow) -> Vec<String> {
    vec![
        row.original.clone(),
        row.normalized.clone(),
        row.domain.clone().unwrap_or_default(),
        match row.mode {
            ValidationMode::Strict => "strict",
            ValidationMode::International => "international",
        }
        .to_string(),
        row.result.is_valid.to_string(),
        row.result.error_messages().join("|"),
        row.result.warning_messages().join("|"),
    ]
}

#[cfg(any(feature = "with-serde", feature = "with-csv"))]
fn write_all_atomically(path: &str, bytes: &[u8]) -> Result<()> {
    let tmp = format!("{path}.tmp");
    let written = write_and_sync(&tmp, bytes).and_then(|()| std::fs::rename(&tmp, path));
    if let Err(err) = written {
        // pas de .tmp orphelin
        let _ = std::fs::remove_file(&tmp);
        return Err(err).with_context(|| format!("write {path} via {tmp}"));
    }
    Ok(())
}

#[cfg(any(feature = "with-serde", feature = "with-csv"))]
fn write_and_sync(tmp: &str, bytes: &[u8]) -> std::io::Result<()> {
    use std::io::Write;

    let mut f = std::fs::File::create(tmp)?;
    f.write_all(bytes)?;
    f.sync_all()
}
