use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use mailguard_lib::ValidationOptions;

#[derive(Parser)]
#[command(name = "mailguard-cli")]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Commands>,

    /// lit des adresses depuis stdin (une par ligne)
    #[arg(long)]
    pub stdin: bool,

    /// avec --stdin : chaque ligne est une valeur JSON (null, nombre, chaîne...)
    #[arg(long, requires = "stdin")]
    pub json_input: bool,

    /// write report to file (JSON/NDJSON/CSV selon --format)
    #[arg(long)]
    pub out: Option<String>,

    /// format: human|json|ndjson|csv
    #[arg(long, default_value = "human")]
    pub format: String,

    /// fichier JSON d'options (clés camelCase), écrasé par les flags
    #[arg(long)]
    pub config: Option<String>,

    /// motif permissif (non-ASCII accepté)
    #[arg(long)]
    pub international: bool,

    /// autorise la syntaxe `Nom <adresse>`
    #[arg(long)]
    pub allow_display_name: bool,

    /// n'exige pas de point dans le domaine
    #[arg(long)]
    pub no_require_tld: bool,

    /// longueur maximale de l'adresse (défaut 254)
    #[arg(long)]
    pub max_length: Option<usize>,
}

#[derive(Subcommand)]
pub enum Commands {
    Validate {
        email: String,
    },
    /// affiche le domaine (minuscules) d'une adresse
    Domain {
        email: String,
        /// code 2 si le domaine diffère
        #[arg(long)]
        expect: Option<String>,
    },
    /// affiche la forme normalisée (trim + minuscules)
    Normalize {
        email: String,
    },
    /// valide le claim `email` d'un payload Keycloak (JSON)
    #[cfg(feature = "with-serde")]
    Claims {
        path: String,
    },
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn clap_command() -> clap::Command {
        <Self as clap::CommandFactory>::command()
    }

    /// Flags only; `None` for anything not given on the command line.
    pub fn flag_options(&self) -> ValidationOptions {
        ValidationOptions {
            allow_international: self.international.then_some(true),
            allow_display_name: self.allow_display_name.then_some(true),
            require_tld: self.no_require_tld.then_some(false),
            max_length: self.max_length,
        }
    }

    /// No-options defaults < `--config` file < flags.
    pub fn validation_options(&self) -> Result<ValidationOptions> {
        let mut options = ValidationOptions::omitted();
        if let Some(path) = &self.config {
            options = options.overlay(&load_config(path)?);
        }
        Ok(options.overlay(&self.flag_options()))
    }
}

#[cfg(feature = "with-serde")]
fn load_config(path: &str) -> Result<ValidationOptions> {
    use anyhow::Context;

    let raw = std::fs::read_to_string(path).with_context(|| format!("read config {path}"))?;
    let options = serde_json::from_str(&raw).with_context(|| format!("parse config {path}"))?;
    Ok(options)
}

#[cfg(not(feature = "with-serde"))]
fn load_config(_path: &str) -> Result<ValidationOptions> {
    bail!("--config nécessite la feature 'with-serde'")
}

pub fn check_format(format: &str) -> Result<()> {
    match format {
        "human" | "json" | "ndjson" | "csv" => Ok(()),
        other => bail!("unknown --format '{other}', use: human|json|ndjson|csv"),
    }
}
