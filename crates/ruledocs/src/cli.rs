//! Command line front end
//!
//! Resolves configuration, runs the ingestion pipeline and prints the
//! resulting collection.

use anyhow::{Context, bail};
use clap::{Parser, ValueEnum};
use ruledocs_core::{RuleCollection, RuleCollectionBuilder, RuleRecord};
use ruledocs_infrastructure::config::{AppConfig, ConfigLoader};
use ruledocs_infrastructure::logging::init_logging;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

/// Command line interface for ruledocs
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "ruledocs")]
#[command(about = "Build an ordered collection of lint rule documentation")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory holding the rule markdown files (overrides `rules.dir`)
    #[arg(long, value_name = "DIR")]
    pub rules_dir: Option<PathBuf>,

    /// Preview truncation mode: third, sixth or minimal (overrides `rules.limit`)
    #[arg(long, value_name = "MODE")]
    pub limit: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Print only the rule with this id
    #[arg(long, value_name = "ID")]
    pub id: Option<String>,
}

/// How the collection is written to stdout
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One `<plugin> / <rule>  #<id>` line per rule
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl Cli {
    /// Load configuration and apply command line overrides
    ///
    /// # Errors
    ///
    /// Fails when the configuration cannot be loaded or validated.
    pub fn load_config(&self) -> anyhow::Result<AppConfig> {
        let mut loader = ConfigLoader::new();
        if let Some(path) = &self.config {
            loader = loader.with_config_path(path);
        }
        let mut config = loader.load().context("Failed to load configuration")?;

        if let Some(dir) = &self.rules_dir {
            config.rules.dir.clone_from(dir);
        }
        if let Some(limit) = &self.limit {
            config.rules.limit = Some(limit.clone());
        }
        Ok(config)
    }
}

/// Run the command line front end
///
/// # Errors
///
/// Fails on configuration errors, an empty collection, an unknown `--id`
/// or a broken stdout.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.load_config()?;
    init_logging(&config.logging).context("Failed to initialize logging")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(cli, &config, &mut out)
}

/// Build the collection described by `config` and write it to `out`
///
/// # Errors
///
/// See [`run`].
pub fn execute<W: Write>(cli: &Cli, config: &AppConfig, out: &mut W) -> anyhow::Result<()> {
    let rules = RuleCollectionBuilder::new(&config.rules.dir)
        .with_limit(config.rules.preview_limit())
        .build();

    if rules.is_empty() {
        bail!("failed to load rules from {}", config.rules.dir.display());
    }
    info!(count = rules.len(), "Loaded rule collection");

    match &cli.id {
        Some(id) => {
            let rule = rules
                .get(id)
                .with_context(|| format!("no rule with id `{id}`"))?;
            write_rule(rule, cli.format, out)
        }
        None => write_collection(&rules, cli.format, out),
    }
}

fn write_collection<W: Write>(
    rules: &RuleCollection,
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, rules).context("Failed to encode rules")?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            for rule in rules {
                writeln!(out, "{} / {}  #{}", rule.plugin_name, rule.rule_name, rule.id)?;
            }
        }
    }
    Ok(())
}

fn write_rule<W: Write>(rule: &RuleRecord, format: OutputFormat, out: &mut W) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, rule).context("Failed to encode rule")?;
            writeln!(out)?;
        }
        OutputFormat::Text => writeln!(out, "{}", rule.content)?,
    }
    Ok(())
}
