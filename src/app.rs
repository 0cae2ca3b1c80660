use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};

use crate::core::alias::{AliasSet, KeywordPolicy, Projector};
use crate::core::config::ConfigManager;
use crate::core::model::Node;

/// Project on-call alert events through an alias specification
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve every alias against an alert event and print the result as JSON
    Project {
        /// Alert event JSON file
        #[arg(long)]
        event: PathBuf,

        #[command(flatten)]
        source: SpecSource,
    },
    /// Parse an alias specification and list its directives
    Validate {
        #[command(flatten)]
        source: SpecSource,
    },
}

#[derive(Args, Debug)]
pub struct SpecSource {
    /// Alias specification, e.g. "hostname as host, join faults->ifName as ports"
    #[arg(long, conflicts_with = "config")]
    pub spec: Option<String>,

    /// Directory holding settings.json
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Resolve unknown keywords as plain paths instead of rejecting them
    #[arg(long, requires = "spec")]
    pub fallback_keywords: bool,
}

impl SpecSource {
    /// Load the alias set and the policy it was parsed with.
    fn load(&self) -> Result<(AliasSet, KeywordPolicy)> {
        match (&self.spec, &self.config) {
            (Some(spec), _) => {
                let policy = if self.fallback_keywords {
                    KeywordPolicy::Fallback
                } else {
                    KeywordPolicy::Reject
                };
                let tokens = crate::core::alias::tokenize_with(spec, policy)?;
                Ok((tokens, policy))
            }
            (None, Some(dir)) => {
                let manager = ConfigManager::new(dir.clone());
                if !manager.path().exists() {
                    bail!("no settings found at {:?}", manager.path());
                }
                let settings = manager.load();
                let tokens = settings
                    .validate()
                    .with_context(|| format!("invalid settings in {:?}", manager.path()))?;
                Ok((tokens, settings.keyword_policy))
            }
            (None, None) => bail!("either --spec or --config is required"),
        }
    }
}

pub fn execute(cli: Cli) -> Result<String> {
    match cli.command {
        Command::Project { event, source } => {
            let (tokens, policy) = source.load()?;
            let content = fs::read_to_string(&event)
                .with_context(|| format!("failed to read event {:?}", event))?;
            let root: Node = serde_json::from_str(&content)
                .with_context(|| format!("failed to decode event {:?}", event))?;

            let projected = Projector::new(policy).project_tokens(&root, &tokens)?;
            log::info!("Projected {} aliases from {:?}", projected.len(), event);
            Ok(serde_json::to_string_pretty(&projected)?)
        }
        Command::Validate { source } => {
            let (tokens, _) = source.load()?;
            let lines: Vec<String> = tokens
                .iter()
                .map(|t| match &t.keyword {
                    Some(kw) => format!("{} = {} {}", t.alias, kw, t.path),
                    None => format!("{} = {}", t.alias, t.path),
                })
                .collect();
            log::info!("Alias specification is valid ({} directives)", tokens.len());
            Ok(lines.join("\n"))
        }
    }
}

pub fn run() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match execute(cli) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            log::error!("{:#}", e);
            std::process::exit(1);
        }
    }
}
