//! Lexitrie - command-line entrypoint.
//!
//! Loads a word list into a trie and answers membership or removal queries
//! against it. Configuration is read before logging starts so the log level
//! can come from the configuration file.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use lexitrie::config::{ConfigLoader, LexiConfig, LogConfig, ENV_PREFIX};
use lexitrie::error::{ErrorContext, ErrorReporter, LexiError, LexiResult, TracingErrorReporter};
use lexitrie::words::load_words_from_path;
use lexitrie::Trie;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for lexitrie.
#[derive(Parser, Debug)]
#[command(name = "lexitrie", version, author, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Report whether each word is stored in the word list
    Check {
        /// Word list to load, overriding `words.path`
        #[arg(short, long)]
        words: Option<PathBuf>,

        /// Words to look up
        #[arg(required = true)]
        queries: Vec<String>,
    },

    /// Remove words from the loaded word list, in order
    Remove {
        /// Word list to load, overriding `words.path`
        #[arg(short, long)]
        words: Option<PathBuf>,

        /// Words to remove
        #[arg(required = true)]
        targets: Vec<String>,
    },

    /// Validate the configuration
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[arg(short, long)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
fn init_logging(log: &LogConfig) -> LexiResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(log.source_location)
        .with_line_number(log.source_location)
        .with_writer(std::io::stderr);

    let installed = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    installed
        .map_err(|e| LexiError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Loads the word list named on the command line or in the configuration.
fn load_trie(words: Option<PathBuf>, config: &LexiConfig) -> LexiResult<Trie> {
    let path = words.or_else(|| config.words.path.clone()).ok_or_else(|| {
        LexiError::Custom("no word list given; pass --words or set words.path".to_string())
    })?;
    info!(path = %path.display(), "loading word list");
    load_words_from_path(&path, &config.words)
}

fn run(command: Command, config: &LexiConfig) -> LexiResult<()> {
    match command {
        Command::Check { words, queries } => {
            let trie = load_trie(words, config)?;
            for query in &queries {
                println!("{query}\t{}", trie.contains(query));
            }
        }
        Command::Remove { words, targets } => {
            let mut trie = load_trie(words, config)?;
            for target in &targets {
                match trie.remove(target)? {
                    Some(removed) => println!("{removed}\tremoved"),
                    None => println!("{target}\tabsent"),
                }
            }
            println!("empty\t{}", trie.is_empty());
        }
        Command::Validate => {
            info!("Configuration validated successfully");
            println!("configuration is valid");
        }
        Command::GenConfig { output } => {
            std::fs::write(&output, config_template()?)?;
            info!(path = %output.display(), "default configuration written");
        }
    }
    Ok(())
}

fn config_template() -> LexiResult<String> {
    Ok(LexiConfig::default().to_toml()?)
}

/// Main entry point for the application.
fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX)
        .load()
        .context("failed to load configuration")?;

    init_logging(&config.log)?;

    if let Err(error) = run(args.command, &config) {
        let context = ErrorContext::new(error, "cli");
        TracingErrorReporter.report(&context);
        return Err(context.error.into());
    }

    Ok(())
}
