//! Niihau - Main entrypoint.
//!
//! Command-line front end over word-list files. It loads configuration,
//! initializes logging, builds tries from the given files and prints the
//! result of the requested query one word per line.

use anyhow::Context;
use clap::{Parser, Subcommand};
use niihau_lib::config::{ConfigLoader, LogConfig, NiihauConfig, ENV_PREFIX};
use niihau_lib::error::{report_error, ErrorContext, NiihauError};
use niihau_lib::wordlist::load_word_list;
use niihau_lib::NiihauTrie;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Command line arguments for Niihau.
#[derive(Parser, Debug)]
#[clap(name = "niihau", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Print every word of a word list in lexicographic order
    List {
        /// Word list, one word per line
        file: PathBuf,
    },

    /// Check whether a word list contains a word
    Contains {
        /// Word list, one word per line
        file: PathBuf,
        /// Word to look up
        word: String,
    },

    /// Print the words starting with a prefix
    Prefix {
        /// Word list, one word per line
        file: PathBuf,
        /// Prefix to search for
        prefix: String,
    },

    /// Print the stored words that are prefixes of a word
    Prefixes {
        /// Word list, one word per line
        file: PathBuf,
        /// Word whose prefixes are wanted
        word: String,
    },

    /// Print the union of two word lists
    Union {
        /// First word list
        a: PathBuf,
        /// Second word list
        b: PathBuf,
    },

    /// Print the words two word lists have in common
    Intersect {
        /// First word list
        a: PathBuf,
        /// Second word list
        b: PathBuf,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level. Logs go to stderr
/// so they never mix with command output.
fn init_logging(log: &LogConfig) -> anyhow::Result<()> {
    let (filter, bad_directive) = match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new(&log.level), std::env::var("RUST_LOG").ok().map(|v| (v, e))),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };
    result.context("Failed to set global tracing subscriber")?;

    if let Some((directive, e)) = bad_directive {
        warn!(%directive, error = %e, level = %log.level, "ignoring RUST_LOG, using configured level");
    }
    Ok(())
}

fn load_trie(path: &Path, config: &NiihauConfig) -> anyhow::Result<NiihauTrie> {
    load_word_list(path, &config.trie)
        .with_context(|| format!("Failed to load word list {}", path.display()))
}

fn print_words<I, S>(words: I) -> anyhow::Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for word in words {
        writeln!(out, "{}", word.as_ref())?;
    }
    out.flush()?;
    Ok(())
}

fn run(command: Command, config: &NiihauConfig) -> anyhow::Result<()> {
    match command {
        Command::List { file } => {
            let trie = load_trie(&file, config)?;
            print_words(&trie)
        }
        Command::Contains { file, word } => {
            let trie = load_trie(&file, config)?;
            let found = trie.contains(&word)?;
            println!("{found}");
            Ok(())
        }
        Command::Prefix { file, prefix } => {
            let trie = load_trie(&file, config)?;
            print_words(trie.search_by_prefix(&prefix)?)
        }
        Command::Prefixes { file, word } => {
            let trie = load_trie(&file, config)?;
            print_words(trie.get_prefixes(&word)?)
        }
        Command::Union { a, b } => {
            let lhs = load_trie(&a, config)?;
            let rhs = load_trie(&b, config)?;
            print_words(&lhs.union(&rhs))
        }
        Command::Intersect { a, b } => {
            let lhs = load_trie(&a, config)?;
            let rhs = load_trie(&b, config)?;
            print_words(&lhs.intersection(&rhs))
        }
        Command::Validate => {
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = NiihauConfig::default();

            // Create parent directories if they don't exist
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&default_config).context("Failed to serialize config")?;
            std::fs::write(&output, toml)
                .with_context(|| format!("Failed to write {}", output.display()))?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}

/// Main entry point for the application.
fn main() {
    let args = Args::parse();

    // gen-config must work even when the current configuration is broken
    let loaded = match args.command {
        Command::GenConfig { .. } => Ok(NiihauConfig::default()),
        _ => ConfigLoader::new(args.config.as_deref(), ENV_PREFIX).load(),
    };

    let log_config = loaded.as_ref().map(|c| c.log.clone()).unwrap_or_default();
    if let Err(e) = init_logging(&log_config) {
        eprintln!("{e:#}");
        process::exit(1);
    }

    niihau_lib::init();

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            report_error(&ErrorContext::new(NiihauError::Config(e), "config"));
            process::exit(1);
        }
    };

    if let Err(e) = run(args.command, &config) {
        let details = format!("{e:#}");
        report_error(&ErrorContext::new(NiihauError::from(e), "cli").with_details(details));
        process::exit(1);
    }
}
