//! mnemo — BIP39 mnemonic tool.

mod config;

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use mnemo_codec::{
    entropy_to_mnemonic, generate_mnemonic, mnemonic_to_entropy, mnemonic_to_seed, nfkd_bytes,
    validate_mnemonic, Language, Wordlist,
};
use mnemo_utils::LogFormat;

use crate::config::CliConfig;

#[derive(Parser)]
#[command(name = "mnemo", about = "BIP39 mnemonic codec and seed derivation")]
struct Cli {
    /// Word list language (e.g. "english", "japanese", "chinese-simplified").
    #[arg(long, global = true, env = "MNEMO_LANGUAGE")]
    language: Option<Language>,

    /// Path to a custom JSON word list (array of 2048 strings).
    #[arg(long, global = true, env = "MNEMO_WORDLIST")]
    wordlist: Option<PathBuf>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, global = true, env = "MNEMO_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, global = true, env = "MNEMO_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    /// Path to a TOML configuration file. CLI flags and env vars override it.
    #[arg(long, global = true, env = "MNEMO_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Generate a new random mnemonic.
    Generate {
        /// Entropy bits: 128, 160, 192, 224 or 256.
        #[arg(long, short)]
        strength: Option<u32>,
    },
    /// Check a mnemonic's words and checksum. Exits with status 1 when invalid.
    Validate {
        /// The mnemonic, or "-" to read it from stdin.
        mnemonic: String,
    },
    /// Decode a mnemonic to hex entropy.
    Entropy {
        /// The mnemonic, or "-" to read it from stdin.
        mnemonic: String,
    },
    /// Encode hex entropy as a mnemonic.
    Mnemonic {
        /// 16, 20, 24, 28 or 32 bytes of hex.
        entropy: String,
    },
    /// Derive the 64-byte seed (hex). The checksum is not verified.
    Seed {
        /// The mnemonic, or "-" to read it from stdin.
        mnemonic: String,

        /// Optional passphrase.
        #[arg(long, short, default_value = "", env = "MNEMO_PASSPHRASE", hide_env_values = true)]
        passphrase: String,
    },
    /// List built-in word list languages.
    Languages,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let file_result = cli.config.as_ref().map(|p| CliConfig::from_toml_file(p));
    let (file_config, config_error) = match file_result {
        Some(Ok(cfg)) => (Some(cfg), None),
        Some(Err(e)) => (None, Some(e)),
        None => (None, None),
    };
    let loaded = file_config.is_some();
    let base = file_config.unwrap_or_default();

    let config = CliConfig {
        language: cli.language.unwrap_or(base.language),
        wordlist: cli.wordlist.or(base.wordlist),
        log_level: cli.log_level.unwrap_or(base.log_level),
        log_format: cli.log_format.unwrap_or(base.log_format),
        ..base
    };

    mnemo_utils::init_tracing(&config.log_level, config.log_format);
    if let Some(e) = config_error {
        tracing::warn!("{e}, using defaults");
    } else if loaded {
        if let Some(path) = &cli.config {
            tracing::info!("loaded config from {}", path.display());
        }
    }

    let custom;
    let wordlist: &Wordlist = match &config.wordlist {
        Some(path) => {
            custom = Wordlist::from_json_file(path)
                .with_context(|| format!("loading word list {}", path.display()))?;
            tracing::info!("using custom word list {}", path.display());
            &custom
        }
        None => {
            tracing::debug!(language = %config.language, "using built-in word list");
            config.language.wordlist()
        }
    };

    match cli.command {
        Command::Generate { strength } => {
            let strength = strength.unwrap_or(config.strength);
            let mnemonic = generate_mnemonic(wordlist, strength)?;
            println!("{mnemonic}");
        }
        Command::Validate { mnemonic } => {
            let mnemonic = read_mnemonic(&mnemonic)?;
            if validate_mnemonic(&mnemonic, wordlist) {
                println!("valid");
            } else {
                println!("invalid");
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Entropy { mnemonic } => {
            let mnemonic = read_mnemonic(&mnemonic)?;
            let entropy = mnemonic_to_entropy(&mnemonic, wordlist)?;
            println!("{}", entropy.to_hex());
        }
        Command::Mnemonic { entropy } => {
            let bytes = hex::decode(entropy.trim()).context("entropy must be hex")?;
            let mnemonic = entropy_to_mnemonic(&bytes, wordlist)?;
            println!("{mnemonic}");
        }
        Command::Seed {
            mnemonic,
            passphrase,
        } => {
            let mnemonic = read_mnemonic(&mnemonic)?;
            let seed = mnemonic_to_seed(&mnemonic, &passphrase)?;
            println!("{}", seed.to_hex());
        }
        Command::Languages => {
            for lang in Language::ALL {
                println!("{lang}");
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Take the mnemonic from the argument, or from stdin when it is `-`.
///
/// Stdin is read as raw bytes so non-UTF-8 input surfaces as an invalid-type
/// error; a single trailing line ending is stripped.
fn read_mnemonic(arg: &str) -> anyhow::Result<String> {
    if arg != "-" {
        return Ok(arg.to_string());
    }
    let mut raw = Vec::new();
    std::io::stdin()
        .read_to_end(&mut raw)
        .context("reading mnemonic from stdin")?;
    let mut text = nfkd_bytes(&raw)?;
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    Ok(text)
}
