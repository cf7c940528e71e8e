//! swaggerf CLI
//!
//! Entry point for the `swaggerf` command-line tool.

use clap::{Parser, Subcommand};
use serde_json::{json, Map, Value};
use std::path::PathBuf;
use std::process;
use swaggerf::{
    camel_to_dash, load_document, merge_layers, unpack_with_code, ReturnValue, Settings,
};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "swaggerf")]
#[command(about = "Merge API documents and exercise response helpers", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file (default: ./swaggerf.toml if present)
    #[arg(long, short = 'c', global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging (-v for debug, -vv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print JSON on a single line
    #[arg(long, global = true)]
    compact: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Deep-merge JSON/TOML documents; later files win
    Merge {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Convert camelCase identifiers to snake_case
    Case {
        #[arg(required = true)]
        identifiers: Vec<String>,
    },

    /// Normalize a handler return given as JSON (arrays are tuples)
    Unpack {
        /// e.g. '["created", 201, {"Location": "/pets/1"}]'
        value: String,

        /// Status code when the value carries none
        #[arg(long)]
        default_code: Option<u16>,
    },
}

fn main() {
    let cli = Cli::parse();

    let settings = match Settings::load(cli.config.as_deref(), cli_overrides(&cli)) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            process::exit(1);
        }
    };

    init_tracing(cli.verbose, &settings.log_level);
    tracing::debug!(sources = ?settings.sources, "settings loaded");

    let result = match cli.command {
        Commands::Merge { files } => run_merge(&files, &settings),
        Commands::Case { identifiers } => {
            run_case(&identifiers);
            Ok(())
        }
        Commands::Unpack { value, .. } => run_unpack(&value, &settings),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// CLI flags as the highest-precedence settings layer
fn cli_overrides(cli: &Cli) -> Option<Value> {
    let mut overrides = Map::new();
    if cli.compact {
        overrides.insert("pretty".to_string(), json!(false));
    }
    if let Commands::Unpack {
        default_code: Some(code),
        ..
    } = &cli.command
    {
        overrides.insert("default_status_code".to_string(), json!(code));
    }
    (!overrides.is_empty()).then_some(Value::Object(overrides))
}

// Priority: RUST_LOG > -v/-vv > configured log_level
fn init_tracing(verbose: u8, log_level: &str) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        match verbose {
            0 => EnvFilter::new(log_level),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run_merge(files: &[PathBuf], settings: &Settings) -> swaggerf::Result<()> {
    let layers = files
        .iter()
        .map(|path| load_document(path))
        .collect::<swaggerf::Result<Vec<_>>>()?;

    tracing::info!(documents = layers.len(), "merging documents");
    print_json(&merge_layers(layers), settings.pretty)
}

fn run_case(identifiers: &[String]) {
    for ident in identifiers {
        println!("{}", camel_to_dash(ident));
    }
}

fn run_unpack(value: &str, settings: &Settings) -> swaggerf::Result<()> {
    let parsed: Value = serde_json::from_str(value)?;
    let (data, code, headers) =
        unpack_with_code(ReturnValue::from_json(parsed), settings.default_status_code)?;

    print_json(
        &json!({
            "data": data,
            "code": code,
            "headers": headers,
        }),
        settings.pretty,
    )
}

fn print_json(value: &Value, pretty: bool) -> swaggerf::Result<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", rendered);
    Ok(())
}
