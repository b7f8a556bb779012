use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use i18ncsv_cli::{
    Config,
    convert::{run_csv_to_json_command, run_json_to_csv_command, run_merge_command},
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, arg_required_else_help = true)]
struct Args {
    /// Configuration file (defaults to ./i18ncsv.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    commands: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Export one language's JSON file to a CSV spreadsheet.
    Json2csv {
        /// The JSON file to export
        json_file: String,
        /// The CSV file to write
        csv_file: String,
        /// Language of the JSON file (defaults to the configured source language)
        source_lang: Option<String>,
    },

    /// Merge <lang>.json files from a directory into one CSV spreadsheet.
    Merge {
        /// Directory holding <lang>.json files
        input_dir: String,
        /// The CSV file to write
        csv_file: String,
        /// Comma-separated languages to merge, e.g. zh-TW,en-US (defaults to all)
        langs: Option<String>,
    },

    /// Split a CSV spreadsheet back into <lang>.json files.
    Csv2json {
        /// The CSV file to read
        csv_file: String,
        /// Directory for the JSON files (defaults to the CSV file's directory)
        output_dir: Option<String>,
        /// Comma-separated languages to write, e.g. zh-TW,en-US (defaults to all)
        langs: Option<String>,
        /// Replace values that collide with nested keys instead of failing
        #[arg(long)]
        overwrite_conflicts: bool,
    },
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> Result<(), String> {
    let cwd = std::env::current_dir().map_err(|e| format!("Cannot read current directory: {}", e))?;
    let config = Config::load(args.config.as_deref(), &cwd)?;

    match args.commands {
        Commands::Json2csv {
            json_file,
            csv_file,
            source_lang,
        } => {
            let codec = config.codec(false)?;
            let source = source_lang.unwrap_or_else(|| config.source_language().to_string());
            run_json_to_csv_command(&codec, &json_file, &csv_file, &source)
        }
        Commands::Merge {
            input_dir,
            csv_file,
            langs,
        } => {
            let codec = config.codec(false)?;
            run_merge_command(&codec, &input_dir, &csv_file, langs.as_deref())
        }
        Commands::Csv2json {
            csv_file,
            output_dir,
            langs,
            overwrite_conflicts,
        } => {
            let codec = config.codec(overwrite_conflicts)?;
            run_csv_to_json_command(&codec, &csv_file, output_dir.as_deref(), langs.as_deref())
        }
    }
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}
