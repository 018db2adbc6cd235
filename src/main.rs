//! mysc - CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use tracing::{debug, info, warn};

use mysc::util::config::{load_user_config, MessageFormat, UserConfig};
use mysc::util::diagnostic::JsonEmitter;
use mysc::util::logger;
use mysc::{transpile, TranspileError, NAME, VERSION};

/// Transpiles the mys Python subset into C++ source
#[derive(Parser, Debug)]
#[command(name = "mysc")]
#[command(version = VERSION)]
#[command(about = NAME, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Diagnostic format: text or json
    #[arg(long, value_name = "FORMAT", global = true)]
    message_format: Option<MessageFormat>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate a mys source file into C++
    Transpile {
        /// Source file to translate
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output file (defaults to the input with the configured extension)
        #[arg(short, long, value_name = "OUT")]
        output: Option<PathBuf>,
    },

    /// Report diagnostics without writing output
    Check {
        /// Source file to check
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Print version information
    Version,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_user_config().unwrap_or_else(|e| {
        eprintln!("warning: ignoring user configuration: {}", e);
        UserConfig::default()
    });

    if args.verbose {
        logger::init_debug();
    } else {
        logger::init_with_level(config.log.level);
    }

    let format = args.message_format.unwrap_or(config.diagnostics.format);
    debug!("{} {} (message format {:?})", NAME, VERSION, format);

    match args.command {
        Commands::Transpile { file, output } => {
            let output = output.unwrap_or_else(|| config.output.output_path_for(&file));
            let code = translate(&file, format)?;
            write_output(&output, &code, &config)?;
            info!("Wrote {}", output.display());
        }
        Commands::Check { file } => {
            translate(&file, format)?;
            eprintln!("{}: ok", file.display());
        }
        Commands::Version => {
            println!("{} {}", NAME, VERSION);
        }
    }

    Ok(())
}

/// Read and translate one file; diagnostics end the process with status 1
fn translate(
    file: &Path,
    format: MessageFormat,
) -> Result<String> {
    let source = fs::read_to_string(file)
        .with_context(|| format!("Failed to read file: {}", file.display()))?;
    let filename = file.display().to_string();

    match transpile(&source, &filename) {
        Ok(code) => Ok(code),
        Err(e) => {
            report(&e, &filename, format);
            process::exit(1);
        }
    }
}

fn report(
    error: &TranspileError,
    filename: &str,
    format: MessageFormat,
) {
    match (format, error.diagnostic()) {
        (MessageFormat::Json, Some(diagnostic)) => {
            eprintln!("{}", JsonEmitter::render(diagnostic, filename))
        }
        _ => eprintln!("{}", error),
    }
}

fn write_output(
    output: &Path,
    code: &str,
    config: &UserConfig,
) -> Result<()> {
    if let Some(dir) = &config.output.directory {
        if !dir.exists() {
            warn!("Creating output directory {}", dir.display());
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
        }
    }
    fs::write(output, code).with_context(|| format!("Failed to write: {}", output.display()))
}
