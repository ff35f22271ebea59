use clap::Parser;
use cuptower::OutputFormat;
use cuptower::core::config::{self, CliOverrides, CupTowerConfig};
use cuptower::core::state::App;
use cuptower::{script, tui};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "cuptower", about = "Stack cups and lids in a bounded tower")]
struct Args {
    /// Tower width (largest item size allowed)
    #[arg(short, long)]
    width: Option<i64>,

    /// Tower maximum height
    #[arg(short = 'H', long)]
    max_height: Option<i64>,

    /// Run commands from a file instead of the TUI ("-" reads stdin)
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Output format for --script
    #[arg(short, long, default_value_t, value_enum)]
    format: OutputFormat,
}

fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to cuptower.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("cuptower.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("cuptower starting up");

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Ignoring config file: {}", e);
        eprintln!("cuptower: {e}; using defaults");
        CupTowerConfig::default()
    });
    let cli = CliOverrides {
        width: args.width,
        max_height: args.max_height,
    };
    let resolved = match config::resolve(&file_config, cli) {
        Ok(resolved) => resolved,
        Err(e) => {
            log::error!("Invalid configuration: {}", e);
            eprintln!("cuptower: {e}");
            return ExitCode::from(2);
        }
    };
    log::info!("Resolved config: {:?}", resolved);

    let mut app = App::from_config(&resolved);
    let result = match args.script {
        Some(path) => run_script(&path, &mut app, args.format),
        None => tui::run(app),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Fatal I/O error: {}", e);
            eprintln!("cuptower: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run_script(path: &Path, app: &mut App, format: OutputFormat) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    if path.as_os_str() == "-" {
        script::run(io::stdin().lock(), &mut stdout, app, format)
    } else {
        let file = File::open(path)?;
        log::info!("Running script {}", path.display());
        script::run(BufReader::new(file), &mut stdout, app, format)
    }
}
