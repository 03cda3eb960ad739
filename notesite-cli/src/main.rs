mod settings;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use log::{debug, LevelFilter};
use notesite_core::{build_sidebar_with_report, NotesiteError, Storage};
use serde::Serialize;
use settings::{load_settings, save_settings};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(author, version, about = "Navigation data for the Notesite documentation site", long_about = None)]
struct Cli {
    /// SQLite database to read (defaults to the path in settings.json)
    #[arg(long, value_name = "FILE", global = true)]
    database: Option<PathBuf>,

    /// Set the base log level (use -v / -q to adjust relative to this level)
    #[arg(
        long,
        value_enum,
        default_value_t = LogLevel::Warn,
        global = true,
        help = "error | warn | info | debug | trace"
    )]
    log_level: LogLevel,

    /// Increase logging verbosity (can be used multiple times)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Decrease logging verbosity (can be used multiple times)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    quiet: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the route-keyed navigation sidebar as JSON
    Sidebar {
        #[arg(long)]
        pretty: bool,
    },
    /// Print one home-page action per folder as JSON
    Home {
        #[arg(long)]
        pretty: bool,
    },
    /// Print the pages published under a route, e.g. `costs`
    Route {
        link: String,
        #[arg(long)]
        pretty: bool,
    },
    /// Show the stored settings, optionally changing the default database
    Config {
        #[arg(long, value_name = "FILE")]
        set_database: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter(self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Errors surfaced by the command line front end.
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Core(#[from] NotesiteError),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("Output error: {0}")]
    Io(#[from] io::Error),
}

impl CliError {
    fn user_message(&self) -> String {
        match self {
            Self::Core(e) => e.user_message(),
            Self::Settings(msg) => msg.clone(),
            Self::Io(e) => format!("Could not write output: {e}"),
        }
    }
}

fn adjusted_level(base: LogLevel, verbose: u8, quiet: u8) -> LevelFilter {
    let levels = [
        LevelFilter::Error,
        LevelFilter::Warn,
        LevelFilter::Info,
        LevelFilter::Debug,
        LevelFilter::Trace,
    ];

    let base_idx = levels
        .iter()
        .position(|lvl| *lvl == base.to_filter())
        .unwrap_or(1) as i8;
    let adjusted =
        (base_idx + verbose as i8 - quiet as i8).clamp(0, (levels.len() - 1) as i8) as usize;
    levels[adjusted]
}

fn init_logging(base: LogLevel, verbose: u8, quiet: u8) {
    env_logger::Builder::from_default_env()
        .format_target(false)
        .filter_level(adjusted_level(base, verbose, quiet))
        .init();
}

fn database_path(flag: Option<PathBuf>) -> PathBuf {
    flag.unwrap_or_else(|| PathBuf::from(load_settings().database_path))
}

fn write_json<T: Serialize>(out: &mut dyn Write, value: &T, pretty: bool) -> Result<(), CliError> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .map_err(NotesiteError::from)?;
    writeln!(out, "{json}")?;
    Ok(())
}

fn run(cli: Cli, out: &mut dyn Write) -> Result<(), CliError> {
    match cli.command {
        Commands::Sidebar { pretty } => {
            let mut storage = Storage::open(database_path(cli.database))?;
            let (tree, report) = build_sidebar_with_report(&storage.snapshot()?)?;
            if !report.is_clean() {
                debug!(
                    "{} row(s) and {} folder(s) left out of the sidebar",
                    report.dropped_rows.len(),
                    report.headless_folders.len()
                );
            }
            write_json(out, &tree, pretty)
        }
        Commands::Home { pretty } => {
            let storage = Storage::open(database_path(cli.database))?;
            write_json(out, &storage.home_actions()?, pretty)
        }
        Commands::Route { link, pretty } => {
            let storage = Storage::open(database_path(cli.database))?;
            write_json(out, &storage.route_pages(&link)?, pretty)
        }
        Commands::Config { set_database } => {
            let mut settings = load_settings();
            if let Some(path) = set_database {
                settings.database_path = path.to_string_lossy().to_string();
                save_settings(&settings).map_err(CliError::Settings)?;
            }
            write_json(out, &settings, true)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_level, cli.verbose, cli.quiet);

    let stdout = io::stdout();
    match run(cli, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("{}", e.user_message());
            ExitCode::FAILURE
        }
    }
}
