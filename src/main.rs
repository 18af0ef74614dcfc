//! bins-analyzer - Main Entry Point
//!
//! Command line front end: analyzes BINS test logs and converts them between
//! the binary and text representations.
//!
//! # Commands
//!
//! - `bins-analyzer analyze PATH...` - Analyze files or directory trees
//! - `bins-analyzer convert --to txt PATH...` - Convert files or directory trees

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use bins_analyzer::{
    classify_path,
    config::{ensure_app_data_dir, AppConfig},
    i18n::{set_language, Language},
    report::{summary_rows, SummaryFlags},
    Notice, NoticeLevel, NoticeQueue, NoticeSink, Representation, SessionCollection, SourceKind,
};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use rust_i18n::t;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

rust_i18n::i18n!("locales", fallback = "en");

/// Decoder, converter and accuracy analyzer for BINS test logs
#[derive(Parser)]
#[command(name = "bins-analyzer")]
#[command(version, long_about = None)]
struct Cli {
    /// Interface language (en, ru)
    #[arg(long, global = true)]
    lang: Option<Language>,

    /// Use this configuration file instead of the default one
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze log files; directories are scanned recursively
    Analyze {
        /// Representation picked up in directories (dat, txt)
        #[arg(long)]
        format: Option<Representation>,

        /// Write the tab-delimited report to this file
        #[arg(long)]
        report: Option<PathBuf>,

        /// Write the summaries as JSON to this file
        #[arg(long)]
        json: Option<PathBuf>,

        #[arg(name = "PATH", required = true)]
        paths: Vec<PathBuf>,
    },

    /// Convert log files next to their sources
    Convert {
        /// Target representation (dat, txt)
        #[arg(long, default_value = "txt")]
        to: Representation,

        #[arg(name = "PATH", required = true)]
        paths: Vec<PathBuf>,
    },
}

fn init_logging() -> Option<WorkerGuard> {
    let (file_layer, guard) = match ensure_app_data_dir() {
        Ok(dir) => {
            let appender =
                tracing_appender::rolling::daily(dir.join("logs"), "bins-analyzer.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        Err(_) => (None, None),
    };

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,bins_analyzer=debug")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .init();

    guard
}

fn print_notices(queue: &mut NoticeQueue) {
    for notice in queue.drain() {
        match notice.level {
            NoticeLevel::Info => println!("{}", notice),
            NoticeLevel::Warning => println!("{}", notice.yellow()),
            NoticeLevel::Error => println!("{}", notice.red()),
        }
    }
}

fn print_collection(collection: &SessionCollection, config: &AppConfig) {
    for (_, entry) in collection.entries() {
        println!("{:-<74}", entry.name);
        let flags = SummaryFlags::evaluate(&entry.summary, &config.thresholds);
        for row in summary_rows(&entry.summary, &flags) {
            let line = row.line_with(|cell, flagged| {
                if flagged {
                    cell.red().bold().to_string()
                } else {
                    cell
                }
            });
            println!("{}", line);
        }
        println!();
    }
}

fn analyze(
    config: &mut AppConfig,
    format: Option<Representation>,
    report: Option<PathBuf>,
    json: Option<PathBuf>,
    paths: &[PathBuf],
) -> Result<ExitCode> {
    let mut collection = SessionCollection::new(format.unwrap_or(config.representation));
    let mut queue = NoticeQueue::new();

    for path in paths {
        match classify_path(path) {
            Ok(SourceKind::Directory) => {
                collection.add_all(path, &mut queue);
                config.add_recent_source(path, collection.representation());
            }
            Ok(SourceKind::File(repr)) => {
                // Failures are already in the queue
                if collection.add(path, &mut queue).is_ok() {
                    config.add_recent_source(path, repr);
                }
            }
            Err(e) => queue.append(Notice::error(e.to_string())),
        }
    }

    print_notices(&mut queue);
    print_collection(&collection, config);

    if collection.is_empty() {
        println!("{}", t!("cli.nothing_analyzed").red());
        return Ok(ExitCode::FAILURE);
    }

    if let Some(path) = report {
        let result = collection.save_report(&path, &mut queue);
        print_notices(&mut queue);
        result?;
    }
    if let Some(path) = json {
        collection
            .save_json(&path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("{}", t!("cli.json_saved", path = path.display()));
    }

    Ok(ExitCode::SUCCESS)
}

fn convert(target: Representation, paths: &[PathBuf]) -> ExitCode {
    let collection = SessionCollection::new(target.toggled());
    let mut queue = NoticeQueue::new();

    let mut converted = 0;
    for path in paths {
        match classify_path(path) {
            Ok(SourceKind::Directory) => {
                converted += collection.convert_all(path, target, &mut queue);
            }
            Ok(SourceKind::File(_)) => {
                if collection.convert(path, target, &mut queue).is_ok() {
                    converted += 1;
                }
            }
            Err(e) => queue.append(Notice::error(e.to_string())),
        }
    }
    print_notices(&mut queue);

    if converted == 0 {
        println!("{}", t!("cli.nothing_converted").red());
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => AppConfig::load_or_default(),
    };
    set_language(cli.lang.unwrap_or(config.language));

    match cli.command {
        Commands::Analyze {
            format,
            report,
            json,
            paths,
        } => {
            let code = analyze(&mut config, format, report, json, &paths)?;
            if cli.config.is_none() {
                config.cleanup_missing_sources();
                if let Err(e) = config.save() {
                    tracing::warn!("Failed to save config: {}", e);
                }
            }
            Ok(code)
        }
        Commands::Convert { to, paths } => Ok(convert(to, &paths)),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let _guard = init_logging();

    tracing::debug!("Starting bins-analyzer {}", env!("CARGO_PKG_VERSION"));

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
