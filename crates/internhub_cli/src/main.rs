//! Command-line front end over `internhub_core`.
//!
//! # Responsibility
//! - Open the store from a database file (or memory) and print projections.
//! - Keep output deterministic and line-oriented for scripting.

use clap::{Args, Parser, Subcommand};
use log::info;
use internhub_core::db::{open_db, open_db_in_memory};
use internhub_core::report::stats::{
    dashboard_summary, recent_activities, report_summary, upcoming_deadlines, FEED_LIMIT,
};
use internhub_core::{
    export_table, init_logging_from, DomainStore, LogConfig, SqliteKvRepository, StoreConfig,
};
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "internhub", version, about = "Internship program store")]
struct Cli {
    /// SQLite file holding the collections; in-memory when omitted.
    #[arg(long, global = true, env = "INTERNHUB_DB")]
    db: Option<PathBuf>,
    /// Absolute directory for rolling logs; logging is off when omitted.
    #[arg(long, global = true, env = "INTERNHUB_LOG_DIR")]
    log_dir: Option<PathBuf>,
    #[arg(long, global = true, env = "INTERNHUB_LOG_LEVEL", default_value = internhub_core::default_log_level())]
    log_level: String,
    /// Start with empty collections instead of sample records.
    #[arg(long, global = true)]
    no_seed: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check core linkage.
    Ping,
    /// Print dashboard counters, recent activity and upcoming deadlines.
    Summary,
    /// List report rows for a period.
    Report(ReportArgs),
    /// Write a report as CSV.
    Export {
        #[command(flatten)]
        report: ReportArgs,
        /// Output file; defaults to the suggested report file name.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Self::Ping => "ping",
            Self::Summary => "summary",
            Self::Report(_) => "report",
            Self::Export { .. } => "export",
        }
    }
}

#[derive(Debug, Args)]
struct ReportArgs {
    /// performance | task | attendance | intern
    #[arg(long = "type", default_value = "task")]
    report_type: String,
    /// week | month | quarter | all
    #[arg(long, default_value = "month")]
    period: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("internhub: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let log_config = LogConfig {
        level: cli.log_level,
        log_dir: cli.log_dir,
    };
    init_logging_from(&log_config)?;
    info!(
        "event=cli_command module=cli status=start command={}",
        cli.command.name()
    );

    if let Command::Ping = cli.command {
        println!("internhub_core ping={}", internhub_core::ping());
        println!("internhub_core version={}", internhub_core::core_version());
        return Ok(());
    }

    let config = StoreConfig {
        db_path: cli.db,
        seed_when_empty: !cli.no_seed,
    };
    let conn = match config.db_path.as_deref() {
        Some(path) => open_db(path),
        None => open_db_in_memory(),
    }
    .map_err(|err| format!("failed to open database: {err}"))?;
    let repo = SqliteKvRepository::try_new(&conn).map_err(|err| err.to_string())?;
    let store = DomainStore::open(repo, config);

    match cli.command {
        Command::Ping => {}
        Command::Summary => print_summary(&store),
        Command::Report(args) => {
            let report = store.generate_report(&args.report_type, &args.period);
            let table = export_table(&report, store.snapshot(), store.today());
            println!("{} ({})", table.title, table.subtitle);
            println!("{}", table.headers.join(" | "));
            for row in &table.rows {
                println!("{}", row.join(" | "));
            }
            println!("rows={}", report.rows.len());
        }
        Command::Export { report, out } => {
            let report = store.generate_report(&report.report_type, &report.period);
            let table = export_table(&report, store.snapshot(), store.today());
            let path = out.unwrap_or_else(|| PathBuf::from(&table.file_name));
            let file = File::create(&path)
                .map_err(|err| format!("failed to create `{}`: {err}", path.display()))?;
            table
                .write_csv(file)
                .map_err(|err| format!("failed to write `{}`: {err}", path.display()))?;
            info!(
                "event=cli_export module=cli status=ok rows={}",
                table.rows.len()
            );
            println!("wrote {} rows to {}", table.rows.len(), path.display());
        }
    }

    Ok(())
}

fn print_summary(store: &DomainStore<SqliteKvRepository<'_>>) {
    let snapshot = store.snapshot();
    let dashboard = dashboard_summary(snapshot);
    println!("active_interns={}", dashboard.active_interns);
    println!("active_tasks={}", dashboard.active_tasks);
    println!("pending_reviews={}", dashboard.pending_reviews);
    println!("top_performers={}", dashboard.top_performers);

    let totals = report_summary(snapshot);
    match totals.average_rating {
        Some(rating) => println!("average_rating={rating:.2}"),
        None => println!("average_rating=N/A"),
    }

    println!("recent:");
    for activity in recent_activities(snapshot, FEED_LIMIT) {
        println!("  {} {}", activity.date, activity.text);
    }
    println!("upcoming:");
    for deadline in upcoming_deadlines(snapshot, store.today(), FEED_LIMIT) {
        println!("  {} {}", deadline.deadline, deadline.title);
    }
}
