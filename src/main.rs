use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

pub mod app;
use app::App;
pub mod config;
use config::app_config::{load_config, setup_resolver};
use config::probe_config::{ProbeConfig, ProbeOverrides};
pub mod error;
pub mod http_probe;
use http_probe::prelude::*;
pub mod report;
pub mod resolver;
use resolver::DnsResolver;
pub mod targets;
use targets::read_targets_file;
pub mod ui;
use ui::{GOODBYE, console::Console};

#[derive(Parser)]
#[command(name = "webcheck")]
#[command(about = "Check reachability and response times of websites and write a report")]
#[command(version)]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(short, long, env = "CONFIG_FILE", global = true)]
    config: Option<PathBuf>,

    #[command(flatten)]
    overrides: ProbeOverrides,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Check websites once without the menu
    Check {
        /// Websites to check; the configured defaults are used when none are given
        targets: Vec<String>,

        /// File with one website per line
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Print the results without writing a report file
        #[arg(long)]
        no_report: bool,
    },
    /// Show tool information
    Info,
}

/// Command line targets followed by the file's. The defaults apply only when neither
/// targets nor a file were given; a file without targets yields nothing.
fn collect_targets(
    mut targets: Vec<String>,
    file: Option<&Path>,
    defaults: &[String],
) -> Result<Vec<String>, error::InputError> {
    match file {
        Some(file) => targets.extend(read_targets_file(file)?),
        None if targets.is_empty() => targets = defaults.to_vec(),
        None => {}
    }
    Ok(targets)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if let Some(Command::Info) = cli.command {
        ui::print_info();
        return Ok(());
    }

    let mut config = load_config(cli.config.as_deref())?;
    config.probe.apply(&cli.overrides);

    let prober = Prober::new(config.probe.timeout(), &config.probe.user_agent)?;
    let runner = BatchRunner::new(prober)
        .with_delay(config.probe.delay())
        .with_concurrency(config.probe.concurrency);
    let resolver = DnsResolver::new(setup_resolver(&config.dns_hosts)?);

    // Dropping the run on Ctrl-C abandons in-flight probes before any report is written.
    tokio::select! {
        result = run(cli.command, config.probe, runner, resolver) => result,
        _ = tokio::signal::ctrl_c() => {
            println!("\n\n{GOODBYE}");
            Ok(())
        }
    }
}

async fn run(
    command: Option<Command>,
    probe: ProbeConfig,
    runner: BatchRunner,
    resolver: DnsResolver,
) -> anyhow::Result<()> {
    match command {
        Some(Command::Check {
            targets,
            file,
            no_report,
        }) => {
            let targets = collect_targets(targets, file.as_deref(), &probe.default_targets)?;
            if let Some(file) = file.filter(|_| targets.is_empty()) {
                println!("❌ No websites found in {}", file.display());
                return Ok(());
            }
            let app = App::new(probe, runner, resolver);
            app.check_once(&targets, !no_report).await
        }
        _ => {
            let app = App::new(probe, runner, resolver);
            let mut console = Console::stdin();
            app.interactive(&mut console).await
        }
    }
}
