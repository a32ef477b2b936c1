use clap::Parser;
use dnsmon_domain::CliOverrides;
use std::process::ExitCode;
use tracing::info;

mod bootstrap;
mod di;
mod runner;

#[derive(Parser)]
#[command(name = "dnsmon")]
#[command(version)]
#[command(about = "dnsmon - DNS health probes for resolvers and authoritative servers")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Print results as JSON lines instead of text
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting dnsmon v{}", env!("CARGO_PKG_VERSION"));

    let checks = di::Checks::new(&config)?;
    let reports = runner::run_all(&checks.checkers).await;

    for report in &reports {
        if cli.json {
            println!("{}", serde_json::to_string(report)?);
        } else {
            println!("{}", report.render_line());
        }
    }

    let failed = reports.iter().filter(|r| !r.healthy).count();
    info!(total = reports.len(), failed, "Checks finished");

    if failed > 0 {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
