mod cli;

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands, McpCommands};
use jiggly_core::{JigglerController, StartOutcome, StopOutcome, WorkerConfig};
use jiggly_mcp::build_mcp_registry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    // Handle subcommands that need no controller first
    match &cli.command {
        Commands::Completions { shell } => {
            cli::print_completions(*shell);
            return Ok(());
        }
        Commands::ShowConfig => {
            let config = jiggly_config::load(cli.config.as_deref())?;
            println!("{}", toml::to_string(&config).unwrap_or_default());
            return Ok(());
        }
        _ => {}
    }

    let config = jiggly_config::load(cli.config.as_deref())?;
    let controller = Arc::new(JigglerController::new(worker_config(&config)));

    match cli.command {
        Commands::Mcp {
            command: McpCommands::Serve { tools },
        } => {
            let registry = Arc::new(build_mcp_registry(controller, tools.as_deref()));
            jiggly_mcp::serve_stdio(registry).await
        }
        Commands::Run { interval, offset } => run_session(controller, interval, offset).await,
        Commands::Info => {
            let snapshot = controller.snapshot().await;
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
            Ok(())
        }
        Commands::ShowConfig | Commands::Completions { .. } => unreachable!("handled above"),
    }
}

/// One-shot protected session: spawn the worker, hold until Ctrl-C, then
/// stop it (gracefully, escalating if it hangs).  Controller state is
/// process-lifetime only, so this is the whole CLI lifecycle — a worker
/// left running after this process dies would be orphaned.
async fn run_session(
    controller: Arc<JigglerController>,
    interval: Option<i64>,
    offset: Option<i64>,
) -> anyhow::Result<()> {
    let interval = interval.unwrap_or(jiggly_core::DEFAULT_INTERVAL_SECS);
    let offset = offset.unwrap_or(jiggly_core::DEFAULT_OFFSET_PX);

    match controller.start(interval, offset).await? {
        StartOutcome::Started { pid, params } => {
            println!(
                "jigglypuff started jiggling with PID {pid} \
                 (interval={}s, offset={}px); press Ctrl-C to stop",
                params.interval_secs, params.offset_px
            );
        }
        StartOutcome::AlreadyJiggling { pid } => {
            println!("jigglypuff is already jiggling with PID {pid}");
        }
    }

    tokio::signal::ctrl_c().await?;
    info!("interrupt received, stopping worker");

    match controller.stop().await? {
        StopOutcome::Stopped { pid } => {
            println!("jigglypuff with PID {pid} put to sleep");
        }
        StopOutcome::ForceStopped { pid } => {
            println!("jigglypuff with PID {pid} force put to sleep");
        }
        StopOutcome::AlreadyAsleep => {
            println!("jigglypuff was already sleeping");
        }
    }
    Ok(())
}

fn worker_config(config: &jiggly_config::Config) -> WorkerConfig {
    WorkerConfig {
        command: config.worker.command.clone(),
        args: config.worker.args.clone(),
        stop_timeout: Duration::from_secs(config.worker.stop_timeout_secs),
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
