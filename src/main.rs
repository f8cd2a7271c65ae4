use anyhow::Context;
use clap::Parser;
use flowlab::cli::Cli;
use flowlab::config::Config;
use flowlab::flow::COUNTDOWN_START;
use flowlab::logging::{init_tracing, LogSink};
use flowlab::view_model::FlowViewModel;
use std::time::Duration;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading configuration")?;
    cli.apply(&mut config);

    let sink = if cli.headless {
        LogSink::Stderr
    } else {
        LogSink::File(config.logging.file_path())
    };
    init_tracing(&config.logging, &sink).context("initialising logging")?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("starting tokio runtime")?;

    if cli.headless {
        return runtime.block_on(run_headless(&config));
    }

    // Subscriptions made from the UI thread spawn onto this runtime
    let _entered = runtime.enter();
    let view_model = FlowViewModel::new(&config.timing)?;
    flowlab::ui::runtime::run(view_model, &config.ui).context("running terminal UI")?;
    Ok(())
}

/// Let the internal collectors finish one full countdown, then clear the view
/// model.
async fn run_headless(config: &Config) -> anyhow::Result<()> {
    let view_model = FlowViewModel::new(&config.timing)?;
    let run_time = config.timing.countdown_interval() * COUNTDOWN_START
        + config.timing.latest_report_delay()
        + Duration::from_millis(100);
    tracing::info!(?run_time, "running collectors headless");
    tokio::time::sleep(run_time).await;

    let reports = view_model.reports();
    tracing::info!(reports = reports.len(), "collectors finished");
    drop(view_model);
    Ok(())
}
