#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use anyhow::Result;
use clap::Parser;
use hostwatch::collector::{MetricsSource, SysinfoCollector};
use hostwatch::logging::LogTarget;
use hostwatch::scheduler::SchedulerConfig;
use hostwatch::*;
use std::sync::Arc;

fn main() -> Result<()> {
    let runtime = scheduler::build_runtime()?;
    let result = runtime.block_on(run());
    // In-flight samples are abandoned, not joined.
    scheduler::shutdown_runtime(runtime);
    result
}

async fn run() -> Result<()> {
    let args = cli::Args::parse();
    let app_config = config::AppConfig::load(args.config.as_deref())?;
    let settings = args.resolve(&app_config);

    let log_target = LogTarget::choose(settings.log_file.as_deref(), settings.once);
    logging::init(&log_target, settings.log_level.as_deref(), settings.debug)?;
    tracing::info!(
        version = version::VERSION,
        interval_us = settings.interval.as_micros() as u64,
        once = settings.once,
        "Starting {}",
        version::NAME
    );

    let source: Arc<dyn MetricsSource> =
        Arc::new(tokio::task::spawn_blocking(SysinfoCollector::new).await?);

    if settings.once {
        let report = report::collect(source, settings.interval, settings.sample_timeout).await;
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let options = tui::TuiOptions {
        mouse: settings.mouse,
        alt_screen: settings.alt_screen,
        cpu_history_len: settings.cpu_history_len,
        scheduler: SchedulerConfig {
            interval: settings.interval,
            sample_timeout: settings.sample_timeout,
            stats_log_interval_secs: settings.stats_log_interval_secs,
        },
    };
    if let Err(e) = tui::run(source, options).await {
        tracing::error!(error = %e, "Dashboard exited with an error");
        return Err(e);
    }
    tracing::info!("Shut down cleanly");
    Ok(())
}
