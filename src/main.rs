use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use log::{error, info};
use sentry::ClientInitGuard;
use tokio::runtime::Builder;
use tokio_shutdown::Shutdown;
use torrust_ledger::common::common::setup_logging;
use torrust_ledger::config::structs::configuration::Configuration;
use torrust_ledger::processor::structs::announce_processor::AnnounceProcessor;
use torrust_ledger::stats::structs::stats_atomics::StatsAtomics;
use torrust_ledger::structs::Cli;
use torrust_ledger::worker::structs::announce_worker::AnnounceWorker;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    if let Err(e) = setup_logging(&config) {
        eprintln!("{e}");
        exit(101);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    #[warn(unused_variables)]
    let _sentry_guard: ClientInitGuard;
    if config.sentry_config.enabled {
        _sentry_guard = sentry::init((config.sentry_config.dsn.clone(), sentry::ClientOptions {
            release: sentry::release_name!(),
            debug: config.sentry_config.debug,
            sample_rate: config.sentry_config.sample_rate,
            max_breadcrumbs: config.sentry_config.max_breadcrumbs,
            attach_stacktrace: config.sentry_config.attach_stacktrace,
            send_default_pii: config.sentry_config.send_default_pii,
            traces_sample_rate: config.sentry_config.traces_sample_rate,
            ..Default::default()
        }));
    }

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let stats = Arc::new(StatsAtomics::new());

            let processor = match AnnounceProcessor::from_config(&config, args.create_database, stats.clone()).await {
                Ok(processor) => processor,
                Err(e) => {
                    error!("[BOOT] Unable to start the announce processor: {e}");
                    sentry::capture_error(&e);
                    exit(1);
                }
            };

            let cleanup_processor = processor.clone();
            let worker = match AnnounceWorker::from_config(&config, processor).await {
                Ok(worker) => worker,
                Err(e) => {
                    error!("[BOOT] Unable to connect to the job queue: {e}");
                    sentry::capture_error(&e);
                    exit(1);
                }
            };

            let tokio_shutdown = match Shutdown::new() {
                Ok(shutdown) => shutdown,
                Err(e) => {
                    error!("[BOOT] Unable to install the shutdown handler: {e:?}");
                    exit(1);
                }
            };

            let stats_handler = tokio_shutdown.clone();
            let console_interval = config.log_console_interval.max(1);
            info!("[BOOT] Starting thread for console updates with {console_interval} seconds delay...");
            tokio::spawn(async move {
                let mut interval = tokio::time::interval(Duration::from_secs(console_interval));
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            let stats = stats.get_stats();
                            info!(
                                "[STATS] Processed: {} - Malformed: {} - Contended: {} - Users: {} - Torrents: {}",
                                stats.announces_processed, stats.announces_malformed, stats.announces_contended,
                                stats.users_updated, stats.torrents_updated
                            );
                            info!(
                                "[STATS QUEUE] Peers: {} - History: {} - Emission failures: {} - Requeued: {} - Dropped: {}",
                                stats.peer_records, stats.history_records, stats.emission_failures,
                                stats.jobs_requeued, stats.jobs_dropped
                            );
                        }
                        _ = stats_handler.handle() => {
                            info!("[BOOT] Shutting down thread for console updates...");
                            return;
                        }
                    }
                }
            });

            let cleanup_handler = tokio_shutdown.clone();
            let cleanup_interval = config.announce.connectable_check_interval.min(config.announce.lease_ttl).max(1);
            info!("[BOOT] Starting thread for lease and connectable cleanup with {cleanup_interval} seconds delay...");
            tokio::spawn(async move {
                let mut interval = tokio::time::interval(Duration::from_secs(cleanup_interval));
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            cleanup_processor.prune_expired();
                        }
                        _ = cleanup_handler.handle() => {
                            info!("[BOOT] Shutting down thread for cleanup...");
                            return;
                        }
                    }
                }
            });

            let worker_handler = tokio_shutdown.clone();
            worker.run(async move { worker_handler.handle().await; }).await;

            info!("Shutdown complete");
            Ok(())
        })
}
