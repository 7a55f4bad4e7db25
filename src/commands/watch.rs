//! Watch command: the long-running notification process.
//!
//! Wires the liveness endpoint and the notifier together and keeps them
//! running until a shutdown signal arrives.

use crate::libs::config::Config;
use crate::libs::health;
use crate::libs::messages::Message;
use crate::libs::notifier::Notifier;
use crate::{msg_error, msg_info};
use anyhow::Result;

pub async fn cmd() -> Result<()> {
    let config = Config::from_env()?;
    msg_info!(Message::ConfigLoaded {
        zone: config.zone.to_string(),
        latitude: config.latitude,
        longitude: config.longitude,
    });

    // Independent liveness task for external supervisors; it shares no
    // state with the notifier and its failure never stops the loop.
    let port = config.health_port;
    tokio::spawn(async move {
        msg_info!(Message::HealthListening(port));
        if let Err(error) = health::serve(port).await {
            msg_error!(Message::HealthServerFailed(error.to_string()));
        }
    });

    let mut notifier = Notifier::new(config).await?;
    msg_info!(Message::WatcherStarted);

    run_with_signal_handling(&mut notifier).await
}

/// Runs the notifier with proper signal handling for graceful shutdown.
async fn run_with_signal_handling(notifier: &mut Notifier) -> Result<()> {
    // Set up a channel to handle shutdown signals
    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();

    // Spawn the signal handler in a separate task
    #[cfg(unix)]
    {
        tokio::spawn(async move {
            use tokio::signal::unix::{signal, SignalKind};

            let mut sigterm = signal(SignalKind::terminate()).expect(&Message::FailedToCreateSigtermHandler.to_string());
            let mut sigint = signal(SignalKind::interrupt()).expect(&Message::FailedToCreateSigintHandler.to_string());

            tokio::select! {
                _ = sigterm.recv() => {
                    msg_info!(Message::WatcherReceivedSigterm);
                }
                _ = sigint.recv() => {
                    msg_info!(Message::WatcherReceivedSigint);
                }
            }

            let _ = shutdown_tx.send(());
        });
    }

    #[cfg(windows)]
    {
        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    msg_info!(Message::WatcherReceivedCtrlC);
                }
                Err(e) => {
                    msg_error!(Message::WatcherCtrlCListenFailed(e.to_string()));
                }
            }

            let _ = shutdown_tx.send(());
        });
    }

    #[cfg(not(any(unix, windows)))]
    {
        // For other platforms, run without signal handling; keep the sender
        // alive so the shutdown branch never resolves.
        crate::msg_warning!(Message::WatcherSignalHandlingNotSupported);
        std::mem::forget(shutdown_tx);
    }

    // Run until the loop dies (it should not) or a shutdown signal arrives
    tokio::select! {
        result = notifier.run() => result,
        _ = shutdown_rx => {
            msg_info!(Message::WatcherShuttingDown);
            Ok(())
        }
    }
}
