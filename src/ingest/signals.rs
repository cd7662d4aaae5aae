//! OS signal handling for ingest shutdown

use tracer_core::prelude::*;

/// Resolves once SIGINT or SIGTERM arrives.
///
/// If the handlers cannot be installed the error is logged and the future
/// never resolves, so ingest simply runs to end of input.
pub async fn shutdown_signal() {
    if let Err(e) = wait_for_signal().await {
        error!("Signal handler error: {}", e);
        std::future::pending::<()>().await;
    }
}

async fn wait_for_signal() -> Result<()> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigint = signal(SignalKind::interrupt())
            .map_err(|e| Error::terminal(format!("Failed to create SIGINT handler: {}", e)))?;
        let mut sigterm = signal(SignalKind::terminate())
            .map_err(|e| Error::terminal(format!("Failed to create SIGTERM handler: {}", e)))?;

        tokio::select! {
            _ = sigint.recv() => info!("Received SIGINT"),
            _ = sigterm.recv() => info!("Received SIGTERM"),
        }
        Ok(())
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c()
            .await
            .map_err(|e| Error::terminal(format!("Failed to listen for Ctrl+C: {}", e)))?;
        info!("Received Ctrl+C");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_shutdown_signal_waits_without_a_signal() {
        let waited = tokio::time::timeout(Duration::from_millis(20), shutdown_signal()).await;
        assert!(waited.is_err());
    }
}
