use tokio::signal;
use tracing::warn;

// 等待 Ctrl+C 或（Unix 上）SIGTERM，容器环境下由编排器发送后者
pub async fn listen_for_shutdown() {
    #[cfg(unix)]
    {
        let mut sigterm = signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to listen for SIGTERM");
        tokio::select! {
            _ = signal::ctrl_c() => {}
            _ = sigterm.recv() => {}
        }
    }

    #[cfg(not(unix))]
    {
        signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");
    }

    warn!("Shutdown signal received, initiating graceful shutdown...");
}
