//! Server loop with bounded graceful shutdown

use std::{future::Future, time::Duration};

use axum::Router;
use tokio::{net::TcpListener, sync::oneshot};
use tracing::{info, warn};

/// How the server loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownOutcome {
    /// Every open connection finished before the deadline
    Drained,
    /// Connections were still open when the drain deadline passed
    TimedOut,
}

/// Serve `app` until `shutdown` resolves, then drain for at most `drain_timeout`
///
/// Connections still open after the deadline are dropped.
pub async fn serve<F>(
    listener: TcpListener,
    app: Router,
    shutdown: F,
    drain_timeout: Duration,
) -> std::io::Result<ShutdownOutcome>
where
    F: Future<Output = ()> + Send + 'static,
{
    let (signalled_tx, signalled_rx) = oneshot::channel::<()>();

    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.await;
            let _ = signalled_tx.send(());
        })
        .into_future();
    tokio::pin!(server);

    let deadline = async move {
        if signalled_rx.await.is_ok() {
            info!("Waiting up to {:?} for connections to close...", drain_timeout);
            tokio::time::sleep(drain_timeout).await;
        } else {
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        result = &mut server => {
            result?;
            Ok(ShutdownOutcome::Drained)
        }
        () = deadline => {
            warn!(timeout = ?drain_timeout, "Graceful shutdown timed out, closing remaining connections");
            Ok(ShutdownOutcome::TimedOut)
        }
    }
}
