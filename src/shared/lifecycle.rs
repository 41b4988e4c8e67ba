use std::sync::Arc;

use tokio::sync::watch;
use tracing::info;

/// Host process run state. Flipped once by [`Lifecycle::shutdown`].
#[derive(Debug, Clone)]
pub struct Lifecycle {
    tx: Arc<watch::Sender<bool>>,
}

impl Lifecycle {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(true);
        Self { tx: Arc::new(tx) }
    }

    pub fn handle(&self) -> LifecycleHandle {
        LifecycleHandle {
            rx: Some(self.tx.subscribe()),
        }
    }

    pub fn is_running(&self) -> bool {
        *self.tx.borrow()
    }

    pub fn shutdown(&self) {
        if self.tx.send_replace(false) {
            info!("shutdown requested");
        }
    }

    /// Request shutdown when the process receives Ctrl-C.
    pub fn shutdown_on_ctrl_c(&self) {
        let lifecycle = self.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                lifecycle.shutdown();
            }
        });
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}

/// Read side of a [`Lifecycle`]. A handle whose lifecycle was dropped reports
/// stopped.
#[derive(Debug, Clone)]
pub struct LifecycleHandle {
    // None: not tied to any lifecycle, always running
    rx: Option<watch::Receiver<bool>>,
}

impl LifecycleHandle {
    pub fn detached() -> Self {
        Self { rx: None }
    }

    pub fn is_running(&self) -> bool {
        match &self.rx {
            Some(rx) => *rx.borrow() && rx.has_changed().is_ok(),
            None => true,
        }
    }

    /// Resolves once shutdown has been requested.
    pub async fn stopped(&self) {
        match &self.rx {
            Some(rx) => {
                let mut rx = rx.clone();
                let _ = rx.wait_for(|running| !*running).await;
            }
            None => std::future::pending().await,
        }
    }
}

impl Default for LifecycleHandle {
    fn default() -> Self {
        Self::detached()
    }
}
