//! Task based runtime: async tasks, mailboxes and timers.

mod tokio;

use crate::tracing::init_tracing;
use std::future::Future;

pub use crate::tasks::tokio::mpsc;
pub use crate::tasks::tokio::oneshot;
pub use crate::tasks::tokio::CancellationToken;
pub use crate::tasks::tokio::{select, sleep, timeout};
pub use crate::tasks::tokio::{spawn, JoinHandle, Runtime};

pub fn run<F: Future>(future: F) -> F::Output {
    init_tracing();

    let rt = Runtime::new().unwrap();
    rt.block_on(future)
}

/// Parks the calling task until the process receives Ctrl+C.
///
/// Actors keep running on the runtime while the caller sleeps, nothing spins.
pub async fn wait_for_shutdown() {
    if let Err(error) = ::tokio::signal::ctrl_c().await {
        ::tracing::error!(%error, "Unable to listen for Ctrl+C, parking forever");
        std::future::pending::<()>().await;
    }
}
