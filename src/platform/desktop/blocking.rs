use std::time::Instant;

use crate::error::{AdminError, AdminResult};

/// Runs blocking backend work (HTTP, SQLite, file reads) on tokio's blocking
/// pool so the UI thread keeps rendering while it waits.
pub async fn run_blocking<F, T>(label: &'static str, f: F) -> AdminResult<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    let started = Instant::now();
    let joined = tokio::task::spawn_blocking(f).await;
    tracing::debug!(
        task = label,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "blocking task finished"
    );
    joined.map_err(|err| {
        tracing::error!(task = label, error = %err, "blocking task did not complete");
        AdminError::Task(err.to_string())
    })
}

/// [`run_blocking`] for service calls that already return an [`AdminResult`].
pub async fn run_service<F, T>(label: &'static str, f: F) -> AdminResult<T>
where
    F: FnOnce() -> AdminResult<T> + Send + 'static,
    T: Send + 'static,
{
    run_blocking(label, f).await?
}
