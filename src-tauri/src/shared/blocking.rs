//! Usage: Run blocking work off the async runtime with a labeled error context.

/// Runs `f` on the blocking thread pool and flattens the join error into the
/// command-facing `Result<T, String>` shape, tagged with `label` so failed
/// tasks are identifiable in logs and error dialogs.
pub(crate) async fn run<T, F>(label: &'static str, f: F) -> Result<T, String>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, String> + Send + 'static,
{
    tauri::async_runtime::spawn_blocking(f)
        .await
        .map_err(|e| format!("blocking task {label} failed: {e}"))?
}
