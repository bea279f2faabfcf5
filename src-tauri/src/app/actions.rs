//! Usage: Cross-thread action queue between tray callbacks and the GUI thread.
//!
//! Tray menu and icon events may fire on a non-main thread depending on the
//! platform; window calls must stay on the main thread. Producers enqueue
//! `Action`s from anywhere, and a periodic drain task delivers each batch in
//! arrival order: window-touching actions hop to the main thread, error
//! dialogs are shown modally off it so the batch stalls until the user
//! dismisses them (an `Exit` queued behind an error waits for the dialog).

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use tauri::Manager;
use tauri_plugin_dialog::{DialogExt, MessageDialogKind};

use crate::app::app_state::LauncherState;
use crate::app::resident;
use crate::domain::apps::AppEntry;
use crate::domain::processes::LaunchError;
use crate::shared::mutex_ext::MutexExt;

pub(crate) const DRAIN_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone)]
pub(crate) enum Action {
    /// Launch the carried entry. The copy is captured at menu-build time so
    /// the handler never dereferences mutable shared state.
    Launch(AppEntry),
    ShowEditor,
    ShowError { title: String, message: String },
    Exit,
}

/// Unbounded multi-producer FIFO with a single draining consumer. Pushes
/// never block on capacity; ordering is global across all producers.
#[derive(Default)]
pub(crate) struct ActionQueue {
    queue: Mutex<VecDeque<Action>>,
    shutdown: AtomicBool,
}

impl ActionQueue {
    pub(crate) fn push(&self, action: Action) {
        self.queue.lock_or_recover().push_back(action);
    }

    pub(crate) fn begin_shutdown(&self) {
        self.shutdown.store(true, Ordering::SeqCst);
    }

    pub(crate) fn is_shut_down(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst)
    }

    /// Removes everything currently queued, in arrival order. The batch is
    /// truncated after the first `Exit` and the queue shuts down: actions
    /// behind an `Exit` are never delivered (the process is terminating).
    pub(crate) fn take_batch(&self) -> Vec<Action> {
        if self.is_shut_down() {
            return Vec::new();
        }

        let mut batch: Vec<Action> = self.queue.lock_or_recover().drain(..).collect();
        if let Some(pos) = batch.iter().position(|a| matches!(a, Action::Exit)) {
            batch.truncate(pos + 1);
            self.begin_shutdown();
        }
        batch
    }
}

/// Polls the queue every `DRAIN_INTERVAL` and delivers each batch in order.
/// The loop stops rescheduling once the queue has shut down (after `Exit`,
/// or when the host run loop is tearing down).
pub(crate) fn spawn_drain_loop(app: tauri::AppHandle) {
    let queue = app.state::<LauncherState>().actions.clone();

    tauri::async_runtime::spawn(async move {
        loop {
            for action in queue.take_batch() {
                match action {
                    Action::ShowError { title, message } => {
                        show_error_dialog(&app, title, message).await;
                    }
                    Action::Launch(entry) => {
                        run_on_gui(&app, move |handle| launch_entry(handle, &entry));
                    }
                    Action::ShowEditor => {
                        run_on_gui(&app, |handle| resident::show_editor_window(handle));
                    }
                    Action::Exit => {
                        tracing::info!("exit requested");
                        run_on_gui(&app, |handle| handle.exit(0));
                    }
                }
            }

            if queue.is_shut_down() {
                break;
            }
            tokio::time::sleep(DRAIN_INTERVAL).await;
        }
        tracing::debug!("action drain loop stopped");
    });
}

fn run_on_gui(
    app: &tauri::AppHandle,
    f: impl FnOnce(&tauri::AppHandle) + Send + 'static,
) {
    let handle = app.clone();
    if let Err(err) = app.run_on_main_thread(move || f(&handle)) {
        tracing::error!("failed to dispatch queued action: {err}");
    }
}

fn launch_entry(app: &tauri::AppHandle, entry: &AppEntry) {
    let outcome = {
        let state = app.state::<LauncherState>();
        let mut registry = state.processes.lock_or_recover();
        registry.launch(entry)
    };

    match outcome {
        Ok(_) => resident::rebuild_menu(app),
        Err(err) => {
            let (title, message) = match &err {
                LaunchError::ExecutableNotFound { .. } => (
                    "File not found",
                    format!("{err}\n\nCheck the configured path in Manage Applications."),
                ),
                LaunchError::LaunchFailed { .. } => ("Launch failed", err.to_string()),
            };
            app.state::<LauncherState>().actions.push(Action::ShowError {
                title: title.to_string(),
                message,
            });
        }
    }
}

/// Modal error dialog, shown off the main thread so the window system keeps
/// pumping while the drain task waits for dismissal.
async fn show_error_dialog(app: &tauri::AppHandle, title: String, message: String) {
    tracing::error!(%title, "{message}");

    let handle = app.clone();
    let shown = tauri::async_runtime::spawn_blocking(move || {
        handle
            .dialog()
            .message(message)
            .title(title)
            .kind(MessageDialogKind::Error)
            .blocking_show();
    })
    .await;

    if let Err(err) = shown {
        tracing::error!("error dialog task failed: {err}");
    }
}
