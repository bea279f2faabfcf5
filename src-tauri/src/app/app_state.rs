//! Usage: Tauri-managed launcher state (action queue, process registry, menu snapshot).

use std::sync::{Arc, Mutex};

use crate::app::actions::ActionQueue;
use crate::domain::apps::AppEntry;
use crate::domain::processes::ProcessRegistry;

#[derive(Default)]
pub(crate) struct LauncherState {
    pub(crate) actions: Arc<ActionQueue>,
    pub(crate) processes: Mutex<ProcessRegistry>,
    /// Entries as rendered into the current tray menu; `app.<index>` menu
    /// ids resolve against this snapshot, so a click always launches the
    /// entry the user actually saw.
    pub(crate) menu_entries: Mutex<Vec<AppEntry>>,
}
