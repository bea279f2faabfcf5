//! Usage: Application layer (Tauri-managed state, action queue, tray/window lifecycle).

pub(crate) mod actions;
pub(crate) mod app_state;
pub(crate) mod logging;
pub(crate) mod resident;
