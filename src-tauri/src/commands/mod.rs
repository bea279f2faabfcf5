//! Usage: Tauri command surface for the editor webview.

mod apps;

pub(crate) use apps::*;
