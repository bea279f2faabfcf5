//! Usage: Desktop resident mode (tray icon, dynamic menu, window lifecycle hooks).

use tauri::menu::{Menu, MenuItem, PredefinedMenuItem};
use tauri::tray::{MouseButton, MouseButtonState, TrayIconBuilder, TrayIconEvent};
use tauri::Manager;

use crate::app::actions::Action;
use crate::app::app_state::LauncherState;
use crate::shared::mutex_ext::MutexExt;
use crate::{apps_store, icon};

const MAIN_WINDOW_LABEL: &str = "main";
const TRAY_ID: &str = "main-tray";
const TRAY_MENU_MANAGE_ID: &str = "tray.manage";
const TRAY_MENU_QUIT_ID: &str = "tray.quit";
const TRAY_MENU_EMPTY_ID: &str = "tray.empty";
const TRAY_MENU_APP_PREFIX: &str = "app.";

pub(crate) fn setup_tray(app: &tauri::AppHandle) -> Result<(), String> {
    let icon = icon::load_or_create(app)?;
    let menu = build_menu(app)?;

    TrayIconBuilder::with_id(TRAY_ID)
        .icon(icon)
        .tooltip("Quick Launcher")
        .menu(&menu)
        .show_menu_on_left_click(false)
        .on_menu_event(|app, event| on_menu_event(app, event.id().as_ref()))
        .on_tray_icon_event(|tray, event| match event {
            TrayIconEvent::Click {
                button,
                button_state,
                ..
            } => {
                if button == MouseButton::Left && button_state == MouseButtonState::Up {
                    enqueue(tray.app_handle(), Action::ShowEditor);
                }
            }
            // Pointer reached the tray icon; refresh labels and running
            // markers before the menu can open.
            TrayIconEvent::Enter { .. } => rebuild_menu(tray.app_handle()),
            _ => {}
        })
        .build(app)
        .map_err(|e| format!("failed to build tray icon: {e}"))?;

    Ok(())
}

/// Builds the context menu from the stored entries and the live process set,
/// and snapshots the entries so menu ids can be resolved back to them.
fn build_menu(app: &tauri::AppHandle) -> Result<Menu<tauri::Wry>, String> {
    let entries = apps_store::load(app);
    let running = {
        let state = app.state::<LauncherState>();
        let mut registry = state.processes.lock_or_recover();
        registry.running_names()
    };

    let menu = Menu::new(app).map_err(|e| format!("failed to create tray menu: {e}"))?;

    if entries.is_empty() {
        let placeholder = MenuItem::with_id(
            app,
            TRAY_MENU_EMPTY_ID,
            "No applications registered",
            false,
            None::<&str>,
        )
        .map_err(|e| format!("failed to create placeholder menu item: {e}"))?;
        menu.append(&placeholder)
            .map_err(|e| format!("failed to append placeholder menu item: {e}"))?;
    } else {
        for (index, entry) in entries.iter().enumerate() {
            let label = if running.contains(&entry.name) {
                format!("{} (running)", entry.name)
            } else {
                entry.name.clone()
            };
            let item = MenuItem::with_id(
                app,
                format!("{TRAY_MENU_APP_PREFIX}{index}"),
                label,
                true,
                None::<&str>,
            )
            .map_err(|e| format!("failed to create menu item for '{}': {e}", entry.name))?;
            menu.append(&item)
                .map_err(|e| format!("failed to append menu item for '{}': {e}", entry.name))?;
        }
    }

    let separator = PredefinedMenuItem::separator(app)
        .map_err(|e| format!("failed to create menu separator: {e}"))?;
    let manage = MenuItem::with_id(
        app,
        TRAY_MENU_MANAGE_ID,
        "Manage Applications",
        true,
        None::<&str>,
    )
    .map_err(|e| format!("failed to create manage menu item: {e}"))?;
    let quit = MenuItem::with_id(app, TRAY_MENU_QUIT_ID, "Exit", true, None::<&str>)
        .map_err(|e| format!("failed to create quit menu item: {e}"))?;

    menu.append(&separator)
        .map_err(|e| format!("failed to append menu separator: {e}"))?;
    menu.append(&manage)
        .map_err(|e| format!("failed to append manage menu item: {e}"))?;
    menu.append(&quit)
        .map_err(|e| format!("failed to append quit menu item: {e}"))?;

    let state = app.state::<LauncherState>();
    *state.menu_entries.lock_or_recover() = entries;

    Ok(menu)
}

/// Replaces the tray menu with a freshly built one. Safe to call from any
/// thread; menu construction is marshalled to the main thread.
pub(crate) fn rebuild_menu(app: &tauri::AppHandle) {
    let handle = app.clone();
    let result = app.run_on_main_thread(move || {
        let Some(tray) = handle.tray_by_id(TRAY_ID) else {
            return;
        };
        match build_menu(&handle) {
            Ok(menu) => {
                if let Err(err) = tray.set_menu(Some(menu)) {
                    tracing::warn!("failed to replace tray menu: {err}");
                }
            }
            Err(err) => tracing::warn!("failed to rebuild tray menu: {err}"),
        }
    });
    if let Err(err) = result {
        tracing::warn!("failed to schedule tray menu rebuild: {err}");
    }
}

fn on_menu_event(app: &tauri::AppHandle, id: &str) {
    if id == TRAY_MENU_QUIT_ID {
        enqueue(app, Action::Exit);
        return;
    }
    if id == TRAY_MENU_MANAGE_ID {
        enqueue(app, Action::ShowEditor);
        return;
    }

    let Some(index) = id
        .strip_prefix(TRAY_MENU_APP_PREFIX)
        .and_then(|raw| raw.parse::<usize>().ok())
    else {
        return;
    };

    let entry = {
        let state = app.state::<LauncherState>();
        let entries = state.menu_entries.lock_or_recover();
        entries.get(index).cloned()
    };
    match entry {
        Some(entry) => enqueue(app, Action::Launch(entry)),
        None => tracing::warn!(index, "menu id points at a stale entry; ignoring click"),
    }
}

/// Tray callbacks only enqueue; every window or dialog call happens later on
/// the GUI side of the queue.
fn enqueue(app: &tauri::AppHandle, action: Action) {
    app.state::<LauncherState>().actions.push(action);
}

pub(crate) fn show_editor_window(app: &tauri::AppHandle) {
    let Some(window) = app.get_webview_window(MAIN_WINDOW_LABEL) else {
        tracing::warn!("editor window is missing");
        return;
    };

    let _ = window.show();
    let _ = window.unminimize();
    let _ = window.set_focus();
}

/// Closing the editor hides it; the launcher lives in the tray until "Exit".
pub(crate) fn on_window_event(window: &tauri::Window, event: &tauri::WindowEvent) {
    if window.label() != MAIN_WINDOW_LABEL {
        return;
    }

    let tauri::WindowEvent::CloseRequested { api, .. } = event else {
        return;
    };

    api.prevent_close();
    let _ = window.hide();
}
