mod app;
mod commands;
mod domain;
mod infra;
mod shared;

pub(crate) use app::{actions, resident};
pub(crate) use infra::{app_paths, apps_store, icon};
pub(crate) use shared::blocking;

use app::app_state::LauncherState;
use commands::*;
use tauri::Manager;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let builder = tauri::Builder::default()
        .manage(LauncherState::default())
        .plugin(tauri_plugin_dialog::init());

    #[cfg(desktop)]
    let builder = builder.plugin(tauri_plugin_single_instance::init(|app, _argv, _cwd| {
        resident::show_editor_window(app);
    }));

    let app = builder
        .on_window_event(resident::on_window_event)
        .setup(|app| {
            crate::app::logging::init(app.handle());

            #[cfg(desktop)]
            if let Err(err) = resident::setup_tray(app.handle()) {
                // A tray launcher without a tray is useless: tell the user,
                // then shut down through the queue like any other action.
                tracing::error!("tray initialization failed: {err}");
                let state = app.state::<LauncherState>();
                state.actions.push(actions::Action::ShowError {
                    title: "Critical error".to_string(),
                    message: format!("The tray icon could not be created:\n{err}"),
                });
                state.actions.push(actions::Action::Exit);
            }

            actions::spawn_drain_loop(app.handle().clone());

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            apps_list,
            app_add,
            app_update,
            app_delete
        ])
        .build(tauri::generate_context!())
        .expect("error while building tauri application");

    app.run(|app_handle, event| {
        if let tauri::RunEvent::ExitRequested { .. } = &event {
            // Launched children stay alive; the launcher never owns their
            // termination. Only the drain loop needs to stop rescheduling.
            app_handle
                .state::<LauncherState>()
                .actions
                .begin_shutdown();
            tracing::info!("exit requested; action queue shut down");
        }
    });
}
