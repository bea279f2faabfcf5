//! Usage: Editor window Tauri commands (list / add / update / delete shortcuts).
//!
//! Every mutation is save-then-reload: the refreshed list returned to the
//! editor is what the file actually contains, and the tray menu is rebuilt
//! before the command resolves.

use crate::app::resident;
use crate::domain::apps::{self, AppEntry};
use crate::{apps_store, blocking};

#[tauri::command]
pub(crate) async fn apps_list(app: tauri::AppHandle) -> Result<Vec<AppEntry>, String> {
    blocking::run("apps_list", move || Ok(apps_store::load(&app))).await
}

#[tauri::command]
pub(crate) async fn app_add(
    app: tauri::AppHandle,
    name: String,
    path: String,
    params: String,
) -> Result<Vec<AppEntry>, String> {
    let refreshed = blocking::run("app_add", {
        let app = app.clone();
        move || {
            let path = path.trim().to_string();
            if path.is_empty() {
                return Err("path must not be empty".to_string());
            }
            // An empty name means "derive from the picked file".
            let name = match name.trim() {
                "" => apps::derive_name(&path),
                trimmed => trimmed.to_string(),
            };

            let mut entries = apps_store::load(&app);
            entries.push(AppEntry {
                name,
                path,
                params: params.trim().to_string(),
            });
            apps_store::save(&app, &entries)?;
            Ok(apps_store::load(&app))
        }
    })
    .await?;

    resident::rebuild_menu(&app);
    Ok(refreshed)
}

#[tauri::command]
pub(crate) async fn app_update(
    app: tauri::AppHandle,
    index: usize,
    name: String,
    path: String,
    params: String,
) -> Result<Vec<AppEntry>, String> {
    let refreshed = blocking::run("app_update", {
        let app = app.clone();
        move || {
            let name = name.trim().to_string();
            let path = path.trim().to_string();
            if name.is_empty() || path.is_empty() {
                return Err("name and path must not be empty".to_string());
            }

            let mut entries = apps_store::load(&app);
            let Some(entry) = entries.get_mut(index) else {
                return Err("the selected application no longer exists".to_string());
            };
            *entry = AppEntry {
                name,
                path,
                params: params.trim().to_string(),
            };
            apps_store::save(&app, &entries)?;
            Ok(apps_store::load(&app))
        }
    })
    .await?;

    resident::rebuild_menu(&app);
    Ok(refreshed)
}

#[tauri::command]
pub(crate) async fn app_delete(
    app: tauri::AppHandle,
    index: usize,
) -> Result<Vec<AppEntry>, String> {
    let refreshed = blocking::run("app_delete", {
        let app = app.clone();
        move || {
            let mut entries = apps_store::load(&app);
            if index >= entries.len() {
                return Err("the selected application no longer exists".to_string());
            }
            entries.remove(index);
            apps_store::save(&app, &entries)?;
            Ok(apps_store::load(&app))
        }
    })
    .await?;

    resident::rebuild_menu(&app);
    Ok(refreshed)
}
