//! Usage: Persisted application shortcuts (apps.json read/write).

use std::path::{Path, PathBuf};

use crate::app_paths;
use crate::domain::apps::AppEntry;
use crate::shared::fs as shared_fs;

const APPS_FILE: &str = "apps.json";

pub(crate) fn apps_path(app: &tauri::AppHandle) -> Result<PathBuf, String> {
    Ok(app_paths::app_data_dir(app)?.join(APPS_FILE))
}

/// Reads the full shortcut list. A missing, unreadable or malformed file
/// degrades to an empty list — the launcher starts with "no apps" instead of
/// refusing to start.
pub(crate) fn load(app: &tauri::AppHandle) -> Vec<AppEntry> {
    match apps_path(app) {
        Ok(path) => load_from(&path),
        Err(err) => {
            tracing::warn!("cannot resolve apps.json path: {err}");
            Vec::new()
        }
    }
}

pub(crate) fn load_from(path: &Path) -> Vec<AppEntry> {
    let bytes = match shared_fs::read_optional_file(path) {
        Ok(Some(bytes)) => bytes,
        Ok(None) => return Vec::new(),
        Err(err) => {
            tracing::warn!("{err}; starting with an empty list");
            return Vec::new();
        }
    };

    match serde_json::from_slice(&bytes) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::warn!(
                path = %path.display(),
                "apps.json is not a valid shortcut list: {err}; starting with an empty list"
            );
            Vec::new()
        }
    }
}

/// Rewrites the whole list as pretty-printed JSON (non-ASCII kept verbatim).
/// Every mutation is a full rewrite; the file is the sole source of truth.
pub(crate) fn save(app: &tauri::AppHandle, entries: &[AppEntry]) -> Result<(), String> {
    save_to(&apps_path(app)?, entries)
}

pub(crate) fn save_to(path: &Path, entries: &[AppEntry]) -> Result<(), String> {
    let bytes = serde_json::to_vec_pretty(entries)
        .map_err(|e| format!("failed to serialize shortcut list: {e}"))?;
    shared_fs::write_file_atomic(path, &bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    static TMP_DIR_SEQ: AtomicUsize = AtomicUsize::new(0);

    fn unique_tmp_dir() -> PathBuf {
        let seq = TMP_DIR_SEQ.fetch_add(1, Ordering::Relaxed);
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let mut dir = std::env::temp_dir();
        dir.push(format!(
            "quick_launcher_store_test_{nanos}_{}_{}",
            std::process::id(),
            seq
        ));
        std::fs::create_dir_all(&dir).expect("create tmp dir");
        dir
    }

    fn entry(name: &str, path: &str, params: &str) -> AppEntry {
        AppEntry {
            name: name.to_string(),
            path: path.to_string(),
            params: params.to_string(),
        }
    }

    #[test]
    fn missing_file_loads_as_empty_list() {
        let dir = unique_tmp_dir();
        assert!(load_from(&dir.join("apps.json")).is_empty());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn malformed_file_loads_as_empty_list() {
        let dir = unique_tmp_dir();
        let path = dir.join("apps.json");
        std::fs::write(&path, "{not json").expect("write garbage");
        assert!(load_from(&path).is_empty());

        // Structurally wrong but valid JSON degrades the same way.
        std::fs::write(&path, r#"{"name": "solo"}"#).expect("write object");
        assert!(load_from(&path).is_empty());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = unique_tmp_dir();
        let path = dir.join("apps.json");
        let entries = vec![
            entry("Notepad", r"C:\Win\notepad.exe", ""),
            entry("Editor", "/usr/bin/vim", r#"--clean "my file.txt""#),
        ];

        save_to(&path, &entries).expect("save");
        let loaded = load_from(&path);
        assert_eq!(loaded, entries);

        // Re-saving what was loaded must not change the semantic content.
        save_to(&path, &loaded).expect("re-save");
        assert_eq!(load_from(&path), entries);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn output_is_pretty_printed_with_non_ascii_verbatim() {
        let dir = unique_tmp_dir();
        let path = dir.join("apps.json");
        save_to(&path, &[entry("Café Молоко", "/opt/café", "")]).expect("save");

        let text = std::fs::read_to_string(&path).expect("read back");
        assert!(text.contains("Café Молоко"), "non-ASCII must not be escaped");
        assert!(text.contains("\n  "), "output must be indented");
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn empty_list_round_trips() {
        let dir = unique_tmp_dir();
        let path = dir.join("apps.json");
        save_to(&path, &[]).expect("save empty");
        assert!(load_from(&path).is_empty());
        let _ = std::fs::remove_dir_all(&dir);
    }
}
