//! Usage: Application shortcut records (the launcher's persisted data model).

use serde::{Deserialize, Serialize};
use std::path::Path;

/// One user-configured launchable application. Stored as an ordered JSON
/// array; `name` keys the process registry but is not required to be unique
/// across entries (behavior under duplicate names is undefined: the running
/// indicator applies to every entry sharing the name).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct AppEntry {
    pub(crate) name: String,
    pub(crate) path: String,
    #[serde(default)]
    pub(crate) params: String,
}

/// Default display name for a freshly picked executable: the file name
/// without its extension, falling back to the raw path when there is none.
pub(crate) fn derive_name(path: &str) -> String {
    Path::new(path)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| path.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_name_strips_directory_and_extension() {
        assert_eq!(derive_name("/usr/bin/blender.bin"), "blender");
        assert_eq!(derive_name("gimp"), "gimp");
    }

    #[cfg(windows)]
    #[test]
    fn derive_name_handles_windows_paths() {
        assert_eq!(derive_name(r"C:\Win\notepad.exe"), "notepad");
    }

    #[test]
    fn derive_name_falls_back_to_raw_path() {
        assert_eq!(derive_name(""), "");
        assert_eq!(derive_name("/opt/tools/"), "tools");
    }

    #[test]
    fn params_field_is_optional_in_json() {
        let entry: AppEntry =
            serde_json::from_str(r#"{"name": "Notepad", "path": "C:\\Win\\notepad.exe"}"#)
                .expect("deserialize without params");
        assert_eq!(entry.params, "");
    }
}
