//! Usage: Child process registry (spawning + liveness bookkeeping per app name).

use std::collections::{HashMap, HashSet};
use std::process::{Child, Command};

use thiserror::Error;

use crate::domain::apps::AppEntry;
use crate::shared::argv;

#[derive(Error, Debug)]
pub(crate) enum LaunchError {
    #[error("executable not found: {path}")]
    ExecutableNotFound { path: String },
    #[error("failed to launch '{name}': {detail}")]
    LaunchFailed { name: String, detail: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LaunchOutcome {
    Started,
    AlreadyRunning,
}

/// At most one live child per app name. The registry only detects exits, it
/// never terminates children; launched applications outlive the launcher.
#[derive(Default)]
pub(crate) struct ProcessRegistry {
    children: HashMap<String, Child>,
}

impl ProcessRegistry {
    /// Returns whether a live child is registered under `name`. A handle
    /// whose process has exited is evicted as a side effect, so the registry
    /// may shrink on every call.
    pub(crate) fn is_running(&mut self, name: &str) -> bool {
        let Some(child) = self.children.get_mut(name) else {
            return false;
        };

        match child.try_wait() {
            Ok(None) => true,
            Ok(Some(status)) => {
                tracing::debug!(name, %status, "child exited; evicting handle");
                self.children.remove(name);
                false
            }
            Err(err) => {
                tracing::warn!(name, "failed to poll child: {err}; evicting handle");
                self.children.remove(name);
                false
            }
        }
    }

    /// Sweeps every handle and returns the names still alive.
    pub(crate) fn running_names(&mut self) -> HashSet<String> {
        let names: Vec<String> = self.children.keys().cloned().collect();
        names
            .into_iter()
            .filter(|name| self.is_running(name))
            .collect()
    }

    /// Spawns `entry.path` with its tokenized parameters as a discrete
    /// argument vector (no shell involved). Launching an entry that is
    /// already running is a successful no-op.
    pub(crate) fn launch(&mut self, entry: &AppEntry) -> Result<LaunchOutcome, LaunchError> {
        if self.is_running(&entry.name) {
            tracing::info!(name = %entry.name, "already running; launch is a no-op");
            return Ok(LaunchOutcome::AlreadyRunning);
        }

        let args = argv::split(&entry.params);
        tracing::info!(name = %entry.name, path = %entry.path, ?args, "spawning");

        match Command::new(&entry.path).args(&args).spawn() {
            Ok(child) => {
                self.children.insert(entry.name.clone(), child);
                Ok(LaunchOutcome::Started)
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Err(LaunchError::ExecutableNotFound {
                    path: entry.path.clone(),
                })
            }
            Err(err) => Err(LaunchError::LaunchFailed {
                name: entry.name.clone(),
                detail: err.to_string(),
            }),
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, path: &str, params: &str) -> AppEntry {
        AppEntry {
            name: name.to_string(),
            path: path.to_string(),
            params: params.to_string(),
        }
    }

    #[test]
    fn launch_missing_executable_reports_not_found_and_registers_nothing() {
        let mut registry = ProcessRegistry::default();
        let err = registry
            .launch(&entry("ghost", "/nonexistent/bin", ""))
            .expect_err("spawn must fail");
        assert!(matches!(err, LaunchError::ExecutableNotFound { ref path } if path == "/nonexistent/bin"));
        assert!(registry.running_names().is_empty());
        assert!(!registry.is_running("ghost"));
    }

    #[cfg(unix)]
    #[test]
    fn launch_is_idempotent_while_running() {
        let mut registry = ProcessRegistry::default();
        let app = entry("sleeper", "/bin/sleep", "30");

        assert_eq!(
            registry.launch(&app).expect("first launch"),
            LaunchOutcome::Started
        );
        assert_eq!(
            registry.launch(&app).expect("second launch"),
            LaunchOutcome::AlreadyRunning
        );
        assert_eq!(registry.running_names().len(), 1);
        assert!(registry.is_running("sleeper"));
    }

    #[cfg(unix)]
    #[test]
    fn exited_child_is_evicted_on_next_poll() {
        let mut registry = ProcessRegistry::default();
        let app = entry("short", "/bin/sh", "-c true");

        assert_eq!(
            registry.launch(&app).expect("launch"),
            LaunchOutcome::Started
        );

        let mut still_running = true;
        for _ in 0..100 {
            still_running = registry.is_running("short");
            if !still_running {
                break;
            }
            std::thread::sleep(std::time::Duration::from_millis(50));
        }

        assert!(!still_running, "child should have exited and been evicted");
        assert!(registry.running_names().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn params_reach_the_child_as_discrete_arguments() {
        let mut registry = ProcessRegistry::default();
        // `sh -c "exit 0"`: the quoted body must arrive as one argument.
        let app = entry("quoted", "/bin/sh", r#"-c "exit 0""#);
        assert_eq!(
            registry.launch(&app).expect("launch"),
            LaunchOutcome::Started
        );
    }
}
