use serde::Serialize;
use std::{
    collections::HashSet,
    path::PathBuf,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
};
use url::Url;

use crate::{startup_mode::ShellMode, startup_script, MAIN_WINDOW_LABEL};

/// Configuration resolved once at startup; read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ShellConfig {
    pub(crate) mode: ShellMode,
    pub(crate) resource_path: PathBuf,
    pub(crate) static_path: PathBuf,
    pub(crate) app_path: PathBuf,
    pub(crate) is_development: bool,
    pub(crate) renderer_url: Url,
}

impl ShellConfig {
    pub(crate) fn startup_args(&self) -> RendererStartupArgs {
        RendererStartupArgs {
            res_path: self.resource_path.to_string_lossy().to_string(),
            static_path: self.static_path.to_string_lossy().to_string(),
            app_path: self.app_path.to_string_lossy().to_string(),
            env: self.mode.as_str().to_string(),
        }
    }
}

/// Startup argument handed to every renderer window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct RendererStartupArgs {
    #[serde(rename = "VUELECTRO_RES_PATH")]
    pub(crate) res_path: String,
    #[serde(rename = "VUELECTRO_STATIC_PATH")]
    pub(crate) static_path: String,
    #[serde(rename = "VUELECTRO_APP_PATH")]
    pub(crate) app_path: String,
    #[serde(rename = "VUELECTRO_ENV")]
    pub(crate) env: String,
}

#[derive(Debug)]
pub(crate) struct ShellState {
    pub(crate) config: ShellConfig,
    preload_script: Option<String>,
    devtools_hook: Mutex<Option<String>>,
    window_serial: AtomicUsize,
    revealed_windows: Mutex<HashSet<String>>,
}

impl ShellState {
    pub(crate) fn new(config: ShellConfig, preload_script: Option<String>) -> Self {
        Self {
            config,
            preload_script,
            devtools_hook: Mutex::new(None),
            window_serial: AtomicUsize::new(0),
            revealed_windows: Mutex::new(HashSet::new()),
        }
    }

    pub(crate) fn set_devtools_hook(&self, hook_script: String) {
        if let Ok(mut guard) = self.devtools_hook.lock() {
            *guard = Some(hook_script);
        }
    }

    pub(crate) fn next_window_label(&self) -> String {
        match self.window_serial.fetch_add(1, Ordering::AcqRel) {
            0 => MAIN_WINDOW_LABEL.to_string(),
            serial => format!("{MAIN_WINDOW_LABEL}-{serial}"),
        }
    }

    pub(crate) fn owns_window(label: &str) -> bool {
        label == MAIN_WINDOW_LABEL
            || label
                .strip_prefix(MAIN_WINDOW_LABEL)
                .and_then(|rest| rest.strip_prefix('-'))
                .is_some_and(|serial| {
                    !serial.is_empty() && serial.chars().all(|c| c.is_ascii_digit())
                })
    }

    /// Returns `true` only for the first load of a given window.
    pub(crate) fn mark_revealed(&self, label: &str) -> bool {
        match self.revealed_windows.lock() {
            Ok(mut guard) => guard.insert(label.to_string()),
            Err(_) => false,
        }
    }

    pub(crate) fn forget_window(&self, label: &str) {
        if let Ok(mut guard) = self.revealed_windows.lock() {
            guard.remove(label);
        }
    }

    pub(crate) fn initialization_script(&self) -> Result<String, String> {
        let devtools_hook = self
            .devtools_hook
            .lock()
            .map_err(|_| "Devtools hook lock poisoned.".to_string())?
            .clone();
        startup_script::build_initialization_script(
            &self.config.startup_args(),
            self.preload_script.as_deref(),
            devtools_hook.as_deref(),
        )
    }
}

#[cfg(test)]
mod tests {
    use std::env;

    use super::*;

    fn sample_config(mode: ShellMode) -> ShellConfig {
        let root = env::temp_dir().join("vuelectro-types-fixture");
        let app_path = root.join("app");
        ShellConfig {
            is_development: mode.is_development(),
            mode,
            resource_path: root.join("resources"),
            static_path: root.join("public"),
            renderer_url: Url::from_file_path(app_path.join("renderer").join("index.html"))
                .expect("absolute fixture path"),
            app_path,
        }
    }

    #[test]
    fn next_window_label_starts_with_main_then_numbers() {
        let state = ShellState::new(sample_config(ShellMode::Run), None);
        assert_eq!(state.next_window_label(), "main");
        assert_eq!(state.next_window_label(), "main-1");
        assert_eq!(state.next_window_label(), "main-2");
    }

    #[test]
    fn owns_window_accepts_only_generated_labels() {
        assert!(ShellState::owns_window("main"));
        assert!(ShellState::owns_window("main-3"));
        assert!(!ShellState::owns_window("main-"));
        assert!(!ShellState::owns_window("main-x"));
        assert!(!ShellState::owns_window("mainframe"));
        assert!(!ShellState::owns_window("settings"));
    }

    #[test]
    fn mark_revealed_fires_once_per_window_until_forgotten() {
        let state = ShellState::new(sample_config(ShellMode::Build), None);
        assert!(state.mark_revealed("main"));
        assert!(!state.mark_revealed("main"));
        assert!(state.mark_revealed("main-1"));

        state.forget_window("main");
        assert!(state.mark_revealed("main"));
    }

    #[test]
    fn startup_args_carry_paths_and_raw_mode() {
        let config = sample_config(ShellMode::Unrecognized("staging".to_string()));
        let args = config.startup_args();
        assert_eq!(args.env, "staging");
        assert_eq!(args.app_path, config.app_path.to_string_lossy());
        assert_eq!(args.res_path, config.resource_path.to_string_lossy());
        assert_eq!(args.static_path, config.static_path.to_string_lossy());
    }

    #[test]
    fn initialization_script_includes_devtools_hook_once_set() {
        let state = ShellState::new(sample_config(ShellMode::Serve), None);
        let before = state.initialization_script().expect("script");
        assert!(!before.contains("__VUE_DEVTOOLS_HOST__"));

        state.set_devtools_hook("window.__VUE_DEVTOOLS_HOST__ = 'x';".to_string());
        let after = state.initialization_script().expect("script");
        assert!(after.contains("__VUE_DEVTOOLS_HOST__"));
    }
}
