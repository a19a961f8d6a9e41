use std::path::{Path, PathBuf};

use tauri::{AppHandle, Manager};

use crate::{startup_mode::ShellMode, RENDERER_DIR_NAME};

const APP_DIR_NAME: &str = "app";
const RESOURCES_DIR_NAME: &str = "resources";
const PUBLIC_DIR_NAME: &str = "public";

/// Installation directories provided by the host runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct InstallDirs {
    pub(crate) resource_dir: PathBuf,
    pub(crate) app_dir: PathBuf,
}

impl InstallDirs {
    pub(crate) fn from_resource_dir(resource_dir: PathBuf) -> Self {
        let app_dir = resource_dir.join(APP_DIR_NAME);
        Self {
            resource_dir,
            app_dir,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RuntimePaths {
    pub(crate) resource_path: PathBuf,
    pub(crate) static_path: PathBuf,
    pub(crate) app_path: PathBuf,
}

pub(crate) fn working_dir_paths(cwd: &Path) -> RuntimePaths {
    RuntimePaths {
        resource_path: cwd.join(RESOURCES_DIR_NAME),
        static_path: cwd.join(PUBLIC_DIR_NAME),
        app_path: cwd.join(APP_DIR_NAME),
    }
}

pub(crate) fn install_paths(install_dirs: &InstallDirs) -> RuntimePaths {
    RuntimePaths {
        resource_path: install_dirs.resource_dir.clone(),
        static_path: install_dirs.app_dir.join(RENDERER_DIR_NAME),
        app_path: install_dirs.app_dir.clone(),
    }
}

/// Install directories are only looked up for modes that need them.
pub(crate) fn resolve_runtime_paths<F>(
    mode: &ShellMode,
    cwd: &Path,
    install_dirs: F,
) -> Result<RuntimePaths, String>
where
    F: FnOnce() -> Result<InstallDirs, String>,
{
    if mode.uses_install_dirs() {
        return install_dirs().map(|dirs| install_paths(&dirs));
    }

    Ok(working_dir_paths(cwd))
}

pub(crate) fn resolve_install_dirs(app_handle: &AppHandle) -> Result<InstallDirs, String> {
    app_handle
        .path()
        .resource_dir()
        .map(InstallDirs::from_resource_dir)
        .map_err(|error| format!("Failed to resolve installation resource directory: {error}"))
}

pub(crate) fn default_packaged_root_dir() -> Option<PathBuf> {
    home::home_dir().map(|home| home.join(".vuelectro"))
}
