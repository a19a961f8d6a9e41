use std::{env, path::Path};

use tauri::AppHandle;
use url::Url;

use crate::{
    runtime_paths::{self, InstallDirs},
    startup_mode::ShellMode,
    ShellConfig, DEFAULT_DEV_SERVER_URL, DEV_SERVER_URL_ENV, RENDERER_DIR_NAME,
    RENDERER_ENTRY_FILE,
};

pub(crate) fn normalize_dev_server_url(raw: &str, default_url: &Url) -> Url {
    let fallback = || default_url.clone();
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return fallback();
    }

    match Url::parse(trimmed) {
        Ok(mut parsed) if matches!(parsed.scheme(), "http" | "https") => {
            if parsed.path().is_empty() {
                parsed.set_path("/");
            }
            parsed
        }
        _ => fallback(),
    }
}

pub(crate) fn renderer_file_url(app_path: &Path) -> Result<Url, String> {
    let entry = app_path.join(RENDERER_DIR_NAME).join(RENDERER_ENTRY_FILE);
    Url::from_file_path(&entry)
        .map_err(|_| format!("Renderer entry is not an absolute path: {}", entry.display()))
}

pub(crate) fn resolve_shell_config<F>(
    mode: ShellMode,
    cwd: &Path,
    install_dirs: F,
    dev_server_url: &str,
) -> Result<ShellConfig, String>
where
    F: FnOnce() -> Result<InstallDirs, String>,
{
    let paths = runtime_paths::resolve_runtime_paths(&mode, cwd, install_dirs)?;
    let renderer_url = if mode.loads_dev_server() {
        let default_url = Url::parse(DEFAULT_DEV_SERVER_URL).map_err(|error| {
            format!("Invalid default dev server URL {DEFAULT_DEV_SERVER_URL}: {error}")
        })?;
        normalize_dev_server_url(dev_server_url, &default_url)
    } else {
        renderer_file_url(&paths.app_path)?
    };

    Ok(ShellConfig {
        is_development: mode.is_development(),
        mode,
        resource_path: paths.resource_path,
        static_path: paths.static_path,
        app_path: paths.app_path,
        renderer_url,
    })
}

pub(crate) fn resolve_from_host(
    app_handle: &AppHandle,
    mode: ShellMode,
) -> Result<ShellConfig, String> {
    let cwd = env::current_dir()
        .map_err(|error| format!("Failed to read current working directory: {error}"))?;
    let dev_server_url = env::var(DEV_SERVER_URL_ENV).unwrap_or_default();
    resolve_shell_config(
        mode,
        &cwd,
        || runtime_paths::resolve_install_dirs(app_handle),
        &dev_server_url,
    )
}
