pub const SHELL_MODE_ENV: &str = "VUELECTRO_ENV";
pub const DEV_SERVER_URL_ENV: &str = "VUELECTRO_DEV_SERVER_URL";
pub const DEVTOOLS_URL_ENV: &str = "VUELECTRO_DEVTOOLS_URL";
pub const DESKTOP_LOG_DIR_ENV: &str = "VUELECTRO_DESKTOP_LOG_DIR";

pub const DEFAULT_DEV_SERVER_URL: &str = "http://localhost:8080/";
pub const DEFAULT_DEVTOOLS_URL: &str = "http://localhost:8098/";
pub const DEVTOOLS_CONNECT_TIMEOUT_MS: u64 = 800;

pub const MAIN_WINDOW_LABEL: &str = "main";
pub const MAIN_WINDOW_TITLE: &str = "Vuelectro";
pub const MAIN_WINDOW_WIDTH: f64 = 1280.0;
pub const MAIN_WINDOW_HEIGHT: f64 = 800.0;
// Chromium switches; only the WebView2 backend honours them.
#[cfg_attr(not(target_os = "windows"), allow(dead_code))]
pub const TRUSTED_BROWSER_ARGS: &str = "--disable-web-security --disable-site-isolation-trials";

pub const RENDERER_DIR_NAME: &str = "renderer";
pub const RENDERER_ENTRY_FILE: &str = "index.html";
pub const PRELOAD_SCRIPT_FILE: &str = "preload.js";

pub const DESKTOP_LOG_FILE_STEM: &str = "desktop";
pub const DESKTOP_LOG_MAX_BYTES: u128 = 5_000_000;
