#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app_constants;
mod app_helpers;
mod app_runtime;
mod app_types;
mod crash_guard;
mod devtools_extension;
mod lifecycle;
mod logging;
mod main_window;
mod runtime_paths;
mod shell_config;
mod startup_mode;
mod startup_script;

pub(crate) use app_constants::*;
pub(crate) use app_helpers::{
    append_crash_log, append_desktop_log, append_shutdown_log, append_startup_log,
};
pub(crate) use app_types::{RendererStartupArgs, ShellConfig, ShellState};

fn main() {
    // Must precede everything else so no panic reaches the default hook.
    crash_guard::install_crash_guard();
    app_runtime::run();
}
