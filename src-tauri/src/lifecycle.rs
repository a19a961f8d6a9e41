use tauri::{AppHandle, Manager};

use crate::{
    append_desktop_log, append_shutdown_log, append_startup_log,
    devtools_extension::{self, DevtoolsExtension},
    main_window, ShellState,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ExitRequestKind {
    AllWindowsClosed,
    Explicit(i32),
}

pub(crate) fn classify_exit_request(code: Option<i32>) -> ExitRequestKind {
    match code {
        None => ExitRequestKind::AllWindowsClosed,
        Some(code) => ExitRequestKind::Explicit(code),
    }
}

/// Process status for `RunEvent::Exit`; closing every window exits cleanly.
pub(crate) fn exit_code_for(requested: Option<i32>) -> i32 {
    requested.unwrap_or(0)
}

#[cfg_attr(not(target_os = "macos"), allow(dead_code))]
pub(crate) fn should_create_window_on_activate(open_windows: usize) -> bool {
    open_windows == 0
}

pub(crate) fn devtools_hook_from<F>(
    install_result: Result<DevtoolsExtension, String>,
    log: F,
) -> Option<String>
where
    F: Fn(&str),
{
    match install_result {
        Ok(extension) => {
            log(&format!(
                "devtools extension attached: {}",
                extension.server_url
            ));
            Some(extension.hook_script)
        }
        Err(error) => {
            log(&format!("devtools extension failed to install: {error}"));
            None
        }
    }
}

/// Devtools install is best-effort; the first window is created either way.
pub(crate) fn run_ready_sequence<I, S, C, F>(
    is_development: bool,
    install_devtools: I,
    store_hook: S,
    create_window: C,
    log: F,
) -> Result<(), String>
where
    I: FnOnce() -> Result<DevtoolsExtension, String>,
    S: FnOnce(String),
    C: FnOnce() -> Result<(), String>,
    F: Fn(&str),
{
    if is_development {
        if let Some(hook_script) = devtools_hook_from(install_devtools(), &log) {
            store_hook(hook_script);
        }
    }

    create_window()
}

pub(crate) fn handle_ready(app_handle: &AppHandle) -> Result<(), String> {
    let state = app_handle
        .try_state::<ShellState>()
        .ok_or_else(|| "Shell state is not initialized.".to_string())?;

    run_ready_sequence(
        state.config.is_development,
        devtools_extension::install_devtools_extension,
        |hook_script| state.set_devtools_hook(hook_script),
        || main_window::create_main_window(app_handle, append_startup_log).map(|_| ()),
        append_startup_log,
    )
}

#[cfg(target_os = "macos")]
pub(crate) fn handle_reopen(app_handle: &AppHandle) {
    let open_windows = app_handle.webview_windows().len();
    if !should_create_window_on_activate(open_windows) {
        return;
    }

    append_desktop_log("activate with no open windows, creating a new window");
    if let Err(error) = main_window::create_main_window(app_handle, append_desktop_log) {
        append_desktop_log(&format!("failed to create window on activate: {error}"));
    }
}

pub(crate) fn handle_exit_requested(code: Option<i32>) {
    match classify_exit_request(code) {
        ExitRequestKind::AllWindowsClosed => {
            append_shutdown_log("all windows closed, quitting");
        }
        ExitRequestKind::Explicit(code) => {
            append_shutdown_log(&format!("exit requested with code {code}"));
        }
    }
}

pub(crate) fn handle_exit_event(app_handle: &AppHandle, requested_code: Option<i32>) -> ! {
    let code = exit_code_for(requested_code);
    append_desktop_log(&format!("desktop process exiting with code {code}"));
    app_handle.cleanup_before_exit();
    std::process::exit(code);
}
