use tauri::{AppHandle, Manager, Webview, WebviewUrl, WebviewWindow, WebviewWindowBuilder};

use crate::{ShellState, MAIN_WINDOW_HEIGHT, MAIN_WINDOW_TITLE, MAIN_WINDOW_WIDTH};

pub fn create_main_window<F>(app_handle: &AppHandle, log: F) -> Result<WebviewWindow, String>
where
    F: Fn(&str),
{
    let state = app_handle
        .try_state::<ShellState>()
        .ok_or_else(|| "Shell state is not initialized.".to_string())?;
    let label = state.next_window_label();
    let script = state.initialization_script()?;
    let renderer_url = state.config.renderer_url.clone();

    log(&format!("creating window {label} for {renderer_url}"));
    let builder = WebviewWindowBuilder::new(app_handle, &label, WebviewUrl::External(renderer_url))
        .title(MAIN_WINDOW_TITLE)
        .inner_size(MAIN_WINDOW_WIDTH, MAIN_WINDOW_HEIGHT)
        .visible(false)
        .initialization_script(&script);

    #[cfg(target_os = "windows")]
    let builder = builder.additional_browser_args(crate::TRUSTED_BROWSER_ARGS);

    builder
        .build()
        .map_err(|error| format!("Failed to create window {label}: {error}"))
}

/// Shows a shell window after its first completed load and, in development,
/// opens the devtools panel alongside it.
pub fn reveal_after_load<F>(webview: &Webview, log: F)
where
    F: Fn(&str),
{
    let label = webview.label();
    if !ShellState::owns_window(label) {
        return;
    }
    let Some(state) = webview.app_handle().try_state::<ShellState>() else {
        return;
    };
    if !state.mark_revealed(label) {
        return;
    }

    if let Err(error) = webview.window().show() {
        log(&format!("failed to show window {label}: {error}"));
        return;
    }
    if let Err(error) = webview.window().set_focus() {
        log(&format!("failed to focus window {label}: {error}"));
    }
    if state.config.is_development {
        webview.open_devtools();
    }
}

pub fn forget_window(app_handle: &AppHandle, label: &str) {
    if let Some(state) = app_handle.try_state::<ShellState>() {
        state.forget_window(label);
    }
}
