use tauri::{webview::PageLoadEvent, Manager, RunEvent, WindowEvent};

use crate::{
    append_desktop_log, append_startup_log, lifecycle, logging, main_window, shell_config,
    startup_mode::ShellMode, startup_script, ShellState,
};

pub(crate) fn run() {
    append_startup_log("desktop process starting");
    let log_dir = logging::desktop_log_dir();
    append_startup_log(&format!("desktop log directory: {}", log_dir.display()));

    let mode = ShellMode::from_env();
    append_startup_log(&format!("shell mode: {}", mode.as_str()));

    let mut requested_exit_code = None;
    tauri::Builder::default()
        .plugin(logging::desktop_log_plugin(log_dir))
        .on_window_event(|window, event| {
            if let WindowEvent::Destroyed = event {
                main_window::forget_window(window.app_handle(), window.label());
            }
        })
        .on_page_load(|webview, payload| match payload.event() {
            PageLoadEvent::Started => {
                append_desktop_log(&format!("page-load started: {}", payload.url()));
            }
            PageLoadEvent::Finished => {
                append_desktop_log(&format!("page-load finished: {}", payload.url()));
                main_window::reveal_after_load(webview, append_desktop_log);
            }
        })
        .setup(move |app| {
            let app_handle = app.handle().clone();
            let config = match shell_config::resolve_from_host(&app_handle, mode) {
                Ok(config) => config,
                Err(error) => {
                    show_startup_error(&app_handle, &error);
                    return Ok(());
                }
            };
            append_startup_log(&format!(
                "resolved shell config: resource_path={} static_path={} app_path={} development={} renderer_url={}",
                config.resource_path.display(),
                config.static_path.display(),
                config.app_path.display(),
                config.is_development,
                config.renderer_url
            ));

            let preload_script = match startup_script::read_preload_script(&config.app_path) {
                Ok(script) => script,
                Err(error) => {
                    append_startup_log(&format!("preload script skipped: {error}"));
                    None
                }
            };
            app_handle.manage(ShellState::new(config, preload_script));

            if let Err(error) = lifecycle::handle_ready(&app_handle) {
                show_startup_error(&app_handle, &error);
            }
            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(move |app_handle, event| match event {
            RunEvent::ExitRequested { code, .. } => {
                lifecycle::handle_exit_requested(code);
                requested_exit_code = code.or(requested_exit_code);
            }
            RunEvent::Exit => lifecycle::handle_exit_event(app_handle, requested_exit_code),
            #[cfg(target_os = "macos")]
            RunEvent::Reopen { .. } => lifecycle::handle_reopen(app_handle),
            _ => {}
        });
}

fn show_startup_error(app_handle: &tauri::AppHandle, message: &str) {
    append_startup_log(&format!("Vuelectro startup failed: {message}"));
    app_handle.exit(1);
}
