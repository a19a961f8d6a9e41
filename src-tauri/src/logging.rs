use std::{env, path::PathBuf};

use chrono::{DateTime, Local};
use log::{Level, LevelFilter};
use tauri::{plugin::TauriPlugin, Runtime};
use tauri_plugin_log::{RotationStrategy, Target, TargetKind, TimezoneStrategy};

use crate::{runtime_paths, DESKTOP_LOG_DIR_ENV, DESKTOP_LOG_FILE_STEM, DESKTOP_LOG_MAX_BYTES};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LogSink {
    Logger,
    Stderr,
}

/// Lines written before the log plugin is registered, or from the panic hook
/// during teardown, go straight to stderr.
pub(crate) fn sink_for(max_level: LevelFilter) -> LogSink {
    if max_level == LevelFilter::Off {
        LogSink::Stderr
    } else {
        LogSink::Logger
    }
}

pub(crate) fn resolve_desktop_log_dir(packaged_root_dir: Option<PathBuf>) -> PathBuf {
    if let Ok(raw) = env::var(DESKTOP_LOG_DIR_ENV) {
        let path = PathBuf::from(raw.trim());
        if !path.as_os_str().is_empty() {
            return path;
        }
    }

    packaged_root_dir
        .map(|root| root.join("logs"))
        .unwrap_or_else(|| env::temp_dir().join("vuelectro").join("logs"))
}

pub(crate) fn desktop_log_dir() -> PathBuf {
    resolve_desktop_log_dir(runtime_paths::default_packaged_root_dir())
}

pub(crate) fn desktop_log_plugin<R: Runtime>(log_dir: PathBuf) -> TauriPlugin<R> {
    tauri_plugin_log::Builder::new()
        .targets([
            Target::new(TargetKind::Stdout),
            Target::new(TargetKind::Folder {
                path: log_dir,
                file_name: Some(DESKTOP_LOG_FILE_STEM.to_string()),
            }),
        ])
        .max_file_size(DESKTOP_LOG_MAX_BYTES)
        .rotation_strategy(RotationStrategy::KeepOne)
        .timezone_strategy(TimezoneStrategy::UseLocal)
        .level(if cfg!(debug_assertions) {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .build()
}

pub(crate) fn format_log_line(category: &str, message: &str, now: DateTime<Local>) -> String {
    format!(
        "[{}] [{}] {}\n",
        now.format("%Y-%m-%d %H:%M:%S%.3f"),
        category,
        message
    )
}

pub(crate) fn append_desktop_log_with_category(category: &str, level: Level, message: &str) {
    match sink_for(log::max_level()) {
        LogSink::Logger => log::log!(target: category, level, "{message}"),
        LogSink::Stderr => eprint!("{}", format_log_line(category, message, Local::now())),
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn format_log_line_includes_timestamp_and_category() {
        let now = Local
            .with_ymd_and_hms(2024, 3, 9, 7, 5, 1)
            .single()
            .expect("unambiguous local time");
        assert_eq!(
            format_log_line("startup", "desktop process starting", now),
            "[2024-03-09 07:05:01.000] [startup] desktop process starting\n"
        );
    }

    #[test]
    fn sink_falls_back_to_stderr_until_logger_is_enabled() {
        assert_eq!(sink_for(LevelFilter::Off), LogSink::Stderr);
        assert_eq!(sink_for(LevelFilter::Error), LogSink::Logger);
        assert_eq!(sink_for(LevelFilter::Debug), LogSink::Logger);
    }

    #[test]
    fn resolve_desktop_log_dir_uses_packaged_root_logs_dir() {
        if env::var(DESKTOP_LOG_DIR_ENV).is_ok() {
            return;
        }
        let root = env::temp_dir().join("vuelectro-root");
        assert_eq!(
            resolve_desktop_log_dir(Some(root.clone())),
            root.join("logs")
        );
        assert_eq!(
            resolve_desktop_log_dir(None),
            env::temp_dir().join("vuelectro").join("logs")
        );
    }
}
