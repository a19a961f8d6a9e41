use log::Level;

use crate::logging::append_desktop_log_with_category;

pub(crate) fn append_desktop_log(message: &str) {
    append_desktop_log_with_category("desktop", Level::Info, message);
}

pub(crate) fn append_startup_log(message: &str) {
    append_desktop_log_with_category("startup", Level::Info, message);
}

pub(crate) fn append_shutdown_log(message: &str) {
    append_desktop_log_with_category("shutdown", Level::Info, message);
}

pub(crate) fn append_crash_log(message: &str) {
    append_desktop_log_with_category("crash", Level::Error, message);
}
