use std::{any::Any, panic, thread};

use crate::append_crash_log;

/// Replaces the default panic hook so panics are logged instead of printed
/// by the runtime. The panic still unwinds as usual.
pub(crate) fn install_crash_guard() {
    panic::set_hook(Box::new(|info| {
        let location = info.location().map(|location| {
            format!(
                "{}:{}:{}",
                location.file(),
                location.line(),
                location.column()
            )
        });
        let report = format_panic_report(
            &panic_message(info.payload()),
            location.as_deref(),
            thread::current().name(),
        );
        append_crash_log(&report);
    }));
}

pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        return (*message).to_string();
    }
    if let Some(message) = payload.downcast_ref::<String>() {
        return message.clone();
    }
    "non-string panic payload".to_string()
}

pub(crate) fn format_panic_report(
    message: &str,
    location: Option<&str>,
    thread_name: Option<&str>,
) -> String {
    format!(
        "uncaught panic in thread '{}' at {}: {}",
        thread_name.unwrap_or("<unnamed>"),
        location.unwrap_or("<unknown location>"),
        message
    )
}
