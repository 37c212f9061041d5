/// Severity attached to a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Success,
    Warning,
    Info,
}

/// Surfaces messages to the person submitting the form.
pub trait NotificationSink {
    fn notify(&self, message: &str, severity: Severity);
}

/// Sink that writes notifications through the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl NotificationSink for LogNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        match severity {
            Severity::Error => log::error!("{message}"),
            Severity::Warning => log::warn!("{message}"),
            Severity::Success | Severity::Info => log::info!("{message}"),
        }
    }
}
