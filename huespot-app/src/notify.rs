use std::time::Duration;

use tracing::{error, info, warn};

/// Severity of a user-facing toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    pub fn icon(self) -> char {
        match self {
            Self::Success => '✓',
            Self::Error => '✕',
            Self::Warning => '⚠',
            Self::Info => 'ℹ',
        }
    }

    /// How long a toast of this kind stays up by default. Errors linger a
    /// little longer than good news.
    pub fn default_duration(self) -> Duration {
        match self {
            Self::Success | Self::Info => Duration::from_millis(2000),
            Self::Warning => Duration::from_millis(2500),
            Self::Error => Duration::from_millis(3000),
        }
    }
}

/// The notification collaborator: whatever surface the host uses to show
/// toasts. The palette pipeline only ever talks to this trait.
pub trait Notifier {
    fn notify(&self, title: &str, message: &str, kind: ToastKind, duration: Duration);
}

/// Notifier that routes toasts to the log. Used by the CLI demo, and a
/// reasonable default anywhere there is no toast surface.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, title: &str, message: &str, kind: ToastKind, duration: Duration) {
        let duration_ms = duration.as_millis();
        match kind {
            ToastKind::Error => error!(title, duration_ms, "{} {message}", kind.icon()),
            ToastKind::Warning => warn!(title, duration_ms, "{} {message}", kind.icon()),
            _ => info!(title, duration_ms, "{} {message}", kind.icon()),
        }
    }
}
