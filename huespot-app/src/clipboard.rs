use std::sync::Mutex;

/// Clipboard errors. Surfaced to the user through the notifier as an
/// error toast; never propagated out of the palette pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    NotAvailable,
    WriteError(String),
}

impl std::fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAvailable => write!(f, "clipboard not available"),
            Self::WriteError(msg) => write!(f, "clipboard write failed: {msg}"),
        }
    }
}

impl std::error::Error for ClipboardError {}

/// The clipboard collaborator: hosts plug in whatever mechanism their
/// platform offers.
pub trait ClipboardSink {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// In-process clipboard. The CLI demo has no system clipboard to talk to;
/// this keeps the copy interaction observable.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
}

impl MemoryClipboard {
    pub fn contents(&self) -> Option<String> {
        self.contents.lock().unwrap().clone()
    }
}

impl ClipboardSink for MemoryClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        *self.contents.lock().unwrap() = Some(text.to_string());
        Ok(())
    }
}

/// A sink for environments with no clipboard at all; every write fails.
#[derive(Debug, Default)]
pub struct UnavailableClipboard;

impl ClipboardSink for UnavailableClipboard {
    fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::NotAvailable)
    }
}
