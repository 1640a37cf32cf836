use std::sync::{Arc, Mutex};

use crate::error::Result;

/// Where "copy" actions put text.
#[cfg_attr(test, mockall::automock)]
pub trait Clipboard: Send + Sync {
    fn write_text(&self, text: &str) -> Result<()>;
}

/// In-process clipboard that keeps the last copied text. The HTTP surface
/// returns the same text in the rejection email view's `copied` field.
#[derive(Debug, Clone, Default)]
pub struct ClipboardBuffer {
    contents: Arc<Mutex<Option<String>>>,
}

impl ClipboardBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<String> {
        self.contents
            .lock()
            .expect("clipboard mutex poisoned")
            .clone()
    }
}

impl Clipboard for ClipboardBuffer {
    fn write_text(&self, text: &str) -> Result<()> {
        *self.contents.lock().expect("clipboard mutex poisoned") = Some(text.to_string());
        Ok(())
    }
}
