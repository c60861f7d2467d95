use crate::Result;

/// A shared text buffer used to move vertex records between documents.
pub trait Clipboard {
    /// Replace the clipboard's contents with `text`.
    fn publish_text(&mut self, text: String) -> Result<()>;
    /// The clipboard's contents, or `None` if it's empty.
    fn read_text(&mut self) -> Result<Option<String>>;
}

/// A [Clipboard] that only lives as long as the process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryClipboard {
    text: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn publish_text(&mut self, text: String) -> Result<()> {
        self.text = Some(text);
        Ok(())
    }

    fn read_text(&mut self) -> Result<Option<String>> {
        Ok(self.text.clone())
    }
}
