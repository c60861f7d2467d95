use std::path::PathBuf;

use meshmend::ops::Clipboard;

/// A [Clipboard] backed by a file, so that separate invocations can share it.
#[derive(Debug, Clone)]
pub struct FileClipboard {
    path: PathBuf,
}

impl FileClipboard {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Clipboard for FileClipboard {
    fn publish_text(&mut self, text: String) -> meshmend::Result<()> {
        std::fs::write(&self.path, text).map_err(|e| meshmend::Error::Clipboard(Box::new(e)))?;
        tracing::debug!(path = %self.path.display(), "wrote clipboard");
        Ok(())
    }

    fn read_text(&mut self) -> meshmend::Result<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) if text.trim().is_empty() => Ok(None),
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(meshmend::Error::Clipboard(Box::new(e))),
        }
    }
}
