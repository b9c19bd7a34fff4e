use crate::domain::clipboard::{ClipboardError, ClipboardFacade};
use arboard::Clipboard;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// System clipboard backed by `arboard`.
///
/// The handle is created on first write and kept for the lifetime of the
/// process: on X11 the copied text is served by the owning handle, so
/// dropping it right after `set_text` would empty the clipboard again.
#[derive(Default, Clone)]
pub struct SystemClipboard {
    inner: Arc<Mutex<Option<Clipboard>>>,
}

impl SystemClipboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ClipboardFacade for SystemClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let inner = self.inner.clone();
        let text = text.to_owned();

        tokio::task::spawn_blocking(move || {
            let mut guard = inner
                .lock()
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;

            if guard.is_none() {
                let clipboard =
                    Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
                *guard = Some(clipboard);
            }

            match guard.as_mut() {
                Some(clipboard) => clipboard
                    .set_text(text)
                    .map_err(|e| ClipboardError::Rejected(e.to_string())),
                None => Err(ClipboardError::Unavailable(
                    "clipboard handle missing".to_string(),
                )),
            }
        })
        .await
        .map_err(|e| ClipboardError::Task(e.to_string()))?
    }
}
