//! Cross-platform clipboard adapter using arboard
//!
//! Works on Windows, macOS, and Linux (X11/Wayland).

use async_trait::async_trait;
use std::borrow::Cow;
use tracing::{debug, warn};

use crate::application::ports::{ClipboardAccess, ClipboardError};
use crate::domain::snapshot::{ClipboardSnapshot, Representation};

/// Cross-platform clipboard adapter using arboard
pub struct ArboardClipboard;

impl ArboardClipboard {
    /// Create a new arboard clipboard adapter
    pub fn new() -> Self {
        Self
    }
}

impl Default for ArboardClipboard {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClipboardAccess for ArboardClipboard {
    async fn read_all(&self) -> Option<ClipboardSnapshot> {
        // arboard operations are blocking, so run in spawn_blocking
        let result = tokio::task::spawn_blocking(move || {
            let mut clipboard = match arboard::Clipboard::new() {
                Ok(clipboard) => clipboard,
                Err(e) => {
                    debug!(error = %e, "clipboard unavailable on read, treating as empty");
                    return None;
                }
            };

            let mut representations = Vec::new();
            if let Ok(image) = clipboard.get_image() {
                representations.push(Representation::image(
                    image.width,
                    image.height,
                    image.bytes.into_owned(),
                ));
            }
            if let Ok(text) = clipboard.get_text() {
                representations.push(Representation::text(text));
            }
            ClipboardSnapshot::from_representations(representations)
        })
        .await;

        result.unwrap_or(None)
    }

    async fn clear(&self) -> Result<(), ClipboardError> {
        tokio::task::spawn_blocking(move || {
            let mut clipboard = arboard::Clipboard::new()
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;

            clipboard
                .clear()
                .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
        })
        .await
        .map_err(|e| ClipboardError::WriteFailed(format!("Task join error: {}", e)))?
    }

    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let text = text.to_owned();

        tokio::task::spawn_blocking(move || {
            let mut clipboard = arboard::Clipboard::new()
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;

            clipboard
                .set_text(&text)
                .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
        })
        .await
        .map_err(|e| ClipboardError::WriteFailed(format!("Task join error: {}", e)))?
    }

    async fn write_representations(
        &self,
        snapshot: &ClipboardSnapshot,
    ) -> Result<(), ClipboardError> {
        let representations = snapshot.representations().to_vec();

        tokio::task::spawn_blocking(move || {
            let mut clipboard = arboard::Clipboard::new()
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;

            // arboard holds a single item at a time, so only the primary
            // representation can be written back.
            for (index, representation) in representations.into_iter().enumerate() {
                if index > 0 {
                    warn!(
                        kind = representation.kind(),
                        "clipboard backend holds one representation, dropping extra"
                    );
                    continue;
                }
                match representation {
                    Representation::Text { text } => clipboard
                        .set_text(&text)
                        .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?,
                    Representation::Image {
                        width,
                        height,
                        bytes,
                    } => clipboard
                        .set_image(arboard::ImageData {
                            width,
                            height,
                            bytes: Cow::Owned(bytes),
                        })
                        .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?,
                }
            }
            Ok(())
        })
        .await
        .map_err(|e| ClipboardError::WriteFailed(format!("Task join error: {}", e)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clipboard_creates_successfully() {
        let _clipboard = ArboardClipboard::new();
    }

    #[test]
    fn clipboard_default_creates() {
        let _clipboard = ArboardClipboard::default();
    }
}
