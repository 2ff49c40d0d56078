//! Clipboard representation value objects

/// One concrete form of the data held by the clipboard.
///
/// A single copy action can expose the same logical content in several
/// representations at once (plain text plus an image, for example). The
/// order of representations in a snapshot mirrors the order they were
/// read from the clipboard, richest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Representation {
    /// UTF-8 text
    Text { text: String },

    /// Raw RGBA8 pixels, row-major
    Image {
        width: usize,
        height: usize,
        bytes: Vec<u8>,
    },
}

impl Representation {
    /// Create a text representation
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Create an image representation from raw RGBA8 pixels
    pub fn image(width: usize, height: usize, bytes: Vec<u8>) -> Self {
        Self::Image {
            width,
            height,
            bytes,
        }
    }

    /// Type identifier for logs and diagnostics
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Text { .. } => "text",
            Self::Image { .. } => "image",
        }
    }

    /// The text payload, if this is a text representation
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text { text } => Some(text),
            Self::Image { .. } => None,
        }
    }

    /// Payload size in bytes
    pub fn len_bytes(&self) -> usize {
        match self {
            Self::Text { text } => text.len(),
            Self::Image { bytes, .. } => bytes.len(),
        }
    }
}

/// Everything the clipboard held at one point in time.
///
/// A snapshot is never empty; an empty clipboard is represented by the
/// absence of a snapshot, not by a snapshot with no representations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardSnapshot {
    representations: Vec<Representation>,
}

impl ClipboardSnapshot {
    /// Build a snapshot from the captured representations.
    ///
    /// Returns `None` when the list is empty, so an empty clipboard can
    /// never masquerade as restorable content.
    pub fn from_representations(representations: Vec<Representation>) -> Option<Self> {
        if representations.is_empty() {
            None
        } else {
            Some(Self { representations })
        }
    }

    /// Snapshot of a single text payload
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            representations: vec![Representation::text(text)],
        }
    }

    /// All representations, in capture order
    pub fn representations(&self) -> &[Representation] {
        &self.representations
    }

    /// Consume the snapshot and return its representations
    pub fn into_representations(self) -> Vec<Representation> {
        self.representations
    }

    /// The richest representation, used when a target can only take one
    pub fn primary(&self) -> &Representation {
        &self.representations[0]
    }

    /// The first text payload, if any representation is text
    pub fn text(&self) -> Option<&str> {
        self.representations.iter().find_map(|r| r.as_text())
    }

    /// True when the snapshot is exactly one text representation equal to `text`
    pub fn is_single_text(&self, text: &str) -> bool {
        match self.representations.as_slice() {
            [Representation::Text { text: held }] => held == text,
            _ => false,
        }
    }
}
