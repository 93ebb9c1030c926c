//! Input staging: the draft text plus at most one staged PDF.
//!
//! Staging only validates the declared media type; size and content checks
//! are the remote endpoint's concern. The raw browser `File` handle exists
//! only in hydrate builds, so the rest of the model tests natively.

#[cfg(test)]
#[path = "composer_test.rs"]
mod composer_test;

/// Media type accepted for staged attachments.
pub const PDF_MEDIA_TYPE: &str = "application/pdf";

/// True when the declared media type marks the selection as a PDF document.
///
/// Compares the media-type essence case-insensitively and ignores
/// parameters such as a trailing `;charset=...`.
pub fn is_pdf_media_type(media_type: &str) -> bool {
    let essence = media_type.split(';').next().unwrap_or_default().trim();
    essence.eq_ignore_ascii_case(PDF_MEDIA_TYPE)
}

/// A file selected but not yet sent, held in UI-local memory only.
#[derive(Clone, Debug)]
pub struct StagedFile {
    /// Display name shown in the staged chip and on the user message.
    pub name: String,
    /// The underlying browser file, available only in the browser build.
    #[cfg(feature = "hydrate")]
    pub file: web_sys::File,
}

/// A validated draft taken from the composer for dispatch.
#[derive(Clone, Debug)]
pub struct Draft {
    pub text: String,
    pub staged: Option<StagedFile>,
}

/// Composed text plus at most one staged file, cleared together on send.
#[derive(Clone, Debug, Default)]
pub struct ComposerState {
    pub text: String,
    pub staged: Option<StagedFile>,
}

impl ComposerState {
    /// Stage a selection if its declared media type is PDF.
    ///
    /// Non-PDF selections are silently ignored and leave any previously
    /// staged file in place. Returns whether the selection was accepted.
    pub fn stage(&mut self, media_type: &str, staged: StagedFile) -> bool {
        if !is_pdf_media_type(media_type) {
            return false;
        }
        self.staged = Some(staged);
        true
    }

    /// Drop the staged file without sending it.
    pub fn clear_staged(&mut self) {
        self.staged = None;
    }

    /// True when there is anything to send.
    pub fn has_content(&self) -> bool {
        !self.text.trim().is_empty() || self.staged.is_some()
    }

    /// Take the draft for dispatch, clearing text and staged file together.
    ///
    /// Returns `None` and leaves the state untouched when the text is
    /// empty/whitespace-only and nothing is staged.
    pub fn take_draft(&mut self) -> Option<Draft> {
        if !self.has_content() {
            return None;
        }
        let text = std::mem::take(&mut self.text).trim().to_owned();
        let staged = self.staged.take();
        Some(Draft { text, staged })
    }
}
