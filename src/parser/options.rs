//! Parsing options and configuration.

/// Options for parsing docx documents.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Error handling mode for ancillary package parts.
    pub error_mode: ErrorMode,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Enable lenient mode (degrade gracefully on malformed ancillary parts).
    pub fn lenient(mut self) -> Self {
        self.error_mode = ErrorMode::Lenient;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            error_mode: ErrorMode::Strict,
        }
    }
}

/// How to react to malformed content outside the main document part.
///
/// The main part (`word/document.xml`) always fails hard; without it there
/// is no document to edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorMode {
    /// Fail on any malformed part.
    Strict,
    /// Fall back to defaults for malformed ancillary parts such as
    /// `docProps/core.xml`.
    Lenient,
}
