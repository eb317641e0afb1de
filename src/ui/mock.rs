//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use tofukit::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Loading manifest");
//! ui.success("Wrote project-demo.json");
//!
//! assert!(ui.has_message("Loading"));
//! assert!(ui.successes().contains(&"Wrote project-demo.json".to_string()));
//! ```

use super::{OutputMode, UserInterface};

/// Mock UI implementation for testing.
///
/// Captures every call regardless of output mode so tests can assert on
/// what a command tried to say.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    documents: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warnings.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured errors.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all printed documents.
    pub fn documents(&self) -> &[String] {
        &self.documents
    }

    /// Check whether any message contains `text`.
    pub fn has_message(&self, text: &str) -> bool {
        self.messages.iter().any(|m| m.contains(text))
    }

    /// Check whether any error contains `text`.
    pub fn has_error(&self, text: &str) -> bool {
        self.errors.iter().any(|m| m.contains(text))
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            self.messages.push(msg.to_string());
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            self.successes.push(msg.to_string());
        }
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            self.headers.push(title.to_string());
        }
    }

    fn document(&mut self, content: &str) {
        self.documents.push(content.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_messages_in_normal_mode() {
        let mut ui = MockUI::new();
        ui.message("hello");
        ui.show_header("demo");
        assert_eq!(ui.messages(), &["hello".to_string()]);
        assert_eq!(ui.headers(), &["demo".to_string()]);
    }

    #[test]
    fn quiet_mode_keeps_warnings_errors_and_documents() {
        let mut ui = MockUI::with_mode(OutputMode::Quiet);
        ui.message("hidden");
        ui.success("hidden");
        ui.warning("careful");
        ui.error("broken");
        ui.document("{}\n");

        assert!(ui.messages().is_empty());
        assert!(ui.successes().is_empty());
        assert_eq!(ui.warnings().len(), 1);
        assert!(ui.has_error("broken"));
        assert_eq!(ui.documents(), &["{}\n".to_string()]);
    }
}
