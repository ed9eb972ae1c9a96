//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use rdflint::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("error[a.rdf]: demo: broken\n");
//! ui.success("No problems found");
//!
//! assert!(ui.output().contains("a.rdf"));
//! assert_eq!(ui.successes(), ["No problems found"]);
//! ```

use super::UserInterface;

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    output: String,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
}

impl MockUI {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written through `message`, concatenated.
    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Check if any error contains the given text.
    pub fn has_error(&self, text: &str) -> bool {
        self.errors.iter().any(|e| e.contains(text))
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.output.push_str(msg);
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }
}
