//! Text encoding and whitespace checks for dataset files.

use std::fs;
use std::path::Path;

use super::{collect_files, default_extensions, resource_id};
use crate::bindable;
use crate::config::LintParameters;
use crate::lint::{Finding, Severity, Validator};

/// Configuration for [`FileEncodingValidator`].
///
/// ```yaml
/// validation:
///   fileEncoding:
///     severity: warning
///     tabIndent: false
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FileEncodingConfig {
    /// Severity for style findings. Invalid UTF-8 is always an error.
    pub severity: Severity,
    pub trailing_whitespace: bool,
    pub final_newline: bool,
    pub tab_indent: bool,
    pub crlf: bool,
    pub extensions: Vec<String>,
}

impl Default for FileEncodingConfig {
    fn default() -> Self {
        Self {
            severity: Severity::Warning,
            trailing_whitespace: true,
            final_newline: true,
            tab_indent: true,
            crlf: true,
            extensions: default_extensions(),
        }
    }
}

bindable!(FileEncodingConfig {
    "severity" => severity: scalar,
    "trailingWhitespace" => trailing_whitespace: scalar,
    "finalNewline" => final_newline: scalar,
    "tabIndent" => tab_indent: scalar,
    "crlf" => crlf: scalar,
    "extensions" => extensions: scalars,
});

/// Checks that dataset files are UTF-8 text with consistent whitespace.
pub struct FileEncodingValidator;

impl Validator for FileEncodingValidator {
    type Config = FileEncodingConfig;

    fn name(&self) -> String {
        "fileEncoding".to_string()
    }

    fn execute(
        &self,
        _params: &LintParameters,
        target_dir: &Path,
        config: &FileEncodingConfig,
    ) -> anyhow::Result<Vec<Finding>> {
        let mut findings = Vec::new();

        for path in collect_files(target_dir, &config.extensions)? {
            let resource = resource_id(target_dir, &path);
            let bytes = fs::read(&path)?;

            match std::str::from_utf8(&bytes) {
                Ok(text) => check_text(&resource, text, config, &mut findings),
                Err(e) => findings.push(Finding::error(
                    resource,
                    format!("not valid UTF-8 (byte offset {})", e.valid_up_to()),
                )),
            }
        }

        Ok(findings)
    }
}

fn check_text(resource: &str, text: &str, config: &FileEncodingConfig, findings: &mut Vec<Finding>) {
    let mut report = |message: String| {
        findings.push(Finding::new(resource, config.severity, message));
    };

    for (index, raw_line) in text.split_inclusive('\n').enumerate() {
        let number = index + 1;
        let without_lf = raw_line.strip_suffix('\n').unwrap_or(raw_line);
        let line = without_lf.strip_suffix('\r');

        if config.crlf && line.is_some() {
            report(format!("line {}: CRLF line ending", number));
        }
        let line = line.unwrap_or(without_lf);

        if config.trailing_whitespace && line.ends_with([' ', '\t']) {
            report(format!("line {}: trailing whitespace", number));
        }
        if config.tab_indent && line.starts_with('\t') {
            report(format!("line {}: tab indentation", number));
        }
    }

    if config.final_newline && !text.is_empty() && !text.ends_with('\n') {
        report("missing final newline".to_string());
    }
}
