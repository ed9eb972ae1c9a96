//! Live diagnostics adapter.
//!
//! Republishes a [`ProblemSet`] as Language Server Protocol
//! `textDocument/publishDiagnostics` notifications, one per resource.
//! Problems carry no source position, so every diagnostic covers the start
//! of its document.

use serde::Serialize;
use std::io::Write;
use std::path::Path;

use crate::lint::{ProblemSet, Severity};
use crate::uri::file_path_to_uri;

/// Notification method for published diagnostics.
pub const PUBLISH_DIAGNOSTICS: &str = "textDocument/publishDiagnostics";

/// LSP diagnostic severity (protocol codes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LspSeverity {
    Error = 1,
    Warning = 2,
}

impl From<Severity> for LspSeverity {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Error => LspSeverity::Error,
            Severity::Warning => LspSeverity::Warning,
        }
    }
}

/// LSP position (0-indexed)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

/// LSP range
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

/// LSP diagnostic
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LspDiagnostic {
    pub range: Range,
    pub severity: u32,
    pub source: String,
    pub message: String,
}

/// Publish diagnostics notification parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublishDiagnosticsParams {
    pub uri: String,
    pub diagnostics: Vec<LspDiagnostic>,
}

#[derive(Serialize)]
struct Notification<'a> {
    jsonrpc: &'static str,
    method: &'static str,
    params: &'a PublishDiagnosticsParams,
}

/// Build one notification payload per resource, in resource order.
///
/// Resource ids are resolved against `root` to form `file://` URIs.
pub fn to_publish_diagnostics(problems: &ProblemSet, root: &Path) -> Vec<PublishDiagnosticsParams> {
    problems
        .iter()
        .map(|(resource, bucket)| PublishDiagnosticsParams {
            uri: file_path_to_uri(&root.join(resource).to_string_lossy()),
            diagnostics: bucket
                .iter()
                .map(|p| LspDiagnostic {
                    range: Range::default(),
                    severity: LspSeverity::from(p.severity()) as u32,
                    source: "rdflint".to_string(),
                    message: p.message().to_string(),
                })
                .collect(),
        })
        .collect()
}

/// Write each payload as a JSON-RPC notification on its own line.
pub fn write_notifications<W: Write>(
    params: &[PublishDiagnosticsParams],
    writer: &mut W,
) -> std::io::Result<()> {
    for p in params {
        let notification = Notification {
            jsonrpc: "2.0",
            method: PUBLISH_DIAGNOSTICS,
            params: p,
        };
        serde_json::to_writer(&mut *writer, &notification).map_err(std::io::Error::other)?;
        writeln!(writer)?;
    }
    Ok(())
}
