//! YAML report serialization.
//!
//! The report maps each resource to its problems in detection order:
//!
//! ```yaml
//! a.rdf:
//! - level: ERROR
//!   message: 'demo: broken'
//! ```

use super::ReportFormatter;
use crate::error::Result;
use crate::lint::ProblemSet;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// File name of the report written to the output directory.
pub const REPORT_FILE_NAME: &str = "rdflint-problems.yml";

/// Formats the report as YAML.
#[derive(Default)]
pub struct YamlFormatter;

impl YamlFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl ReportFormatter for YamlFormatter {
    fn format<W: Write>(&self, problems: &ProblemSet, writer: &mut W) -> std::io::Result<()> {
        serde_yaml::to_writer(writer, problems).map_err(std::io::Error::other)
    }
}

/// Write the YAML report to `output_dir`, returning the report path.
///
/// The directory is created if missing.
pub fn write_report(problems: &ProblemSet, output_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)?;
    let path = output_dir.join(REPORT_FILE_NAME);

    let mut content = Vec::new();
    YamlFormatter::new().format(problems, &mut content)?;
    fs::write(&path, content)?;

    tracing::debug!("wrote report to {}", path.display());
    Ok(path)
}
