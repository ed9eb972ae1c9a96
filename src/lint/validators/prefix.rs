//! Turtle prefix declaration checks.

use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use super::{collect_files, resource_id};
use crate::bindable;
use crate::config::LintParameters;
use crate::lint::{Finding, Severity, Validator};

/// `@prefix ex: <http://example.com/> .` or `PREFIX ex: <http://example.com/>`
static PREFIX_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:@prefix|(?i:prefix))\s+([A-Za-z0-9_.\-]*):\s*<([^>]*)>")
        .expect("PREFIX_DECLARATION must compile")
});

/// An expected prefix binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixRule {
    pub name: String,
    pub url: String,
    /// Inherited from [`PrefixConfig::severity`] when not set.
    pub severity: Option<Severity>,
}

bindable!(PrefixRule {
    "name" => name: scalar,
    "url" => url: scalar,
    "severity" => severity: scalar,
});

/// Configuration for [`PrefixValidator`].
///
/// ```yaml
/// validation:
///   prefix:
///     severity: error
///     prefixes:
///       - name: foaf
///         url: http://xmlns.com/foaf/0.1/
///       - name: schema
///         url: http://schema.org/
///         severity: warning
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixConfig {
    pub severity: Severity,
    pub prefixes: Vec<PrefixRule>,
}

bindable!(PrefixConfig {
    "severity" => severity: scalar,
    "prefixes" => prefixes: records,
} after_bind(this) {
    for rule in &mut this.prefixes {
        if rule.severity.is_none() {
            rule.severity = Some(this.severity);
        }
    }
});

/// Checks prefix declarations in Turtle files against the expected bindings.
pub struct PrefixValidator;

impl Validator for PrefixValidator {
    type Config = PrefixConfig;

    fn name(&self) -> String {
        "prefix".to_string()
    }

    fn execute(
        &self,
        _params: &LintParameters,
        target_dir: &Path,
        config: &PrefixConfig,
    ) -> anyhow::Result<Vec<Finding>> {
        if config.prefixes.is_empty() {
            return Ok(Vec::new());
        }

        let mut findings = Vec::new();
        for path in collect_files(target_dir, &["ttl".to_string()])? {
            let resource = resource_id(target_dir, &path);
            let text = fs::read_to_string(&path)?;
            check_declarations(&resource, &text, config, &mut findings);
        }
        Ok(findings)
    }
}

fn check_declarations(resource: &str, text: &str, config: &PrefixConfig, findings: &mut Vec<Finding>) {
    for (index, line) in text.lines().enumerate() {
        let Some(caps) = PREFIX_DECLARATION.captures(line) else {
            continue;
        };
        let (name, url) = (&caps[1], &caps[2]);
        let number = index + 1;

        for rule in &config.prefixes {
            let severity = rule.severity.unwrap_or(config.severity);
            if rule.name == name && rule.url != url {
                findings.push(Finding::new(
                    resource,
                    severity,
                    format!(
                        "line {}: prefix {}: should be <{}>, found <{}>",
                        number, name, rule.url, url
                    ),
                ));
            } else if rule.url == url && rule.name != name {
                findings.push(Finding::new(
                    resource,
                    severity,
                    format!(
                        "line {}: <{}> should use prefix {}:, found {}:",
                        number, url, rule.name, name
                    ),
                ));
            }
        }
    }
}
