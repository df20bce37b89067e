// crates/extract_operator_examples/src/audit.rs

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use walkdir::WalkDir;

use crate::config::AuditConfig;
use crate::operator::{is_reference_page, Operator};

/// Outcome of one run over a set of operator documents.
#[derive(Debug, Default)]
pub struct AuditReport {
    /// Operators whose pages loaded and emitted cleanly, in run order.
    pub operators: Vec<Operator>,
    /// Pages that could not be processed, with the reason. The run
    /// continues past them.
    pub skipped: Vec<(String, String)>,
    /// Operators whose pages yielded no non-empty example.
    pub without_examples: Vec<String>,
    /// Every fixture file written.
    pub written: Vec<PathBuf>,
}

/// Lists the operator names documented under the docs root: one per `*.txt`
/// file directly inside it, sorted by name.
pub fn discover_operators(docs_root: &Path) -> Result<Vec<String>> {
    if !docs_root.is_dir() {
        bail!("docs root {} is not a directory", docs_root.display());
    }
    let mut names: Vec<String> = WalkDir::new(docs_root)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| is_reference_page(entry.path()))
        .filter_map(|entry| {
            entry
                .path()
                .file_stem()
                .and_then(|stem| stem.to_str())
                .map(String::from)
        })
        .collect();
    names.sort();
    Ok(names)
}

/// Loads and emits each named operator. A page that cannot be read or does
/// not parse is skipped with a warning and recorded in the report; a write
/// failure under the resource root aborts the run.
pub fn audit_operators(config: &AuditConfig, names: &[String]) -> Result<AuditReport> {
    let mut report = AuditReport::default();
    for name in names {
        let operator = match Operator::load(config, name) {
            Ok(operator) => operator,
            Err(err) => {
                log::warn!("skipping operator '{}': {:#}", name, err);
                report.skipped.push((name.clone(), format!("{err:#}")));
                continue;
            }
        };
        let written = operator.write_examples()?;
        if written.is_empty() {
            report.without_examples.push(operator.name.clone());
        }
        report.written.extend(written);
        report.operators.push(operator);
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const MINIMAL_DOC: &str = "\
Examples
--------

Example 1
~~~~~~~~~

.. code-block:: javascript

   db.items.find()
";

    #[test]
    fn test_discover_lists_txt_pages_sorted() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("sum.txt"), MINIMAL_DOC).unwrap();
        fs::write(dir.path().join("abs.txt"), MINIMAL_DOC).unwrap();
        fs::write(dir.path().join("notes.md"), "not a reference page").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested/deep.txt"), MINIMAL_DOC).unwrap();

        let names = discover_operators(dir.path()).unwrap();
        assert_eq!(names, vec!["abs".to_string(), "sum".to_string()]);
    }

    #[test]
    fn test_discover_rejects_missing_root() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("absent");
        assert!(discover_operators(&missing).is_err());
    }

    #[test]
    fn test_audit_continues_past_malformed_pages() {
        let dir = tempdir().unwrap();
        let docs = dir.path().join("docs");
        fs::create_dir_all(&docs).unwrap();
        fs::write(docs.join("abs.txt"), MINIMAL_DOC).unwrap();
        fs::write(docs.join("broken.txt"), "page without the heading\n").unwrap();
        let config = AuditConfig {
            docs_root: docs,
            resource_root: dir.path().join("resources"),
            url_base: crate::config::DEFAULT_URL_BASE.to_string(),
        };

        let names = discover_operators(&config.docs_root).unwrap();
        let report = audit_operators(&config, &names).unwrap();

        assert_eq!(report.operators.len(), 1);
        assert_eq!(report.operators[0].name, "abs");
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].0, "broken");
        assert_eq!(report.written.len(), 1);
        assert!(report.without_examples.is_empty());
    }

    #[test]
    fn test_audit_reports_pages_without_examples() {
        let dir = tempdir().unwrap();
        let docs = dir.path().join("docs");
        fs::create_dir_all(&docs).unwrap();
        // Valid examples region, but nothing fenced inside it.
        fs::write(
            docs.join("silent.txt"),
            "Examples\n--------\n\nOnly prose in here.\n",
        )
        .unwrap();
        let config = AuditConfig {
            docs_root: docs,
            resource_root: dir.path().join("resources"),
            url_base: crate::config::DEFAULT_URL_BASE.to_string(),
        };

        let report = audit_operators(&config, &["silent".to_string()]).unwrap();
        assert_eq!(report.operators.len(), 1);
        assert_eq!(report.without_examples, vec!["silent".to_string()]);
        assert!(report.written.is_empty());
    }
}
