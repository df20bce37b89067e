// crates/extract_operator_examples/src/operator.rs

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use extract_code_blocks::extract_code_blocks;
use rst_markers::PIPELINE_MARKER;

use crate::config::AuditConfig;
use crate::example::Example;

/// Whether a documented operator is a pipeline stage or an expression.
/// Decides the sub-folder its fixtures land in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorKind {
    Stage,
    Expression,
}

impl OperatorKind {
    pub fn subpath(self) -> &'static str {
        match self {
            OperatorKind::Stage => "stages",
            OperatorKind::Expression => "expressions",
        }
    }
}

/// A named documented operator: its reference page, the facts derived from
/// it, and the full ordered list of examples extracted from the page. The
/// operator owns its examples; their order matches the order the
/// sub-sections appear in the page.
#[derive(Debug)]
pub struct Operator {
    pub name: String,
    /// The `$`-prefixed token as it appears in a pipeline, e.g. `$abs`.
    pub token: String,
    pub kind: OperatorKind,
    pub source: PathBuf,
    pub url: String,
    pub resource_folder: PathBuf,
    /// Whether the resource folder already existed when the operator was
    /// loaded, i.e. fixtures were created by an earlier run.
    pub created: bool,
    pub examples: Vec<Example>,
}

impl Operator {
    /// Reads `<docs_root>/<name>.txt` and extracts its examples. A missing
    /// or unreadable page fails here with the path in context; a malformed
    /// page surfaces the extraction error. Both are the caller's decision
    /// to skip or abort.
    pub fn load(config: &AuditConfig, name: &str) -> Result<Operator> {
        let source = config.docs_root.join(format!("{name}.txt"));
        let text = fs::read_to_string(&source).with_context(|| {
            format!(
                "no readable source document for operator '{}' at {}",
                name,
                source.display()
            )
        })?;

        let kind = if text.contains(PIPELINE_MARKER) {
            OperatorKind::Stage
        } else {
            OperatorKind::Expression
        };
        // Disambiguating suffixes ("top-accumulator") are not part of the
        // operator token or its resource location.
        let base = name.split('-').next().unwrap_or(name).to_string();
        let resource_folder = config.resource_root.join(kind.subpath()).join(&base);
        let created = resource_folder.exists();

        let sections = extract_code_blocks(&text).with_context(|| {
            format!(
                "malformed document for operator '{}' at {}",
                name,
                source.display()
            )
        })?;
        let mut examples: Vec<Example> = Vec::new();
        for (section_name, blocks) in sections {
            let previous = examples.len().checked_sub(1);
            examples.push(Example::new(section_name, blocks, previous));
        }
        log::debug!(
            "loaded operator '{}': {:?}, {} example section(s)",
            name,
            kind,
            examples.len()
        );

        Ok(Operator {
            name: name.to_string(),
            token: format!("${base}"),
            kind,
            source,
            url: config.operator_url(name),
            resource_folder,
            created,
            examples,
        })
    }

    /// Emits exactly the non-empty examples, preserving their relative
    /// order, into `example<N>` folders under the resource folder. `N`
    /// counts non-empty examples from 1, not raw discovery position.
    /// Returns every file written.
    pub fn write_examples(&self) -> Result<Vec<PathBuf>> {
        let mut written = Vec::new();
        for (index, example) in self
            .examples
            .iter()
            .filter(|example| !example.is_empty())
            .enumerate()
        {
            let folder = self.resource_folder.join(format!("example{}", index + 1));
            log::debug!(
                "writing '{}' example '{}' to {}",
                self.name,
                example.name,
                folder.display()
            );
            written.extend(example.emit(&folder)?);
        }
        Ok(written)
    }

    /// The example built immediately before the one at `index`, if any.
    pub fn previous_of(&self, index: usize) -> Option<&Example> {
        self.examples
            .get(index)
            .and_then(|example| example.previous)
            .and_then(|previous| self.examples.get(previous))
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Operator({} -> {})", self.name, self.source.display())
    }
}

/// True when `path` names an operator reference page.
pub fn is_reference_page(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some("txt")
}
