// crates/extract_operator_examples/src/example.rs

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use extract_code_blocks::CodeBlock;

/// One extracted example: a sub-section of the page's examples region
/// together with the code blocks found in it. Examples form a singly linked
/// chain in discovery order; `previous` is the index of the example built
/// just before this one in the owning operator's list, never an owning
/// reference.
#[derive(Debug, Clone)]
pub struct Example {
    /// Sub-section heading the blocks were found under.
    pub name: String,
    pub blocks: Vec<CodeBlock>,
    pub previous: Option<usize>,
}

impl Example {
    /// Zero-line blocks (a fence with nothing after it) are semantically
    /// present in the extractor's output but carry no content; they are
    /// dropped here so emptiness and emission agree.
    pub fn new(name: String, blocks: Vec<CodeBlock>, previous: Option<usize>) -> Self {
        let blocks = blocks.into_iter().filter(|block| !block.is_empty()).collect();
        Example {
            name,
            blocks,
            previous,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Writes one `block<m>.txt` per code block into `target_folder`,
    /// creating the folder. Returns the written paths in block order.
    pub fn emit(&self, target_folder: &Path) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(target_folder).with_context(|| {
            format!("failed to create example folder {}", target_folder.display())
        })?;
        let mut written = Vec::new();
        for (index, block) in self.blocks.iter().enumerate() {
            let path = target_folder.join(format!("block{}.txt", index + 1));
            fs::write(&path, block.render())
                .with_context(|| format!("failed to write {}", path.display()))?;
            written.push(path);
        }
        Ok(written)
    }
}
