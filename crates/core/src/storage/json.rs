use super::{DatasetHoldout, LabeledResult, Storage};
use crate::config::StorageConfig;
use crate::error::Result;
use crate::flatten::{EnumeratedNode, flatten};
use crate::model::NodeRange;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

pub const AST_FILE_NAME: &str = "asts.jsonl";

/// One line of an `asts.jsonl` file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledAst {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub ast: Vec<OutputNode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputNode {
    pub token: String,
    #[serde(rename = "typeLabel")]
    pub type_label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<NodeRange>,
    pub children: Vec<usize>,
}

/// Writes flattened trees as JSON lines to `<output>/<holdout>/asts.jsonl`.
pub struct JsonAstStorage {
    output_dir: PathBuf,
    with_paths: bool,
    with_ranges: bool,
    writers: HashMap<DatasetHoldout, BufWriter<File>>,
}

impl JsonAstStorage {
    pub fn new(config: &StorageConfig) -> Result<Self> {
        fs::create_dir_all(&config.output_dir)?;
        Ok(Self {
            output_dir: config.output_dir.clone(),
            with_paths: config.with_paths,
            with_ranges: config.with_ranges,
            writers: HashMap::new(),
        })
    }

    fn output_node(&self, record: &EnumeratedNode<'_>) -> OutputNode {
        OutputNode {
            token: record.token().to_string(),
            type_label: record.node.type_label(),
            range: if self.with_ranges {
                record.node.range()
            } else {
                None
            },
            children: record.children.clone(),
        }
    }

    fn writer(&mut self, holdout: DatasetHoldout) -> Result<&mut BufWriter<File>> {
        match self.writers.entry(holdout) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let dir = self.output_dir.join(holdout.dir_name());
                fs::create_dir_all(&dir)?;
                let file = File::create(dir.join(AST_FILE_NAME))?;
                tracing::debug!("opened {} partition in {}", holdout, dir.display());
                Ok(entry.insert(BufWriter::new(file)))
            }
        }
    }
}

impl Storage for JsonAstStorage {
    fn store(&mut self, result: &LabeledResult<'_>, holdout: DatasetHoldout) -> Result<()> {
        let ast = flatten(result.root)
            .iter()
            .map(|record| self.output_node(record))
            .collect();
        let labeled = LabeledAst {
            label: result.label.clone(),
            path: self.with_paths.then(|| result.file_path.clone()),
            ast,
        };
        let writer = self.writer(holdout)?;
        serde_json::to_writer(&mut *writer, &labeled)?;
        writer.write_all(b"\n")?;
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        for (_, mut writer) in self.writers.drain() {
            writer.flush()?;
        }
        Ok(())
    }
}

impl Drop for JsonAstStorage {
    fn drop(&mut self) {
        if let Err(err) = self.close() {
            tracing::warn!("failed to flush AST storage: {}", err);
        }
    }
}
