//! Sinks for labeled trees, one output stream per dataset partition.

mod json;

pub use json::{JsonAstStorage, LabeledAst, OutputNode};

use crate::error::Result;
use crate::model::NodeRef;
use std::fmt;
use std::str::FromStr;

/// Dataset partition a tree is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DatasetHoldout {
    Train,
    Validation,
    Test,
    /// No split.
    #[default]
    None,
}

impl DatasetHoldout {
    pub fn dir_name(self) -> &'static str {
        match self {
            DatasetHoldout::Train => "train",
            DatasetHoldout::Validation => "val",
            DatasetHoldout::Test => "test",
            DatasetHoldout::None => "data",
        }
    }
}

impl fmt::Display for DatasetHoldout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

impl FromStr for DatasetHoldout {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "train" => Ok(DatasetHoldout::Train),
            "val" | "validation" => Ok(DatasetHoldout::Validation),
            "test" => Ok(DatasetHoldout::Test),
            "data" | "none" => Ok(DatasetHoldout::None),
            other => Err(format!(
                "unknown holdout '{}', expected train, val, test or data",
                other
            )),
        }
    }
}

/// A tree plus the label it is stored under.
#[derive(Debug, Clone)]
pub struct LabeledResult<'a> {
    pub root: NodeRef<'a>,
    pub label: String,
    pub file_path: String,
}

pub trait Storage {
    fn store(&mut self, result: &LabeledResult<'_>, holdout: DatasetHoldout) -> Result<()>;

    /// Flushes and releases every open partition.
    fn close(&mut self) -> Result<()>;
}
