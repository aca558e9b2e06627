//! Per-function metadata and the extractor interface grammars implement.

use crate::error::ExtractionResult;
use crate::model::{Ast, NodeRange, NodeRef};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionInfoParameter {
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
}

impl FunctionInfoParameter {
    pub fn new(name: impl Into<String>, type_: Option<String>) -> Self {
        Self {
            name: name.into(),
            type_,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnclosingKind {
    Class,
    Enum,
    Method,
    Function,
    /// A closure assigned to a variable, named after the variable.
    VariableDeclaration,
}

/// Nearest construct that structurally contains a function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnclosingElement<'a> {
    pub kind: EnclosingKind,
    pub name: Option<String>,
    pub root: NodeRef<'a>,
}

/// Everything an extractor knows about one function declaration.
///
/// Fields are computed independently; a field that could not be extracted is
/// absent while the others stay populated.
#[derive(Debug, Clone)]
pub struct FunctionInfo<'a> {
    pub root: NodeRef<'a>,
    pub file_path: String,
    /// `None` for anonymous functions.
    pub name_node: Option<NodeRef<'a>>,
    /// `None` when the parameters could not be determined. A function
    /// without parameters has an empty list.
    pub parameters: Option<Vec<FunctionInfoParameter>>,
    pub return_type: Option<String>,
    /// `None` when the grammar has no modifiers at all.
    pub modifiers: Option<Vec<String>>,
    /// `None` when the grammar has no annotations or decorators.
    pub annotations: Option<Vec<String>>,
    pub enclosing_element: Option<EnclosingElement<'a>>,
    pub is_constructor: bool,
    pub body: Option<NodeRef<'a>>,
    pub is_blank: bool,
}

impl<'a> FunctionInfo<'a> {
    pub fn name(&self) -> Option<&'a str> {
        self.name_node.and_then(|node| node.token())
    }

    pub fn summary(&self) -> FunctionSummary {
        FunctionSummary {
            name: self.name().map(str::to_string),
            file_path: self.file_path.clone(),
            range: self.root.range(),
            return_type: self.return_type.clone(),
            parameters: self.parameters.clone(),
            modifiers: self.modifiers.clone(),
            annotations: self.annotations.clone(),
            enclosing: self.enclosing_element.as_ref().map(|e| EnclosingSummary {
                kind: e.kind,
                name: e.name.clone(),
            }),
            is_constructor: self.is_constructor,
            is_blank: self.is_blank,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnclosingSummary {
    pub kind: EnclosingKind,
    pub name: Option<String>,
}

/// Owned, serializable view of a [`FunctionInfo`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionSummary {
    pub name: Option<String>,
    pub file_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<NodeRange>,
    pub return_type: Option<String>,
    pub parameters: Option<Vec<FunctionInfoParameter>>,
    pub modifiers: Option<Vec<String>>,
    pub annotations: Option<Vec<String>>,
    pub enclosing: Option<EnclosingSummary>,
    pub is_constructor: bool,
    pub is_blank: bool,
}

/// Function metadata extraction for one grammar.
///
/// Implementations carry the grammar's label table and never fail: every
/// extraction failure is logged and turned into an absent field.
pub trait FunctionInfoExtractor: Send + Sync {
    /// Short language name, e.g. `"java"`.
    fn language(&self) -> &'static str;

    /// Roots of every function declaration in `ast`, in pre-order.
    fn function_roots<'a>(&self, ast: &'a Ast) -> Vec<NodeRef<'a>>;

    fn extract<'a>(&self, root: NodeRef<'a>, file_path: &str) -> FunctionInfo<'a>;

    fn extract_all<'a>(&self, ast: &'a Ast, file_path: &str) -> Vec<FunctionInfo<'a>> {
        self.function_roots(ast)
            .into_iter()
            .map(|root| self.extract(root, file_path))
            .collect()
    }
}

/// Logs a failed extraction of `field` and degrades it to `None`.
pub fn recover<T>(result: ExtractionResult<T>, field: &'static str, file_path: &str) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(file = file_path, field, "extraction failed: {}", err);
            None
        }
    }
}
