//! Python support: function metadata over trees of the ANTLR Python 3
//! grammar and the tree-sitter grammar used to mine raw source files.

mod extractor;
pub mod labels;

pub use extractor::PythonFunctionInfoExtractor;

pub const EXTENSIONS: &[&str] = &["py"];

pub fn tree_sitter_language() -> tree_sitter::Language {
    tree_sitter_python::LANGUAGE.into()
}
