//! Java support: function metadata over trees of the ANTLR Java grammar and
//! the tree-sitter grammar used to mine raw source files.

mod extractor;
pub mod labels;

pub use extractor::JavaFunctionInfoExtractor;

/// File extensions mined as Java sources.
pub const EXTENSIONS: &[&str] = &["java"];

pub fn tree_sitter_language() -> tree_sitter::Language {
    tree_sitter_java::LANGUAGE.into()
}
