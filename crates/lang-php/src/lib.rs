//! PHP support: function metadata over trees of the ANTLR PHP grammar and
//! the tree-sitter grammar used to mine raw source files.

mod extractor;
pub mod labels;

pub use extractor::PhpFunctionInfoExtractor;

pub const EXTENSIONS: &[&str] = &["php"];

pub fn tree_sitter_language() -> tree_sitter::Language {
    tree_sitter_php::LANGUAGE_PHP.into()
}
