//! Adapter for tree-sitter grammars.
//!
//! Named and anonymous kinds play the part of rule names and token symbols.
//! A node with children is a rule application, a childless node is a
//! terminal, and `ERROR` or missing nodes become error nodes.

use super::{ParseNodeKind, ParseTree, Vocabulary, build_ast, convert_parse_tree};
use crate::error::{AstError, Result};
use crate::model::{Ast, NodeRange, Position};
use tree_sitter::{Language, Node, Parser};

#[derive(Clone, Copy)]
pub struct TsParseTree<'t> {
    node: Node<'t>,
    source: &'t str,
}

impl<'t> TsParseTree<'t> {
    pub fn new(node: Node<'t>, source: &'t str) -> Self {
        Self { node, source }
    }
}

impl TsParseTree<'_> {
    /// Position of the node's last byte. tree-sitter ends are exclusive, so an
    /// end at column 0 means the last byte closes the previous line.
    fn last_position(&self) -> Position {
        let (start_byte, end_byte) = (self.node.start_byte(), self.node.end_byte());
        let end = self.node.end_position();
        if end_byte <= start_byte || end.column > 0 {
            return Position::new(end.row + 1, end.column.saturating_sub(1));
        }
        let last = end_byte - 1;
        let line_start = self
            .source
            .as_bytes()
            .get(..last)
            .and_then(|before| before.iter().rposition(|b| *b == b'\n'))
            .map_or(0, |newline| newline + 1);
        Position::new(end.row, last - line_start)
    }
}

impl ParseTree for TsParseTree<'_> {
    fn kind(&self) -> ParseNodeKind {
        if self.node.is_error() || self.node.is_missing() {
            ParseNodeKind::Error
        } else if self.node.child_count() == 0 {
            ParseNodeKind::Terminal(i32::from(self.node.kind_id()))
        } else {
            ParseNodeKind::Rule(usize::from(self.node.kind_id()))
        }
    }

    fn text(&self) -> Option<String> {
        match self.kind() {
            ParseNodeKind::Rule(_) => None,
            _ => self
                .node
                .utf8_text(self.source.as_bytes())
                .ok()
                .map(str::to_string),
        }
    }

    fn range(&self) -> Option<NodeRange> {
        let start = self.node.start_position();
        let start = Position::new(start.row + 1, start.column);
        Some(NodeRange::new(start, self.last_position().max(start)))
    }

    fn children(&self) -> Vec<Self> {
        let mut cursor = self.node.walk();
        self.node
            .children(&mut cursor)
            .map(|node| TsParseTree::new(node, self.source))
            .collect()
    }
}

/// Kind names of a tree-sitter language, indexed by kind id.
pub struct TsVocabulary {
    language: Language,
    rule_names: Vec<&'static str>,
}

impl TsVocabulary {
    pub fn new(language: Language) -> Self {
        let rule_names = (0..language.node_kind_count())
            .map(|id| {
                u16::try_from(id)
                    .ok()
                    .and_then(|id| language.node_kind_for_id(id))
                    .unwrap_or_default()
            })
            .collect();
        Self {
            language,
            rule_names,
        }
    }

    pub fn rule_names(&self) -> &[&'static str] {
        &self.rule_names
    }
}

impl Vocabulary for TsVocabulary {
    fn symbolic_name(&self, token_type: i32) -> Option<&str> {
        let id = u16::try_from(token_type).ok()?;
        self.language.node_kind_for_id(id)
    }
}

fn parse_with<F>(language: &Language, source: &str, convert: F) -> Result<Ast>
where
    F: for<'t> FnOnce(TsParseTree<'t>, &TsVocabulary) -> Result<Ast>,
{
    let mut parser = Parser::new();
    parser
        .set_language(language)
        .map_err(|e| AstError::Parsing(e.to_string()))?;
    let tree = parser
        .parse(source, None)
        .ok_or_else(|| AstError::Parsing("parser produced no tree".to_string()))?;
    if tree.root_node().has_error() {
        tracing::debug!("source contains syntax errors, keeping error nodes");
    }
    let vocabulary = TsVocabulary::new(language.clone());
    convert(TsParseTree::new(tree.root_node(), source), &vocabulary)
}

/// Parses `source` into an uncompressed tree.
pub fn parse_source(language: &Language, source: &str) -> Result<Ast> {
    parse_with(language, source, |tree, vocabulary| {
        build_ast(tree, vocabulary.rule_names(), vocabulary)
    })
}

/// Parses `source` and compresses single-child chains.
pub fn convert_source(language: &Language, source: &str) -> Result<Ast> {
    parse_with(language, source, |tree, vocabulary| {
        convert_parse_tree(tree, vocabulary.rule_names(), vocabulary)
    })
}
