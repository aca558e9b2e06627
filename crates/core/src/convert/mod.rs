//! Turning a grammar-driven parse tree into an [`Ast`].
//!
//! The parser itself is outside this crate. Anything that can describe its
//! nodes as rule applications, matched terminals or error nodes implements
//! [`ParseTree`]; the rule-name table and the [`Vocabulary`] translate the
//! parser's numeric codes into labels.

mod notation;
mod raw;
mod treesitter;

pub use notation::parse_notation;
pub use raw::{GrammarTables, RawTree, Token};
pub use treesitter::{TsParseTree, TsVocabulary, convert_source, parse_source};

use crate::compress::compress;
use crate::error::{AstError, Result};
use crate::model::{Ast, AstBuilder, NodeRange};

/// Label given to nodes the parser could not fit into any rule.
pub const ERROR_LABEL: &str = "Error";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseNodeKind {
    /// Application of the grammar rule at this index of the rule-name table.
    Rule(usize),
    /// A matched token of this type.
    Terminal(i32),
    /// Input the parser skipped or could not match.
    Error,
}

pub trait ParseTree: Sized {
    fn kind(&self) -> ParseNodeKind;

    /// Literal text of a terminal or error node.
    fn text(&self) -> Option<String>;

    /// Source span, or `None` when the parser did not record one.
    fn range(&self) -> Option<NodeRange>;

    /// Direct children in production order. Terminals and error nodes have none.
    fn children(&self) -> Vec<Self>;
}

pub trait Vocabulary {
    fn symbolic_name(&self, token_type: i32) -> Option<&str>;

    /// Quoted literal of implicit tokens such as `'('`, used when a token type
    /// has no symbolic name.
    fn literal_name(&self, _token_type: i32) -> Option<&str> {
        None
    }
}

fn terminal_label(vocabulary: &dyn Vocabulary, token_type: i32) -> String {
    vocabulary
        .symbolic_name(token_type)
        .or_else(|| vocabulary.literal_name(token_type))
        .map(str::to_string)
        .unwrap_or_else(|| format!("<{}>", token_type))
}

/// Builds the uncompressed tree: one node per rule application, terminal and
/// error node.
pub fn build_ast<T, S>(tree: T, rule_names: &[S], vocabulary: &dyn Vocabulary) -> Result<Ast>
where
    T: ParseTree,
    S: AsRef<str>,
{
    let mut builder = AstBuilder::new();
    let mut stack = vec![(tree, None)];

    while let Some((node, parent)) = stack.pop() {
        match node.kind() {
            ParseNodeKind::Rule(index) => {
                let name = rule_names
                    .get(index)
                    .ok_or(AstError::UnknownRule(index))?
                    .as_ref();
                let id = builder.add_node(name, None, node.range(), parent);
                // Reversed so that children are popped, and therefore added, in order.
                stack.extend(node.children().into_iter().rev().map(|c| (c, Some(id))));
            }
            ParseNodeKind::Terminal(token_type) => {
                let label = terminal_label(vocabulary, token_type);
                builder.add_node(&label, node.text(), node.range(), parent);
            }
            ParseNodeKind::Error => {
                builder.add_node(ERROR_LABEL, node.text(), node.range(), parent);
            }
        }
    }

    builder
        .finish()
        .ok_or_else(|| AstError::Parsing("parse tree has no nodes".to_string()))
}

/// Converts a parse tree and compresses single-child chains once, top-down.
pub fn convert_parse_tree<T, S>(
    tree: T,
    rule_names: &[S],
    vocabulary: &dyn Vocabulary,
) -> Result<Ast>
where
    T: ParseTree,
    S: AsRef<str>,
{
    let ast = build_ast(tree, rule_names, vocabulary)?;
    tracing::debug!("converted parse tree into {} nodes", ast.len());
    Ok(compress(ast))
}
