use super::{ParseNodeKind, ParseTree, Vocabulary};
use crate::model::{NodeRange, Position};
use std::collections::HashMap;

/// A matched token with the position data a grammar-driven lexer records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub token_type: i32,
    pub text: String,
    /// 1-based.
    pub line: usize,
    /// 0-based character position in the line.
    pub column: usize,
    /// Offset of the first character in the input stream.
    pub start_index: usize,
    /// Offset of the last character, inclusive.
    pub stop_index: usize,
}

impl Token {
    pub fn new(
        token_type: i32,
        text: impl Into<String>,
        line: usize,
        column: usize,
        start_index: usize,
    ) -> Self {
        let text = text.into();
        let stop_index = start_index + text.chars().count().saturating_sub(1);
        Self {
            token_type,
            text,
            line,
            column,
            start_index,
            stop_index,
        }
    }

    /// Single-line span covering the token text.
    pub fn range(&self) -> NodeRange {
        NodeRange::new(Position::new(self.line, self.column), self.end_position())
    }

    fn end_position(&self) -> Position {
        Position::new(
            self.line,
            self.column + self.stop_index.saturating_sub(self.start_index),
        )
    }
}

/// An owned parse tree in the shape a grammar-driven parser produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawTree {
    Rule {
        rule_index: usize,
        /// First token consumed by the rule.
        start: Option<Token>,
        /// Last token consumed by the rule.
        stop: Option<Token>,
        children: Vec<RawTree>,
    },
    Terminal(Token),
    Error(Token),
}

impl RawTree {
    /// A rule node whose boundary tokens are taken from its subtree.
    pub fn rule(rule_index: usize, children: Vec<RawTree>) -> Self {
        let start = children.iter().find_map(|c| c.first_token()).cloned();
        let stop = children.iter().rev().find_map(|c| c.last_token()).cloned();
        RawTree::Rule {
            rule_index,
            start,
            stop,
            children,
        }
    }

    pub fn first_token(&self) -> Option<&Token> {
        match self {
            RawTree::Rule { start, .. } => start.as_ref(),
            RawTree::Terminal(token) | RawTree::Error(token) => Some(token),
        }
    }

    pub fn last_token(&self) -> Option<&Token> {
        match self {
            RawTree::Rule { stop, .. } => stop.as_ref(),
            RawTree::Terminal(token) | RawTree::Error(token) => Some(token),
        }
    }
}

impl<'t> ParseTree for &'t RawTree {
    fn kind(&self) -> ParseNodeKind {
        match self {
            RawTree::Rule { rule_index, .. } => ParseNodeKind::Rule(*rule_index),
            RawTree::Terminal(token) => ParseNodeKind::Terminal(token.token_type),
            RawTree::Error(_) => ParseNodeKind::Error,
        }
    }

    fn text(&self) -> Option<String> {
        match self {
            RawTree::Rule { .. } => None,
            RawTree::Terminal(token) | RawTree::Error(token) => Some(token.text.clone()),
        }
    }

    fn range(&self) -> Option<NodeRange> {
        match self {
            RawTree::Rule {
                start: Some(start),
                stop: Some(stop),
                ..
            } => Some(NodeRange::new(
                Position::new(start.line, start.column),
                stop.end_position(),
            )),
            RawTree::Rule { .. } => None,
            RawTree::Terminal(token) | RawTree::Error(token) => Some(token.range()),
        }
    }

    fn children(&self) -> Vec<Self> {
        match *self {
            RawTree::Rule { children, .. } => children.iter().collect(),
            _ => Vec::new(),
        }
    }
}

/// Rule-name table plus token vocabulary of one grammar.
///
/// Token type `0` is reserved for tokens without a type, such as the text of
/// error nodes.
#[derive(Debug, Clone)]
pub struct GrammarTables {
    rule_names: Vec<String>,
    symbolic_names: Vec<Option<String>>,
    literal_names: Vec<Option<String>>,
    rule_lookup: HashMap<String, usize>,
    token_lookup: HashMap<String, i32>,
}

impl Default for GrammarTables {
    fn default() -> Self {
        Self {
            rule_names: Vec::new(),
            symbolic_names: vec![None],
            literal_names: Vec::new(),
            rule_lookup: HashMap::new(),
            token_lookup: HashMap::new(),
        }
    }
}

impl GrammarTables {
    /// Tables as generated for a grammar: `symbolic_names[t]` names token type `t`.
    pub fn new(rule_names: Vec<String>, symbolic_names: Vec<Option<String>>) -> Self {
        let rule_lookup = rule_names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();
        let token_lookup = symbolic_names
            .iter()
            .enumerate()
            .filter_map(|(i, name)| name.clone().map(|n| (n, i as i32)))
            .collect();
        Self {
            rule_names,
            symbolic_names,
            literal_names: Vec::new(),
            rule_lookup,
            token_lookup,
        }
    }

    pub fn with_literal_names(mut self, literal_names: Vec<Option<String>>) -> Self {
        self.literal_names = literal_names;
        self
    }

    pub fn rule_names(&self) -> &[String] {
        &self.rule_names
    }

    /// Index of `name`, registering the rule if it is new.
    pub fn rule_index(&mut self, name: &str) -> usize {
        if let Some(index) = self.rule_lookup.get(name) {
            return *index;
        }
        let index = self.rule_names.len();
        self.rule_names.push(name.to_string());
        self.rule_lookup.insert(name.to_string(), index);
        index
    }

    /// Token type of `name`, registering the symbol if it is new.
    pub fn token_type(&mut self, name: &str) -> i32 {
        if let Some(token_type) = self.token_lookup.get(name) {
            return *token_type;
        }
        let token_type = self.symbolic_names.len() as i32;
        self.symbolic_names.push(Some(name.to_string()));
        self.token_lookup.insert(name.to_string(), token_type);
        token_type
    }
}

impl Vocabulary for GrammarTables {
    fn symbolic_name(&self, token_type: i32) -> Option<&str> {
        let index = usize::try_from(token_type).ok()?;
        self.symbolic_names.get(index)?.as_deref()
    }

    fn literal_name(&self, token_type: i32) -> Option<&str> {
        let index = usize::try_from(token_type).ok()?;
        self.literal_names.get(index)?.as_deref()
    }
}
