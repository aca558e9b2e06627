//! Bracketed parse-tree dumps.
//!
//! ```text
//! (methodDeclaration (typeTypeOrVoid VOID:'void') IDENTIFIER:'run' !'?')
//! ```
//!
//! `(rule child*)` is a rule application, `SYMBOL:'text'` a matched token and
//! `!'text'` an error node. Inside quotes `\'`, `\\`, `\n` and `\t` are
//! escapes. Tokens are laid out on line 1, one column apart, so that ranges
//! derived from them are ordered like the source.

use super::raw::{GrammarTables, RawTree, Token};
use crate::error::{AstError, Result};

struct Cursor<'s> {
    input: &'s str,
    offset: usize,
}

impl<'s> Cursor<'s> {
    fn peek(&self) -> Option<char> {
        self.input[self.offset..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.offset += c.len_utf8();
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn error(&self, message: impl Into<String>) -> AstError {
        AstError::Notation {
            offset: self.offset,
            message: message.into(),
        }
    }

    fn expect(&mut self, expected: char) -> Result<()> {
        match self.bump() {
            Some(c) if c == expected => Ok(()),
            Some(c) => Err(self.error(format!("expected '{}', found '{}'", expected, c))),
            None => Err(self.error(format!("expected '{}', found end of input", expected))),
        }
    }

    fn name(&mut self) -> Result<&'s str> {
        let start = self.offset;
        while self
            .peek()
            .is_some_and(|c| c.is_alphanumeric() || c == '_' || c == '$')
        {
            self.bump();
        }
        if start == self.offset {
            return Err(self.error("expected a rule or token name"));
        }
        Ok(&self.input[start..self.offset])
    }

    fn quoted(&mut self) -> Result<String> {
        self.expect('\'')?;
        let mut text = String::new();
        loop {
            match self.bump() {
                Some('\'') => return Ok(text),
                Some('\\') => match self.bump() {
                    Some('\'') => text.push('\''),
                    Some('\\') => text.push('\\'),
                    Some('n') => text.push('\n'),
                    Some('t') => text.push('\t'),
                    Some(c) => return Err(self.error(format!("unknown escape '\\{}'", c))),
                    None => return Err(self.error("unterminated escape")),
                },
                Some(c) => text.push(c),
                None => return Err(self.error("unterminated token text")),
            }
        }
    }
}

/// Parses a bracketed dump into a tree plus the grammar tables its names
/// were registered in.
pub fn parse_notation(input: &str) -> Result<(RawTree, GrammarTables)> {
    let mut tables = GrammarTables::default();
    let mut cursor = Cursor { input, offset: 0 };
    let mut open: Vec<(usize, Vec<RawTree>)> = Vec::new();
    let mut root = None;
    let mut column = 0;

    loop {
        cursor.skip_whitespace();
        let Some(next) = cursor.peek() else { break };

        if next == ')' {
            let (rule_index, children) = open
                .pop()
                .ok_or_else(|| cursor.error("unbalanced ')'"))?;
            cursor.bump();
            let node = RawTree::rule(rule_index, children);
            match open.last_mut() {
                Some((_, siblings)) => siblings.push(node),
                None => root = Some(node),
            }
            continue;
        }

        if open.is_empty() && (root.is_some() || next != '(') {
            return Err(cursor.error("expected a single top-level rule"));
        }

        let node = match next {
            '(' => {
                cursor.bump();
                let name = cursor.name()?;
                open.push((tables.rule_index(name), Vec::new()));
                continue;
            }
            '!' => {
                cursor.bump();
                let text = cursor.quoted()?;
                RawTree::Error(place(0, text, &mut column))
            }
            _ => {
                let name = cursor.name()?;
                cursor.expect(':')?;
                let text = cursor.quoted()?;
                RawTree::Terminal(place(tables.token_type(name), text, &mut column))
            }
        };
        if let Some((_, siblings)) = open.last_mut() {
            siblings.push(node);
        }
    }

    if !open.is_empty() {
        return Err(cursor.error(format!("{} unclosed rule(s)", open.len())));
    }
    let root = root.ok_or_else(|| cursor.error("empty input"))?;
    Ok((root, tables))
}

fn place(token_type: i32, text: String, column: &mut usize) -> Token {
    let width = text.chars().count();
    let token = Token::new(token_type, text, 1, *column, *column);
    *column += width + 1;
    token
}
