use serde::{Deserialize, Serialize};

/// A point in the source: 1-based line, 0-based column.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeRange {
    pub start: Position,
    pub end: Position,
}

impl NodeRange {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_line_and_column_fields() {
        let range = NodeRange::new(Position::new(1, 0), Position::new(1, 5));
        let json = serde_json::to_string(&range).unwrap();
        assert_eq!(
            json,
            r#"{"start":{"line":1,"column":0},"end":{"line":1,"column":5}}"#
        );
    }
}
