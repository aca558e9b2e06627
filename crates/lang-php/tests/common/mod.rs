use astmill_core::Ast;
use astmill_core::convert::{convert_parse_tree, parse_notation};
use std::path::Path;

pub fn parse(notation: &str) -> Ast {
    let (tree, tables) = parse_notation(notation).expect("invalid notation");
    convert_parse_tree(&tree, tables.rule_names(), &tables).expect("conversion failed")
}

pub fn fixture(name: &str) -> Ast {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    parse(&std::fs::read_to_string(path).expect("missing fixture"))
}
