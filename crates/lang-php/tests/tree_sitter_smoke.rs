use astmill_core::convert::convert_source;
use astmill_core::query::descendants_of_type;

#[test]
fn given_php_source_when_converting_with_tree_sitter_then_functions_are_present() {
    let source = "<?php\nfunction foo($a) { return $a; }\n$x = function() {};\n";
    let ast = convert_source(&astmill_php::tree_sitter_language(), source).unwrap();
    assert!(ast.is_consistent());
    assert_eq!(descendants_of_type(ast.root(), "function_definition").len(), 1);
}
