mod common;

use astmill_core::{EnclosingKind, FunctionInfo, FunctionInfoExtractor, FunctionInfoParameter};
use astmill_python::PythonFunctionInfoExtractor;
use common::{fixture, parse};

const PASS_SUITE: &str = "(suite (simple_stmt (small_stmt (pass_stmt PASS:'pass')) NEWLINE:'\\n'))";

fn top_level(params: &str) -> String {
    format!(
        "(file_input (stmt (compound_stmt (funcdef DEF:'def' NAME:'f' \
         (parameters OPEN_PAREN:'(' {} CLOSE_PAREN:')') COLON:':' {}))) EOF:'<EOF>')",
        params, PASS_SUITE
    )
}

fn by_name<'a>(functions: &'a [FunctionInfo<'a>], name: &str) -> &'a FunctionInfo<'a> {
    functions
        .iter()
        .find(|f| f.name() == Some(name))
        .expect("function not found")
}

#[test]
fn given_top_level_pass_function_when_extracting_then_it_has_no_enclosing_element() {
    let ast = parse(&top_level(""));
    let functions = PythonFunctionInfoExtractor::new().extract_all(&ast, "m.py");
    assert_eq!(functions.len(), 1);

    let info = &functions[0];
    assert_eq!(info.name(), Some("f"));
    assert!(info.enclosing_element.is_none());
    assert!(!info.is_constructor);
    assert_eq!(info.parameters, Some(vec![]));
    assert!(info.is_blank);
    assert_eq!(info.return_type, None);
}

#[test]
fn given_init_method_when_extracting_then_constructor_and_typed_parameters_are_found() {
    let ast = fixture("point.tree");
    let functions = PythonFunctionInfoExtractor.extract_all(&ast, "point.py");
    assert_eq!(functions.len(), 3);

    let init = by_name(&functions, "__init__");
    assert!(init.is_constructor);
    assert_eq!(
        init.parameters,
        Some(vec![
            FunctionInfoParameter::new("self", None),
            FunctionInfoParameter::new("x", Some("int".into())),
            FunctionInfoParameter::new("y", None),
        ])
    );
    assert_eq!(init.return_type.as_deref(), Some("None"));
    assert!(!init.is_blank);
    let enclosing = init.enclosing_element.as_ref().unwrap();
    assert_eq!(enclosing.kind, EnclosingKind::Class);
    assert_eq!(enclosing.name.as_deref(), Some("Point"));
}

#[test]
fn given_nested_function_when_extracting_then_enclosing_method_is_classified() {
    let ast = fixture("point.tree");
    let functions = PythonFunctionInfoExtractor.extract_all(&ast, "point.py");

    let outer = by_name(&functions, "outer");
    assert_eq!(
        outer.parameters,
        Some(vec![FunctionInfoParameter::new("self", None)])
    );
    assert!(!outer.is_blank);

    let inner = by_name(&functions, "inner");
    let enclosing = inner.enclosing_element.as_ref().unwrap();
    assert_eq!(enclosing.kind, EnclosingKind::Method);
    assert_eq!(enclosing.name.as_deref(), Some("outer"));
    assert!(inner.is_blank);
}

#[test]
fn given_function_inside_function_when_extracting_then_enclosing_is_a_function() {
    let ast = parse(&format!(
        "(file_input (stmt (compound_stmt (funcdef DEF:'def' NAME:'outer' \
         (parameters OPEN_PAREN:'(' CLOSE_PAREN:')') COLON:':' \
         (suite NEWLINE:'\\n' INDENT:'  ' \
           (stmt (compound_stmt (funcdef DEF:'def' NAME:'inner' (parameters OPEN_PAREN:'(' CLOSE_PAREN:')') COLON:':' {}))) \
           DEDENT:'')))) EOF:'<EOF>')",
        PASS_SUITE
    ));
    let functions = PythonFunctionInfoExtractor.extract_all(&ast, "m.py");
    let inner = by_name(&functions, "inner");
    let enclosing = inner.enclosing_element.as_ref().unwrap();
    assert_eq!(enclosing.kind, EnclosingKind::Function);
    assert_eq!(enclosing.name.as_deref(), Some("outer"));
}

#[test]
fn given_single_bare_parameter_when_extracting_then_folded_list_is_one_parameter() {
    let ast = parse(&top_level("(typedargslist (tfpdef NAME:'x'))"));
    let info = PythonFunctionInfoExtractor.extract_all(&ast, "m.py").remove(0);
    assert_eq!(info.parameters, Some(vec![FunctionInfoParameter::new("x", None)]));
}

#[test]
fn given_parameter_without_name_when_extracting_then_parameters_are_unknown() {
    let ast = parse(&top_level(
        "(typedargslist (tfpdef COLON:':' (test (atom NAME:'int'))) COMMA:',' (tfpdef NAME:'b'))",
    ));
    let info = PythonFunctionInfoExtractor.extract_all(&ast, "m.py").remove(0);
    assert_eq!(info.parameters, None);
    assert_eq!(info.name(), Some("f"));
    assert!(info.is_blank);
}

#[test]
fn given_decorated_function_when_extracting_then_decorator_names_are_annotations() {
    let ast = parse(&format!(
        "(file_input (stmt (compound_stmt (decorated \
           (decorators \
             (decorator AT:'@' (dotted_name NAME:'staticmethod') NEWLINE:'\\n') \
             (decorator AT:'@' (dotted_name NAME:'a' DOT:'.' NAME:'b') NEWLINE:'\\n')) \
           (funcdef DEF:'def' NAME:'g' (parameters OPEN_PAREN:'(' CLOSE_PAREN:')') COLON:':' {})))) \
         EOF:'<EOF>')",
        PASS_SUITE
    ));
    let info = PythonFunctionInfoExtractor.extract_all(&ast, "m.py").remove(0);
    assert_eq!(info.annotations.unwrap(), vec!["staticmethod", "a.b"]);
    assert_eq!(info.modifiers, None);
}
