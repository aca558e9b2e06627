mod common;

use astmill_core::{EnclosingKind, FunctionInfo, FunctionInfoExtractor, FunctionInfoParameter};
use astmill_php::PhpFunctionInfoExtractor;
use common::{fixture, parse};

fn named<'a>(functions: &'a [FunctionInfo<'a>], name: &str) -> &'a FunctionInfo<'a> {
    functions
        .iter()
        .find(|f| f.name() == Some(name))
        .expect("function not found")
}

#[test]
fn given_closure_assigned_to_variable_when_extracting_then_variable_encloses_it() {
    let ast = fixture("closure_assignment.tree");
    let functions = PhpFunctionInfoExtractor::new().extract_all(&ast, "index.php");
    assert_eq!(functions.len(), 1);

    let info = &functions[0];
    assert_eq!(info.name(), None);
    let enclosing = info.enclosing_element.as_ref().unwrap();
    assert_eq!(enclosing.kind, EnclosingKind::VariableDeclaration);
    assert_eq!(enclosing.name.as_deref(), Some("x"));
    assert_eq!(info.parameters, Some(vec![]));
    assert!(info.is_blank);
    assert!(!info.is_constructor);
}

#[test]
fn given_named_function_when_extracting_then_parameters_keep_reference_and_splat_marks() {
    let ast = fixture("functions.tree");
    let functions = PhpFunctionInfoExtractor.extract_all(&ast, "lib.php");
    let foo = named(&functions, "foo");

    assert_eq!(
        foo.parameters,
        Some(vec![
            FunctionInfoParameter::new("$a", Some("int".into())),
            FunctionInfoParameter::new("&...$rest", None),
            FunctionInfoParameter::new("$b", None),
        ])
    );
    assert_eq!(foo.return_type.as_deref(), Some("string"));
    assert!(foo.enclosing_element.is_none());
    assert!(!foo.is_blank);
}

#[test]
fn given_class_method_when_extracting_then_modifiers_and_class_are_found() {
    let ast = fixture("functions.tree");
    let functions = PhpFunctionInfoExtractor.extract_all(&ast, "lib.php");
    assert_eq!(functions.len(), 3);

    let make = named(&functions, "make");
    assert_eq!(
        make.modifiers,
        Some(vec!["public".to_string(), "static".to_string()])
    );
    assert_eq!(make.annotations, None);
    assert_eq!(make.parameters, Some(vec![]));
    assert!(!make.is_blank);
    let enclosing = make.enclosing_element.as_ref().unwrap();
    assert_eq!(enclosing.kind, EnclosingKind::Class);
    assert_eq!(enclosing.name.as_deref(), Some("C"));
}

#[test]
fn given_arrow_function_in_method_when_extracting_then_nearest_assignment_encloses_it() {
    let ast = fixture("functions.tree");
    let functions = PhpFunctionInfoExtractor.extract_all(&ast, "lib.php");
    let arrow = functions
        .iter()
        .find(|f| f.name().is_none())
        .unwrap();

    assert_eq!(
        arrow.parameters,
        Some(vec![FunctionInfoParameter::new("$y", None)])
    );
    let enclosing = arrow.enclosing_element.as_ref().unwrap();
    assert_eq!(enclosing.kind, EnclosingKind::VariableDeclaration);
    assert_eq!(enclosing.name.as_deref(), Some("f"));
    assert!(arrow.body.is_none());
    assert!(arrow.is_blank);

    let assignment = enclosing.root;
    let method = astmill_core::query::find_enclosing_by(assignment, |n| {
        astmill_core::query::first_atom_is(n, "classStatement")
    })
    .unwrap();
    assert_eq!(
        astmill_core::query::child_of_type(method, "identifier").and_then(|n| n.token()),
        Some("make")
    );
}

#[test]
fn given_abstract_method_when_extracting_then_it_is_blank() {
    let ast = parse(
        "(classDeclaration (classEntryType Class:'class') (identifier Label:'C') OpenCurlyBracket:'{' \
         (classStatement (memberModifiers (memberModifier Abstract:'abstract')) Function_:'function' \
          (identifier Label:'run') OpenRoundBracket:'(' (formalParameterList (formalParameter (variableInitializer VarName:'$n'))) CloseRoundBracket:')' \
          (methodBody SemiColon:';')) \
         CloseCurlyBracket:'}')",
    );
    let info = PhpFunctionInfoExtractor.extract_all(&ast, "C.php").remove(0);
    assert!(info.is_blank);
    assert_eq!(info.modifiers.unwrap(), vec!["abstract"]);
    assert_eq!(
        info.parameters,
        Some(vec![FunctionInfoParameter::new("$n", None)])
    );
}

#[test]
fn given_parameter_without_variable_when_extracting_then_only_that_parameter_is_dropped() {
    let ast = parse(
        "(functionDeclaration Function_:'function' (identifier Label:'g') OpenRoundBracket:'(' \
         (formalParameterList (formalParameter (typeHint (primitiveType IntType:'int')) Ellipsis:'...') \
          Comma:',' (formalParameter (typeHint (primitiveType IntType:'int')) (variableInitializer VarName:'$ok'))) \
         CloseRoundBracket:')' (blockStatement OpenCurlyBracket:'{' (innerStatementList) CloseCurlyBracket:'}'))",
    );
    let info = PhpFunctionInfoExtractor.extract_all(&ast, "g.php").remove(0);
    assert_eq!(
        info.parameters,
        Some(vec![FunctionInfoParameter::new("$ok", Some("int".into()))])
    );
}
