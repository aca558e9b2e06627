use crate::labels::*;
use astmill_core::error::{ExtractionError, ExtractionResult};
use astmill_core::function::{
    EnclosingElement, EnclosingKind, FunctionInfo, FunctionInfoExtractor, FunctionInfoParameter,
    recover,
};
use astmill_core::model::{Ast, NodeRef};
use astmill_core::query::{
    child_of_type, children_of_type, descendants_of_type, find_enclosing_by, last_atom_in,
    last_atom_is, self_or_children_of_type, tokens_from_subtree,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct PythonFunctionInfoExtractor;

impl PythonFunctionInfoExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl FunctionInfoExtractor for PythonFunctionInfoExtractor {
    fn language(&self) -> &'static str {
        "python"
    }

    fn function_roots<'a>(&self, ast: &'a Ast) -> Vec<NodeRef<'a>> {
        let roots = descendants_of_type(ast.root(), FUNCTION);
        tracing::debug!("found {} function definitions", roots.len());
        roots
    }

    fn extract<'a>(&self, root: NodeRef<'a>, file_path: &str) -> FunctionInfo<'a> {
        let name_node = child_of_type(root, FUNCTION_NAME);
        let body = child_of_type(root, BODY);
        FunctionInfo {
            root,
            file_path: file_path.to_string(),
            name_node,
            parameters: recover(collect_parameters(root), "parameters", file_path),
            return_type: child_of_type(root, RETURN_TYPE).map(tokens_from_subtree),
            modifiers: None,
            annotations: Some(collect_decorators(root)),
            enclosing_element: recover(collect_enclosing(root), "enclosing element", file_path)
                .flatten(),
            is_constructor: name_node.and_then(|n| n.token()) == Some(CONSTRUCTOR_NAME),
            body,
            is_blank: body.is_none_or(only_passes),
        }
    }
}

fn only_passes(body: NodeRef<'_>) -> bool {
    body.preorder()
        .filter(|n| n.is_leaf() && !last_atom_in(*n, LAYOUT_TOKENS))
        .all(|n| last_atom_is(n, PASS))
}

fn collect_decorators(root: NodeRef<'_>) -> Vec<String> {
    let Some(decorators) = root
        .parent()
        .filter(|p| last_atom_is(*p, DECORATED))
        .and_then(|p| child_of_type(p, DECORATORS))
    else {
        return Vec::new();
    };
    self_or_children_of_type(decorators, DECORATOR)
        .into_iter()
        .filter_map(|d| child_of_type(d, DECORATOR_NAME))
        .map(tokens_from_subtree)
        .collect()
}

fn collect_parameters(root: NodeRef<'_>) -> ExtractionResult<Vec<FunctionInfoParameter>> {
    let Some(list) =
        child_of_type(root, METHOD_PARAMETERS).and_then(|p| child_of_type(p, METHOD_PARAMETER_LIST))
    else {
        return Ok(Vec::new());
    };

    if last_atom_in(list, &[SINGLE_PARAMETER, PARAMETER_NAME]) {
        return Ok(vec![parameter(list)?]);
    }
    children_of_type(list, SINGLE_PARAMETER)
        .into_iter()
        .map(parameter)
        .collect()
}

fn parameter(node: NodeRef<'_>) -> ExtractionResult<FunctionInfoParameter> {
    // A bare name without annotation or default is folded into the node.
    let name_node = if last_atom_is(node, PARAMETER_NAME) {
        Some(node)
    } else {
        child_of_type(node, PARAMETER_NAME)
    };
    let name = name_node
        .and_then(|n| n.token())
        .ok_or_else(|| ExtractionError::missing("parameter name", node))?;
    let type_ = child_of_type(node, PARAMETER_TYPE).map(tokens_from_subtree);
    Ok(FunctionInfoParameter::new(name, type_))
}

fn collect_enclosing(root: NodeRef<'_>) -> ExtractionResult<Option<EnclosingElement<'_>>> {
    let Some(node) = find_enclosing_by(root, |n| last_atom_in(n, ENCLOSING_DECLARATIONS)) else {
        return Ok(None);
    };
    let (kind, name_label) = if last_atom_is(node, CLASS_DECLARATION) {
        (EnclosingKind::Class, CLASS_NAME)
    } else if last_atom_is(node, FUNCTION) {
        let kind = if is_method(node)? {
            EnclosingKind::Method
        } else {
            EnclosingKind::Function
        };
        (kind, FUNCTION_NAME)
    } else {
        return Err(ExtractionError::UnclassifiedEnclosing {
            label: node.type_label(),
        });
    };
    Ok(Some(EnclosingElement {
        kind,
        name: child_of_type(node, name_label)
            .and_then(|n| n.token())
            .map(str::to_string),
        root: node,
    }))
}

/// A function is a method when it sits directly in the body of a class.
fn is_method(function: NodeRef<'_>) -> ExtractionResult<bool> {
    let Some(body) = function.parent().filter(|p| p.type_label() == BODY) else {
        return Ok(false);
    };
    let owner = body.parent().ok_or_else(|| ExtractionError::DetachedBody {
        label: body.type_label(),
    })?;
    Ok(last_atom_is(owner, CLASS_DECLARATION))
}

#[cfg(test)]
mod tests {
    use super::*;
    use astmill_core::convert::{convert_parse_tree, parse_notation};
    use astmill_core::query::first_atom_is;

    #[test]
    fn body_of_bare_suite_without_owner_is_an_error() {
        let (tree, tables) =
            parse_notation("(suite NEWLINE:'\\n' INDENT:'' (stmt (compound_stmt (funcdef DEF:'def' NAME:'g' (parameters OPEN_PAREN:'(' CLOSE_PAREN:')') COLON:':' (suite PASS:'pass' NEWLINE:'\\n')))) DEDENT:'')")
                .unwrap();
        let ast = convert_parse_tree(&tree, tables.rule_names(), &tables).unwrap();
        let function = descendants_of_type(ast.root(), FUNCTION)[0];
        assert!(first_atom_is(function, "stmt"));
        // the function hangs directly off a root suite
        assert!(matches!(
            is_method(function),
            Err(ExtractionError::DetachedBody { .. })
        ));
    }
}
