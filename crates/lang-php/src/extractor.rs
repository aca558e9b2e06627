use crate::labels::*;
use astmill_core::error::{ExtractionError, ExtractionResult};
use astmill_core::function::{
    EnclosingElement, EnclosingKind, FunctionInfo, FunctionInfoExtractor, FunctionInfoParameter,
    recover,
};
use astmill_core::model::{Ast, NodeRef};
use astmill_core::query::{
    child_of_type, find_descendants, find_enclosing_by, first_atom_in, first_atom_is,
    last_atom_is, self_or_children_of_type,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct PhpFunctionInfoExtractor;

impl PhpFunctionInfoExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl FunctionInfoExtractor for PhpFunctionInfoExtractor {
    fn language(&self) -> &'static str {
        "php"
    }

    fn function_roots<'a>(&self, ast: &'a Ast) -> Vec<NodeRef<'a>> {
        let roots = find_descendants(ast.root(), is_function);
        tracing::debug!("found {} functions", roots.len());
        roots
    }

    fn extract<'a>(&self, root: NodeRef<'a>, file_path: &str) -> FunctionInfo<'a> {
        let body = root.children().find(|c| first_atom_in(*c, BODIES));
        FunctionInfo {
            root,
            file_path: file_path.to_string(),
            name_node: child_of_type(root, FUNCTION_NAME),
            parameters: recover(collect_parameters(root, file_path), "parameters", file_path),
            return_type: element_type(root),
            modifiers: Some(collect_modifiers(root)),
            annotations: None,
            enclosing_element: recover(collect_enclosing(root), "enclosing element", file_path)
                .flatten(),
            // constructors (`__construct`) are not told apart
            is_constructor: false,
            body,
            is_blank: body.is_none_or(has_no_statements),
        }
    }
}

fn is_function(node: NodeRef<'_>) -> bool {
    child_of_type(node, LAMBDA_TOKEN).is_some() || child_of_type(node, FUNCTION_TOKEN).is_some()
}

fn is_method(node: NodeRef<'_>) -> bool {
    is_function(node) && first_atom_is(node, CLASS_MEMBER)
}

fn is_class(node: NodeRef<'_>) -> bool {
    last_atom_is(node, CLASS_DECLARATION)
}

fn is_assignment(node: NodeRef<'_>) -> bool {
    first_atom_is(node, EXPRESSION) && child_of_type(node, ASSIGNMENT_OPERATOR).is_some()
}

fn has_no_statements(body: NodeRef<'_>) -> bool {
    child_of_type(body, STATEMENT_LIST).is_none_or(|list| list.is_leaf() && list.token().is_none())
}

fn element_type(node: NodeRef<'_>) -> Option<String> {
    child_of_type(node, TYPE)
        .and_then(|n| n.token())
        .map(str::to_string)
}

fn collect_modifiers(root: NodeRef<'_>) -> Vec<String> {
    child_of_type(root, MEMBER_MODIFIERS)
        .map(|modifiers| {
            modifiers
                .preorder()
                .filter(|n| n.is_leaf())
                .filter_map(|n| n.token())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn collect_parameters(
    root: NodeRef<'_>,
    file_path: &str,
) -> ExtractionResult<Vec<FunctionInfoParameter>> {
    let Some(list) = child_of_type(root, PARAMETER_LIST) else {
        return Ok(Vec::new());
    };

    // A lone untyped parameter without default is folded into the list.
    if last_atom_is(list, PARAMETER_NAME) || last_atom_is(list, VARIABLE_INITIALIZER) {
        return Ok(vec![parameter(list)?]);
    }
    Ok(self_or_children_of_type(list, PARAMETER)
        .into_iter()
        .filter_map(|node| recover(parameter(node), "parameter", file_path))
        .collect())
}

fn parameter(node: NodeRef<'_>) -> ExtractionResult<FunctionInfoParameter> {
    Ok(FunctionInfoParameter::new(
        parameter_name(node)?,
        element_type(node),
    ))
}

fn parameter_name(node: NodeRef<'_>) -> ExtractionResult<String> {
    if last_atom_is(node, PARAMETER_NAME) {
        return node
            .token()
            .map(str::to_string)
            .ok_or_else(|| ExtractionError::missing("parameter name", node));
    }

    let name = self_or_children_of_type(node, VARIABLE_INITIALIZER)
        .first()
        .and_then(|init| self_or_children_of_type(*init, PARAMETER_NAME).first().copied())
        .and_then(|n| n.token())
        .ok_or_else(|| ExtractionError::missing("parameter name", node))?;

    let mut prefixed = String::new();
    if child_of_type(node, REFERENCE).is_some() {
        prefixed.push('&');
    }
    if child_of_type(node, ELLIPSIS).is_some() {
        prefixed.push_str("...");
    }
    prefixed.push_str(name);
    Ok(prefixed)
}

fn collect_enclosing(root: NodeRef<'_>) -> ExtractionResult<Option<EnclosingElement<'_>>> {
    let Some(node) = find_enclosing_by(root, |n| is_function(n) || is_class(n) || is_assignment(n))
    else {
        return Ok(None);
    };

    let kind = if is_method(node) {
        EnclosingKind::Method
    } else if is_function(node) {
        EnclosingKind::Function
    } else if is_class(node) {
        EnclosingKind::Class
    } else if is_assignment(node) {
        EnclosingKind::VariableDeclaration
    } else {
        return Err(ExtractionError::UnclassifiedEnclosing {
            label: node.type_label(),
        });
    };

    let name = match kind {
        EnclosingKind::VariableDeclaration => node
            .children()
            .find(|c| last_atom_is(*c, PARAMETER_NAME))
            .and_then(|c| c.token())
            .map(|token| token.trim_start_matches(VARIABLE_SIGIL).to_string()),
        _ => child_of_type(node, FUNCTION_NAME)
            .and_then(|n| n.token())
            .map(str::to_string),
    };

    Ok(Some(EnclosingElement {
        kind,
        name,
        root: node,
    }))
}
