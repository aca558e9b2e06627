use crate::labels::*;
use astmill_core::error::{ExtractionError, ExtractionResult};
use astmill_core::function::{
    EnclosingElement, EnclosingKind, FunctionInfo, FunctionInfoExtractor, FunctionInfoParameter,
    recover,
};
use astmill_core::model::{Ast, NodeRef};
use astmill_core::query::{
    child_of_type, descendants_of_type, find_enclosing_by, first_atom_in, first_atom_is,
    last_atom_in, last_atom_is, tokens_from_subtree,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct JavaFunctionInfoExtractor;

impl JavaFunctionInfoExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl FunctionInfoExtractor for JavaFunctionInfoExtractor {
    fn language(&self) -> &'static str {
        "java"
    }

    fn function_roots<'a>(&self, ast: &'a Ast) -> Vec<NodeRef<'a>> {
        let roots = descendants_of_type(ast.root(), METHOD_DECLARATION);
        tracing::debug!("found {} method declarations", roots.len());
        roots
    }

    fn extract<'a>(&self, root: NodeRef<'a>, file_path: &str) -> FunctionInfo<'a> {
        let body = root.children().find(|c| first_atom_is(*c, METHOD_BODY));
        FunctionInfo {
            root,
            file_path: file_path.to_string(),
            name_node: child_of_type(root, METHOD_NAME),
            parameters: recover(collect_parameters(root), "parameters", file_path),
            return_type: child_of_type(root, METHOD_RETURN_TYPE).map(tokens_from_subtree),
            modifiers: Some(collect_modifiers(root)),
            annotations: Some(collect_annotations(root)),
            enclosing_element: recover(collect_enclosing(root), "enclosing element", file_path)
                .flatten(),
            is_constructor: false,
            body,
            is_blank: body.is_none_or(|b| b.child_count() <= EMPTY_BODY_CHILDREN),
        }
    }
}

/// Modifiers and annotations are siblings of the declaration: they hang off
/// the enclosing class body declaration.
fn siblings<'a>(root: NodeRef<'a>) -> impl Iterator<Item = NodeRef<'a>> {
    root.parent().into_iter().flat_map(|parent| parent.children())
}

fn collect_modifiers(root: NodeRef<'_>) -> Vec<String> {
    siblings(root)
        .filter(|n| first_atom_is(*n, METHOD_MODIFIER) && !last_atom_is(*n, METHOD_ANNOTATION))
        .filter_map(|n| n.token())
        .map(str::to_string)
        .collect()
}

fn collect_annotations(root: NodeRef<'_>) -> Vec<String> {
    siblings(root)
        .filter(|n| last_atom_is(*n, METHOD_ANNOTATION))
        .filter_map(|n| child_of_type(n, ANNOTATION_NAME))
        .map(|name| match name.token() {
            Some(token) => token.to_string(),
            // a.b.Name keeps its dots as separate tokens
            None => tokens_from_subtree(name),
        })
        .collect()
}

fn collect_enclosing(root: NodeRef<'_>) -> ExtractionResult<Option<EnclosingElement<'_>>> {
    let Some(node) = find_enclosing_by(root, |n| last_atom_in(n, ENCLOSING_DECLARATIONS)) else {
        return Ok(None);
    };
    let kind = if last_atom_is(node, CLASS_DECLARATION) {
        EnclosingKind::Class
    } else if last_atom_is(node, ENUM_DECLARATION) {
        EnclosingKind::Enum
    } else {
        return Err(ExtractionError::UnclassifiedEnclosing {
            label: node.type_label(),
        });
    };
    Ok(Some(EnclosingElement {
        kind,
        name: child_of_type(node, ENCLOSING_NAME)
            .and_then(|n| n.token())
            .map(str::to_string),
        root: node,
    }))
}

fn collect_parameters(root: NodeRef<'_>) -> ExtractionResult<Vec<FunctionInfoParameter>> {
    let Some(list) =
        child_of_type(root, METHOD_PARAMETERS).and_then(|p| child_of_type(p, METHOD_PARAMETER_LIST))
    else {
        return Ok(Vec::new());
    };

    // A lone parameter is folded into the list node itself.
    if last_atom_in(list, SINGLE_PARAMETERS) {
        return Ok(vec![parameter(list)?]);
    }
    list.children()
        .filter(|n| first_atom_in(*n, SINGLE_PARAMETERS))
        .map(parameter)
        .collect()
}

fn parameter(node: NodeRef<'_>) -> ExtractionResult<FunctionInfoParameter> {
    let name = child_of_type(node, PARAMETER_NAME)
        .map(tokens_from_subtree)
        .ok_or_else(|| ExtractionError::missing("parameter name", node))?;
    let type_ = child_of_type(node, PARAMETER_TYPE).map(tokens_from_subtree);
    Ok(FunctionInfoParameter::new(name, type_))
}
