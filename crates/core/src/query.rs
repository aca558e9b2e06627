//! Structural queries over compressed trees.
//!
//! Every query is total: absence is `None` or an empty list. Label
//! comparisons work on interned atoms, so a label that no node of the tree
//! carries short-circuits to "no match" without touching the nodes.

use crate::model::NodeRef;

pub use crate::model::decompose;

fn ends_with(node: NodeRef<'_>, label: &str, last: bool) -> bool {
    let Some(key) = node.ast().atom_key(label) else {
        return false;
    };
    let keys = node.label_keys();
    let end = if last { keys.last() } else { keys.first() };
    end == Some(&key)
}

pub fn last_atom_is(node: NodeRef<'_>, label: &str) -> bool {
    ends_with(node, label, true)
}

pub fn last_atom_in(node: NodeRef<'_>, labels: &[&str]) -> bool {
    labels.iter().any(|label| last_atom_is(node, label))
}

pub fn first_atom_is(node: NodeRef<'_>, label: &str) -> bool {
    ends_with(node, label, false)
}

pub fn first_atom_in(node: NodeRef<'_>, labels: &[&str]) -> bool {
    labels.iter().any(|label| first_atom_is(node, label))
}

/// First direct child whose chain starts with `label`.
///
/// A compressed child keeps the rule it was reached through as its first
/// atom, so `methodDeclaration`'s `typeTypeOrVoid` child is still found after
/// it was folded into `typeTypeOrVoid|typeType|primitiveType|INT`.
pub fn child_of_type<'a>(node: NodeRef<'a>, label: &str) -> Option<NodeRef<'a>> {
    node.children().find(|child| first_atom_is(*child, label))
}

/// All direct children whose chain starts with `label`, in order.
pub fn children_of_type<'a>(node: NodeRef<'a>, label: &str) -> Vec<NodeRef<'a>> {
    node.children()
        .filter(|child| first_atom_is(*child, label))
        .collect()
}

/// `[node]` if `node` itself ends in `label`, otherwise its children of that type.
pub fn self_or_children_of_type<'a>(node: NodeRef<'a>, label: &str) -> Vec<NodeRef<'a>> {
    if last_atom_is(node, label) {
        vec![node]
    } else {
        children_of_type(node, label)
    }
}

/// Leaf tokens of the subtree in pre-order, concatenated without separator.
pub fn tokens_from_subtree(node: NodeRef<'_>) -> String {
    node.preorder()
        .filter(|n| n.is_leaf())
        .filter_map(|n| n.token())
        .collect()
}

/// Nearest proper ancestor matching `predicate`.
pub fn find_enclosing_by<'a, P>(node: NodeRef<'a>, mut predicate: P) -> Option<NodeRef<'a>>
where
    P: FnMut(NodeRef<'a>) -> bool,
{
    std::iter::successors(node.parent(), |n| n.parent()).find(|n| predicate(*n))
}

/// Nodes of the subtree, `node` included, whose chain ends in `label`.
pub fn descendants_of_type<'a>(node: NodeRef<'a>, label: &str) -> Vec<NodeRef<'a>> {
    if node.ast().atom_key(label).is_none() {
        return Vec::new();
    }
    find_descendants(node, |n| last_atom_is(n, label))
}

pub fn find_descendants<'a, P>(node: NodeRef<'a>, mut predicate: P) -> Vec<NodeRef<'a>>
where
    P: FnMut(NodeRef<'a>) -> bool,
{
    node.preorder().filter(|n| predicate(*n)).collect()
}
