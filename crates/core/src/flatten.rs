use crate::model::NodeRef;

/// A node together with its pre-order id and the ids of its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumeratedNode<'a> {
    pub id: usize,
    pub node: NodeRef<'a>,
    pub children: Vec<usize>,
}

impl<'a> EnumeratedNode<'a> {
    /// Token text, empty for nodes without one.
    pub fn token(&self) -> &'a str {
        self.node.token().unwrap_or_default()
    }
}

/// Numbers the subtree of `root` in pre-order starting at 0.
///
/// The record with id `i` is at index `i` of the result, and every child id
/// is greater than its parent's.
pub fn flatten(root: NodeRef<'_>) -> Vec<EnumeratedNode<'_>> {
    let order: Vec<_> = root.preorder().collect();
    let mut ids = vec![None; root.ast().len()];
    for (id, node) in order.iter().enumerate() {
        ids[node.id().index()] = Some(id);
    }

    order
        .into_iter()
        .enumerate()
        .map(|(id, node)| EnumeratedNode {
            id,
            node,
            children: node
                .children()
                .filter_map(|child| ids[child.id().index()])
                .collect(),
        })
        .collect()
}
