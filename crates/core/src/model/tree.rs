use super::label::{LABEL_SEPARATOR, join_atoms};
use super::range::NodeRange;
use lasso::{Rodeo, Spur};
use std::fmt;

/// Index of a node inside its [`Ast`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone)]
pub(crate) struct NodeData {
    /// Interned atoms, outermost first. Never empty.
    pub(crate) label: Vec<Spur>,
    pub(crate) token: Option<String>,
    pub(crate) range: Option<NodeRange>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

/// A tree of grammar nodes stored in one arena.
///
/// Children are owned through the arena; the parent link is only an index
/// back into it. Trees are built once through [`AstBuilder`] and are read-only
/// afterwards: normalization passes produce a new `Ast` instead of editing
/// nodes in place.
#[derive(Debug, Clone)]
pub struct Ast {
    nodes: Vec<NodeData>,
    root: NodeId,
    atoms: Rodeo,
}

impl Ast {
    pub fn root(&self) -> NodeRef<'_> {
        NodeRef {
            ast: self,
            id: self.root,
        }
    }

    /// Number of nodes in the arena. Every arena node is reachable from the root.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Checks the parent/child links: the root has no parent, and every other
    /// node is listed exactly once among its parent's children.
    pub fn is_consistent(&self) -> bool {
        if self.nodes[self.root.index()].parent.is_some() {
            return false;
        }
        self.nodes.iter().enumerate().all(|(index, data)| {
            let id = NodeId(index as u32);
            let children_point_back = data
                .children
                .iter()
                .all(|child| self.nodes[child.index()].parent == Some(id));
            let listed_by_parent = match data.parent {
                Some(parent) => {
                    self.nodes[parent.index()]
                        .children
                        .iter()
                        .filter(|c| **c == id)
                        .count()
                        == 1
                }
                None => id == self.root,
            };
            children_point_back && listed_by_parent
        })
    }

    /// Interned key of an atom, if any node of this tree uses it.
    pub(crate) fn atom_key(&self, atom: &str) -> Option<Spur> {
        self.atoms.get(atom)
    }

    pub(crate) fn resolve(&self, key: &Spur) -> &str {
        self.atoms.resolve(key)
    }

    pub(crate) fn data(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.index()]
    }

    pub(crate) fn into_parts(self) -> (Vec<NodeData>, NodeId, Rodeo) {
        (self.nodes, self.root, self.atoms)
    }
}

/// Appends nodes parent-first; a node's children keep the order in which
/// they were added.
#[derive(Debug, Default)]
pub struct AstBuilder {
    nodes: Vec<NodeData>,
    atoms: Rodeo,
}

impl AstBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reuses an existing interner so that rebuilt trees keep their atom keys.
    pub(crate) fn with_atoms(atoms: Rodeo) -> Self {
        Self {
            nodes: Vec::new(),
            atoms,
        }
    }

    /// Adds a node labeled with a single atom, taken verbatim.
    pub fn add_node(
        &mut self,
        atom: &str,
        token: Option<String>,
        range: Option<NodeRange>,
        parent: Option<NodeId>,
    ) -> NodeId {
        let label = vec![self.atoms.get_or_intern(atom)];
        self.add_interned(label, token, range, parent)
    }

    /// Adds a node from a serialized compound label (`a|b|c`).
    pub fn add_compound_node(
        &mut self,
        type_label: &str,
        token: Option<String>,
        range: Option<NodeRange>,
        parent: Option<NodeId>,
    ) -> NodeId {
        let label = type_label
            .split(LABEL_SEPARATOR)
            .map(|atom| self.atoms.get_or_intern(atom))
            .collect();
        self.add_interned(label, token, range, parent)
    }

    pub(crate) fn add_interned(
        &mut self,
        label: Vec<Spur>,
        token: Option<String>,
        range: Option<NodeRange>,
        parent: Option<NodeId>,
    ) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(NodeData {
            label,
            token,
            range,
            parent,
            children: Vec::new(),
        });
        if let Some(parent) = parent {
            self.nodes[parent.index()].children.push(id);
        }
        id
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Seals a tree whose root is known to be the first node added.
    pub(crate) fn finish_from_first(self) -> Ast {
        Ast {
            nodes: self.nodes,
            root: NodeId(0),
            atoms: self.atoms,
        }
    }

    /// Seals the tree. Returns `None` when no node was added.
    pub fn finish(self) -> Option<Ast> {
        let root = self.nodes.iter().position(|n| n.parent.is_none())?;
        Some(Ast {
            nodes: self.nodes,
            root: NodeId(root as u32),
            atoms: self.atoms,
        })
    }
}

/// Borrowed handle to one node of an [`Ast`].
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    ast: &'a Ast,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    pub fn id(self) -> NodeId {
        self.id
    }

    pub fn ast(self) -> &'a Ast {
        self.ast
    }

    fn data(self) -> &'a NodeData {
        self.ast.data(self.id)
    }

    pub(crate) fn label_keys(self) -> &'a [Spur] {
        &self.data().label
    }

    /// Atomic labels of this node, outermost first.
    pub fn atoms(self) -> impl DoubleEndedIterator<Item = &'a str> + ExactSizeIterator + 'a {
        let ast = self.ast;
        self.data().label.iter().map(move |key| ast.resolve(key))
    }

    pub fn first_atom(self) -> &'a str {
        self.data()
            .label
            .first()
            .map(|key| self.ast.resolve(key))
            .unwrap_or_default()
    }

    pub fn last_atom(self) -> &'a str {
        self.data()
            .label
            .last()
            .map(|key| self.ast.resolve(key))
            .unwrap_or_default()
    }

    /// The serialized label, atoms joined with `'|'`.
    pub fn type_label(self) -> String {
        join_atoms(self.atoms())
    }

    pub fn token(self) -> Option<&'a str> {
        self.data().token.as_deref()
    }

    pub fn range(self) -> Option<NodeRange> {
        self.data().range
    }

    pub fn parent(self) -> Option<NodeRef<'a>> {
        self.data().parent.map(|id| NodeRef { ast: self.ast, id })
    }

    pub fn children(
        self,
    ) -> impl DoubleEndedIterator<Item = NodeRef<'a>> + ExactSizeIterator + 'a {
        let ast = self.ast;
        self.data()
            .children
            .iter()
            .map(move |id| NodeRef { ast, id: *id })
    }

    pub fn child(self, index: usize) -> Option<NodeRef<'a>> {
        self.data().children.get(index).map(|id| NodeRef {
            ast: self.ast,
            id: *id,
        })
    }

    pub fn child_count(self) -> usize {
        self.data().children.len()
    }

    pub fn is_leaf(self) -> bool {
        self.data().children.is_empty()
    }

    pub fn is_root(self) -> bool {
        self.data().parent.is_none()
    }

    /// This node and all of its descendants, in pre-order.
    pub fn preorder(self) -> Preorder<'a> {
        Preorder { stack: vec![self] }
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.ast, other.ast) && self.id == other.id
    }
}

impl Eq for NodeRef<'_> {}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id.0)
            .field("label", &self.type_label())
            .field("token", &self.token())
            .finish()
    }
}

pub struct Preorder<'a> {
    stack: Vec<NodeRef<'a>>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = NodeRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().rev());
        Some(node)
    }
}
