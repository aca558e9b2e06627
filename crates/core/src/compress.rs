//! Normalizations that remove single-child chains.
//!
//! Both passes walk the tree once, top-down, and rebuild it into a fresh
//! arena that shares the atom interner of the input.

use crate::model::{Ast, AstBuilder, NodeId};

/// Folds every maximal single-child chain into one node.
///
/// The folded node is labeled with the atoms of the whole chain, outermost
/// first, takes the token of the innermost node and the range of the
/// outermost one, and adopts the innermost node's children.
pub fn compress(ast: Ast) -> Ast {
    rebuild(ast, true)
}

/// Replaces every single-child chain by its innermost node.
pub fn simplify(ast: Ast) -> Ast {
    rebuild(ast, false)
}

fn rebuild(ast: Ast, fold_labels: bool) -> Ast {
    let (mut nodes, root, atoms) = ast.into_parts();
    let mut builder = AstBuilder::with_atoms(atoms);
    let mut stack: Vec<(NodeId, Option<NodeId>)> = vec![(root, None)];

    while let Some((head, parent)) = stack.pop() {
        let mut tail = head;
        let mut label = Vec::new();
        loop {
            if fold_labels {
                label.extend_from_slice(&nodes[tail.index()].label);
            }
            match nodes[tail.index()].children.as_slice() {
                [only] => tail = *only,
                _ => break,
            }
        }

        let (label, range) = if fold_labels {
            (label, nodes[head.index()].range)
        } else {
            let innermost = &mut nodes[tail.index()];
            (std::mem::take(&mut innermost.label), innermost.range)
        };
        let token = nodes[tail.index()].token.take();
        let id = builder.add_interned(label, token, range, parent);
        stack.extend(
            nodes[tail.index()]
                .children
                .iter()
                .rev()
                .map(|child| (*child, Some(id))),
        );
    }

    builder.finish_from_first()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NodeRange, Position};

    fn range(from: usize, to: usize) -> Option<NodeRange> {
        Some(NodeRange::new(Position::new(1, from), Position::new(1, to)))
    }

    // block
    // ├── statement ── expression ── IDENTIFIER 'x'
    // └── statement
    //     ├── RETURN 'return'
    //     └── SEMI ';'
    fn sample() -> Ast {
        let mut b = AstBuilder::new();
        let block = b.add_node("block", None, range(0, 12), None);
        let first = b.add_node("statement", None, range(0, 0), Some(block));
        let expr = b.add_node("expression", None, range(0, 0), Some(first));
        b.add_node("IDENTIFIER", Some("x".into()), range(0, 0), Some(expr));
        let second = b.add_node("statement", None, range(2, 8), Some(block));
        b.add_node("RETURN", Some("return".into()), range(2, 7), Some(second));
        b.add_node("SEMI", Some(";".into()), range(8, 8), Some(second));
        b.finish().unwrap()
    }

    #[test]
    fn compress_folds_chain_into_compound_label() {
        let ast = compress(sample());
        assert!(ast.is_consistent());
        assert_eq!(ast.len(), 5);
        let folded = ast.root().child(0).unwrap();
        assert_eq!(folded.type_label(), "statement|expression|IDENTIFIER");
        assert_eq!(folded.token(), Some("x"));
        assert!(folded.is_leaf());
        let kept = ast.root().child(1).unwrap();
        assert_eq!(kept.type_label(), "statement");
        assert_eq!(kept.child_count(), 2);
    }

    #[test]
    fn compress_keeps_outer_range_and_adopts_inner_children() {
        let mut b = AstBuilder::new();
        let unit = b.add_node("compilationUnit", None, range(0, 20), None);
        let decl = b.add_node("typeDeclaration", None, range(0, 19), Some(unit));
        let class = b.add_node("classDeclaration", None, range(1, 19), Some(decl));
        b.add_node("CLASS", Some("class".into()), None, Some(class));
        b.add_node("IDENTIFIER", Some("A".into()), None, Some(class));
        let ast = compress(b.finish().unwrap());

        let root = ast.root();
        assert_eq!(
            root.type_label(),
            "compilationUnit|typeDeclaration|classDeclaration"
        );
        assert_eq!(root.range(), range(0, 20));
        assert_eq!(root.token(), None);
        let tokens: Vec<_> = root.children().filter_map(|c| c.token()).collect();
        assert_eq!(tokens, vec!["class", "A"]);
    }

    #[test]
    fn compress_is_idempotent() {
        let once = compress(sample());
        let twice = compress(once.clone());
        let labels = |ast: &Ast| -> Vec<String> {
            ast.root().preorder().map(|n| n.type_label()).collect()
        };
        assert_eq!(labels(&once), labels(&twice));
    }

    #[test]
    fn simplify_keeps_innermost_node_only() {
        let ast = simplify(sample());
        assert!(ast.is_consistent());
        assert!(ast.root().preorder().all(|n| n.child_count() != 1));
        let first = ast.root().child(0).unwrap();
        assert_eq!(first.type_label(), "IDENTIFIER");
        assert_eq!(first.token(), Some("x"));
        assert_eq!(first.parent(), Some(ast.root()));
    }

    #[test]
    fn single_chain_collapses_to_one_node() {
        let mut b = AstBuilder::new();
        let a = b.add_node("a", None, None, None);
        let c = b.add_node("b", None, None, Some(a));
        b.add_node("C", Some("c".into()), None, Some(c));
        let tree = b.finish().unwrap();

        let simplified = simplify(tree.clone());
        assert_eq!(simplified.len(), 1);
        assert_eq!(simplified.root().type_label(), "C");
        assert!(simplified.root().is_root());

        let compressed = compress(tree);
        assert_eq!(compressed.root().type_label(), "a|b|C");
        assert_eq!(compressed.root().token(), Some("c"));
    }
}
