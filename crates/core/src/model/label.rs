//! Compound type labels.
//!
//! Compression folds a chain of single-child nodes into one node whose label is
//! the chain of atomic labels, outermost first. Inside an [`Ast`](super::Ast) the
//! chain is kept as a sequence of interned atoms; the `'|'`-joined string form
//! only exists at the serialization boundary.

pub const LABEL_SEPARATOR: char = '|';

/// Splits a joined compound label into its atoms, outermost first.
///
/// A label without separators decomposes into itself.
pub fn decompose(type_label: &str) -> Vec<&str> {
    type_label.split(LABEL_SEPARATOR).collect()
}

/// Joins atoms back into the serialized compound form.
pub fn join_atoms<'a>(atoms: impl IntoIterator<Item = &'a str>) -> String {
    let mut joined = String::new();
    for (i, atom) in atoms.into_iter().enumerate() {
        if i > 0 {
            joined.push(LABEL_SEPARATOR);
        }
        joined.push_str(atom);
    }
    joined
}
