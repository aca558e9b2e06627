pub mod label;
pub mod range;
pub mod tree;

pub use label::{LABEL_SEPARATOR, decompose, join_atoms};
pub use range::{NodeRange, Position};
pub use tree::{Ast, AstBuilder, NodeId, NodeRef, Preorder};
