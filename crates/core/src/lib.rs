pub mod compress;
pub mod config;
pub mod convert;
pub mod error;
pub mod flatten;
pub mod function;
pub mod logging;
pub mod model;
pub mod query;
pub mod storage;

pub use error::{AstError, ExtractionError, ExtractionResult, Result};
pub use function::{
    EnclosingElement, EnclosingKind, FunctionInfo, FunctionInfoExtractor, FunctionInfoParameter,
    FunctionSummary,
};
pub use model::{Ast, AstBuilder, NodeId, NodeRange, NodeRef, Position};
