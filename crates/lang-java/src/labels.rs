//! Rule and token names of the ANTLR Java grammar the extractor looks for.

pub const METHOD_DECLARATION: &str = "methodDeclaration";
pub const METHOD_RETURN_TYPE: &str = "typeTypeOrVoid";
pub const METHOD_NAME: &str = "IDENTIFIER";
pub const METHOD_MODIFIER: &str = "modifier";
pub const METHOD_ANNOTATION: &str = "annotation";
pub const ANNOTATION_NAME: &str = "qualifiedName";
pub const METHOD_BODY: &str = "methodBody";

pub const CLASS_DECLARATION: &str = "classDeclaration";
pub const ENUM_DECLARATION: &str = "enumDeclaration";
pub const ENCLOSING_DECLARATIONS: &[&str] = &[CLASS_DECLARATION, ENUM_DECLARATION];
pub const ENCLOSING_NAME: &str = "IDENTIFIER";

pub const METHOD_PARAMETERS: &str = "formalParameters";
pub const METHOD_PARAMETER_LIST: &str = "formalParameterList";
pub const SINGLE_PARAMETERS: &[&str] = &["formalParameter", "lastFormalParameter"];
pub const PARAMETER_TYPE: &str = "typeType";
pub const PARAMETER_NAME: &str = "variableDeclaratorId";

/// A block holding only its braces.
pub const EMPTY_BODY_CHILDREN: usize = 2;
