pub const PARAMETER_LIST: &str = "formalParameterList";
pub const PARAMETER: &str = "formalParameter";
pub const TYPE: &str = "typeHint";
pub const PARAMETER_NAME: &str = "VarName";
pub const VARIABLE_INITIALIZER: &str = "variableInitializer";
/// `...$args`
pub const ELLIPSIS: &str = "Ellipsis";
/// `&$arg`
pub const REFERENCE: &str = "Ampersand";

pub const FUNCTION_NAME: &str = "identifier";
pub const FUNCTION_TOKEN: &str = "Function_";
pub const LAMBDA_TOKEN: &str = "LambdaFn";
pub const CLASS_MEMBER: &str = "classStatement";
pub const CLASS_DECLARATION: &str = "classDeclaration";
pub const MEMBER_MODIFIERS: &str = "memberModifiers";

pub const EXPRESSION: &str = "expression";
pub const ASSIGNMENT_OPERATOR: &str = "assignmentOperator";

pub const BODIES: &[&str] = &["blockStatement", "methodBody"];
pub const STATEMENT_LIST: &str = "innerStatementList";

pub const VARIABLE_SIGIL: char = '$';
