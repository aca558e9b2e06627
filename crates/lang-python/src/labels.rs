pub const FUNCTION: &str = "funcdef";
pub const FUNCTION_NAME: &str = "NAME";
pub const RETURN_TYPE: &str = "test";

pub const CLASS_DECLARATION: &str = "classdef";
pub const CLASS_NAME: &str = "NAME";
pub const CONSTRUCTOR_NAME: &str = "__init__";
pub const ENCLOSING_DECLARATIONS: &[&str] = &[CLASS_DECLARATION, FUNCTION];

pub const METHOD_PARAMETERS: &str = "parameters";
pub const METHOD_PARAMETER_LIST: &str = "typedargslist";
pub const SINGLE_PARAMETER: &str = "tfpdef";
pub const PARAMETER_NAME: &str = "NAME";
/// Type annotations fold into `test|or_test|...|atom|NAME`, so the outermost
/// atom is what identifies them.
pub const PARAMETER_TYPE: &str = "test";

pub const BODY: &str = "suite";
pub const DECORATED: &str = "decorated";
pub const DECORATORS: &str = "decorators";
pub const DECORATOR: &str = "decorator";
pub const DECORATOR_NAME: &str = "dotted_name";

pub const PASS: &str = "PASS";
/// Layout tokens that do not count as statements.
pub const LAYOUT_TOKENS: &[&str] = &["NEWLINE", "INDENT", "DEDENT", "SEMI_COLON"];
