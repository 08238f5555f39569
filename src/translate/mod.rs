//! Translation Module
//!
//! Contains the two reshaping transformations applied to classified lines.
//! Each module handles a specific type of construct transformation.

// Function header translation
pub mod function_def_translate;

// Declaration translation
pub mod variable_translate;

// Re-exports for convenience
pub use function_def_translate::{
    fix_func_params, parse_parameter, swap_type_and_name, translate_function_header, Parameter,
};
pub use variable_translate::{fix_var_decl, parse_var_decl, VariableDeclaration};
