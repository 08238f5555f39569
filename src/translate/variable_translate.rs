//! Variable Declaration Translation
//!
//! C declaration syntax:
//! ```text
//!     int a, b;
//!     int *p = NULL;
//! ```
//!
//! Go declaration syntax:
//! ```text
//!     var a,b int
//!     p := nil
//! ```

use crate::config::InitializerPolicy;
use crate::error_msg::TranslateError;
use crate::helpers::{is_valid_identifier, leading_indent, split_space_no_empty, strip_indent};
use crate::tables::TypeTable;

/// A declaration line broken into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableDeclaration {
    pub c_type: String,
    pub names: Vec<String>,
    pub initializer: Option<String>,
}

/// Parse a cleaned declaration line.
///
/// With `=` the line must read `type name = value`; the value is the single
/// fourth token. Under [`InitializerPolicy::Strict`] anything longer is
/// rejected, under [`InitializerPolicy::Truncate`] the rest is dropped.
///
/// Every name must be an identifier after dropping at most one leading `*`;
/// prototypes, arrays and double pointers are rejected.
pub fn parse_var_decl(
    line: &str,
    policy: InitializerPolicy,
    line_num: usize,
) -> Result<VariableDeclaration, TranslateError> {
    let body = strip_indent(line);
    let malformed = |reason: &'static str| TranslateError::MalformedDeclaration {
        line: line_num,
        text: body.to_string(),
        reason,
    };

    if body.contains('=') {
        let unsupported = |reason: &'static str| TranslateError::UnsupportedInitializer {
            line: line_num,
            text: body.to_string(),
            reason,
        };

        let spaced = match policy {
            InitializerPolicy::Strict => body.to_string(),
            InitializerPolicy::Truncate => body.replace(',', " "),
        };
        let tokens = split_space_no_empty(&spaced);
        if tokens.len() < 4 || tokens[2] != "=" {
            return Err(unsupported("expected `type name = value`"));
        }
        if policy == InitializerPolicy::Strict {
            if tokens.len() > 4 {
                return Err(unsupported("right-hand side is more than one token"));
            }
            if body.contains(',') {
                return Err(unsupported("declares more than one variable"));
            }
        }

        let name = tokens[1].strip_prefix('*').unwrap_or(tokens[1]);
        if !is_valid_identifier(name) {
            return Err(malformed("not a plain variable name"));
        }
        return Ok(VariableDeclaration {
            c_type: tokens[0].to_string(),
            names: vec![name.to_string()],
            initializer: Some(tokens[3].to_string()),
        });
    }

    let spaced = body.replace(',', " ");
    let tokens = split_space_no_empty(&spaced);
    let (c_type, names) = match tokens.split_first() {
        Some((c_type, names)) if !names.is_empty() => (c_type, names),
        _ => return Err(malformed("no variable names")),
    };
    if !names.iter().all(|n| is_valid_identifier(n.strip_prefix('*').unwrap_or(*n))) {
        return Err(malformed("not a plain variable name"));
    }
    Ok(VariableDeclaration {
        c_type: c_type.to_string(),
        names: names.iter().map(|n| n.to_string()).collect(),
        initializer: None,
    })
}

/// Rewrite a declaration line, keeping its indentation.
pub fn fix_var_decl(
    line: &str,
    types: &TypeTable,
    policy: InitializerPolicy,
    line_num: usize,
) -> Result<String, TranslateError> {
    let indent = leading_indent(line);
    let decl = parse_var_decl(line, policy, line_num)?;

    if let Some(value) = &decl.initializer {
        return Ok(format!("{}{} := {}", indent, decl.names[0], value));
    }

    let go_type = types.resolve(&decl.c_type);
    let pointers = decl.names.iter().filter(|n| n.starts_with('*')).count();
    if pointers == 0 {
        return Ok(format!("{}var {} {}", indent, decl.names.join(","), go_type));
    }
    if pointers < decl.names.len() {
        return Err(TranslateError::MalformedDeclaration {
            line: line_num,
            text: strip_indent(line).to_string(),
            reason: "mixes pointer and non-pointer names",
        });
    }

    let names: Vec<&str> = decl.names.iter().map(|n| &n[1..]).collect();
    Ok(format!("{}var {} *{}", indent, names.join(","), go_type))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fix(line: &str) -> Result<String, TranslateError> {
        fix_var_decl(line, &TypeTable::default(), InitializerPolicy::Strict, 1)
    }

    #[test]
    fn test_uninitialized_names() {
        assert_eq!(fix("int a, b"), Ok("var a,b int".to_string()));
        assert_eq!(fix("\tsize_t n"), Ok("\tvar n uint".to_string()));
        assert_eq!(fix("SDL_Rect r"), Ok("var r Rect".to_string()));
    }

    #[test]
    fn test_initialized_single_token() {
        assert_eq!(fix("int a = b"), Ok("a := b".to_string()));
        assert_eq!(fix("\tSDL_Surface *s = nil"), Ok("\ts := nil".to_string()));
    }

    #[test]
    fn test_pointer_names() {
        assert_eq!(fix("char *a, *b"), Ok("var a,b *string".to_string()));
        assert!(matches!(
            fix("char *a, b"),
            Err(TranslateError::MalformedDeclaration {
                reason: "mixes pointer and non-pointer names",
                ..
            })
        ));
    }

    #[test]
    fn test_strict_rejects_wide_initializers() {
        assert!(matches!(
            fix("int a = b + c"),
            Err(TranslateError::UnsupportedInitializer {
                reason: "right-hand side is more than one token",
                ..
            })
        ));
        assert!(matches!(
            fix("int a = 1,b=2"),
            Err(TranslateError::UnsupportedInitializer {
                reason: "declares more than one variable",
                ..
            })
        ));
        assert!(matches!(
            fix("int a=1"),
            Err(TranslateError::UnsupportedInitializer {
                reason: "expected `type name = value`",
                ..
            })
        ));
    }

    #[test]
    fn test_truncate_keeps_first_value() {
        let types = TypeTable::default();
        let out = fix_var_decl("\tint a = 1, b = 2", &types, InitializerPolicy::Truncate, 4);
        assert_eq!(out, Ok("\ta := 1".to_string()));
        let out = fix_var_decl("int a = b + c", &types, InitializerPolicy::Truncate, 4);
        assert_eq!(out, Ok("a := b".to_string()));
    }

    #[test]
    fn test_declaration_without_names() {
        assert!(matches!(
            fix("\tint"),
            Err(TranslateError::MalformedDeclaration {
                line: 1,
                reason: "no variable names",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_names_that_are_not_identifiers() {
        for line in ["int foo(int a)", "int buf[16]", "char **argv", "char **p = nil"] {
            assert!(
                matches!(
                    fix(line),
                    Err(TranslateError::MalformedDeclaration {
                        reason: "not a plain variable name",
                        ..
                    })
                ),
                "{:?} -> {:?}",
                line,
                fix(line)
            );
        }
    }
}
