//! Function Definition Translation
//!
//! Translates a C function header to Go syntax.
//!
//! C header, spread over two lines:
//! ```text
//! int
//! blit(SDL_Surface *src, int w) {
//! ```
//!
//! Go header:
//! ```text
//! func blit(src *Surface, w int) int {
//! ```

use crate::error_msg::TranslateError;
use crate::helpers::{find_matching_paren, split_space_no_empty};
use crate::line_cleaner::normalize;
use crate::tables::{Tables, TypeTable, NO_VALUE};
use crate::transpiler_state::PendingHeader;

/// One parameter of a C parameter list, after pointer normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub c_type: String,
    pub name: String,
    pub is_pointer: bool,
}

/// Parse `type name`, `type *name`, `type* name` or `type * name`.
///
/// Returns `None` for anything that does not reduce to exactly
/// `(type, name)` or `(type, *, name)`.
pub fn parse_parameter(element: &str) -> Option<Parameter> {
    let mut p = split_space_no_empty(element);

    if let [ty, name] = p[..] {
        if let Some(name) = name.strip_prefix('*') {
            p = vec![ty, "*", name];
        } else if let Some(ty) = ty.strip_suffix('*') {
            p = vec![ty, "*", name];
        }
    }

    let (c_type, name, is_pointer) = match p.as_slice() {
        [ty, name] => (*ty, *name, false),
        [ty, "*", name] => (*ty, *name, true),
        _ => return None,
    };

    // a marker left over means `**`, which has no single-token reading
    if c_type.is_empty() || name.is_empty() || c_type.contains('*') || name.starts_with('*') {
        return None;
    }

    Some(Parameter {
        c_type: c_type.to_string(),
        name: name.to_string(),
        is_pointer,
    })
}

/// Turns `int *a` into `a *int`.
pub fn swap_type_and_name(element: &str, types: &TypeTable) -> Option<String> {
    let param = parse_parameter(element)?;
    let go_type = types.resolve(&param.c_type);
    if param.is_pointer {
        Some(format!("{} *{}", param.name, go_type))
    } else {
        Some(format!("{} {}", param.name, go_type))
    }
}

/// Rewrite every element of a comma-separated parameter list.
pub fn fix_func_params(
    params_text: &str,
    types: &TypeTable,
    line: usize,
    header: &str,
) -> Result<String, TranslateError> {
    let params = params_text
        .split(',')
        .filter(|element| !element.trim().is_empty())
        .map(|element| {
            swap_type_and_name(element, types).ok_or_else(|| TranslateError::MalformedParameter {
                line,
                param: element.trim().to_string(),
                header: header.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(params.join(", "))
}

/// Close a pending header into a single Go `func` line.
pub fn translate_function_header(
    header: &PendingHeader,
    tables: &Tables,
) -> Result<String, TranslateError> {
    let text = header.header_text.trim_end();
    let text = text.strip_suffix('{').unwrap_or(text).trim();
    let line = header.start_line;

    let open = text
        .find('(')
        .ok_or_else(|| TranslateError::MissingParameterList {
            line,
            header: text.to_string(),
        })?;
    let name_part = text[..open].trim();
    let rest = &text[open..];

    let close = find_matching_paren(rest).ok_or_else(|| TranslateError::UnbalancedParameterList {
        line,
        header: text.to_string(),
    })?;
    let params = fix_func_params(&rest[1..close], &tables.types, line, text)?;
    let tail = rest[close + 1..].trim();

    let mut out = format!("func {}({})", name_part, params);
    if !tail.is_empty() {
        out.push(' ');
        out.push_str(tail);
    }
    if header.return_type != NO_VALUE {
        out.push(' ');
        out.push_str(&header.return_type);
    }
    out.push_str(" {");

    log::trace!("closed header at line {}: {}", line, out);
    Ok(normalize(&out, &tables.literals))
}
