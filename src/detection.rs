//! Line classification
//!
//! Pure predicates over a cleaned line. The driver uses them to decide where a
//! line goes; none of them mutate anything.

use crate::helpers::{first_token, is_valid_identifier, strip_indent};
use crate::tables::TypeTable;

/// Whole line is exactly a type keyword: `int` on its own line starts a header.
pub fn is_return_type_start(line: &str, types: &TypeTable) -> bool {
    types.is_known(line)
}

/// Last non-blank character is `{`.
pub fn is_scope_open(line: &str) -> bool {
    line.trim_end_matches([' ', '\t']).ends_with('{')
}

pub fn is_line_comment(line: &str) -> bool {
    line.trim_start_matches('\t').starts_with("//")
}

/// First token is a known type keyword.
pub fn is_variable_declaration(line: &str, types: &TypeTable) -> bool {
    first_token(line).map_or(false, |tok| types.is_known(tok))
}

/// `if` line that does not open a block, so its body is probably a single
/// statement the translator cannot reshape.
pub fn is_suspicious_conditional(line: &str) -> bool {
    let t = line.trim_matches([' ', '\t']);
    let Some(after) = t.strip_prefix("if") else {
        return false;
    };
    let keyword = after.starts_with(' ') || after.starts_with('(');
    keyword && !t.ends_with('{')
}

pub fn is_include_directive(line: &str) -> bool {
    strip_indent(line).starts_with("#include")
}

/// Recognize `T name(params) {` on one line.
///
/// Returns the longest type keyword prefixing the line and the rest of the
/// line after it. Assignments and lines without a parameter list are not
/// headers.
pub fn split_inline_header<'a>(line: &'a str, types: &TypeTable) -> Option<(String, &'a str)> {
    let body = strip_indent(line);
    if body.len() != line.len() || !is_scope_open(body) {
        return None;
    }
    let (keyword, rest) = types.longest_prefix(body)?;
    let open = rest.find('(')?;
    let name = rest[..open].trim();
    if name.is_empty() || rest.contains('=') || !is_valid_identifier(name) {
        return None;
    }
    Some((keyword.to_string(), rest))
}
