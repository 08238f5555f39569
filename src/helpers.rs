//! Helper utility functions for the c2go translator
//!
//! Small text utilities shared by the classifier and the transformers:
//! - Indentation handling
//! - Whitespace tokenizing
//! - Parenthesis matching
//! - Identifier validation

/// Line without its leading spaces and tabs.
pub fn strip_indent(line: &str) -> &str {
    line.trim_start_matches([' ', '\t'])
}

/// Leading spaces and tabs of a line.
pub fn leading_indent(line: &str) -> &str {
    &line[..line.len() - strip_indent(line).len()]
}

/// Split on whitespace, dropping empty pieces.
pub fn split_space_no_empty(s: &str) -> Vec<&str> {
    s.split_whitespace().collect()
}

pub fn first_token(line: &str) -> Option<&str> {
    line.split_whitespace().next()
}

/// Byte offset of the `)` closing the `(` at the start of `s`.
pub fn find_matching_paren(s: &str) -> Option<usize> {
    if !s.starts_with('(') {
        return None;
    }

    let mut depth = 0;
    for (i, c) in s.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

pub fn is_valid_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_split() {
        assert_eq!(leading_indent("\t  int x"), "\t  ");
        assert_eq!(strip_indent("\t  int x"), "int x");
        assert_eq!(leading_indent("int x"), "");
    }

    #[test]
    fn test_split_space_no_empty() {
        assert_eq!(split_space_no_empty("  int \t *a  "), vec!["int", "*a"]);
        assert!(split_space_no_empty(" \t ").is_empty());
    }

    #[test]
    fn test_find_matching_paren() {
        assert_eq!(find_matching_paren("(a, b) int"), Some(5));
        assert_eq!(find_matching_paren("(f (*cb)(int)) x"), Some(13));
        assert_eq!(find_matching_paren("(a, b"), None);
        assert_eq!(find_matching_paren("a)"), None);
    }

    #[test]
    fn test_identifier() {
        assert!(is_valid_identifier("SDL_Blit_0"));
        assert!(is_valid_identifier("_x"));
        assert!(!is_valid_identifier("0x"));
        assert!(!is_valid_identifier("a b"));
        assert!(!is_valid_identifier(""));
    }
}
