//! Line cleaner
//!
//! First stop for every input line: drop the statement terminator, then run
//! the literal substitution table once.

use crate::tables::LiteralTable;

/// Strip one trailing `;` and apply every literal rule in table order.
pub fn clean_line(line: &str, literals: &LiteralTable) -> String {
    let line = line.strip_suffix(';').unwrap_or(line);
    literals.apply(line)
}

/// Literal pass only, for text that has already lost its terminator.
pub fn normalize(text: &str, literals: &LiteralTable) -> String {
    literals.apply(text)
}
