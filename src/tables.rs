//! Substitution tables
//!
//! Two immutable tables drive every rewrite:
//! - [`TypeTable`]: exact C type keyword → Go type name
//! - [`LiteralTable`]: ordered literal text substitutions applied to every line
//!
//! Both are built once (from the defaults below, optionally extended by the
//! configuration file) and then only read.

use thiserror::Error;

/// Go has no type for "returns nothing"; `void` resolves to this.
pub const NO_VALUE: &str = "";

const DEFAULT_TYPES: &[(&str, &str)] = &[
    ("int", "int"),
    ("void", NO_VALUE),
    ("static int", "int"),
    ("static SDL_bool", "bool"),
    ("static SDL_BlitFunc", "BlitFunc"),
    ("static uint32", "uint32"),
    ("SDL_BlitFunc", "BlitFunc"),
    ("SDL_BlitInfo", "BlitInfo"),
    ("SDL_BlitMap", "BlitMap"),
    ("SDL_Surface", "Surface"),
    ("SDL_Rect", "Rect"),
    ("uint64", "uint64"),
    ("uint32", "uint32"),
    ("size_t", "uint"),
    ("char", "string"),
];

const DEFAULT_LITERALS: &[(&str, &str, RuleScope)] = &[
    ("u_int64_t", "uint64", RuleScope::Anywhere),
    ("SDL_FALSE", "false", RuleScope::Anywhere),
    ("SDL_TRUE", "true", RuleScope::Anywhere),
    ("while (", "for (", RuleScope::Anywhere),
    ("#endif", "//#endif", RuleScope::LineStart),
    ("Uint32", "uint32", RuleScope::Anywhere),
    ("const ", "", RuleScope::Anywhere),
    ("#else", "//#else", RuleScope::LineStart),
    ("NULL", "nil", RuleScope::Anywhere),
    ("    ", "\t", RuleScope::Anywhere),
    ("#if", "//#if", RuleScope::LineStart),
    ("if(", "if (", RuleScope::Anywhere),
    ("map", "Map", RuleScope::Anywhere),
    ("->", ".", RuleScope::Anywhere),
    ("~", "^", RuleScope::Anywhere),
];

//===========================================================================
// TYPE EQUIVALENCE
//===========================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeTable {
    entries: Vec<(String, String)>,
}

impl TypeTable {
    pub fn new() -> Self {
        TypeTable { entries: Vec::new() }
    }

    /// Add an equivalence, replacing an existing entry for the same key.
    pub fn insert(&mut self, c_type: &str, go_type: &str) {
        match self.entries.iter_mut().find(|(k, _)| k == c_type) {
            Some(entry) => entry.1 = go_type.to_string(),
            None => self.entries.push((c_type.to_string(), go_type.to_string())),
        }
    }

    pub fn is_known(&self, keyword: &str) -> bool {
        self.get(keyword).is_some()
    }

    pub fn get(&self, keyword: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == keyword)
            .map(|(_, v)| v.as_str())
    }

    /// Resolve a keyword, passing unknown keywords through unchanged.
    pub fn resolve<'a>(&'a self, keyword: &'a str) -> &'a str {
        self.get(keyword).unwrap_or(keyword)
    }

    /// Longest key that prefixes `line` and is followed by whitespace.
    pub fn longest_prefix<'a>(&self, line: &'a str) -> Option<(&str, &'a str)> {
        self.entries
            .iter()
            .filter(|(k, _)| {
                line.starts_with(k.as_str())
                    && line[k.len()..].starts_with(|c: char| c == ' ' || c == '\t')
            })
            .max_by_key(|(k, _)| k.len())
            .map(|(k, _)| (k.as_str(), &line[k.len()..]))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TypeTable {
    fn default() -> Self {
        let mut table = TypeTable::new();
        for (c_type, go_type) in DEFAULT_TYPES {
            table.insert(c_type, go_type);
        }
        table
    }
}

//===========================================================================
// LITERAL SUBSTITUTION
//===========================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleScope {
    /// Every occurrence in the line is replaced
    Anywhere,
    /// Replaced once, only when the line (after indentation) starts with it
    LineStart,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionRule {
    pub pattern: String,
    pub replacement: String,
    pub scope: RuleScope,
}

impl SubstitutionRule {
    pub fn new(pattern: &str, replacement: &str, scope: RuleScope) -> Self {
        SubstitutionRule {
            pattern: pattern.to_string(),
            replacement: replacement.to_string(),
            scope,
        }
    }

    pub fn apply(&self, line: &str) -> String {
        if self.pattern.is_empty() {
            return line.to_string();
        }
        match self.scope {
            // deleting can join the pieces into a new match
            RuleScope::Anywhere if self.replacement.is_empty() => {
                let mut out = line.to_string();
                while out.contains(self.pattern.as_str()) {
                    out = out.replace(&self.pattern, "");
                }
                out
            }
            RuleScope::Anywhere => line.replace(&self.pattern, &self.replacement),
            RuleScope::LineStart => {
                let body = line.trim_start_matches([' ', '\t']);
                if body.starts_with(self.pattern.as_str()) {
                    let indent = &line[..line.len() - body.len()];
                    format!("{}{}{}", indent, self.replacement, &body[self.pattern.len()..])
                } else {
                    line.to_string()
                }
            }
        }
    }
}

/// Literal rules kept longest pattern first; equal lengths keep insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralTable {
    rules: Vec<SubstitutionRule>,
}

impl LiteralTable {
    pub fn new(rules: Vec<SubstitutionRule>) -> Self {
        let mut rules = rules;
        // stable sort keeps declaration order among equal lengths
        rules.sort_by(|a, b| b.pattern.len().cmp(&a.pattern.len()));
        LiteralTable { rules }
    }

    /// Add a rule, replacing any rule with the same pattern, and re-sort.
    pub fn insert(&mut self, rule: SubstitutionRule) {
        let mut rules = std::mem::take(&mut self.rules);
        rules.retain(|r| r.pattern != rule.pattern);
        rules.push(rule);
        *self = LiteralTable::new(rules);
    }

    /// One pass of every rule, in table order.
    pub fn apply(&self, line: &str) -> String {
        self.rules
            .iter()
            .fold(line.to_string(), |acc, rule| rule.apply(&acc))
    }

    pub fn rules(&self) -> &[SubstitutionRule] {
        &self.rules
    }
}

impl Default for LiteralTable {
    fn default() -> Self {
        LiteralTable::new(
            DEFAULT_LITERALS
                .iter()
                .map(|(p, r, s)| SubstitutionRule::new(p, r, *s))
                .collect(),
        )
    }
}

//===========================================================================
// TABLE SET
//===========================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("literal rule '{pattern}' -> '{replacement}' is rewritten again by a second pass (becomes '{second_pass}')")]
    NotIdempotent {
        pattern: String,
        replacement: String,
        second_pass: String,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tables {
    pub types: TypeTable,
    pub literals: LiteralTable,
}

impl Tables {
    pub fn new(types: TypeTable, literals: LiteralTable) -> Self {
        Tables { types, literals }
    }

    /// Check that a second literal pass never changes already-cleaned text.
    ///
    /// For every rule, the pass must leave the rule's replacement untouched,
    /// and cleaning the rule's pattern twice must equal cleaning it once. A
    /// deletion rule is also checked against its pattern split around another
    /// copy of itself (`con` + `const ` + `st `).
    pub fn validate(&self) -> Result<(), TableError> {
        for rule in self.literals.rules() {
            let replaced = self.literals.apply(&rule.replacement);
            if replaced != rule.replacement {
                return Err(self.not_idempotent(rule, replaced));
            }
            let pattern = rule.pattern.as_str();
            let mut samples = vec![pattern.to_string()];
            if rule.replacement.is_empty() {
                for (i, _) in pattern.char_indices().skip(1) {
                    samples.push(format!("{}{}{}", &pattern[..i], pattern, &pattern[i..]));
                }
            }
            for sample in samples {
                let once = self.literals.apply(&sample);
                let twice = self.literals.apply(&once);
                if once != twice {
                    return Err(self.not_idempotent(rule, twice));
                }
            }
        }
        Ok(())
    }

    fn not_idempotent(&self, rule: &SubstitutionRule, second_pass: String) -> TableError {
        TableError::NotIdempotent {
            pattern: rule.pattern.clone(),
            replacement: rule.replacement.clone(),
            second_pass,
        }
    }
}
