//! Main Translation Loop
//!
//! Single forward pass over the input. Each line is cleaned, classified, and
//! either folded into the pending function header or rewritten and emitted.
//! The first structural error stops the run.

use crate::config::{Config, InitializerPolicy, DEFAULT_PACKAGE};
use crate::detection::{
    is_include_directive, is_line_comment, is_return_type_start, is_scope_open,
    is_suspicious_conditional, is_variable_declaration, split_inline_header,
};
use crate::error_msg::{Diagnostic, TranslateError};
use crate::line_cleaner::clean_line;
use crate::tables::Tables;
use crate::translate::{fix_var_decl, translate_function_header};
use crate::transpiler_state::{ClassificationState, PendingHeader, TranspilerState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateOptions {
    pub package: String,
    pub initializers: InitializerPolicy,
}

impl Default for TranslateOptions {
    fn default() -> Self {
        TranslateOptions {
            package: DEFAULT_PACKAGE.to_string(),
            initializers: InitializerPolicy::default(),
        }
    }
}

impl From<&Config> for TranslateOptions {
    fn from(config: &Config) -> Self {
        TranslateOptions {
            package: config.package.clone(),
            initializers: config.initializers,
        }
    }
}

/// Finished output of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    /// Output lines, package line first
    pub lines: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Translation {
    /// Output text, every line newline-terminated.
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        for line in &self.lines {
            text.push_str(line);
            text.push('\n');
        }
        text
    }
}

/// Line-at-a-time driver; feed lines in order, then call [`Translator::finish`].
pub struct Translator<'t> {
    tables: &'t Tables,
    options: TranslateOptions,
    state: TranspilerState,
}

impl<'t> Translator<'t> {
    pub fn new(tables: &'t Tables, options: TranslateOptions) -> Self {
        let state = TranspilerState::new(&options.package);
        Translator { tables, options, state }
    }

    pub fn feed_line(&mut self, raw: &str) -> Result<(), TranslateError> {
        self.state.line_num += 1;
        let s = clean_line(raw, &self.tables.literals);

        if let Some(mut header) = self.state.take_header() {
            header.header_text.push_str(&s);
            if is_scope_open(&s) {
                let func = translate_function_header(&header, self.tables)?;
                self.state.emit(func);
            } else {
                self.state.state = ClassificationState::AccumulatingHeader(header);
            }
            return Ok(());
        }

        let types = &self.tables.types;
        if is_return_type_start(&s, types) {
            self.state.begin_header(types.resolve(&s));
            return Ok(());
        }

        if let Some((keyword, rest)) = split_inline_header(&s, types) {
            let mut header = PendingHeader::new(types.resolve(&keyword), self.state.line_num);
            header.header_text.push_str(rest);
            let func = translate_function_header(&header, self.tables)?;
            self.state.emit(func);
            return Ok(());
        }

        //Remove #includes
        if is_include_directive(&s) {
            log::trace!("line {}: dropped {:?}", self.state.line_num, s);
            return Ok(());
        }

        let line = if !is_line_comment(&s) && is_variable_declaration(&s, types) {
            fix_var_decl(&s, types, self.options.initializers, self.state.line_num)?
        } else {
            s
        };

        if is_suspicious_conditional(&line) {
            let diagnostic = Diagnostic::suspicious_conditional(
                self.state.next_output_line(),
                self.state.line_num,
                &line,
            );
            log::debug!("line {}: {}", self.state.line_num, diagnostic);
            self.state.diagnostics.push(diagnostic);
        }

        self.state.emit(line);
        Ok(())
    }

    /// End of input. A header still waiting for its `{` is an error.
    pub fn finish(mut self) -> Result<Translation, TranslateError> {
        if let Some(header) = self.state.take_header() {
            return Err(TranslateError::UnterminatedHeader {
                line: header.start_line,
                header: header.header_text.trim().to_string(),
            });
        }
        log::debug!(
            "translated {} lines into {} ({} advisories)",
            self.state.line_num,
            self.state.output.len(),
            self.state.diagnostics.len()
        );
        Ok(Translation {
            lines: self.state.output,
            diagnostics: self.state.diagnostics,
        })
    }

    pub fn is_accumulating(&self) -> bool {
        self.state.is_accumulating()
    }
}

/// Translate a whole source text in one call.
pub fn translate_source(
    source: &str,
    tables: &Tables,
    options: &TranslateOptions,
) -> Result<Translation, TranslateError> {
    let mut translator = Translator::new(tables, options.clone());
    for line in source.lines() {
        translator.feed_line(line)?;
    }
    translator.finish()
}
