//! Test suite for the c2go driver
//!
//! Whole-file behavior of the translation loop:
//! - Function headers split over several lines
//! - Declarations inside bodies
//! - Include / directive / comment handling
//! - Advisories and their output line numbers
//! - Fatal errors and where they point

use crate::config::InitializerPolicy;
use crate::error_msg::TranslateError;
use crate::tables::{Tables, NO_VALUE};
use crate::transpile_main::{translate_source, TranslateOptions, Translation, Translator};

fn translate(input: &str) -> Result<Translation, TranslateError> {
    translate_source(input, &Tables::default(), &TranslateOptions::default())
}

fn lines(input: &str) -> Vec<String> {
    translate(input).unwrap().lines
}

//=========================================================================
// FUNCTION HEADERS
//=========================================================================

#[test]
fn test_end_to_end_example() {
    let output = lines("int\nmyFunc(int a, char *b) {\n    int x;\n}");
    assert_eq!(
        output,
        vec!["package gdl", "func myFunc(a int, b *string) int {", "\tvar x int", "}"]
    );
}

#[test]
fn test_every_type_key_as_return_type() {
    let tables = Tables::default();
    for key in tables.types.keys() {
        let input = format!("{}\nname() {{", key);
        let output = translate_source(&input, &tables, &TranslateOptions::default()).unwrap();
        let go_type = tables.types.resolve(key);
        let expected = if go_type == NO_VALUE {
            "func name() {".to_string()
        } else {
            format!("func name() {} {{", go_type)
        };
        assert_eq!(output.lines[1], expected, "return type key {:?}", key);
        assert_eq!(output.lines.len(), 2);
    }
}

#[test]
fn test_header_over_three_lines() {
    let input = "static SDL_bool\nSDL_HasBlit(SDL_Surface *src,\n            SDL_Rect *rect)\n{\n    return SDL_TRUE;\n}";
    assert_eq!(
        lines(input),
        vec![
            "package gdl",
            "func SDL_HasBlit(src *Surface, rect *Rect) bool {",
            "\treturn true",
            "}",
        ]
    );
}

#[test]
fn test_single_line_header() {
    assert_eq!(
        lines("static int count(size_t n) {\n}"),
        vec!["package gdl", "func count(n uint) int {", "}"]
    );
}

#[test]
fn test_return_type_line_is_consumed() {
    let output = lines("void\nreset() {\n}");
    assert!(!output.iter().any(|l| l == "void"));
    assert_eq!(output[1], "func reset() {");
}

//=========================================================================
// BODIES
//=========================================================================

#[test]
fn test_declarations_in_body() {
    let input = "void\nf() {\n    int a, b;\n    SDL_Surface *s = NULL;\n    a = b;\n}";
    assert_eq!(
        lines(input),
        vec!["package gdl", "func f() {", "\tvar a,b int", "\ts := nil", "\ta = b", "}"]
    );
}

#[test]
fn test_includes_dropped_directives_commented() {
    let input = "#include \"SDL_video.h\"\n#if SDL_HAVE_BLIT_0\nint x;\n#endif";
    assert_eq!(lines(input), vec!["package gdl", "//#if SDL_HAVE_BLIT_0", "var x int", "//#endif"]);
}

#[test]
fn test_comment_lines_pass_through() {
    let input = "    // int is the count, p->next may be NULL";
    assert_eq!(lines(input), vec!["package gdl", "\t// int is the count, p.next may be nil"]);
}

#[test]
fn test_custom_package_name() {
    let options = TranslateOptions {
        package: "video".to_string(),
        initializers: InitializerPolicy::Strict,
    };
    let out = translate_source("x = 1;", &Tables::default(), &options).unwrap();
    assert_eq!(out.lines, vec!["package video", "x = 1"]);
}

//=========================================================================
// ADVISORIES
//=========================================================================

#[test]
fn test_bad_if_reports_output_line() {
    let input = "#include <stdio.h>\nvoid\nf() {\n    if (x)\n        return;\n}";
    let out = translate(input).unwrap();
    assert_eq!(out.diagnostics.len(), 1);
    // package line is 1, func line is 2
    assert_eq!(out.diagnostics[0].output_line, 3);
    assert_eq!(out.diagnostics[0].source_line, 4);
    assert_eq!(out.diagnostics[0].to_string(), "Potentially bad 'if' on line 3");
    assert_eq!(out.lines[3], "\t\treturn");
}

#[test]
fn test_braced_if_is_quiet() {
    let out = translate("if(ok) {\n}").unwrap();
    assert!(out.diagnostics.is_empty());
    assert_eq!(out.lines[1], "if (ok) {");
}

//=========================================================================
// FATAL ERRORS
//=========================================================================

#[test]
fn test_bad_parameter_aborts() {
    let err = translate("int\nf(int) {\n}").unwrap_err();
    assert!(matches!(err, TranslateError::MalformedParameter { line: 1, .. }));

    let err = translate("\n\nint\nf(unsigned long int x) {\n}").unwrap_err();
    assert_eq!(err.line(), 3);
}

#[test]
fn test_unsupported_declarations_abort() {
    let cases = [
        ("int foo(int a);", 1),
        ("void\nf() {\n    char **argv;\n}", 3),
        ("\nint buf[16];", 2),
        ("char **p = NULL;", 1),
    ];
    for (input, line) in cases {
        match translate(input) {
            Err(err @ TranslateError::MalformedDeclaration { .. }) => assert_eq!(err.line(), line),
            other => panic!("{:?} should fail, got {:?}", input, other),
        }
    }
}

#[test]
fn test_unterminated_header_at_end_of_input() {
    let err = translate("int\nmain(void)").unwrap_err();
    assert_eq!(
        err,
        TranslateError::UnterminatedHeader {
            line: 1,
            header: "main(void)".to_string(),
        }
    );
}

#[test]
fn test_translator_streams_lines() {
    let tables = Tables::default();
    let mut translator = Translator::new(&tables, TranslateOptions::default());
    translator.feed_line("int").unwrap();
    assert!(translator.is_accumulating());
    translator.feed_line("g(int a)").unwrap();
    assert!(translator.is_accumulating());
    translator.feed_line("{").unwrap();
    assert!(!translator.is_accumulating());
    let out = translator.finish().unwrap();
    assert_eq!(out.lines, vec!["package gdl", "func g(a int) int {"]);
    assert_eq!(out.to_text(), "package gdl\nfunc g(a int) int {\n");
}
