//! Line scanner
//!
//! Classifies trimmed source lines into directives. Every line that is not
//! a directive is ignored without a diagnostic; annotated sources are
//! ordinary C++ and most of their lines are code.

use crate::config::WeldConfig;
use crate::diagnostics::DirectiveError;

/// A directive found on one line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive<'src> {
    /// Namespace directive; holds the text after the marker
    Namespace(&'src str),
    /// Function directive; holds the text after the marker
    Function(&'src str),
}

/// Classify one raw line.
pub fn classify_line<'src>(line: &'src str, config: &WeldConfig) -> Option<Directive<'src>> {
    let line = line.trim();

    if let Some(rest) = strip_marker(line, &config.namespace_marker) {
        return Some(Directive::Namespace(rest));
    }
    if let Some(rest) = strip_marker(line, &config.function_marker) {
        return Some(Directive::Function(rest));
    }

    None
}

/// Iterate over the directives of a source text as `(line number, directive)`.
///
/// Line numbers are 1-indexed.
pub fn directives<'src, 'c>(
    source: &'src str,
    config: &'c WeldConfig,
) -> impl Iterator<Item = (usize, Directive<'src>)> + 'c
where
    'src: 'c,
{
    source
        .lines()
        .enumerate()
        .filter_map(move |(idx, line)| classify_line(line, config).map(|d| (idx + 1, d)))
}

/// Extract the namespace identifier from the text after a namespace marker.
///
/// Only the first whitespace-separated word counts; anything after it is
/// treated as commentary.
pub fn parse_namespace(rest: &str) -> Result<&str, DirectiveError> {
    let name = rest
        .split_whitespace()
        .next()
        .ok_or_else(|| DirectiveError::MalformedNamespace("missing namespace name".to_string()))?;

    if !is_script_identifier(name) {
        return Err(DirectiveError::MalformedNamespace(format!(
            "`{}` is not a valid identifier",
            name
        )));
    }

    Ok(name)
}

/// Strip `marker` from the start of `line`.
///
/// A marker ending in an identifier character must not run into another
/// identifier character, so `DFUNCTION` does not match `DFUNC`.
fn strip_marker<'src>(line: &'src str, marker: &str) -> Option<&'src str> {
    if marker.is_empty() {
        return None;
    }
    let rest = line.strip_prefix(marker)?;

    let marker_ends_word = marker.chars().last().is_some_and(is_word_char);
    let rest_continues_word = rest.chars().next().is_some_and(is_word_char);
    if marker_ends_word && rest_continues_word {
        return None;
    }

    Some(rest)
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_script_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_directives() {
        let config = WeldConfig::default();

        assert_eq!(
            classify_line("  // DUKTAPE_NAMESPACE Syn  ", &config),
            Some(Directive::Namespace(" Syn"))
        );
        assert_eq!(
            classify_line("\tDFUNC int add(int a, int b) {", &config),
            Some(Directive::Function(" int add(int a, int b) {"))
        );
    }

    #[test]
    fn test_ignored_lines() {
        let config = WeldConfig::default();

        for line in [
            "",
            "#define DFUNC static inline",
            "static int add(int a, int b);",
            "// regular comment",
            "DFUNCTION int add(int a)",
            "// DUKTAPE_NAMESPACES Syn",
        ] {
            assert_eq!(classify_line(line, &config), None, "line {:?}", line);
        }
    }

    #[test]
    fn test_custom_markers() {
        let config = WeldConfig::default()
            .with_function_marker("@export")
            .with_namespace_marker("#pragma js_namespace");

        assert_eq!(
            classify_line("@export void f()", &config),
            Some(Directive::Function(" void f()"))
        );
        assert_eq!(
            classify_line("#pragma js_namespace ui", &config),
            Some(Directive::Namespace(" ui"))
        );
        assert_eq!(classify_line("DFUNC void f()", &config), None);
    }

    #[test]
    fn test_directive_line_numbers() {
        let config = WeldConfig::default();
        let source = "#include <x>\n// DUKTAPE_NAMESPACE Syn\n\nDFUNC void f();\n";

        let found: Vec<(usize, Directive<'_>)> = directives(source, &config).collect();
        assert_eq!(
            found,
            vec![
                (2, Directive::Namespace(" Syn")),
                (4, Directive::Function(" void f();")),
            ]
        );
    }

    #[test]
    fn test_parse_namespace() {
        assert_eq!(parse_namespace(" Syn"), Ok("Syn"));
        assert_eq!(parse_namespace(" math extra words"), Ok("math"));
        assert_eq!(parse_namespace(" $ui"), Ok("$ui"));
        assert!(matches!(
            parse_namespace(""),
            Err(DirectiveError::MalformedNamespace(_))
        ));
        assert!(matches!(
            parse_namespace(" 9lives"),
            Err(DirectiveError::MalformedNamespace(_))
        ));
        assert!(matches!(
            parse_namespace(" a.b"),
            Err(DirectiveError::MalformedNamespace(_))
        ));
    }
}
