use super::*;
use pretty_assertions::assert_eq;

/// Helper: scan with the default vocabulary.
fn tokens(source: &str) -> Vec<RawToken> {
    scan(source, &Vocabulary::default())
}

/// Helper: scan and return `(line, column, length, kind)` tuples.
fn spans(source: &str) -> Vec<(u32, u32, u32, TokenKind)> {
    tokens(source)
        .iter()
        .map(|t| (t.line, t.column, t.length, t.kind))
        .collect()
}

/// Helper: scan and return kinds only.
fn kinds(source: &str) -> Vec<TokenKind> {
    tokens(source).iter().map(|t| t.kind).collect()
}

use TokenKind::{
    Comment, Function, Keyword, Number, Operator, Punctuation, String as Str, Type, Variable,
};

// ─── Boundaries ────────────────────────────────────────────────

#[test]
fn empty_document() {
    assert!(tokens("").is_empty());
}

#[test]
fn whitespace_only_document() {
    assert!(tokens("   \t\n\r\n  \n").is_empty());
}

// ─── Worked examples ───────────────────────────────────────────

#[test]
fn assignment() {
    assert_eq!(
        spans("x = 1"),
        vec![(0, 0, 1, Variable), (0, 2, 1, Operator), (0, 4, 1, Number)]
    );
}

#[test]
fn class_declaration_across_lines() {
    assert_eq!(
        spans("class Foo\n{\n}"),
        vec![
            (0, 0, 5, Keyword),
            (0, 6, 3, Type),
            (1, 0, 1, Punctuation),
            (2, 0, 1, Punctuation),
        ]
    );
}

#[test]
fn unterminated_string_runs_to_end() {
    assert_eq!(spans("\"abc"), vec![(0, 0, 4, Str)]);
}

// ─── Comments ──────────────────────────────────────────────────

#[test]
fn line_comment_stops_before_newline() {
    assert_eq!(
        spans("/* note\nx"),
        vec![(0, 0, 7, Comment), (1, 0, 1, Variable)]
    );
}

#[test]
fn line_comment_at_end_of_document() {
    assert_eq!(spans("a /* tail"), vec![(0, 0, 1, Variable), (0, 2, 7, Comment)]);
}

#[test]
fn line_comment_swallows_block_markers() {
    assert_eq!(spans("/* /! not a block\n"), vec![(0, 0, 17, Comment)]);
}

#[test]
fn double_slash_is_two_operators() {
    assert_eq!(
        spans("//x"),
        vec![(0, 0, 1, Operator), (0, 1, 1, Operator), (0, 2, 1, Variable)]
    );
}

#[test]
fn block_comment_single_line() {
    assert_eq!(
        spans("/! hi !/ x"),
        vec![(0, 0, 8, Comment), (0, 9, 1, Variable)]
    );
}

#[test]
fn block_comment_spanning_lines_moves_cursor() {
    // "/! a\nbb !/" is 10 units; ends at line 1 column 5
    assert_eq!(
        spans("/! a\nbb !/ y"),
        vec![(0, 0, 10, Comment), (1, 6, 1, Variable)]
    );
}

#[test]
fn unterminated_block_comment_runs_to_end() {
    assert_eq!(spans("x /! open\nstill\n"), vec![(0, 0, 1, Variable), (0, 2, 14, Comment)]);
}

#[test]
fn block_comment_opener_does_not_close_itself() {
    // "/!/" must not be read as open + close sharing the '!'
    assert_eq!(spans("/!/ a !/"), vec![(0, 0, 8, Comment)]);
}

#[test]
fn line_comment_wins_over_block_comment_marker_order() {
    // "/*" is checked before "/!", and they never overlap
    assert_eq!(kinds("/*!/"), vec![Comment]);
    assert_eq!(spans("/!*/"), vec![(0, 0, 4, Comment)]);
}

// ─── Strings ───────────────────────────────────────────────────

#[test]
fn string_includes_both_quotes() {
    assert_eq!(
        spans("\"hi\" x"),
        vec![(0, 0, 4, Str), (0, 5, 1, Variable)]
    );
}

#[test]
fn escaped_quote_does_not_terminate() {
    // "a\"b"
    assert_eq!(spans(r#""a\"b" c"#), vec![(0, 0, 6, Str), (0, 7, 1, Variable)]);
}

#[test]
fn backslash_before_closing_quote_keeps_string_open() {
    // Only the immediately preceding byte is checked, so "a\\" stays open.
    assert_eq!(spans(r#""a\\" x"#), vec![(0, 0, 7, Str)]);
}

#[test]
fn multi_line_string() {
    assert_eq!(
        spans("\"a\nb\" c"),
        vec![(0, 0, 5, Str), (1, 3, 1, Variable)]
    );
}

#[test]
fn lone_quote_at_end() {
    assert_eq!(spans("x \""), vec![(0, 0, 1, Variable), (0, 2, 1, Str)]);
}

#[test]
fn comment_markers_inside_string_are_text() {
    assert_eq!(kinds("\"/* /! !/\""), vec![Str]);
}

// ─── Numbers ───────────────────────────────────────────────────

#[test]
fn float_and_exponent() {
    assert_eq!(spans("3.14 1e-5"), vec![(0, 0, 4, Number), (0, 5, 4, Number)]);
}

#[test]
fn number_run_is_permissive() {
    // A trailing sign is swallowed into the number.
    assert_eq!(spans("1+2"), vec![(0, 0, 3, Number)]);
    assert_eq!(spans("1.2.3e"), vec![(0, 0, 6, Number)]);
}

#[test]
fn leading_sign_is_an_operator() {
    assert_eq!(spans("-1"), vec![(0, 0, 1, Operator), (0, 1, 1, Number)]);
}

#[test]
fn number_stops_at_letter() {
    assert_eq!(spans("12ab"), vec![(0, 0, 2, Number), (0, 2, 2, Variable)]);
}

// ─── Identifiers ───────────────────────────────────────────────

#[test]
fn identifier_kinds() {
    assert_eq!(
        kinds("if Foo i32 printf value Constructor"),
        vec![Keyword, Type, Type, Function, Variable, Keyword]
    );
}

#[test]
fn dotted_identifier_is_one_token() {
    assert_eq!(spans("a.b.c"), vec![(0, 0, 5, Variable)]);
    assert_eq!(spans("self.x"), vec![(0, 0, 6, Variable)]);
}

#[test]
fn underscore_starts_identifier() {
    assert_eq!(spans("_x1"), vec![(0, 0, 3, Variable)]);
}

#[test]
fn identifier_can_end_with_dot() {
    assert_eq!(spans("obj. x"), vec![(0, 0, 4, Variable), (0, 5, 1, Variable)]);
}

// ─── Symbols ───────────────────────────────────────────────────

#[test]
fn operators_are_single_characters() {
    assert_eq!(
        spans("a==b"),
        vec![
            (0, 0, 1, Variable),
            (0, 1, 1, Operator),
            (0, 2, 1, Operator),
            (0, 3, 1, Variable),
        ]
    );
}

#[test]
fn punctuation() {
    assert_eq!(
        kinds("(){}[],.;:"),
        vec![Punctuation; 10]
    );
}

#[test]
fn unknown_characters_are_skipped_but_advance_column() {
    assert_eq!(spans("@x $ y"), vec![(0, 1, 1, Variable), (0, 5, 1, Variable)]);
}

#[test]
fn non_ascii_is_skipped_with_utf16_width() {
    // 'é' is one unit, '😀' is two
    assert_eq!(spans("é😀x"), vec![(0, 3, 1, Variable)]);
}

#[test]
fn non_ascii_in_string_counts_utf16_length() {
    assert_eq!(spans("\"😀\" x"), vec![(0, 0, 4, Str), (0, 5, 1, Variable)]);
}

// ─── Whitespace ────────────────────────────────────────────────

#[test]
fn tabs_and_carriage_returns_are_one_column() {
    assert_eq!(spans("\tx\r\ny"), vec![(0, 1, 1, Variable), (1, 0, 1, Variable)]);
}

#[test]
fn crlf_line_comment_includes_carriage_return() {
    assert_eq!(spans("/* c\r\nx"), vec![(0, 0, 5, Comment), (1, 0, 1, Variable)]);
}

// ─── Larger document ───────────────────────────────────────────

#[test]
fn small_program() {
    let source = "\
/! Shapes
   and sizes !/
class Point
{
    i32 x = 10;
    printf(\"x\");
}
";
    assert_eq!(
        spans(source),
        vec![
            (0, 0, 25, Comment),
            (2, 0, 5, Keyword),
            (2, 6, 5, Type),
            (3, 0, 1, Punctuation),
            (4, 4, 3, Type),
            (4, 8, 1, Variable),
            (4, 10, 1, Operator),
            (4, 12, 2, Number),
            (4, 14, 1, Punctuation),
            (5, 4, 6, Function),
            (5, 10, 1, Punctuation),
            (5, 11, 3, Str),
            (5, 14, 1, Punctuation),
            (5, 15, 1, Punctuation),
            (6, 0, 1, Punctuation),
        ]
    );
}

#[test]
fn scanner_is_fused_after_end() {
    let vocab = Vocabulary::default();
    let mut scanner = Scanner::new("x", &vocab);
    assert!(scanner.next().is_some());
    assert!(scanner.next().is_none());
    assert!(scanner.next().is_none());
}

// ─── Property Tests ────────────────────────────────────────────

mod proptest_scanner {
    use super::tokens;
    use proptest::prelude::*;

    /// Fragments that exercise every rule, including comment and string
    /// delimiters that can pair up across fragments.
    const FRAGMENTS: &[&str] = &[
        "\n", " ", "\t", "/*", "/!", "!/", "\"", "\\", "1", "e", "+", ".", "x", "Foo", "class",
        "{", "@", "é",
    ];

    fn source() -> impl Strategy<Value = String> {
        proptest::collection::vec(proptest::sample::select(FRAGMENTS), 0..48)
            .prop_map(|parts| parts.concat())
    }

    proptest! {
        #[test]
        fn starts_are_non_decreasing(text in source()) {
            let toks = tokens(&text);
            for pair in toks.windows(2) {
                prop_assert!(pair[0].start() <= pair[1].start(), "{:?} in {:?}", pair, text);
            }
        }

        #[test]
        fn every_token_has_positive_length(text in source()) {
            for tok in tokens(&text) {
                prop_assert!(tok.length > 0, "zero-length {:?} in {:?}", tok, text);
            }
        }

        #[test]
        fn single_line_spans_do_not_overlap(text in "[a-z1{}=\" ]{0,40}") {
            // Without newlines a token ends at column + length.
            let toks = tokens(&text);
            for pair in toks.windows(2) {
                prop_assert!(pair[0].column + pair[0].length <= pair[1].column);
            }
        }

        #[test]
        fn scanning_is_deterministic(text in source()) {
            prop_assert_eq!(tokens(&text), tokens(&text));
        }

        #[test]
        fn arbitrary_text_terminates(text in any::<String>()) {
            let _ = tokens(&text);
        }
    }
}
