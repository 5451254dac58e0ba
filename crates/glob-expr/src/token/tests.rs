use rstest::rstest;

use super::*;

use super::Token::*;

#[test]
fn test_tokenize_empty() {
    assert_eq!(tokenize(""), Vec::<Token>::new());
}

#[test]
fn test_tokenize_literal() {
    assert_eq!(tokenize("abc"), vec![Literal('a'), Literal('b'), Literal('c')]);
}

#[test]
fn test_tokenize_wildcards() {
    assert_eq!(tokenize("a*b?"), vec![Literal('a'), AnySequence, Literal('b'), AnyChar]);
    assert_eq!(tokenize("?*?"), vec![AnyChar, AnySequence, AnyChar]);
}

#[rstest]
#[case("**", vec![AnySequence])]
#[case("***", vec![AnySequence])]
#[case("a**b", vec![Literal('a'), AnySequence, Literal('b')])]
#[case("*?*", vec![AnySequence, AnyChar, AnySequence])]
#[case(r"*\**", vec![AnySequence, Literal('*'), AnySequence])]
fn test_tokenize_collapses_adjacent_stars(#[case] raw: &str, #[case] expected: Vec<Token>) {
    assert_eq!(tokenize(raw), expected);
}

#[rstest]
#[case(r"\*", vec![Literal('*')])]
#[case(r"\?", vec![Literal('?')])]
#[case(r"a\*b", vec![Literal('a'), Literal('*'), Literal('b')])]
fn test_tokenize_escaped_wildcards(#[case] raw: &str, #[case] expected: Vec<Token>) {
    assert_eq!(tokenize(raw), expected);
}

#[rstest]
#[case(r"\", vec![Literal('\\')])]
#[case(r"a\", vec![Literal('a'), Literal('\\')])]
#[case(r"\a", vec![Literal('\\'), Literal('a')])]
#[case(r"\\", vec![Literal('\\'), Literal('\\')])]
#[case(r"\\*", vec![Literal('\\'), Literal('*')])]
#[case(r"\\\*", vec![Literal('\\'), Literal('\\'), Literal('*')])]
#[case(r"*\", vec![AnySequence, Literal('\\')])]
fn test_tokenize_plain_backslash(#[case] raw: &str, #[case] expected: Vec<Token>) {
    assert_eq!(tokenize(raw), expected);
}

#[test]
fn test_tokenize_unicode() {
    assert_eq!(tokenize("ä?🦀"), vec![Literal('ä'), AnyChar, Literal('🦀')]);
}

#[rstest]
#[case(Literal('a'), "a")]
#[case(Literal('*'), r"\*")]
#[case(Literal('?'), r"\?")]
#[case(Literal('\\'), r"\")]
#[case(AnyChar, "?")]
#[case(AnySequence, "*")]
fn test_display(#[case] token: Token, #[case] expected: &str) {
    assert_eq!(token.to_string(), expected);
}

#[test]
fn test_is_wildcard() {
    assert!(AnyChar.is_wildcard());
    assert!(AnySequence.is_wildcard());
    assert!(!Literal('*').is_wildcard());
}
