use rstest::rstest;

use super::*;

fn pattern(s: &str, mode: Mode) -> Pattern {
    Pattern::new(s, mode)
}

#[test]
fn test_pattern_kind() {
    assert_eq!(pattern("", Mode::Simple).kind, Kind::Empty);
    assert_eq!(pattern("*", Mode::Simple).kind, Kind::Any);
    assert_eq!(pattern("**", Mode::Advanced).kind, Kind::Starred);
    assert_eq!(pattern("a?c", Mode::Simple).kind, Kind::StarFree);
    assert_eq!(pattern("a*c", Mode::Advanced).kind, Kind::Starred);
}

#[test]
fn test_pattern_decodes_code_points() {
    let p = pattern("🦀?*", Mode::Advanced);
    assert_eq!(p.symbols, vec!['🦀', '?', '*']);
    assert_eq!(p.mode(), Mode::Advanced);
    assert_eq!(p.to_string(), "🦀?*");
}

#[rstest]
fn test_empty_pattern(#[values(Mode::Simple, Mode::Advanced)] mode: Mode) {
    assert!(matches("", "", mode));
    assert!(!matches("", "x", mode));
}

#[rstest]
fn test_asterisk_match_any(
    #[values(Mode::Simple, Mode::Advanced)] mode: Mode,
    #[values("", "namespace.real.root.value", "user/alice/docs", "🦀")] text: &str,
) {
    assert!(matches("*", text, mode));
}

#[rstest]
#[case("root.value", "root.value", true)]
#[case("root.value", "leaf.value", false)]
#[case("root.value", "root.valu", false)]
#[case("root.value", "root.values", false)]
fn test_exact_match(
    #[case] p: &str,
    #[case] text: &str,
    #[case] expected: bool,
    #[values(Mode::Simple, Mode::Advanced)] mode: Mode,
) {
    assert_eq!(matches(p, text, mode), expected);
}

#[rstest]
#[case("?", "a", true)]
#[case("?", "🦀", true)]
#[case("?", "", false)]
#[case("?", "ab", false)]
#[case("???", "abc", true)]
#[case("???", "ab", false)]
#[case("a?c", "abc", true)]
#[case("a?c", "ac", false)]
#[case("ab?", "ab", false)]
#[case("ab?", "abc", true)]
fn test_question_mark(
    #[case] p: &str,
    #[case] text: &str,
    #[case] expected: bool,
    #[values(Mode::Simple, Mode::Advanced)] mode: Mode,
) {
    assert_eq!(matches(p, text, mode), expected);
}

#[rstest]
#[case("*world", "world", true)]
#[case("*world", "hello world", true)]
#[case("*world", "world!", false)]
#[case("hello*", "hello", true)]
#[case("hello*", "hello world", true)]
#[case("hello*", "xhello", false)]
#[case("foo*bar", "foobar", true)]
#[case("foo*bar", "foo and bar", true)]
#[case("foo*bar", "foobarx", false)]
#[case("foo*bar", "bar", false)]
fn test_asterisk(
    #[case] p: &str,
    #[case] text: &str,
    #[case] expected: bool,
    #[values(Mode::Simple, Mode::Advanced)] mode: Mode,
) {
    assert_eq!(matches(p, text, mode), expected);
}

#[rstest]
#[case("*foo*bar*", "foobar", true)]
#[case("*foo*bar*", "prefix foo middle bar suffix", true)]
#[case("*foo*bar*", "barfoo", false)]
#[case("a*b?c", "abXc", true)]
#[case("a*b?c", "aXXXbYc", true)]
#[case("a*b?c", "abc", false)]
#[case("a*b?c", "abYYc", false)]
#[case("*?", "", false)]
#[case("*?", "x", true)]
#[case("?*?", "xy", true)]
#[case("?*?", "x", false)]
fn test_backtracking(#[case] p: &str, #[case] text: &str, #[case] expected: bool) {
    assert_eq!(matches(p, text, Mode::Advanced), expected);
}

#[test]
fn test_star_in_simple_mode_still_backtracks() {
    let p = pattern("a*z", Mode::Simple);
    assert!(p.matches("abcz"));
    assert!(p.matches("az"));
    assert!(!p.matches("abc"));
}

#[rstest]
#[case("v??", "v🦀1", true)]
#[case("v??", "v🦀", false)]
#[case("*🎉", "🦀🎉", true)]
#[case("🦀*", "🦀", true)]
fn test_utf8(
    #[case] p: &str,
    #[case] text: &str,
    #[case] expected: bool,
    #[values(Mode::Simple, Mode::Advanced)] mode: Mode,
) {
    assert_eq!(matches(p, text, mode), expected);
}

#[test]
fn test_no_escape_mechanism() {
    assert!(matches(r"\*", r"\anything", Mode::Advanced));
    assert!(!matches(r"\*", "*", Mode::Advanced));
}

#[test]
fn test_idempotent() {
    let p = pattern("a*b*c", Mode::Advanced);
    for _ in 0..3 {
        assert!(p.matches("aXbYc"));
        assert!(!p.matches("aXbY"));
    }
}

#[rstest]
fn test_long_text_through_star(#[values(Mode::Simple, Mode::Advanced)] mode: Mode) {
    let filler = "x".repeat(100_000);

    let p = pattern("a*b*c", mode);
    assert!(!p.matches(&format!("a{filler}c")));
    assert!(p.matches(&format!("a{filler}b{filler}c")));

    let p = pattern("docs/*.value", mode);
    assert!(p.matches(&format!("docs/{filler}.value")));
    assert!(!p.matches(&format!("docs/{filler}.valu")));
}
