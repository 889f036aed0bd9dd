//! Identifier tokenizing and case-style conversion.
//!
//! An identifier is split into word tokens on case transitions, letter/digit
//! transitions and existing delimiters, then re-joined in a target
//! [`CaseStyle`]. Digit tokens split off a letter stick to the word before
//! them, so `fooBar22` becomes `foo.bar22` in dot style rather than
//! `foo.bar.22`. A number the input already delimited stays a word.

mod style;

pub use style::{CaseStyle, ParseStyleError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Upper,
    /// Lowercase letters and any other non-delimiter character.
    Lower,
    Digit,
    Delimiter,
}

impl CharClass {
    fn of(c: char) -> Self {
        match c {
            ' ' | '_' | '-' | '.' => CharClass::Delimiter,
            c if c.is_ascii_digit() => CharClass::Digit,
            c if c.is_uppercase() => CharClass::Upper,
            _ => CharClass::Lower,
        }
    }
}

fn starts_token(prev: CharClass, current: CharClass, next_is_lower: bool) -> bool {
    use CharClass::*;
    match (prev, current) {
        (Lower | Digit, Upper) => true,
        (Digit, Lower) | (Upper | Lower, Digit) => true,
        // XMLHttp: the last capital of an acronym opens the next word
        (Upper, Upper) => next_is_lower,
        _ => false,
    }
}

/// A token plus whether it was split from the one before it by a delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Word<'a> {
    text: &'a str,
    after_delimiter: bool,
}

fn words(identifier: &str) -> Vec<Word<'_>> {
    let mut words = Vec::new();
    let mut start: Option<usize> = None;
    let mut prev: Option<CharClass> = None;
    let mut after_delimiter = false;
    let mut chars = identifier.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        let class = CharClass::of(c);
        if class == CharClass::Delimiter {
            if let Some(s) = start.take() {
                words.push(Word {
                    text: &identifier[s..i],
                    after_delimiter,
                });
            }
            after_delimiter = true;
            prev = None;
            continue;
        }

        let next_is_lower = chars.peek().is_some_and(|&(_, next)| next.is_lowercase());
        if let (Some(s), Some(p)) = (start, prev)
            && starts_token(p, class, next_is_lower)
        {
            words.push(Word {
                text: &identifier[s..i],
                after_delimiter,
            });
            after_delimiter = false;
            start = Some(i);
        }
        start.get_or_insert(i);
        prev = Some(class);
    }

    if let Some(s) = start {
        words.push(Word {
            text: &identifier[s..],
            after_delimiter,
        });
    }
    words
}

/// Split an identifier into word tokens.
///
/// A token starts at a lowercase-or-digit to uppercase transition, at every
/// letter/digit transition, and after any delimiter (space, `_`, `-`, `.`).
/// Delimiters themselves are dropped and never produce empty tokens.
pub fn tokenize(identifier: &str) -> Vec<&str> {
    words(identifier).into_iter().map(|word| word.text).collect()
}

fn is_number(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

fn join_words<'a>(words: impl IntoIterator<Item = Word<'a>>, style: CaseStyle) -> String {
    let mut out = String::new();
    let mut count = 0;

    for word in words {
        if word.text.is_empty() {
            continue;
        }
        if count > 0 && !word.after_delimiter && is_number(word.text) {
            out.push_str(word.text);
            continue;
        }
        if count > 0 {
            out.push_str(style.separator());
        }
        style.word_case(count).apply(word.text, &mut out);
        count += 1;
    }

    out
}

/// Re-join tokens in `style`.
///
/// Tokens are taken to be split at case or letter/digit transitions, so a
/// digit-only token is appended to the preceding word without a separator.
/// A leading digit token forms a word of its own.
pub fn join<S: AsRef<str>>(tokens: &[S], style: CaseStyle) -> String {
    let words = tokens.iter().map(|token| Word {
        text: token.as_ref(),
        after_delimiter: false,
    });
    join_words(words, style)
}

/// Convert a single identifier to `style`.
///
/// Numbers that followed a delimiter in `identifier` keep a separator, so
/// `v1.2.3` stays `v1.2.3` in dot style.
pub fn convert_case(identifier: &str, style: CaseStyle) -> String {
    join_words(words(identifier), style)
}

/// Convert every `\n`-separated line of `text` to `style`.
///
/// Each line's leading and trailing whitespace is kept, so indentation and
/// line endings (including a trailing `\r`) survive the conversion. Blank
/// lines stay blank.
pub fn convert_case_by_line(text: &str, style: CaseStyle) -> String {
    text.split('\n')
        .map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return line.to_string();
            }
            let lead = &line[..line.len() - line.trim_start().len()];
            let tail = &line[line.trim_end().len()..];
            format!("{lead}{}{tail}", convert_case(trimmed, style))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;

    const WORKED: &str = "11foo22fooBAR33BAR44foo55x6Y7Z";

    #[test]
    fn tokenizes_worked_example() {
        assert_eq!(
            tokenize(WORKED),
            vec![
                "11", "foo", "22", "foo", "BAR", "33", "BAR", "44", "foo", "55", "x", "6", "Y",
                "7", "Z"
            ]
        );
    }

    #[test]
    fn converts_worked_example_to_dot_style() {
        insta::assert_snapshot!(
            convert_case(WORKED, CaseStyle::Dot),
            @"11.foo22.foo.bar33.bar44.foo55.x6.y7.z"
        );
    }

    #[rstest]
    #[case("fooBar", &["foo", "Bar"])]
    #[case("FooBar", &["Foo", "Bar"])]
    #[case("foo_bar", &["foo", "bar"])]
    #[case("foo-bar.baz qux", &["foo", "bar", "baz", "qux"])]
    #[case("__foo__bar__", &["foo", "bar"])]
    #[case("XMLHttpRequest", &["XML", "Http", "Request"])]
    #[case("SCREAMING_SNAKE", &["SCREAMING", "SNAKE"])]
    #[case("v2Api", &["v", "2", "Api"])]
    #[case("été2Ça", &["été", "2", "Ça"])]
    #[case("", &[])]
    #[case("---", &[])]
    fn tokenizes(#[case] identifier: &str, #[case] expected: &[&str]) {
        assert_eq!(tokenize(identifier), expected);
    }

    #[rstest]
    #[case(CaseStyle::Dot, "foo.bar2.baz")]
    #[case(CaseStyle::Snake, "foo_bar2_baz")]
    #[case(CaseStyle::ScreamingSnake, "FOO_BAR2_BAZ")]
    #[case(CaseStyle::Kebab, "foo-bar2-baz")]
    #[case(CaseStyle::Camel, "fooBar2Baz")]
    #[case(CaseStyle::Pascal, "FooBar2Baz")]
    #[case(CaseStyle::Words, "foo bar2 baz")]
    #[case(CaseStyle::Title, "Foo Bar2 Baz")]
    fn converts_to_style(#[case] style: CaseStyle, #[case] expected: &str) {
        assert_eq!(convert_case("fooBar2Baz", style), expected);
        assert_eq!(convert_case("FOO_BAR2_BAZ", style), expected);
    }

    #[rstest]
    #[case("v1.2.3", CaseStyle::Dot, "v1.2.3")]
    #[case("foo_1_2", CaseStyle::Snake, "foo_1_2")]
    #[case("1_2", CaseStyle::Snake, "1_2")]
    #[case("page-2-of-10", CaseStyle::Kebab, "page-2-of-10")]
    #[case("page-2-of-10", CaseStyle::Snake, "page_2_of_10")]
    #[case("FOO_BAR_2_BAZ", CaseStyle::Dot, "foo.bar.2.baz")]
    #[case("v1.2.3", CaseStyle::Pascal, "V123")]
    fn delimited_numbers_keep_their_separator(
        #[case] identifier: &str,
        #[case] style: CaseStyle,
        #[case] expected: &str,
    ) {
        assert_eq!(convert_case(identifier, style), expected);
    }

    #[test]
    fn join_glues_numbers_to_the_previous_token() {
        assert_eq!(join(&["v", "1", "2"], CaseStyle::Dot), "v12");
        assert_eq!(join(&["1", "foo"], CaseStyle::Snake), "1_foo");
    }

    #[test]
    fn leading_number_is_its_own_word() {
        assert_eq!(convert_case("2fast_2furious", CaseStyle::Snake), "2_fast_2_furious");
        assert_eq!(convert_case("2fast2furious", CaseStyle::Snake), "2_fast2_furious");
        assert_eq!(convert_case("42", CaseStyle::Camel), "42");
    }

    #[test]
    fn converts_each_line() {
        let text = "fooBar\n    bazQux\r\n\nlastOne\n";
        assert_eq!(
            convert_case_by_line(text, CaseStyle::Snake),
            "foo_bar\n    baz_qux\r\n\nlast_one\n"
        );
    }

    fn arb_identifier() -> impl Strategy<Value = String> {
        "[A-Za-z0-9_ .-]{0,24}"
    }

    fn arb_separated_style() -> impl Strategy<Value = CaseStyle> {
        prop::sample::select(vec![
            CaseStyle::Dot,
            CaseStyle::Snake,
            CaseStyle::ScreamingSnake,
            CaseStyle::Kebab,
            CaseStyle::Words,
            CaseStyle::Title,
        ])
    }

    /// A lowercase word, optionally ending in digits, or a bare number.
    fn arb_word() -> impl Strategy<Value = String> {
        "[a-z]{1,6}[0-9]{0,3}|[0-9]{1,3}"
    }

    fn arb_lowercase_style() -> impl Strategy<Value = CaseStyle> {
        prop::sample::select(vec![
            CaseStyle::Dot,
            CaseStyle::Snake,
            CaseStyle::Kebab,
            CaseStyle::Words,
        ])
    }

    proptest! {
        #[test]
        fn text_already_in_style_is_unchanged(
            words in prop::collection::vec(arb_word(), 1..6),
            style in arb_lowercase_style(),
        ) {
            let identifier = words.join(style.separator());
            prop_assert_eq!(convert_case(&identifier, style), identifier);
        }

        #[test]
        fn screaming_snake_input_is_unchanged(
            words in prop::collection::vec(arb_word(), 1..6),
        ) {
            let identifier = words.join("_").to_uppercase();
            prop_assert_eq!(convert_case(&identifier, CaseStyle::ScreamingSnake), identifier);
        }

        #[test]
        fn dot_style_is_idempotent(identifier in arb_identifier()) {
            let once = convert_case(&identifier, CaseStyle::Dot);
            prop_assert_eq!(convert_case(&once, CaseStyle::Dot), once);
        }

        #[test]
        fn separated_styles_are_idempotent(
            identifier in arb_identifier(),
            style in arb_separated_style(),
        ) {
            let once = convert_case(&identifier, style);
            prop_assert_eq!(convert_case(&once, style), once);
        }

        #[test]
        fn tokens_never_contain_delimiters(identifier in arb_identifier()) {
            for token in tokenize(&identifier) {
                prop_assert!(!token.is_empty());
                prop_assert!(!token.contains([' ', '_', '-', '.']));
            }
        }
    }
}
