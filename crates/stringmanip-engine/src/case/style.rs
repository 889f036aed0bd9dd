use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Target naming convention for re-joining identifier tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaseStyle {
    /// `foo.bar2.baz`
    Dot,
    /// `foo_bar2_baz`
    Snake,
    /// `FOO_BAR2_BAZ`
    ScreamingSnake,
    /// `foo-bar2-baz`
    Kebab,
    /// `fooBar2Baz`
    Camel,
    /// `FooBar2Baz`
    Pascal,
    /// `foo bar2 baz`
    Words,
    /// `Foo Bar2 Baz`
    Title,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown case style: {name}")]
pub struct ParseStyleError {
    pub name: String,
}

/// How a single word is cased when emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WordCase {
    Lower,
    Upper,
    Capitalized,
}

impl WordCase {
    pub(crate) fn apply(self, word: &str, out: &mut String) {
        match self {
            WordCase::Lower => out.push_str(&word.to_lowercase()),
            WordCase::Upper => out.push_str(&word.to_uppercase()),
            WordCase::Capitalized => {
                let mut chars = word.chars();
                if let Some(first) = chars.next() {
                    out.extend(first.to_uppercase());
                    out.push_str(&chars.as_str().to_lowercase());
                }
            }
        }
    }
}

impl CaseStyle {
    pub const ALL: [CaseStyle; 8] = [
        CaseStyle::Dot,
        CaseStyle::Snake,
        CaseStyle::ScreamingSnake,
        CaseStyle::Kebab,
        CaseStyle::Camel,
        CaseStyle::Pascal,
        CaseStyle::Words,
        CaseStyle::Title,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CaseStyle::Dot => "dot",
            CaseStyle::Snake => "snake",
            CaseStyle::ScreamingSnake => "screaming-snake",
            CaseStyle::Kebab => "kebab",
            CaseStyle::Camel => "camel",
            CaseStyle::Pascal => "pascal",
            CaseStyle::Words => "words",
            CaseStyle::Title => "title",
        }
    }

    /// Separator placed between words. Empty for camel and pascal.
    pub fn separator(self) -> &'static str {
        match self {
            CaseStyle::Dot => ".",
            CaseStyle::Snake | CaseStyle::ScreamingSnake => "_",
            CaseStyle::Kebab => "-",
            CaseStyle::Camel | CaseStyle::Pascal => "",
            CaseStyle::Words | CaseStyle::Title => " ",
        }
    }

    pub(crate) fn word_case(self, index: usize) -> WordCase {
        match self {
            CaseStyle::Dot | CaseStyle::Snake | CaseStyle::Kebab | CaseStyle::Words => {
                WordCase::Lower
            }
            CaseStyle::ScreamingSnake => WordCase::Upper,
            CaseStyle::Camel if index == 0 => WordCase::Lower,
            CaseStyle::Camel | CaseStyle::Pascal | CaseStyle::Title => WordCase::Capitalized,
        }
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CaseStyle {
    type Err = ParseStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CaseStyle::ALL
            .into_iter()
            .find(|style| style.name() == s)
            .ok_or_else(|| ParseStyleError {
                name: s.to_string(),
            })
    }
}
