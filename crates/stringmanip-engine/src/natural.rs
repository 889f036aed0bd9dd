//! Natural-order string comparison.
//!
//! Embedded runs of ASCII digits compare by numeric value, so `item2` sorts
//! before `item10`. Everything else compares by Unicode scalar value; there
//! is no locale handling.

use std::cmp::Ordering;

/// A maximal run of either ASCII digits or non-digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Run<'a> {
    Digits(&'a str),
    Text(&'a str),
}

impl<'a> Run<'a> {
    fn first_char(self) -> char {
        match self {
            // Runs are never empty
            Run::Digits(s) | Run::Text(s) => s.chars().next().unwrap_or('\0'),
        }
    }
}

/// Splits a string into alternating digit/non-digit runs.
struct Runs<'a> {
    rest: &'a str,
}

impl<'a> Runs<'a> {
    fn new(s: &'a str) -> Self {
        Self { rest: s }
    }
}

impl<'a> Iterator for Runs<'a> {
    type Item = Run<'a>;

    fn next(&mut self) -> Option<Run<'a>> {
        let first = self.rest.chars().next()?;
        let digits = first.is_ascii_digit();
        let end = self
            .rest
            .char_indices()
            .find(|(_, c)| c.is_ascii_digit() != digits)
            .map(|(i, _)| i)
            .unwrap_or(self.rest.len());

        let (run, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(if digits {
            Run::Digits(run)
        } else {
            Run::Text(run)
        })
    }
}

/// Compare two digit runs by magnitude, ignoring leading zeros.
///
/// Works on the digit strings directly so runs of any length are handled
/// without overflow.
fn compare_magnitude(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn leading_zeros(digits: &str) -> usize {
    digits.len() - digits.trim_start_matches('0').len()
}

/// Compare two strings in natural order.
///
/// Runs compare pairwise: digit runs by value, text runs by character code,
/// and a digit run against a text run by their first characters. If one run
/// sequence is a prefix of the other, the shorter one sorts first. When all
/// runs tie on value, the first digit-run pair that differs in leading zeros
/// decides, with fewer zeros first. `Equal` is only returned for identical
/// strings, which makes this a total order suitable for any sort.
pub fn compare(a: &str, b: &str) -> Ordering {
    let mut zeros_tiebreak = Ordering::Equal;
    let mut left = Runs::new(a);
    let mut right = Runs::new(b);

    loop {
        let (l, r) = match (left.next(), right.next()) {
            (None, None) => return zeros_tiebreak,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) => (l, r),
        };

        let ordering = match (l, r) {
            (Run::Digits(x), Run::Digits(y)) => {
                let by_value = compare_magnitude(x, y);
                if by_value == Ordering::Equal && zeros_tiebreak == Ordering::Equal {
                    zeros_tiebreak = leading_zeros(x).cmp(&leading_zeros(y));
                }
                by_value
            }
            (Run::Text(x), Run::Text(y)) => x.cmp(y),
            (l, r) => l.first_char().cmp(&r.first_char()),
        };

        if ordering != Ordering::Equal {
            return ordering;
        }
    }
}
