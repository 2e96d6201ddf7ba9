//! Natural (numeric-aware) ordering
//!
//! Strings are split into alternating text and digit runs. Digit runs
//! compare as integers of any length, text runs compare case-insensitively.

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

#[derive(Debug, PartialEq, Eq)]
enum Token<'s> {
    Text(&'s str),
    Number(&'s str),
}

fn tokens(s: &str) -> impl Iterator<Item = Token<'_>> {
    let mut rest = s;
    std::iter::from_fn(move || {
        let first = rest.chars().next()?;
        let is_digit = first.is_ascii_digit();
        let end = rest
            .find(|c: char| c.is_ascii_digit() != is_digit)
            .unwrap_or(rest.len());
        let (run, tail) = rest.split_at(end);
        rest = tail;
        Some(if is_digit { Token::Number(run) } else { Token::Text(run) })
    })
}

fn cmp_numbers(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn cmp_text(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// Compare two strings in natural order
///
/// A string starting with a digit run sorts before one starting with text,
/// as if an empty text run preceded it. Keys that are equal under natural
/// order fall back to a plain byte comparison so the result is total.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = tokens(a);
    let mut right = tokens(b);

    loop {
        let ord = match (left.next(), right.next()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(Token::Number(x)), Some(Token::Number(y))) => cmp_numbers(x, y),
            (Some(Token::Text(x)), Some(Token::Text(y))) => cmp_text(x, y),
            (Some(Token::Number(_)), Some(Token::Text(_))) => Ordering::Less,
            (Some(Token::Text(_)), Some(Token::Number(_))) => Ordering::Greater,
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
}

/// Compare two paths in natural order of their full string form
pub fn natural_path_cmp(a: &Path, b: &Path) -> Ordering {
    natural_cmp(&a.to_string_lossy(), &b.to_string_lossy())
}

/// Sort paths in natural order
pub fn sort_natural(paths: &mut [PathBuf]) {
    paths.sort_by(|a, b| natural_path_cmp(a, b));
}
