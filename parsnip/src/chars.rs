use unicode_segmentation::UnicodeSegmentation;

use crate::core::{ParseFailure, Parser};
use crate::parsers::{from_fn, many};

/// Consumes exactly one `char`.
pub fn item() -> impl Parser<Expression = char> {
    from_fn(|input: &str| {
        let mut chars = input.chars();
        let c = chars.next().ok_or(ParseFailure)?;
        Ok((c, chars.as_str()))
    })
}

/// Consumes one extended grapheme cluster, e.g. a letter with its combining accents.
pub fn grapheme() -> impl Parser<Expression = String> {
    from_fn(|input: &str| {
        let g = input.graphemes(true).next().ok_or(ParseFailure)?;
        Ok((g.to_owned(), &input[g.len()..]))
    })
}

pub fn end_of_input() -> impl Parser<Expression = ()> {
    from_fn(|input: &str| match input.is_empty() {
        true => Ok(((), input)),
        false => Err(ParseFailure),
    })
}

pub fn satisfy<F>(predicate: F) -> impl Parser<Expression = char>
where
    F: Fn(char) -> bool,
{
    item().try_map(move |c| predicate(c).then_some(c))
}

pub fn character(expected: char) -> impl Parser<Expression = char> {
    satisfy(move |c| c == expected)
}

/// Matches `target` literally and yields it.
pub fn string(target: &str) -> impl Parser<Expression = &str> + '_ {
    from_fn(move |input: &str| {
        let rest = target
            .chars()
            .try_fold(input, |rest, c| character(c).run(rest).map(|(_, rest)| rest))?;
        Ok((target, rest))
    })
}

pub fn newline() -> impl Parser<Expression = char> {
    character('\n')
}

/// A newline, or the end of the input.
pub fn end_of_line() -> impl Parser<Expression = ()> {
    newline().map(|_| ()).or(end_of_input())
}

/// The longest run of whitespace at the start of the input, possibly empty.
pub fn whitespace() -> impl Parser<Expression = String> {
    many(satisfy(char::is_whitespace)).map(|cs| cs.into_iter().collect::<String>())
}

/// Zero or more `parser` matches, each terminated by a newline or the end of the input.
pub fn lines<P: Parser>(parser: P) -> impl Parser<Expression = Vec<P::Expression>> {
    many(parser.followed_by(end_of_line()))
}
