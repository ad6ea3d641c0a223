use clap::ValueEnum;
use parsnip::parsers::*;
use parsnip::prelude::*;

/// How each line of the input file is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shape {
    Ints,
    Doubles,
    Bools,
    Words,
    Grid,
}

fn inline_space() -> impl Parser<Expression = ()> {
    many(satisfy(|c| c == ' ' || c == '\t')).map(|_| ())
}

fn separator() -> impl Parser<Expression = ()> {
    some(satisfy(|c| matches!(c, ' ' | '\t' | ','))).map(|_| ())
}

/// Values on a single line, separated by blanks and/or commas.
pub fn row<P: Parser>(value: P) -> impl Parser<Expression = Vec<P::Expression>> {
    inline_space()
        .preceding(list_of(value, separator()))
        .followed_by(inline_space())
}

pub fn word() -> impl Parser<Expression = String> {
    some(satisfy(|c| !c.is_whitespace() && c != ','))
        .map(|cs| cs.into_iter().collect::<String>())
}

pub fn ints() -> impl Parser<Expression = Vec<Vec<i64>>> {
    lines(row(int()))
}

pub fn doubles() -> impl Parser<Expression = Vec<Vec<f64>>> {
    lines(row(double()))
}

pub fn bools() -> impl Parser<Expression = Vec<Vec<bool>>> {
    lines(row(boolean()))
}

pub fn words() -> impl Parser<Expression = Vec<Vec<String>>> {
    lines(row(word()))
}

pub fn grid() -> impl Parser<Expression = Vec<Vec<char>>> {
    lines(many(satisfy(|c| c != '\n')))
}
