use std::rc::Rc;
use std::sync::Arc;

use log::trace;
use thiserror::Error;

/// The only way a parser can fail. It carries no position and no message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("input did not match")]
pub struct ParseFailure;

/// Parsed value and the unconsumed suffix of the input, or a failure.
pub type ParseResult<'a, E> = Result<(E, &'a str), ParseFailure>;

pub trait Parser {
    type Expression;

    /// Runs the parser, returning the value together with the remaining input.
    ///
    /// A failing parser never consumes input: callers always retry from the
    /// slice they passed in.
    fn run<'a>(&self, input: &'a str) -> ParseResult<'a, Self::Expression>;

    /// Runs the parser and drops whatever input was left over.
    fn parse(&self, input: &str) -> Result<Self::Expression, ParseFailure> {
        trace!("parsing {} bytes", input.len());
        self.run(input).map(|(e, _)| e)
    }

    fn map<F, U>(self, f: F) -> MapParser<Self, F>
    where
        F: Fn(Self::Expression) -> U,
        Self: Sized,
    {
        MapParser(self, f)
    }

    /// Like `map`, but a `None` from `f` turns the whole parse into a failure.
    fn try_map<F, U>(self, f: F) -> TryMapParser<Self, F>
    where
        F: Fn(Self::Expression) -> Option<U>,
        Self: Sized,
    {
        TryMapParser(self, f)
    }

    /// Monadic bind: the parser that runs next is chosen from the value parsed so far.
    fn and_then<F, P>(self, f: F) -> BindParser<Self, F>
    where
        F: Fn(Self::Expression) -> P,
        P: Parser,
        Self: Sized,
    {
        BindParser(self, f)
    }

    /// Left-biased choice: `other` is only tried, from the original input, when `self` fails.
    fn or<P>(self, other: P) -> OrParser<Self, P>
    where
        P: Parser<Expression = Self::Expression>,
        Self: Sized,
    {
        OrParser(self, other)
    }

    fn then<P: Parser>(self, p: P) -> ThenParser<Self, P>
    where
        Self: Sized,
    {
        ThenParser(self, p)
    }

    /// Runs `self` then `p`, keeping the value of `self`.
    fn followed_by<P: Parser>(self, p: P) -> FollowedByParser<Self, P>
    where
        Self: Sized,
    {
        FollowedByParser(self, p)
    }

    /// Runs `self` then `p`, keeping the value of `p`.
    fn preceding<P: Parser>(self, p: P) -> PrecedingParser<Self, P>
    where
        Self: Sized,
    {
        PrecedingParser(self, p)
    }

    fn boxed<'p>(self) -> BoxedParser<'p, Self::Expression>
    where
        Self: Sized + 'p,
    {
        Box::new(self)
    }
}

pub type BoxedParser<'p, E> = Box<dyn Parser<Expression = E> + 'p>;

impl<P: Parser + ?Sized> Parser for Box<P> {
    type Expression = P::Expression;

    fn run<'a>(&self, input: &'a str) -> ParseResult<'a, Self::Expression> {
        self.as_ref().run(input)
    }
}

impl<P: Parser + ?Sized> Parser for &P {
    type Expression = P::Expression;

    fn run<'a>(&self, input: &'a str) -> ParseResult<'a, Self::Expression> {
        (**self).run(input)
    }
}

impl<P: Parser + ?Sized> Parser for Rc<P> {
    type Expression = P::Expression;

    fn run<'a>(&self, input: &'a str) -> ParseResult<'a, Self::Expression> {
        self.as_ref().run(input)
    }
}

impl<P: Parser + ?Sized> Parser for Arc<P> {
    type Expression = P::Expression;

    fn run<'a>(&self, input: &'a str) -> ParseResult<'a, Self::Expression> {
        self.as_ref().run(input)
    }
}

pub struct MapParser<P, F>(P, F);

impl<P, F, U> Parser for MapParser<P, F>
where
    P: Parser,
    F: Fn(P::Expression) -> U,
{
    type Expression = U;

    fn run<'a>(&self, input: &'a str) -> ParseResult<'a, Self::Expression> {
        let (e, rest) = self.0.run(input)?;
        Ok(((self.1)(e), rest))
    }
}

pub struct TryMapParser<P, F>(P, F);

impl<P, F, U> Parser for TryMapParser<P, F>
where
    P: Parser,
    F: Fn(P::Expression) -> Option<U>,
{
    type Expression = U;

    fn run<'a>(&self, input: &'a str) -> ParseResult<'a, Self::Expression> {
        let (e, rest) = self.0.run(input)?;
        let u = (self.1)(e).ok_or(ParseFailure)?;
        Ok((u, rest))
    }
}

pub struct BindParser<P, F>(P, F);

impl<P, F, Q> Parser for BindParser<P, F>
where
    P: Parser,
    F: Fn(P::Expression) -> Q,
    Q: Parser,
{
    type Expression = Q::Expression;

    fn run<'a>(&self, input: &'a str) -> ParseResult<'a, Self::Expression> {
        let (e, rest) = self.0.run(input)?;
        (self.1)(e).run(rest)
    }
}

pub struct OrParser<A, B>(A, B);

impl<A, B> Parser for OrParser<A, B>
where
    A: Parser,
    B: Parser<Expression = A::Expression>,
{
    type Expression = A::Expression;

    fn run<'a>(&self, input: &'a str) -> ParseResult<'a, Self::Expression> {
        self.0.run(input).or_else(|_| self.1.run(input))
    }
}

pub struct ThenParser<A, B>(A, B);

impl<A, B> Parser for ThenParser<A, B>
where
    A: Parser,
    B: Parser,
{
    type Expression = (A::Expression, B::Expression);

    fn run<'a>(&self, input: &'a str) -> ParseResult<'a, Self::Expression> {
        let (a, rest) = self.0.run(input)?;
        let (b, rest) = self.1.run(rest)?;
        Ok(((a, b), rest))
    }
}

pub struct FollowedByParser<A, B>(A, B);

impl<A, B> Parser for FollowedByParser<A, B>
where
    A: Parser,
    B: Parser,
{
    type Expression = A::Expression;

    fn run<'a>(&self, input: &'a str) -> ParseResult<'a, Self::Expression> {
        let (a, rest) = self.0.run(input)?;
        let (_, rest) = self.1.run(rest)?;
        Ok((a, rest))
    }
}

pub struct PrecedingParser<A, B>(A, B);

impl<A, B> Parser for PrecedingParser<A, B>
where
    A: Parser,
    B: Parser,
{
    type Expression = B::Expression;

    fn run<'a>(&self, input: &'a str) -> ParseResult<'a, Self::Expression> {
        let (_, rest) = self.0.run(input)?;
        self.1.run(rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::{fail, from_fn, pure};

    fn first_char() -> impl Parser<Expression = char> {
        from_fn(|input: &str| {
            let mut chars = input.chars();
            let c = chars.next().ok_or(ParseFailure)?;
            Ok((c, chars.as_str()))
        })
    }

    fn just(expected: char) -> impl Parser<Expression = char> {
        from_fn(move |input: &str| match input.strip_prefix(expected) {
            Some(rest) => Ok((expected, rest)),
            None => Err(ParseFailure),
        })
    }

    const INPUTS: [&str; 6] = ["", "a", "ab", "abc", "ba", "123"];

    #[test]
    fn test_parse_drops_remaining() {
        let p = first_char();
        assert_eq!(p.parse("hello"), Ok('h'));
        assert_eq!(p.parse(""), Err(ParseFailure));
    }

    #[test]
    fn test_run() {
        let p = first_char();
        assert_eq!(p.run("hello"), Ok(('h', "ello")));
        assert_eq!(p.run(""), Err(ParseFailure));
    }

    #[test]
    fn test_map() {
        let p = first_char().map(|c| c.to_digit(10));
        assert_eq!(p.run("123"), Ok((Some(1), "23")));
        assert_eq!(p.run(""), Err(ParseFailure));
    }

    #[test]
    fn test_try_map() {
        let p = first_char().try_map(|c| c.to_digit(10));
        assert_eq!(p.run("123"), Ok((1, "23")));
        assert_eq!(p.run("abc"), Err(ParseFailure));
    }

    #[test]
    fn test_and_then() {
        let p = first_char().and_then(|_| first_char());
        assert_eq!(p.run("abc"), Ok(('b', "c")));
        assert_eq!(p.run("a"), Err(ParseFailure));
        assert_eq!(p.run(""), Err(ParseFailure));
    }

    #[test]
    fn test_and_then_depends_on_value() {
        // The first char says which char has to come next.
        let p = first_char().and_then(just);
        assert_eq!(p.run("aab"), Ok(('a', "b")));
        assert_eq!(p.run("ab"), Err(ParseFailure));
    }

    #[test]
    fn test_or() {
        let p = just('a').or(just('b'));
        assert_eq!(p.run("a"), Ok(('a', "")));
        assert_eq!(p.run("b"), Ok(('b', "")));
        assert_eq!(p.run("c"), Err(ParseFailure));
    }

    #[test]
    fn test_or_retries_from_original_input() {
        let p = just('a').then(just('x')).map(|(a, _)| a).or(just('a'));
        assert_eq!(p.run("ab"), Ok(('a', "b")));
    }

    #[test]
    fn test_then() {
        let p = just('a').then(just('b'));
        assert_eq!(p.run("abc"), Ok((('a', 'b'), "c")));
        assert_eq!(p.run("ac"), Err(ParseFailure));
    }

    #[test]
    fn test_followed_by() {
        let p = just('a').followed_by(just('b'));
        assert_eq!(p.run("ab"), Ok(('a', "")));
        assert_eq!(p.run("a"), Err(ParseFailure));
        assert_eq!(p.run("b"), Err(ParseFailure));
    }

    #[test]
    fn test_preceding() {
        let p = just('a').preceding(just('b'));
        assert_eq!(p.run("ab"), Ok(('b', "")));
        assert_eq!(p.run("a"), Err(ParseFailure));
        assert_eq!(p.run("b"), Err(ParseFailure));
    }

    #[test]
    fn test_shared_by_reference() {
        let a = just('a');
        let p = (&a).then(&a).then(&a);
        assert_eq!(p.run("aaab"), Ok(((('a', 'a'), 'a'), "b")));
        assert_eq!(a.run("ab"), Ok(('a', "b")));
    }

    #[test]
    fn test_boxed() {
        let parsers: Vec<BoxedParser<'static, char>> = vec![just('a').boxed(), first_char().boxed()];
        assert_eq!(parsers[0].run("ab"), Ok(('a', "b")));
        assert_eq!(parsers[1].run("xy"), Ok(('x', "y")));
    }

    #[test]
    fn test_fail_is_identity_for_or() {
        for input in INPUTS {
            assert_eq!(first_char().or(fail()).run(input), first_char().run(input));
            assert_eq!(fail::<char>().or(first_char()).run(input), first_char().run(input));
        }
    }

    #[test]
    fn test_or_is_associative() {
        for input in INPUTS {
            let left = just('a').or(just('b')).or(just('1'));
            let right = just('a').or(just('b').or(just('1')));
            assert_eq!(left.run(input), right.run(input));
        }
    }

    #[test]
    fn test_monad_left_identity() {
        let f = |c: char| just(c);
        for input in INPUTS {
            assert_eq!(pure('a').and_then(f).run(input), f('a').run(input));
        }
    }

    #[test]
    fn test_monad_right_identity() {
        for input in INPUTS {
            assert_eq!(first_char().and_then(pure).run(input), first_char().run(input));
        }
    }

    #[test]
    fn test_and_then_is_associative() {
        let f = |c: char| just(c).map(|c| c.to_ascii_uppercase());
        let g = |c: char| pure(c).map(move |c2| (c, c2));
        for input in ["aab", "bb", "ab", ""] {
            let left = first_char().and_then(f).and_then(g);
            let right = first_char().and_then(move |c| f(c).and_then(g));
            assert_eq!(left.run(input), right.run(input));
        }
    }

    #[test]
    fn test_map_composition() {
        let f = |c: char| c as u32;
        let g = |n: u32| n + 1;
        for input in INPUTS {
            assert_eq!(
                first_char().map(f).map(g).run(input),
                first_char().map(move |c| g(f(c))).run(input)
            );
        }
    }

    #[test]
    fn test_map_preserves_failure() {
        assert_eq!(just('a').map(|c| c as u32).run("b"), Err(ParseFailure));
    }

    #[test]
    fn test_runs_are_repeatable() {
        let p = just('a').then(first_char());
        assert_eq!(p.run("abc"), p.run("abc"));
        assert_eq!(p.run("x"), p.run("x"));
    }
}
