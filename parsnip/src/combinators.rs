use std::{marker::PhantomData, sync::OnceLock};

use log::debug;

use super::core::{BoxedParser, ParseFailure, ParseResult, Parser};

pub mod parsers {

    use super::*;

    /// Builds a parser from a plain function over the input.
    pub fn from_fn<F, E>(f: F) -> FnParser<F, E>
    where
        F: for<'a> Fn(&'a str) -> ParseResult<'a, E>,
    {
        FnParser(f, PhantomData)
    }

    /// Succeeds with `value` without consuming anything.
    pub fn pure<E: Clone>(value: E) -> PureParser<E> {
        PureParser(value)
    }

    pub fn succeed<E: Clone>(value: E) -> PureParser<E> {
        pure(value)
    }

    pub fn fail<E>() -> FailParser<E> {
        FailParser(PhantomData)
    }

    /// Defers building the parser until it is first run, so that a grammar
    /// can refer to itself.
    pub fn lazy<P, F>(get: F) -> LazyParser<P, F>
    where
        P: Parser,
        F: Fn() -> P,
    {
        LazyParser {
            parser: OnceLock::new(),
            get,
        }
    }

    /// Zero or more repetitions; never fails.
    pub fn many<P: Parser>(parser: P) -> ManyParser<P> {
        ManyParser(parser)
    }

    /// One or more repetitions.
    pub fn some<P: Parser>(parser: P) -> impl Parser<Expression = Vec<P::Expression>> {
        many(parser).try_map(|acc| (!acc.is_empty()).then_some(acc))
    }

    pub fn optional<P: Parser>(parser: P) -> OptionalParser<P> {
        OptionalParser(parser)
    }

    /// Zero or more `item`s separated by `separator`. A trailing separator is
    /// left in the input.
    pub fn list_of<P, S>(item: P, separator: S) -> ListParser<P, S>
    where
        P: Parser,
        S: Parser,
    {
        ListParser { item, separator }
    }

    /// Tries every parser in order and keeps the first success.
    pub fn one_of<'p, E>(
        parsers: impl IntoIterator<Item = BoxedParser<'p, E>>,
    ) -> OneOfParser<'p, E> {
        OneOfParser(parsers.into_iter().collect())
    }
}

pub struct FnParser<F, E>(F, PhantomData<fn() -> E>);

impl<F, E> Parser for FnParser<F, E>
where
    F: for<'a> Fn(&'a str) -> ParseResult<'a, E>,
{
    type Expression = E;

    fn run<'a>(&self, input: &'a str) -> ParseResult<'a, Self::Expression> {
        (self.0)(input)
    }
}

pub struct PureParser<E>(E);

impl<E: Clone> Parser for PureParser<E> {
    type Expression = E;

    fn run<'a>(&self, input: &'a str) -> ParseResult<'a, Self::Expression> {
        Ok((self.0.clone(), input))
    }
}

pub struct FailParser<E>(PhantomData<fn() -> E>);

impl<E> Parser for FailParser<E> {
    type Expression = E;

    fn run<'a>(&self, _: &'a str) -> ParseResult<'a, Self::Expression> {
        Err(ParseFailure)
    }
}

pub struct LazyParser<P, F> {
    parser: OnceLock<P>,
    get: F,
}

impl<P, F> LazyParser<P, F>
where
    F: Fn() -> P,
{
    fn get_parser(&self) -> &P {
        self.parser.get_or_init(&self.get)
    }
}

impl<P, F> Parser for LazyParser<P, F>
where
    P: Parser,
    F: Fn() -> P,
{
    type Expression = P::Expression;

    fn run<'a>(&self, input: &'a str) -> ParseResult<'a, Self::Expression> {
        self.get_parser().run(input)
    }
}

pub struct ManyParser<P>(P);

impl<P: Parser> Parser for ManyParser<P> {
    type Expression = Vec<P::Expression>;

    fn run<'a>(&self, mut input: &'a str) -> ParseResult<'a, Self::Expression> {
        let mut acc = vec![];
        while let Ok((e, rest)) = self.0.run(input) {
            // A match that consumes nothing would repeat forever.
            if rest.len() == input.len() {
                debug!("repetition stopped on an empty match after {} items", acc.len());
                break;
            }
            acc.push(e);
            input = rest;
        }
        Ok((acc, input))
    }
}

pub struct OptionalParser<P>(P);

impl<P: Parser> Parser for OptionalParser<P> {
    type Expression = Option<P::Expression>;

    fn run<'a>(&self, input: &'a str) -> ParseResult<'a, Self::Expression> {
        match self.0.run(input) {
            Ok((e, rest)) => Ok((Some(e), rest)),
            Err(_) => Ok((None, input)),
        }
    }
}

pub struct ListParser<P, S> {
    item: P,
    separator: S,
}

impl<P, S> Parser for ListParser<P, S>
where
    P: Parser,
    S: Parser,
{
    type Expression = Vec<P::Expression>;

    fn run<'a>(&self, input: &'a str) -> ParseResult<'a, Self::Expression> {
        let Ok((first, mut rest)) = self.item.run(input) else {
            return Ok((vec![], input));
        };
        let mut acc = vec![first];
        let next_item = (&self.separator).preceding(&self.item);
        while let Ok((e, next)) = next_item.run(rest) {
            if next.len() == rest.len() {
                break;
            }
            acc.push(e);
            rest = next;
        }
        Ok((acc, rest))
    }
}

pub struct OneOfParser<'p, E>(Vec<BoxedParser<'p, E>>);

impl<'p, E> Parser for OneOfParser<'p, E> {
    type Expression = E;

    fn run<'a>(&self, input: &'a str) -> ParseResult<'a, Self::Expression> {
        self.0
            .iter()
            .find_map(|p| p.run(input).ok())
            .ok_or(ParseFailure)
    }
}

/// Destructures the nested pairs built by a chain of `then`, in parse order.
///
/// `a.then(b).then(c)` yields `((a, b), c)`, which `unwind!(a, b, c)` matches.
#[macro_export]
macro_rules! unwind {
    (@acc $acc:pat) => {
        $acc
    };
    (@acc $acc:pat, $next:pat $(, $rest:pat)*) => {
        $crate::unwind!(@acc ($acc, $next) $(, $rest)*)
    };
    ($a:pat, $b:pat $(, $rest:pat)*) => {
        $crate::unwind!(@acc ($a, $b) $(, $rest)*)
    };
}
