use crate::chars::{character, item, satisfy, string};
use crate::core::Parser;
use crate::parsers::{optional, some};

/// A single ASCII digit as its value.
pub fn digit() -> impl Parser<Expression = u32> {
    item().try_map(|c| c.to_digit(10))
}

fn digits() -> impl Parser<Expression = String> {
    some(satisfy(|c| c.is_ascii_digit())).map(|ds| ds.into_iter().collect::<String>())
}

/// One or more digits. Fails when the value does not fit in a `u64`.
pub fn natural_number() -> impl Parser<Expression = u64> {
    digits().try_map(|ds| ds.parse::<u64>().ok())
}

/// Digits with an optional leading `-`, as text.
fn signed_digits() -> impl Parser<Expression = String> {
    optional(character('-'))
        .then(digits())
        .map(|(sign, ds)| match sign {
            Some(_) => format!("-{ds}"),
            None => ds,
        })
}

/// A natural number with an optional leading `-`.
pub fn int() -> impl Parser<Expression = i64> {
    signed_digits().try_map(|text| text.parse::<i64>().ok())
}

/// An `int`, optionally followed by `.` and a fractional part.
///
/// The number is read from its text, so `-0.5` keeps its sign and `1.05`
/// keeps its leading fractional zero. The integer part has the same range
/// as `int`; the fractional digits are not bounded. A `.` with no digits
/// after it is not consumed.
pub fn double() -> impl Parser<Expression = f64> {
    signed_digits()
        .then(optional(character('.').preceding(digits())))
        .try_map(|(whole, fraction)| {
            whole.parse::<i64>().ok()?;
            let text = match fraction {
                Some(fraction) => format!("{whole}.{fraction}"),
                None => whole,
            };
            text.parse::<f64>().ok()
        })
}

pub fn boolean() -> impl Parser<Expression = bool> {
    string("true")
        .map(|_| true)
        .or(string("false").map(|_| false))
}
