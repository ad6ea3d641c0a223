//! Small parser combinators over `&str`, plus the odd numeric helper that
//! puzzle inputs tend to call for.

pub mod chars;
pub mod combinators;
pub mod core;
pub mod linalg;
pub mod numbers;
pub mod util;

pub mod parsers {
    pub use crate::chars::*;
    pub use crate::combinators::parsers::*;
    pub use crate::numbers::*;
}

pub mod prelude {
    pub use crate::core::{BoxedParser, ParseFailure, ParseResult, Parser};
    pub use crate::unwind;
}
