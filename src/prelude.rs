pub use crate::combinators::{
    any, bind, cut, label, many, many_sep, map, maybe, merge, no_auto_ws, seq, some, some_sep,
};
pub use crate::driver::{run, run_with_ws};
pub use crate::error::ParseError;
pub use crate::node::Node;
pub use crate::parser::{Parser, Parsers, Rule};
pub use crate::primitives::{chars, chars_in, eof, exact, not_chars, not_chars_in, until};
pub use crate::state::{ascii_ws, no_ws, unicode_ws, Miss, Parsed, State, WsPolicy};
