#![warn(clippy::all)]
#![warn(clippy::correctness)]
#![warn(clippy::style)]
#![warn(clippy::complexity)]
#![warn(clippy::perf)]

/*!
`parsnip` is a parser combinator library: small parsers compose into
grammars, grammars run against a string and produce a tree of matches or a
precise "farthest failure" diagnostic.

- leaves: [`prelude::exact`], [`prelude::chars`] and friends; bare `&str`
  literals lift to exact matches anywhere a parser is expected
- structure: [`prelude::seq`], [`prelude::any`] (ordered choice with a
  per-instance branch predictor), [`prelude::maybe`], [`prelude::some`],
  [`prelude::many`]
- semantics: [`prelude::map`], [`prelude::bind`], [`prelude::merge`]
- commitment: [`prelude::cut`] turns soft alternatives into a committed
  parse after a distinctive prefix
- recursion: [`prelude::Rule`], a forward-declared handle for
  self-referential grammars

```
use parsnip::prelude::*;

let greeting = seq(("hello", any(("world", "brother"))));
let (node, state) = run(&greeting, "hello world");
assert_eq!(node.unwrap().child_tokens(), vec!["hello", "world"]);
assert_eq!(state.get(), "");
```
*/

use std::cell::Cell;

mod combinators;
mod driver;
mod error;
mod logging;
mod node;
mod parser;
mod primitives;
mod state;
mod util;

pub mod contrib;
pub mod prelude;

#[cfg(any(feature = "cookbook", doc))]
pub mod cookbook;

pub(crate) const LOG_TARGET: &str = "pn"; // env!("CARGO_PKG_NAME")

thread_local!(pub(crate) static LABEL: Cell<&'static str> = Cell::new(""));
