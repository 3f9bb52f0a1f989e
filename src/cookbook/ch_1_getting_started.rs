use crate::prelude::*;

/// A grammar is a value. Bare strings are exact matchers, `chars` matches a
/// run from a character class, and `seq`/`any`/`maybe` glue pieces
/// together. Leaves skip whitespace before matching, so `"hello world"`
/// parses without saying anything about the space.
pub fn greeting() -> Parser {
    seq(("hello", any(("world", "friend")), maybe("!")))
}

/// When a parse fails, the reported error is the one that got deepest into
/// the input — usually the only one the user cares about. `run` hands back
/// the final [`State`] so position, remaining input and the diagnostic can
/// all be inspected.
pub fn assignment() -> Parser {
    seq((chars("a-z"), "=", chars("0-9")))
}
