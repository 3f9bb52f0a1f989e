//! Ready-made parsers assembled from the public combinator surface.

mod parsers;

pub use parsers::{ident, number_lit, string_lit};
