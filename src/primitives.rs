use std::ops::{Bound, RangeBounds};

use crate::node::Node;
use crate::parser::Parser;
use crate::state::State;

/// Match the literal `text`, skipping leading whitespace first.
pub fn exact(text: impl Into<String>) -> Parser {
    let text = text.into();
    Parser::from_fn(move |st: &mut State| {
        let entry = st.pos;
        st.skip_ws();
        st.log_try("exact", &text);
        if !st.get().starts_with(text.as_str()) {
            let pos = st.pos;
            st.pos = entry;
            return Err(st.miss(text.clone(), pos));
        }
        let start = st.pos;
        st.advance(text.len());
        st.log_ok("exact", &text);
        Ok(Node::leaf(text.clone(), start, st.pos))
    })
}

/// Match a run of one or more characters from a compact class such as
/// `"a-zA-Z0-9"` or `"abc"`. A `-` that is not between two characters is
/// literal.
pub fn chars(class: &str) -> Parser {
    chars_in(class, 1..)
}

/// `chars` with an explicit run-length range, e.g. `chars_in("0-9", 2..=2)`.
pub fn chars_in(class: &str, range: impl RangeBounds<usize>) -> Parser {
    let (min, max) = run_bounds(&range);
    char_run(CharClass::new(class), min, max, false)
}

/// Match a run of one or more characters *not* in the class.
pub fn not_chars(class: &str) -> Parser {
    not_chars_in(class, 1..)
}

/// `not_chars` with an explicit run-length range.
pub fn not_chars_in(class: &str, range: impl RangeBounds<usize>) -> Parser {
    let (min, max) = run_bounds(&range);
    char_run(CharClass::new(class), min, max, true)
}

/// Consume everything up to (not including) the literal `stop`. Matching
/// zero characters is fine; failing to find `stop` at all is a miss.
pub fn until(stop: impl Into<String>) -> Parser {
    let stop = stop.into();
    Parser::from_fn(move |st: &mut State| {
        let entry = st.pos;
        st.skip_ws();
        st.log_try("until", &stop);
        let rest = st.get();
        let Some(i) = rest.find(stop.as_str()) else {
            let pos = st.pos;
            st.pos = entry;
            return Err(st.miss(stop.clone(), pos));
        };
        let start = st.pos;
        let token = rest[..i].to_string();
        st.advance(i);
        st.log_ok("until", &token);
        Ok(Node::leaf(token, start, st.pos))
    })
}

/// Succeed only at end of input (after whitespace), consuming nothing.
pub fn eof() -> Parser {
    Parser::from_fn(|st: &mut State| {
        let entry = st.pos;
        st.skip_ws();
        if !st.get().is_empty() {
            let pos = st.pos;
            st.pos = entry;
            return Err(st.miss("eof", pos));
        }
        Ok(Node::empty(st.pos))
    })
}

/// A compiled character class. `a-z` spans form inclusive ranges; any other
/// character stands for itself.
#[derive(Debug, Clone)]
struct CharClass {
    repr: String,
    ranges: Vec<(char, char)>,
}

impl CharClass {
    fn new(repr: &str) -> Self {
        let cs: Vec<char> = repr.chars().collect();
        let mut ranges = Vec::new();
        let mut i = 0;
        while i < cs.len() {
            if i + 2 < cs.len() && cs[i + 1] == '-' {
                ranges.push((cs[i], cs[i + 2]));
                i += 3;
            } else {
                ranges.push((cs[i], cs[i]));
                i += 1;
            }
        }
        CharClass {
            repr: repr.to_string(),
            ranges,
        }
    }

    fn contains(&self, c: char) -> bool {
        self.ranges.iter().any(|&(lo, hi)| lo <= c && c <= hi)
    }
}

fn run_bounds<R: RangeBounds<usize>>(r: &R) -> (usize, usize) {
    let min = match r.start_bound() {
        Bound::Included(&n) => n,
        Bound::Excluded(&n) => n + 1,
        Bound::Unbounded => 0,
    };
    let max = match r.end_bound() {
        Bound::Included(&n) => n,
        Bound::Excluded(&n) => n.saturating_sub(1),
        Bound::Unbounded => usize::MAX,
    };
    (min, max)
}

fn char_run(class: CharClass, min: usize, max: usize, negate: bool) -> Parser {
    let expected = if negate {
        format!("not {}", class.repr)
    } else {
        class.repr.clone()
    };
    Parser::from_fn(move |st: &mut State| {
        let entry = st.pos;
        st.skip_ws();
        st.log_try("chars", &expected);
        let rest = st.get();
        let mut bytes = 0;
        let mut count = 0;
        for c in rest.chars() {
            if count >= max || class.contains(c) == negate {
                break;
            }
            bytes += c.len_utf8();
            count += 1;
        }
        if count < min {
            let pos = st.pos;
            st.pos = entry;
            return Err(st.miss(expected.clone(), pos));
        }
        let start = st.pos;
        let token = rest[..bytes].to_string();
        st.advance(bytes);
        st.log_ok("chars", &token);
        Ok(Node::leaf(token, start, st.pos))
    })
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use test_log::test;

    #[test]
    fn test_exact() {
        let (node, st) = run(exact("hello"), "  hello there");
        let node = node.unwrap();
        assert_eq!(node.token, "hello");
        assert_eq!((node.start, node.end), (2, 7));
        assert_eq!(st.get(), " there");

        let (node, st) = run(exact("bye"), "hello");
        assert!(node.is_none());
        assert_eq!(st.pos, 0);
        assert_eq!(st.error.unwrap().to_string(), "offset 0: expected bye");
    }

    #[test]
    fn test_chars_classes() {
        let (node, st) = run(chars("a-g"), "abcz");
        assert_eq!(node.unwrap().token, "abc");
        assert_eq!(st.get(), "z");

        // plain enumeration, no ranges
        let (node, _) = run(chars("abc"), "cabx");
        assert_eq!(node.unwrap().token, "cab");

        // trailing '-' is literal
        let (node, _) = run(chars("a-c-"), "ab-cx");
        assert_eq!(node.unwrap().token, "ab-c");

        let (node, st) = run(chars("def"), "a,b");
        assert!(node.is_none());
        assert_eq!(st.error.unwrap().to_string(), "offset 0: expected def");
    }

    #[test]
    fn test_chars_run_lengths() {
        let (node, st) = run(chars_in("0-9", 2..=2), "12345");
        assert_eq!(node.unwrap().token, "12");
        assert_eq!(st.pos, 2);

        let (node, _) = run(chars_in("0-9", 3..), "12");
        assert!(node.is_none());

        // zero-length runs may succeed with an empty token
        let (node, st) = run(chars_in("0-9", ..), "abc");
        assert_eq!(node.unwrap().token, "");
        assert_eq!(st.pos, 0);
    }

    #[test]
    fn test_not_chars() {
        let (node, st) = run(not_chars("\""), "key\": 1");
        assert_eq!(node.unwrap().token, "key");
        assert_eq!(st.get(), "\": 1");

        let (node, st) = run(not_chars("a"), "abc");
        assert!(node.is_none());
        assert_eq!(st.error.unwrap().to_string(), "offset 0: expected not a");
    }

    #[test]
    fn test_until() {
        let (node, st) = run(until("-->"), "a comment --> rest");
        assert_eq!(node.unwrap().token, "a comment ");
        assert_eq!(st.get(), "--> rest");

        let (node, _) = run(until("-->"), "never closed");
        assert!(node.is_none());
    }

    #[test]
    fn test_eof() {
        let (node, _) = run(seq(("end", eof())), "end  ");
        assert!(node.is_some());

        let (node, st) = run(seq(("end", eof())), "end more");
        assert!(node.is_none());
        assert_eq!(st.error.unwrap().to_string(), "offset 4: expected eof");
    }

    #[test]
    fn test_unicode_runs() {
        let (node, st) = run(chars("α-ω"), "αβγ!");
        assert_eq!(node.unwrap().token, "αβγ");
        assert_eq!(st.get(), "!");
    }
}
