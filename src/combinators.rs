use std::cell::Cell;

use crate::node::Node;
use crate::parser::{Parser, Parsers};
use crate::state::{Miss, State};
use crate::LABEL;

/// Run every parser in order; succeed iff all do. The node has one child
/// per element and, as a shorthand, the first child's token. On a miss the
/// cursor rewinds to where the sequence started; the cut flag passes
/// through untouched, so a `cut()` inside commits the enclosing choice.
pub fn seq(parsers: impl Parsers) -> Parser {
    let parsers = parsers.into_parsers();
    Parser::from_fn(move |st: &mut State| {
        let entry = st.pos;
        let mut node = Node::empty(entry);
        for p in &parsers {
            match p.parse(st) {
                Ok(child) => node.child.push(child),
                Err(miss) => {
                    st.pos = entry;
                    return Err(miss);
                }
            }
        }
        if let Some(first) = node.child.first() {
            node.token = first.token.clone();
        }
        node.end = st.pos;
        Ok(node)
    })
}

/// Ordered choice: try the alternatives in declaration order, return the
/// first success. On all-miss, the surfaced error is the one that got
/// farthest into the input (the sticky record in [`State`] does the
/// bookkeeping).
///
/// An alternative that misses after setting `cut` commits the whole choice:
/// later alternatives are not tried and the failure propagates.
///
/// Each `any` keeps a one-slot branch predictor: the first input byte it
/// last succeeded on and the winning alternative's index. A hit reorders
/// the trials to probe that alternative first; a miss falls back to
/// declaration order. Reordering never changes which alternative wins —
/// with the documented exception that a mispredicted alternative which cuts
/// and then misses surfaces its own error, cut being the user's assertion
/// that no sibling could match past that point.
pub fn any(parsers: impl Parsers) -> Parser {
    let parsers = parsers.into_parsers();
    let hint: Cell<Option<(u8, usize)>> = Cell::new(None);
    Parser::from_fn(move |st: &mut State| {
        let entry = st.pos;
        st.skip_ws();
        let first = st.peek_byte();
        let predicted = match (hint.get(), first) {
            (Some((byte, idx)), Some(b)) if byte == b && idx < parsers.len() => Some(idx),
            _ => None,
        };
        let natural = (0..parsers.len()).filter(|i| Some(*i) != predicted);
        for idx in predicted.into_iter().chain(natural) {
            let cp = st.checkpoint();
            match parsers[idx].parse(st) {
                Ok(node) => {
                    st.keep(cp);
                    if let Some(b) = first {
                        hint.set(Some((b, idx)));
                    }
                    return Ok(node);
                }
                Err(miss) => {
                    if st.cut {
                        st.pos = entry;
                        return Err(miss);
                    }
                    st.rewind(cp);
                }
            }
        }
        st.pos = entry;
        Err(Miss)
    })
}

/// Optional: on success return the match, on an uncommitted miss return an
/// empty node with the cursor unchanged. The farthest-error record is
/// preserved either way; it may still surface if the parse fails later. A
/// committed miss (cut) propagates.
pub fn maybe(p: impl Into<Parser>) -> Parser {
    let p = p.into();
    Parser::from_fn(move |st: &mut State| {
        let cp = st.checkpoint();
        match p.parse(st) {
            Ok(node) => {
                st.keep(cp);
                Ok(node)
            }
            Err(miss) => {
                if st.cut {
                    Err(miss)
                } else {
                    st.rewind(cp);
                    Ok(Node::empty(st.pos))
                }
            }
        }
    })
}

/// Zero or more matches of `body`. Without a separator, adjacent matches
/// split wherever the leaves' whitespace skipping lets them.
pub fn some(body: impl Into<Parser>) -> Parser {
    repetition(body.into(), None, 0)
}

/// Zero or more `body` separated by `sep`. The separator is consumed
/// greedily: a trailing separator with no body after it stays consumed.
pub fn some_sep(body: impl Into<Parser>, sep: impl Into<Parser>) -> Parser {
    repetition(body.into(), Some(sep.into()), 0)
}

/// One or more matches of `body`; a miss if the body never matches.
pub fn many(body: impl Into<Parser>) -> Parser {
    repetition(body.into(), None, 1)
}

/// One or more `body` separated by `sep`, trailing separator allowed.
pub fn many_sep(body: impl Into<Parser>, sep: impl Into<Parser>) -> Parser {
    repetition(body.into(), Some(sep.into()), 1)
}

fn repetition(body: Parser, sep: Option<Parser>, min: usize) -> Parser {
    Parser::from_fn(move |st: &mut State| {
        let entry = st.pos;
        let mut node = Node::empty(entry);
        loop {
            let iter_start = st.pos;
            let cp = st.checkpoint();
            match body.parse(st) {
                Ok(child) => {
                    st.keep(cp);
                    node.child.push(child);
                }
                Err(miss) => {
                    if st.cut {
                        st.pos = entry;
                        return Err(miss);
                    }
                    st.rewind(cp);
                    break;
                }
            }
            if let Some(sep) = &sep {
                let cp = st.checkpoint();
                match sep.parse(st) {
                    Ok(_) => st.keep(cp),
                    Err(miss) => {
                        if st.cut {
                            st.pos = entry;
                            return Err(miss);
                        }
                        st.rewind(cp);
                        break;
                    }
                }
            }
            // a body+separator round that consumed nothing would never stop
            if st.pos == iter_start {
                break;
            }
        }
        if node.child.len() < min {
            st.pos = entry;
            return Err(Miss);
        }
        node.end = st.pos;
        Ok(node)
    })
}

/// Transform a successful match: the callback gets the node `&mut`,
/// typically to set `node.value` from the children. Never called on a miss.
/// The callback is not guarded; a panic inside it propagates.
pub fn map(p: impl Into<Parser>, f: impl Fn(&mut Node) + 'static) -> Parser {
    let p = p.into();
    Parser::from_fn(move |st: &mut State| {
        let mut node = p.parse(st)?;
        f(&mut node);
        Ok(node)
    })
}

/// Attach a fixed value to every successful match of `p`. On a miss the
/// value stays unset.
pub fn bind<T: Clone + 'static>(p: impl Into<Parser>, value: T) -> Parser {
    map(p, move |node| node.value = Some(Box::new(value.clone())))
}

/// Flatten a structured match into its literal text: the node's token
/// becomes the input slice from entry to exit position and the children are
/// dropped. Works through recursive rules.
pub fn merge(p: impl Into<Parser>) -> Parser {
    let p = p.into();
    Parser::from_fn(move |st: &mut State| {
        let entry = st.pos;
        st.skip_ws();
        let start = st.pos;
        let mut node = match p.parse(st) {
            Ok(node) => node,
            Err(miss) => {
                st.pos = entry;
                return Err(miss);
            }
        };
        node.token = st.slice(start, st.pos).to_string();
        node.child.clear();
        node.start = start;
        node.end = st.pos;
        Ok(node)
    })
}

/// Commit marker: always succeeds, consumes nothing, sets the cut flag.
/// Placed in a sequence after a distinctive prefix, it makes any later miss
/// in that branch definitive — enclosing `any`/`maybe`/repetitions stop
/// trying siblings and fail through.
pub fn cut() -> Parser {
    Parser::from_fn(|st: &mut State| {
        st.cut = true;
        Ok(Node::empty(st.pos))
    })
}

/// Suspend automatic whitespace skipping inside `p`. Used for lexeme-level
/// grammars (identifiers, number literals) whose parts must be adjacent.
pub fn no_auto_ws(p: impl Into<Parser>) -> Parser {
    let p = p.into();
    Parser::from_fn(move |st: &mut State| {
        let saved = st.no_auto_ws;
        st.no_auto_ws = true;
        let res = p.parse(st);
        st.no_auto_ws = saved;
        res
    })
}

/// Name a subtree for trace logging: lines emitted while `p` runs carry
/// `name` in the label column.
pub fn label(p: impl Into<Parser>, name: &'static str) -> Parser {
    let p = p.into();
    Parser::from_fn(move |st: &mut State| {
        let prev = LABEL.with(|l| l.replace(name));
        let res = p.parse(st);
        LABEL.with(|l| l.set(prev));
        res
    })
}
