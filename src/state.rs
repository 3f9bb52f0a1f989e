use crate::error::ParseError;
use crate::node::Node;

/// Zero-sized failure marker. The diagnostic itself lives in `State::error`;
/// combinators only need to know *that* an invocation missed, and whether
/// `State::cut` forbids trying an alternative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Miss;

/// What every parser invocation returns.
pub type Parsed = Result<Node, Miss>;

/// Whitespace policy: a predicate over the characters to auto-skip.
pub type WsPolicy = fn(char) -> bool;

/// Default policy, skips Unicode whitespace.
pub fn unicode_ws(c: char) -> bool {
    c.is_whitespace()
}

/// Skips ASCII whitespace only.
pub fn ascii_ws(c: char) -> bool {
    c.is_ascii_whitespace()
}

/// Skips nothing. Equivalent to wrapping the whole grammar in `no_auto_ws`.
pub fn no_ws(_c: char) -> bool {
    false
}

/// Saved `(pos, cut)` pair around a speculative trial.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Checkpoint {
    pos: usize,
    cut: bool,
}

/// The single mutable object threaded through a parse: input cursor,
/// whitespace policy, sticky farthest-error record and the cut flag.
///
/// Exclusively owned by one parse invocation; combinators pass it down
/// `&mut`. Returned to the caller by `run` so the final position and error
/// can be inspected.
#[derive(Debug)]
pub struct State<'s> {
    input: &'s str,
    /// Current cursor, a byte offset into the input.
    pub pos: usize,
    /// Farthest failure observed so far; sticky and monotonic in `pos`.
    pub error: Option<ParseError>,
    pub(crate) cut: bool,
    pub(crate) no_auto_ws: bool,
    pub(crate) failed: bool,
    ws: WsPolicy,
}

impl<'s> From<&'s str> for State<'s> {
    fn from(input: &'s str) -> Self {
        State::new(input)
    }
}

impl<'s> State<'s> {
    pub fn new(input: &'s str) -> Self {
        Self::with_ws(input, unicode_ws)
    }

    pub fn with_ws(input: &'s str, ws: WsPolicy) -> Self {
        State {
            input,
            pos: 0,
            error: None,
            cut: false,
            no_auto_ws: false,
            failed: false,
            ws,
        }
    }

    /// Remaining unconsumed input.
    pub fn get(&self) -> &'s str {
        &self.input[self.pos..]
    }

    /// The full source string.
    pub fn input(&self) -> &'s str {
        self.input
    }

    /// True iff the most recent top-level invocation failed. An error may be
    /// on record even after a successful parse, when some inner branch
    /// missed and was recovered by `any`/`maybe`.
    pub fn errored(&self) -> bool {
        self.failed && self.error.is_some()
    }

    /// Bump the cursor by `n` bytes.
    pub fn advance(&mut self, n: usize) {
        debug_assert!(self.pos + n <= self.input.len());
        self.pos += n;
    }

    /// Skip leading whitespace per the active policy. Leaf parsers call this
    /// before matching; `no_auto_ws` suspends it for a subtree.
    pub fn skip_ws(&mut self) {
        if self.no_auto_ws {
            return;
        }
        let rest = self.get();
        let trimmed = rest.trim_start_matches(self.ws);
        self.pos += rest.len() - trimmed.len();
    }

    /// Record a failed expectation at `pos` and hand back the marker.
    ///
    /// Farthest failure wins: a shallower record is ignored, an equal-or-
    /// deeper one replaces. Ties going to the most recent observation is
    /// what makes an ordered choice report its last same-depth alternative.
    pub fn miss(&mut self, expected: impl Into<String>, pos: usize) -> Miss {
        let deeper = match &self.error {
            Some(e) => pos >= e.pos,
            None => true,
        };
        if deeper {
            let e = ParseError::new(expected, pos);
            self.log_miss(&e);
            self.error = Some(e);
        }
        self.failed = true;
        Miss
    }

    pub(crate) fn slice(&self, start: usize, end: usize) -> &'s str {
        &self.input[start..end]
    }

    pub(crate) fn peek_byte(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    /// Open a speculative trial: save `(pos, cut)` and clear `cut` so the
    /// trial starts uncommitted. The error record is deliberately not part
    /// of the checkpoint.
    pub(crate) fn checkpoint(&mut self) -> Checkpoint {
        let cp = Checkpoint {
            pos: self.pos,
            cut: self.cut,
        };
        self.cut = false;
        cp
    }

    /// Abandon a trial that missed without committing.
    pub(crate) fn rewind(&mut self, cp: Checkpoint) {
        self.pos = cp.pos;
        self.cut = cp.cut;
    }

    /// Close a successful trial: keep the new position, re-OR the saved cut
    /// so an enclosing commitment survives the trial.
    pub(crate) fn keep(&mut self, cp: Checkpoint) {
        self.cut |= cp.cut;
    }
}

#[cfg(test)]
mod tests {
    use super::{ascii_ws, State};
    use test_log::test;

    #[test]
    fn test_cursor_basics() {
        let mut st = State::new("ab cd");
        assert_eq!(st.get(), "ab cd");
        st.advance(2);
        st.skip_ws();
        assert_eq!(st.get(), "cd");
        assert_eq!(st.pos, 3);
    }

    #[test]
    fn test_ws_policy() {
        let mut st = State::with_ws("\u{a0}x", ascii_ws);
        st.skip_ws();
        // NBSP is not ASCII whitespace
        assert_eq!(st.pos, 0);

        let mut st = State::new("\u{a0}x");
        st.skip_ws();
        assert_eq!(st.get(), "x");
    }

    #[test]
    fn test_miss_keeps_farthest() {
        let mut st = State::new("abcdef");
        st.miss("x", 2);
        st.miss("y", 1); // shallower, ignored
        assert_eq!(st.error.as_ref().unwrap().expected, "x");
        st.miss("z", 2); // same depth, most recent wins
        assert_eq!(st.error.as_ref().unwrap().expected, "z");
        st.miss("w", 5);
        assert_eq!(st.error.as_ref().unwrap().to_string(), "offset 5: expected w");
    }

    #[test]
    fn test_checkpoint_restores_cut() {
        let mut st = State::new("abc");
        st.cut = true;
        let cp = st.checkpoint();
        assert!(!st.cut);
        st.advance(2);
        st.rewind(cp);
        assert_eq!(st.pos, 0);
        assert!(st.cut);
    }

    #[test]
    fn test_keep_merges_cut() {
        let mut st = State::new("abc");
        st.cut = true;
        let cp = st.checkpoint();
        // trial succeeded without cutting; outer commitment survives
        st.keep(cp);
        assert!(st.cut);
    }
}
