use crate::node::Node;
use crate::parser::Parser;
use crate::state::{State, WsPolicy};

/// Run a parser once against `input` with the default (Unicode) whitespace
/// policy. Returns the result tree and the final state; on failure the tree
/// is `None`, the cursor is back at 0 and `state.error` carries the deepest
/// expectation.
pub fn run<P: Into<Parser>>(parser: P, input: &str) -> (Option<Node>, State<'_>) {
    run_with_ws(parser, input, crate::state::unicode_ws)
}

/// `run` with an explicit whitespace policy (`unicode_ws`, `ascii_ws`,
/// `no_ws`, or any `fn(char) -> bool`).
pub fn run_with_ws<P: Into<Parser>>(
    parser: P,
    input: &str,
    ws: WsPolicy,
) -> (Option<Node>, State<'_>) {
    let parser = parser.into();
    let mut st = State::with_ws(input, ws);
    st.log_try("run", "");
    match parser.parse(&mut st) {
        Ok(node) => {
            st.failed = false;
            (Some(node), st)
        }
        Err(_) => {
            st.failed = true;
            (None, st)
        }
    }
}
