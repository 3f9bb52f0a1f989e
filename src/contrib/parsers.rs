use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::prelude::*;

static ESCAPES: Lazy<HashMap<char, char>> = Lazy::new(|| {
    [
        ('n', '\n'),
        ('t', '\t'),
        ('r', '\r'),
        ('\\', '\\'),
        ('"', '"'),
        ('\'', '\''),
        ('0', '\0'),
    ]
    .into_iter()
    .collect()
});

/// An identifier: a letter or `_`, then letters, digits or `_`.
pub fn ident() -> Parser {
    label(
        merge(seq((
            chars_in("a-zA-Z_", 1..=1),
            no_auto_ws(chars_in("a-zA-Z0-9_", ..)),
        ))),
        "ident",
    )
}

/// A number literal with optional sign, fraction and exponent. Attaches the
/// parsed `f64` as the node value.
pub fn number_lit() -> Parser {
    let body = no_auto_ws(seq((
        maybe(chars_in("+-", 1..=1)),
        chars("0-9"),
        maybe(seq((".", chars("0-9")))),
        maybe(seq((
            chars_in("eE", 1..=1),
            maybe(chars_in("+-", 1..=1)),
            chars("0-9"),
        ))),
    )));
    label(
        map(merge(body), |n| {
            if let Ok(v) = n.token.parse::<f64>() {
                n.value = Some(Box::new(v));
            }
        }),
        "number",
    )
}

/// A quoted string literal; any character of `quotes` may open it and the
/// same character closes it. Backslash escapes (`\n`, `\t`, `\r`, `\\`,
/// `\"`, `\'`, `\0`; anything else stands for itself) are decoded into the
/// attached `String` value. The token keeps the raw text, quotes included.
pub fn string_lit(quotes: &str) -> Parser {
    let quotes: Vec<char> = quotes.chars().collect();
    Parser::from_fn(move |st: &mut State| {
        let entry = st.pos;
        st.skip_ws();
        st.log_try("string_lit", "");
        let rest = st.get();
        let mut it = rest.chars();
        let quote = match it.next() {
            Some(c) if quotes.contains(&c) => c,
            _ => {
                let pos = st.pos;
                st.pos = entry;
                return Err(st.miss("string literal", pos));
            }
        };
        let mut out = String::new();
        let mut bytes = quote.len_utf8();
        loop {
            match it.next() {
                Some('\\') => {
                    bytes += 1;
                    match it.next() {
                        Some(c) => {
                            bytes += c.len_utf8();
                            out.push(*ESCAPES.get(&c).unwrap_or(&c));
                        }
                        None => {
                            let pos = st.pos + bytes;
                            st.pos = entry;
                            return Err(st.miss("escape", pos));
                        }
                    }
                }
                Some(c) if c == quote => {
                    bytes += c.len_utf8();
                    let start = st.pos;
                    let token = rest[..bytes].to_string();
                    st.advance(bytes);
                    st.log_ok("string_lit", &token);
                    let mut node = Node::leaf(token, start, st.pos);
                    node.value = Some(Box::new(out));
                    return Ok(node);
                }
                Some(c) => {
                    bytes += c.len_utf8();
                    out.push(c);
                }
                None => {
                    let pos = st.pos + bytes;
                    st.pos = entry;
                    return Err(st.miss(quote.to_string(), pos));
                }
            }
        }
    })
}
