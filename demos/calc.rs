//! A four-operation calculator: precedence from grammar shape, evaluation
//! from `map` callbacks folding child values on the way up.
//!
//! cargo run --example calc
//! RUST_LOG=pn=trace cargo run --example calc

use parsnip::contrib::number_lit;
use parsnip::prelude::*;

fn grammar() -> Parser {
    let expr = Rule::named("expr");

    let primary = any((
        number_lit(),
        map(seq(("(", &expr, ")")), |n| {
            let inner = n.child[1].value.take();
            n.value = inner;
        }),
    ));

    let term = map(
        seq((&primary, some(seq((chars_in("*/", 1..=1), &primary))))),
        |n| {
            let mut acc = n.child[0].take_value::<f64>().unwrap_or(0.0);
            for pair in &mut n.child[1].child {
                let rhs = pair.child[1].take_value::<f64>().unwrap_or(0.0);
                match pair.child[0].token.as_str() {
                    "*" => acc *= rhs,
                    _ => acc /= rhs,
                }
            }
            n.value = Some(Box::new(acc));
        },
    );

    let sum = map(
        seq((&term, some(seq((chars_in("+-", 1..=1), &term))))),
        |n| {
            let mut acc = n.child[0].take_value::<f64>().unwrap_or(0.0);
            for pair in &mut n.child[1].child {
                let rhs = pair.child[1].take_value::<f64>().unwrap_or(0.0);
                match pair.child[0].token.as_str() {
                    "+" => acc += rhs,
                    _ => acc -= rhs,
                }
            }
            n.value = Some(Box::new(acc));
        },
    );

    expr.define(&sum);
    map(seq((&sum, eof())), |n| {
        let total = n.child[0].value.take();
        n.value = total;
    })
}

fn eval(parser: &Parser, input: &str) -> Result<f64, ParseError> {
    let (node, state) = run(parser, input);
    match node {
        Some(n) => Ok(*n.value_as::<f64>().unwrap_or(&0.0)),
        None => Err(state.error.unwrap_or(ParseError::new("expression", 0))),
    }
}

fn main() {
    env_logger::init();
    let parser = grammar();
    for input in ["1 + 2 * 3", "(1 + 2) * 3", "10 / 4 - 1"] {
        match eval(&parser, input) {
            Ok(v) => println!("{input} = {v}"),
            Err(e) => println!("{input} !! {e}"),
        }
    }
}
