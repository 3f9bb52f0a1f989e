use crate::prelude::*;

/// A [`Rule`] is a parser-shaped hole: declare it, reference it with
/// `&rule` inside the grammar, then `define` it. The slot is read lazily
/// at parse time, so a rule may mention itself.
///
/// Here: arbitrarily nested parentheses, flattened back to their literal
/// text with `merge`.
pub fn balanced() -> Parser {
    let group = Rule::named("group");
    group.define(seq(("(", maybe(&group), ")")));
    merge(&group)
}

/// Recursion combines with `map` to fold a tree while it parses: a LISP-ish
/// list of numbers sums itself on the way up.
pub fn nested_sum() -> Parser {
    let expr = Rule::named("expr");

    let number = map(chars("0-9"), |n| {
        if let Ok(v) = n.token.parse::<f64>() {
            n.value = Some(Box::new(v));
        }
    });
    let list = map(seq(("(", some(&expr), ")")), |n| {
        let total: f64 = n.child[1]
            .child
            .iter_mut()
            .filter_map(|c| c.take_value::<f64>())
            .sum();
        n.value = Some(Box::new(total));
    });

    expr.define(any((number, list)));
    Parser::from(&expr)
}
