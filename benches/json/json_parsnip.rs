use std::collections::HashMap;

use parsnip::contrib::{number_lit, string_lit};
use parsnip::prelude::*;

use crate::JsonValue;

pub fn json() -> Parser {
    let value = Rule::named("value");

    let null = bind("null", JsonValue::Null);
    let boolean = any((
        bind("true", JsonValue::Boolean(true)),
        bind("false", JsonValue::Boolean(false)),
    ));
    let number = map(number_lit(), |n| {
        let v = n.take_value::<f64>().unwrap_or(0.0);
        n.value = Some(Box::new(JsonValue::Num(v)));
    });
    let string = map(string_lit("\""), |n| {
        let s = n.take_value::<String>().unwrap_or_default();
        n.value = Some(Box::new(JsonValue::Str(s)));
    });
    let array = map(label(seq(("[", some_sep(&value, ","), "]")), "array"), |n| {
        let items: Vec<JsonValue> = n.child[1]
            .child
            .iter_mut()
            .filter_map(|c| c.take_value())
            .collect();
        n.value = Some(Box::new(JsonValue::Array(items)));
    });
    let member = seq((string_lit("\""), ":", &value));
    let object = map(label(seq(("{", some_sep(member, ","), "}")), "object"), |n| {
        let mut fields = HashMap::new();
        for m in &mut n.child[1].child {
            let k = m.child[0].take_value::<String>().unwrap_or_default();
            if let Some(v) = m.child[2].take_value::<JsonValue>() {
                fields.insert(k, v);
            }
        }
        n.value = Some(Box::new(JsonValue::Object(fields)));
    });

    value.define(any((object, array, string, number, boolean, null)));
    Parser::from(&value)
}

pub fn parse(grammar: &Parser, s: &str) -> JsonValue {
    let (node, _) = run(grammar, s);
    node.and_then(|mut n| n.take_value()).unwrap_or(JsonValue::Null)
}
