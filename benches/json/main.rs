mod json_nom;
mod json_parsnip;

use std::collections::HashMap;

use criterion::{black_box, criterion_group, Criterion};
use log::trace;

const JSON: &str = "  { \"a\"\t: 42,
  \"b\": [ \"x\", \"y\", 12 ] ,
  \"c\": { \"hello\" : \"world\"
  },
  \"ok\": true,
  \"nil\": null
  } ";

#[derive(Debug, Clone, PartialEq)]
pub enum JsonValue {
    Null,
    Str(String),
    Boolean(bool),
    Num(f64),
    Array(Vec<JsonValue>),
    Object(HashMap<String, JsonValue>),
}

pub fn bench_parsnip(c: &mut Criterion) {
    let grammar = json_parsnip::json();
    c.bench_function("json_parsnip", |b| {
        b.iter(|| json_parsnip::parse(&grammar, black_box(JSON)))
    });
}

pub fn bench_nom(c: &mut Criterion) {
    c.bench_function("json_nom", |b| b.iter(|| json_nom::nom_parser(black_box(JSON))));
}

criterion_group!(benches, bench_parsnip, bench_nom);

fn main() {
    env_logger::init();
    trace!(target: "pn", "logging enabled");

    let parsed = json_parsnip::parse(&json_parsnip::json(), JSON);
    assert_eq!(parsed, json_nom::nom_parser(JSON), "parsers disagree on the fixture");

    benches();
    Criterion::default().configure_from_args().final_summary();
}
