use parsnip::prelude::*;

/// cargo run --example intro
///
/// RUST_LOG=pn=trace cargo run --example intro
fn main() {
    env_logger::init();

    let grammar = seq(("hello", any(("world", "friend")), maybe("!")));
    let (node, state) = run(&grammar, "hello friend!");
    println!("matched: {node:?}");
    println!("rest:    {:?}", state.get());

    let (_, state) = run(&grammar, "hello there");
    println!("error:   {}", state.error.unwrap());
}
