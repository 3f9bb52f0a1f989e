/*!
A guided tour of the library, in small chapters.

Build with `--features cookbook` (or `cargo doc`, which always includes it):

- chapter 1: leaves, sequences and choices
- chapter 2: recursive grammars through `Rule`
- chapter 3: attaching semantic values with `map` and `bind`

Each chapter is a compilable module whose tests double as worked examples;
run them with `RUST_LOG=pn=trace` to watch the parse unfold.
*/

pub mod ch_1_getting_started;
pub mod ch_2_recursive_grammars;
pub mod ch_3_semantic_values;
