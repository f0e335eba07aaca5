//! Looks up a genus name against a small in-memory lexicon using the
//! hybrid matcher, printing whatever the factory-built matcher returns.
//!
//! Run with `cargo run --example lookup -- Anaconda`.

use std::sync::Arc;
use taxamatch::{build_matcher, ApproxMatcher, MatcherConfig, MemoryOracle, TableBinding};

fn main() {
    env_logger::init();

    let query = std::env::args().nth(1).unwrap_or_else(|| "Tyto".to_string());

    let oracle = Arc::new(MemoryOracle::from_iter([
        "Tyto",
        "Tytoalba",
        "Strix",
        "Anas",
        "Anis",
        "Anaconda",
        "Ictalurus",
        "Turdus",
        "Turdidae",
    ]));

    let binding = TableBinding::new("genus", "name").expect("static binding is valid");
    let matcher = build_matcher(
        "hybrid",
        oracle,
        binding,
        MatcherConfig::hybrid_default(),
    )
    .expect("hybrid matcher config is valid");

    match matcher.match_query(&query) {
        Ok(results) if results.is_empty() => println!("no matches for {query:?}"),
        Ok(results) => println!("matches for {query:?}: {results:?}"),
        Err(err) => eprintln!("match failed: {err}"),
    }
}
