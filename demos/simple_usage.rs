/// Peoplex demo
///
/// Loads data/people.txt and runs the same query through every strategy.

use peoplex::{Config, SearchEngine, StrategyKind};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG overrides, e.g. RUST_LOG=peoplex=info
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("debug"));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    let config = Config::default()
        .with_data_path(concat!(env!("CARGO_MANIFEST_DIR"), "/data/people.txt"));
    let engine = SearchEngine::open(&config)?;

    println!("=== List of people ===");
    for person in engine.find_all() {
        println!("  {}", person);
    }
    println!();

    let query = "Erick djo@gmail.com";
    for kind in StrategyKind::ALL_KINDS {
        println!("=== {} '{}' ===", kind, query);
        for person in engine.search_with(query, kind)? {
            println!("  {}  {}", person, serde_json::to_string(&person)?);
        }
    }
    println!();

    // Two-step flow: pick a strategy by name, then search
    match engine.set_strategy_by_name("NONE") {
        Some(kind) => println!("Strategy set to {}", kind),
        None => println!("Incorrect strategy! Keeping {}", engine.strategy()),
    }
    let excluded = "djo@gmail.com";
    println!("{} of {} people have no field equal to '{}'",
             engine.search(excluded)?.len(), engine.find_all().len(), excluded);

    if let Err(e) = engine.search("   ") {
        println!("Blank query rejected: {}", e);
    }

    Ok(())
}
