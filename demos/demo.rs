//! Demonstration of the descriptive-statistics engine on sample datasets.
//!
//! Run with: `cargo run --example demo`

use descriptive_stats::prelude::*;

fn main() -> Result<()> {
    println!("=== Descriptive Statistics Demo ===\n");

    // Supplied-data usage: compute over literal arrays
    let samples: [&[i64]; 5] = [
        &[1, 2, 3, 4, 5, 5, 5], // single mode
        &[1, 1, 2, 2, 3, 3],    // multiple modes
        &[42],                  // single element
        &[1, 2, 3, 4],          // even count median
        &[],                    // empty dataset
    ];

    for sample in samples {
        println!("{}", report(sample));
    }

    // Owned-data usage: the engine keeps an independent copy
    println!("=== Using Engine State ===\n");

    let mut engine = StatisticsEngine::new();
    engine.set_data(&vec![10_i64, 20, 30, 20, 10])?;

    println!("{}", engine.report());
    println!("All statistics: {:?}", engine.summarize());

    Ok(())
}
