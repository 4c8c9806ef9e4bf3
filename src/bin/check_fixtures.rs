//! Check the HMPI regression fixtures
//!
//! Scores the reference readings sequentially and in parallel and compares
//! against the expected HMPI values:
//! - Five-metal panel: 99.07
//! - Every metal at its limit: 100.00
//! - Industrial demo sample: 232.49

use hmpi_scorer_rust::{summarize, ConcentrationReading, Sample, SampleEvaluator};
use std::time::Instant;

fn reading(pairs: &[(&str, f64)]) -> ConcentrationReading {
    pairs.iter().map(|(s, v)| (s.to_string(), *v)).collect()
}

fn main() {
    let fixtures = vec![
        (
            "Five-metal panel",
            reading(&[("Pb", 0.015), ("Cd", 0.004), ("Hg", 0.0012), ("As", 0.012), ("Cr", 0.08)]),
            99.07,
        ),
        (
            "All at limit",
            reading(&[
                ("Pb", 0.01),
                ("Cd", 0.003),
                ("Cr", 0.05),
                ("Cu", 1.3),
                ("Zn", 5.0),
                ("Ni", 0.02),
                ("As", 0.01),
                ("Hg", 0.002),
            ]),
            100.0,
        ),
        (
            "Industrial demo",
            reading(&[("Pb", 0.025), ("Cd", 0.008), ("Cr", 0.12), ("Cu", 0.85), ("Zn", 2.3), ("As", 0.015)]),
            232.49,
        ),
    ];

    let samples: Vec<Sample> = fixtures
        .iter()
        .map(|(name, r, _)| Sample::new(*name, r.clone()))
        .collect();

    let evaluator = SampleEvaluator::default();

    println!("\n{}", "=".repeat(70));
    println!("HMPI FIXTURES (Sequential vs Parallel)");
    println!("{}", "=".repeat(70));

    let start = Instant::now();
    let sequential = evaluator.evaluate_batch_sequential(&samples);
    let seq_time = start.elapsed();

    let start = Instant::now();
    let parallel = evaluator.evaluate_batch(&samples);
    let par_time = start.elapsed();

    let mut all_passed = true;
    for ((name, _, expected), (seq, par)) in fixtures.iter().zip(sequential.iter().zip(&parallel)) {
        let diff = (seq.hmpi - expected).abs();
        let passed = diff < 0.005 && seq == par;
        all_passed &= passed;
        println!(
            "{:<20} HMPI {:>8.2} (expected {:>8.2})  {:<10} HI {:>8.2} {:<9} {}",
            name,
            seq.hmpi,
            expected,
            seq.risk_category.label(),
            seq.hazard_index,
            seq.hazard_level.label(),
            if passed { "✓" } else { "✗" }
        );
        let exceeded: Vec<&str> = seq.exceeded_metals().collect();
        if !exceeded.is_empty() {
            println!("{:<20} above limit: {}", "", exceeded.join(", "));
        }
    }

    let summary = summarize(&sequential);
    println!("\nAverage HMPI: {:.2}  (min {:.2}, max {:.2}, std {:.2})",
        summary.average_hmpi, summary.min_hmpi, summary.max_hmpi, summary.std_hmpi);
    println!("Sequential: {:?}  Parallel: {:?}", seq_time, par_time);

    if !all_passed {
        eprintln!("\nFixture mismatch");
        std::process::exit(1);
    }
    println!("\nAll fixtures passed");
}
