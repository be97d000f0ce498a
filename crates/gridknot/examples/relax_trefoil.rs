//! Relax the 5×5 trefoil and print how the curve settles.
//!
//! Usage:
//!   cargo run -p gridknot --example relax_trefoil -- [steps]

use gridknot::diagram::samples;
use gridknot::extract::extract;
use gridknot::relax::{RelaxationEngine, SimulationParams};

fn main() {
    let steps: usize = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(500);

    let diagram = samples::trefoil();
    print!("{diagram}");
    let extraction = extract(&diagram).unwrap();
    println!(
        "crossings={} vertices={}",
        extraction.crossings.len(),
        extraction.curve.len()
    );

    let curve = extraction.curve.refine(4);
    let mut engine = RelaxationEngine::new(curve, SimulationParams::default()).unwrap();
    for i in 0..steps {
        let report = engine.step();
        if i % 100 == 0 || i + 1 == steps {
            println!(
                "step {:>5}: perimeter={:.4} stuck={} max_move={:.5}",
                report.step,
                engine.rope().perimeter(),
                report.stuck,
                report.max_displacement
            );
        }
    }
}
