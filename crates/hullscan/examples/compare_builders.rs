//! Build both hulls for a seeded sample and print them side by side.
//!
//! Usage:
//!   cargo run -p hullscan --example compare_builders -- [seed] [count]

use hullscan::prelude::*;

fn main() {
    let mut args = std::env::args().skip(1);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(3);
    let count = args.next().and_then(|s| s.parse().ok()).unwrap_or(10);
    let cfg = SampleCfg {
        seed,
        count,
        ..SampleCfg::default()
    };
    let points = match cfg.draw() {
        Ok(p) => PointSet::from_coords(p),
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };
    println!("{} points, seed {seed}", points.len());
    for algo in Algorithm::ALL {
        let mut retractions = 0usize;
        let mut observer = |e: &StepEvent| {
            if e.retracted.is_some() {
                retractions += 1;
            }
        };
        match algo.builder().build_observed(&points, &mut observer) {
            Ok(hull) => {
                let verts: Vec<String> = hull.vertices(&points).iter().map(|p| p.to_string()).collect();
                println!(
                    "{algo:>6}: {} vertices, {retractions} retractions: {}",
                    hull.len(),
                    verts.join(" ")
                );
            }
            Err(e) => println!("{algo:>6}: {e}"),
        }
    }
}
