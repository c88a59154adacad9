use rand::rngs::StdRng;
use rand::SeedableRng;

use dtlz_analysis::aggregator::AnalysisConfig;
use dtlz_analysis::reference_front::{construct_fronts, DEFAULT_N_SAMPLES, DEFAULT_SEED};

/// Generates the reference Pareto front files for the benchmark sweep.
///
/// An optional positional argument restricts the run to one problem, e.g.
/// `construct_pareto_fronts dtlz3_m25`.
fn main() -> std::io::Result<()> {
    let config = AnalysisConfig::default();

    let problems = match std::env::args().nth(1)
    {
        Some(problem) => vec![problem],
        None => config.problems,
    };

    let mut rng = StdRng::seed_from_u64(DEFAULT_SEED);

    construct_fronts(&problems, DEFAULT_N_SAMPLES, &config.front_dir, &mut rng)
}
