use crate::SurfaceFamily;

/// Mean distance of a solution set from the analytic Pareto surface.
///
/// The per-vector term comes from the family: signed `sum(x) - 0.5` on the
/// linear surface, `|sum(x_i^2) - 1|` on the spherical one. The caller
/// guarantees a non-empty set.
pub fn convergence_measure(solutions: &[Vec<f64>], family: &dyn SurfaceFamily) -> f64 {
    let sum: f64 = solutions
        .iter()
        .map(|x| family.deviation(x))
        .sum();

    sum / solutions.len() as f64
}
