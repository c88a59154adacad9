pub mod problem;
pub mod reference_front;
pub mod convergence_measure;
pub mod igd;
pub mod trial_parser;
pub mod aggregator;

use dyn_clone::DynClone;

/// The analytic Pareto surface of a DTLZ problem family.
///
/// The DTLZ1 front is the plane `sum(f) = 0.5`; the DTLZ2-4 fronts lie on
/// the unit sphere `sum(f_i^2) = 1`. Everything the analysis pipeline needs
/// from a family is how to project a weight vector onto the surface and how
/// far a given solution vector lies from it.
pub trait SurfaceFamily: DynClone {
    fn name(&self) -> &str;

    /// Project a uniform weight vector onto the true Pareto surface.
    fn project(&self, w: &[f64], f: &mut Vec<f64>);

    /// Panics when `f` does not lie on the surface within 1e-6.
    ///
    /// A violation here is a sampling bug, never bad input data.
    fn assert_on_surface(&self, f: &[f64]);

    /// Per-vector distance term of the convergence measure.
    fn deviation(&self, x: &[f64]) -> f64;
}

dyn_clone::clone_trait_object!(SurfaceFamily);
