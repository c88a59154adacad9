use crate::SurfaceFamily;

pub const SURFACE_TOLERANCE: f64 = 1e-6;

/// Linear surface of the DTLZ1 class: `sum(f) = 0.5`.
#[derive(Clone)]
pub struct LinearSurface;

/// Spherical surface shared by the DTLZ2-4 classes: `sum(f_i^2) = 1`.
#[derive(Clone)]
pub struct SphericalSurface;

impl SurfaceFamily for LinearSurface
{
    fn name(&self) -> &str {
        "linear"
    }

    fn project(&self, w: &[f64], f: &mut Vec<f64>) {
        let sum: f64 = w.iter().sum();

        if f.len() != w.len()
        {
            f.resize(w.len(), 0.0);
        }

        for (f_i, w_i) in f.iter_mut().zip(w)
        {
            *f_i = 0.5 * w_i / sum;
        }
    }

    fn assert_on_surface(&self, f: &[f64]) {
        let sum: f64 = f.iter().sum();

        assert!(
            (sum - 0.5).abs() < SURFACE_TOLERANCE,
            "sampled point off the linear surface: sum(f) = {}",
            sum
        );
    }

    fn deviation(&self, x: &[f64]) -> f64 {
        x.iter().sum::<f64>() - 0.5
    }
}

impl SurfaceFamily for SphericalSurface
{
    fn name(&self) -> &str {
        "spherical"
    }

    fn project(&self, w: &[f64], f: &mut Vec<f64>) {
        let norm = w.iter().map(|w_j| w_j * w_j).sum::<f64>().sqrt();

        if f.len() != w.len()
        {
            f.resize(w.len(), 0.0);
        }

        for (f_i, w_i) in f.iter_mut().zip(w)
        {
            *f_i = w_i / norm;
        }
    }

    fn assert_on_surface(&self, f: &[f64]) {
        let sum_sq: f64 = f.iter().map(|f_i| f_i * f_i).sum();

        assert!(
            (sum_sq - 1.0).abs() < SURFACE_TOLERANCE,
            "sampled point off the unit sphere: sum(f^2) = {}",
            sum_sq
        );
    }

    fn deviation(&self, x: &[f64]) -> f64 {
        (x.iter().map(|x_i| x_i * x_i).sum::<f64>() - 1.0).abs()
    }
}

/// Family dispatch for a problem name such as `dtlz3_m25`.
///
/// Only the DTLZ1 class has the linear front; every other class in the
/// benchmark set shares the spherical one.
pub fn family_for(problem: &str) -> Box<dyn SurfaceFamily> {
    if problem.contains("dtlz1")
    {
        Box::new(LinearSurface)
    }
    else
    {
        Box::new(SphericalSurface)
    }
}

/// Objective count from a problem name: the digits after the last `m`.
///
/// Panics on a name outside the `<family>_m<objectives>` convention. The
/// problem lists are compile-time constants, so a bad name is a defect in
/// the experiment configuration, not runtime input.
pub fn objective_count(problem: &str) -> usize {
    let digits = problem
        .rsplit('m')
        .next()
        .unwrap_or("");

    digits
        .parse()
        .unwrap_or_else(|_| panic!("problem name without objective count: {}", problem))
}

/// Expected optimizer generation count for a problem.
///
/// The result files carry this number as their filename extension. The
/// linear class always runs long; the spherical classes run 200 generations
/// up to five objectives and 1000 beyond that.
pub fn generation_count(problem: &str) -> usize {
    if problem.contains("dtlz1")
    {
        1000
    }
    else if objective_count(problem) <= 5
    {
        200
    }
    else
    {
        1000
    }
}
