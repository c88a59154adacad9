use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use itertools::Itertools;
use ndarray::Array2;
use rand::Rng;

use crate::problem::{family_for, objective_count};
use crate::SurfaceFamily;

pub const DEFAULT_N_SAMPLES: usize = 10_000;
pub const DEFAULT_SEED: u64 = 42;

/// Sample `n_samples` points approximating the true Pareto surface of a
/// family in `m` objectives.
///
/// Weights are drawn uniformly from `[0, 1)^m` and projected onto the
/// surface; every projected point is checked against the surface invariant
/// and a violation panics.
pub fn sample_front(
    family: &dyn SurfaceFamily,
    m: usize,
    n_samples: usize,
    rng: &mut impl Rng,
) -> Vec<Vec<f64>>
{
    let mut points = Vec::with_capacity(n_samples);
    let mut f = vec![0.0; m];

    for _ in 0..n_samples
    {
        let w: Vec<f64> = (0..m).map(|_| rng.gen::<f64>()).collect();

        family.project(&w, &mut f);
        family.assert_on_surface(&f);

        points.push(f.clone());
    }

    points
}

/// Persist a sampled front, one comma-joined line per point.
pub fn write_front(path: &Path, points: &[Vec<f64>]) -> std::io::Result<()> {
    let mut out = File::create(path)?;

    for point in points
    {
        writeln!(out, "{}", point.iter().join(","))?;
    }

    Ok(())
}

/// Load a persisted front into a point matrix, one row per point.
///
/// Panics on a malformed line: front files are produced by this crate, so
/// a parse failure means the file was corrupted or written by something
/// else entirely.
pub fn load_front(path: &Path) -> std::io::Result<Array2<f64>> {
    let reader = BufReader::new(File::open(path)?);

    let mut values = Vec::new();
    let mut n_rows = 0;
    let mut n_cols = 0;

    for line in reader.lines()
    {
        let line = line?;

        if line.is_empty()
        {
            continue;
        }

        let row: Vec<f64> = line
            .split(',')
            .map(|token| {
                token.parse().unwrap_or_else(|_| {
                    panic!("malformed front file {}: bad value {:?}", path.display(), token)
                })
            })
            .collect();

        if n_rows == 0
        {
            n_cols = row.len();
        }
        else
        {
            assert_eq!(
                row.len(),
                n_cols,
                "malformed front file {}: ragged row",
                path.display()
            );
        }

        n_rows += 1;
        values.extend(row);
    }

    Ok(Array2::from_shape_vec((n_rows, n_cols), values)
        .expect("row count and value count disagree"))
}

/// Path of the persisted front for a problem under `front_dir`.
pub fn front_path(front_dir: &Path, problem: &str) -> std::path::PathBuf {
    front_dir.join(format!("{}.pf", problem))
}

/// Sample and persist fronts for every problem in the list.
///
/// One RNG covers the whole list, so the file contents depend on the list
/// order; with the default seed this reproduces the shipped reference
/// fronts exactly.
pub fn construct_fronts(
    problems: &[String],
    n_samples: usize,
    front_dir: &Path,
    rng: &mut impl Rng,
) -> std::io::Result<()>
{
    match std::fs::create_dir(front_dir)
    {
        Ok(_) => {}
        Err(_) => {}
    };

    for problem in problems
    {
        println!("{}: sampling {} front points", problem, n_samples);

        let family = family_for(problem);
        let m = objective_count(problem);

        let points = sample_front(family.as_ref(), m, n_samples, rng);

        write_front(&front_path(front_dir, problem), &points)?;
    }

    Ok(())
}
