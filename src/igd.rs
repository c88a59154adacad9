use std::path::Path;

use ndarray::Array2;

use crate::reference_front::{front_path, load_front};

/// Nearest-neighbour index over a solution set.
///
/// An exhaustive scan: the sets coming out of a trial are a few hundred
/// points at most, far below where a spatial tree would pay off.
pub struct NearestNeighbors {
    points: Vec<Vec<f64>>,
}

impl NearestNeighbors
{
    pub fn new(points: Vec<Vec<f64>>) -> Self
    {
        assert!(!points.is_empty(), "empty solution set");

        NearestNeighbors
        {
            points
        }
    }

    pub fn len(&self) -> usize
    {
        self.points.len()
    }

    /// Euclidean distance from `query` to its nearest point in the set.
    pub fn nearest_distance(&self, query: &[f64]) -> f64 {
        self.points
            .iter()
            .map(|point| {
                point
                    .iter()
                    .zip(query)
                    .map(|(a, b)| (a - b) * (a - b))
                    .sum::<f64>()
                    .sqrt()
            })
            .fold(f64::MAX, f64::min)
    }
}

/// Inverted generational distance of a solution set against a loaded front.
///
/// Every front row is matched to its nearest solution; the result is the
/// mean of those distances. The distance count must equal the front's row
/// count; a mismatch is a shape bug upstream and panics.
pub fn igd_against(solutions: &[Vec<f64>], front: &Array2<f64>) -> f64 {
    let nbrs = NearestNeighbors::new(solutions.to_vec());

    let distances: Vec<f64> = front
        .rows()
        .into_iter()
        .map(|row| nbrs.nearest_distance(row.as_slice().expect("non-contiguous front row")))
        .collect();

    assert_eq!(
        distances.len(),
        front.nrows(),
        "IGD distance count diverged from reference front size"
    );

    distances.iter().sum::<f64>() / distances.len() as f64
}

/// Inverted generational distance against the persisted front of `problem`.
pub fn igd(solutions: &[Vec<f64>], problem: &str, front_dir: &Path) -> std::io::Result<f64> {
    let front = load_front(&front_path(front_dir, problem))?;

    Ok(igd_against(solutions, &front))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn nearest_distance_picks_the_closest_point()
    {
        let nbrs = NearestNeighbors::new(vec![
            vec![0.0, 0.0],
            vec![1.0, 0.0],
            vec![0.0, 3.0],
        ]);

        assert_eq!(nbrs.nearest_distance(&[1.0, 0.0]), 0.0);
        assert_eq!(nbrs.nearest_distance(&[2.0, 0.0]), 1.0);
        assert_eq!(nbrs.nearest_distance(&[0.0, 2.0]), 1.0);
    }

    #[test]
    fn front_against_itself_is_zero()
    {
        let front = array![
            [0.5, 0.0, 0.0],
            [0.0, 0.5, 0.0],
            [0.0, 0.0, 0.5],
            [0.2, 0.2, 0.1],
        ];

        let solutions: Vec<Vec<f64>> = front
            .rows()
            .into_iter()
            .map(|row| row.to_vec())
            .collect();

        assert_eq!(igd_against(&solutions, &front), 0.0);
    }

    #[test]
    fn mean_over_front_points()
    {
        let front = array![
            [0.0, 0.0],
            [4.0, 0.0],
        ];

        let solutions = vec![vec![0.0, 1.0], vec![4.0, 3.0]];

        // Distances are 1 and 3, so the mean is 2.
        assert_eq!(igd_against(&solutions, &front), 2.0);
    }
}
