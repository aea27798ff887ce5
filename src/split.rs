//! Seeded random train/test splitting
//!
//! A single split stage shuffles the row indices with a seeded RNG and
//! peels off `ceil(n * fraction)` rows as the held-out side. Two stages
//! chained give the train/test/validation partitioning.

use ndarray::{Array2, Axis};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Split `0..n_rows` into (kept, held_out) index sets.
///
/// The held-out side receives `ceil(n_rows * holdout_fraction)` rows.
/// Both sides keep the order of the seeded permutation, so the same
/// `(n_rows, holdout_fraction, seed)` triple always produces bit-identical
/// results.
#[must_use]
pub fn split_indices(n_rows: usize, holdout_fraction: f64, seed: u64) -> (Vec<usize>, Vec<usize>) {
    let mut indices: Vec<usize> = (0..n_rows).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let n_holdout = ((n_rows as f64) * holdout_fraction).ceil() as usize;
    let n_holdout = n_holdout.min(n_rows);

    let kept = indices.split_off(n_holdout);
    (kept, indices)
}

/// Gather the given rows of a table into a new dense array.
#[must_use]
pub fn take_rows(table: &Array2<f32>, indices: &[usize]) -> Array2<f32> {
    table.select(Axis(0), indices)
}
