//! Partitions and batch iteration
//!
//! A [`Partition`] is an aligned (inputs, targets) pair materialized as
//! dense `f32` arrays. A [`BatchLoader`] wraps one partition and yields
//! finite, restartable traversals of [`Batch`]es. Shuffling loaders draw a
//! fresh permutation from a seeded RNG stream on every traversal, so batch
//! order varies between passes but the whole sequence of passes is
//! reproducible from the seed.

use crate::device::ComputeDevice;
use ndarray::{Array2, Axis};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::sync::{Mutex, PoisonError};

/// An aligned (inputs, targets) pair with equal row counts.
#[derive(Debug, Clone)]
pub struct Partition {
    inputs: Array2<f32>,
    targets: Array2<f32>,
    device: ComputeDevice,
}

impl Partition {
    /// Create a partition from aligned arrays.
    ///
    /// # Panics
    /// Panics if the row counts differ; the splitter always produces
    /// aligned pairs, so a mismatch is a construction bug.
    #[must_use]
    pub fn new(inputs: Array2<f32>, targets: Array2<f32>, device: ComputeDevice) -> Self {
        assert_eq!(
            inputs.nrows(),
            targets.nrows(),
            "inputs and targets must have the same number of rows"
        );
        Self { inputs, targets, device }
    }

    /// Number of rows in the partition.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inputs.nrows()
    }

    /// Check if the partition is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Device the partition's arrays are placed on.
    #[must_use]
    pub fn device(&self) -> ComputeDevice {
        self.device
    }

    /// Input feature rows.
    #[must_use]
    pub fn inputs(&self) -> &Array2<f32> {
        &self.inputs
    }

    /// Target rows.
    #[must_use]
    pub fn targets(&self) -> &Array2<f32> {
        &self.targets
    }
}

/// One batch of aligned (inputs, targets) rows.
#[derive(Debug, Clone)]
pub struct Batch {
    /// Input features, `[batch, input_dim]`
    pub inputs: Array2<f32>,
    /// Target values, `[batch, target_dim]`
    pub targets: Array2<f32>,
}

impl Batch {
    /// Number of rows in the batch.
    #[must_use]
    pub fn size(&self) -> usize {
        self.inputs.nrows()
    }
}

/// Batched, optionally-shuffling iterator factory over a [`Partition`].
#[derive(Debug)]
pub struct BatchLoader {
    partition: Partition,
    batch_size: usize,
    shuffle: bool,
    rng: Mutex<StdRng>,
}

impl BatchLoader {
    /// Create a loader over a partition.
    ///
    /// `seed` initializes the shuffle stream; it only matters when
    /// `shuffle` is true.
    #[must_use]
    pub fn new(partition: Partition, batch_size: usize, shuffle: bool, seed: u64) -> Self {
        Self { partition, batch_size, shuffle, rng: Mutex::new(StdRng::seed_from_u64(seed)) }
    }

    /// Number of rows in the underlying partition.
    #[must_use]
    pub fn len(&self) -> usize {
        self.partition.len()
    }

    /// Check if the underlying partition is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.partition.is_empty()
    }

    /// Rows per batch.
    #[must_use]
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Number of batches per traversal; the last may be partial.
    #[must_use]
    pub fn num_batches(&self) -> usize {
        self.len().div_ceil(self.batch_size)
    }

    /// The underlying partition.
    #[must_use]
    pub fn partition(&self) -> &Partition {
        &self.partition
    }

    /// Start one traversal over the partition.
    ///
    /// Every traversal of a shuffling loader advances the RNG stream and
    /// visits the rows in a new order; non-shuffling loaders always visit
    /// rows in partition order.
    pub fn iter(&self) -> Batches<'_> {
        let mut order: Vec<usize> = (0..self.partition.len()).collect();
        if self.shuffle {
            let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
            order.shuffle(&mut *rng);
        }
        Batches { loader: self, order, cursor: 0 }
    }
}

/// A single traversal produced by [`BatchLoader::iter`].
pub struct Batches<'a> {
    loader: &'a BatchLoader,
    order: Vec<usize>,
    cursor: usize,
}

impl Iterator for Batches<'_> {
    type Item = Batch;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.order.len() {
            return None;
        }

        let start = self.cursor;
        let end = (start + self.loader.batch_size).min(self.order.len());
        self.cursor = end;

        let rows = &self.order[start..end];
        Some(Batch {
            inputs: self.loader.partition.inputs.select(Axis(0), rows),
            targets: self.loader.partition.targets.select(Axis(0), rows),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.order.len() - self.cursor).div_ceil(self.loader.batch_size);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Batches<'_> {}
