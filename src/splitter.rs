//! The dataset splitter
//!
//! Loads a CSV table, slices the positional schema, performs the two-stage
//! seeded split, materializes three partitions on the resolved device, and
//! exposes their batch loaders. Construction is all-or-nothing: any error
//! surfaces before a `DatasetSplitter` value exists.

use crate::config::SplitConfig;
use crate::device::ComputeDevice;
use crate::error::Result;
use crate::loader::{BatchLoader, Partition};
use crate::split::{split_indices, take_rows};
use crate::table::{load_csv, slice_schema};
use std::path::Path;

/// Train/test/validation partitions of a CSV dataset, wrapped in batch
/// loaders.
///
/// The first split routes `train_holdout` of all rows to a held-out
/// remainder and keeps the complement as the train partition. The second
/// split, reusing the same seed, routes `val_fraction` of the remainder to
/// validation and keeps the rest as test.
///
/// # Example
/// ```rust,no_run
/// use repartir::{DatasetSplitter, SplitConfig};
///
/// let splitter = DatasetSplitter::from_csv("arm.csv", SplitConfig::default())?;
/// for epoch in 0..3 {
///     for batch in splitter.train_loader.iter() {
///         // batch.inputs: [batch, 2], batch.targets: [batch, cols - 2]
///     }
/// }
/// # Ok::<(), repartir::RepartirError>(())
/// ```
#[derive(Debug)]
pub struct DatasetSplitter {
    /// Train partition loader; reshuffles on every traversal.
    pub train_loader: BatchLoader,
    /// Test partition loader; stable row order.
    pub test_loader: BatchLoader,
    /// Validation partition loader; stable row order.
    pub val_loader: BatchLoader,
    device: ComputeDevice,
    total_rows: usize,
}

impl DatasetSplitter {
    /// Load, split, and batch a CSV dataset.
    ///
    /// # Errors
    /// Fails on an invalid config, a missing or malformed file, or a table
    /// with fewer than six columns. The schema is checked before any split
    /// is attempted.
    pub fn from_csv(path: impl AsRef<Path>, config: SplitConfig) -> Result<Self> {
        let path = path.as_ref();
        config.validate()?;

        let table = load_csv(path)?;
        let (inputs, targets) = slice_schema(&table, path)?;
        let total_rows = table.nrows();

        // Stage 1: train vs. held-out remainder.
        let (train_idx, remainder_idx) = split_indices(total_rows, config.train_holdout, config.seed);

        // Stage 2: the remainder into test vs. validation, same seed.
        let (test_pos, val_pos) =
            split_indices(remainder_idx.len(), config.val_fraction, config.seed);
        let test_idx: Vec<usize> = test_pos.iter().map(|&p| remainder_idx[p]).collect();
        let val_idx: Vec<usize> = val_pos.iter().map(|&p| remainder_idx[p]).collect();

        let device = config.placement.resolve();
        let materialize = |idx: &[usize]| {
            Partition::new(take_rows(&inputs, idx), take_rows(&targets, idx), device)
        };

        Ok(Self {
            train_loader: BatchLoader::new(
                materialize(&train_idx),
                config.batch_size,
                true,
                config.seed,
            ),
            test_loader: BatchLoader::new(
                materialize(&test_idx),
                config.batch_size,
                false,
                config.seed,
            ),
            val_loader: BatchLoader::new(
                materialize(&val_idx),
                config.batch_size,
                false,
                config.seed,
            ),
            device,
            total_rows,
        })
    }

    /// Total rows in the source table.
    #[must_use]
    pub fn total_rows(&self) -> usize {
        self.total_rows
    }

    /// Device the partitions were placed on.
    #[must_use]
    pub fn device(&self) -> ComputeDevice {
        self.device
    }
}
