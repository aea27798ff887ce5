//! Split configuration with validated defaults

use crate::device::Placement;
use crate::error::{RepartirError, Result};
use serde::{Deserialize, Serialize};

/// Configuration for a [`DatasetSplitter`](crate::DatasetSplitter).
///
/// All fields have defaults, so a config deserialized from an empty map
/// is usable as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SplitConfig {
    /// Rows per produced batch
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Seed for both split stages and the train loader's shuffle stream.
    /// The same file and seed always yield bit-identical partitions.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Fraction of all rows routed to the held-out remainder by the first
    /// split; the complement becomes the train partition.
    ///
    /// NOTE: historically this knob was documented as "proportion of the
    /// dataset to include in the train split", but it has always acted as
    /// the held-out fraction (0.5 sends half the rows to test+validation,
    /// not to train). The literal behavior is preserved here.
    #[serde(default = "default_fraction")]
    pub train_holdout: f64,

    /// Fraction of the held-out remainder routed to validation; the
    /// complement becomes the test partition.
    #[serde(default = "default_fraction")]
    pub val_fraction: f64,

    /// Device placement policy for the materialized partitions
    #[serde(default)]
    pub placement: Placement,
}

fn default_batch_size() -> usize {
    124
}

fn default_seed() -> u64 {
    3
}

fn default_fraction() -> f64 {
    0.5
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
            seed: default_seed(),
            train_holdout: default_fraction(),
            val_fraction: default_fraction(),
            placement: Placement::default(),
        }
    }
}

impl SplitConfig {
    /// Validate fractions and batch size.
    ///
    /// Fractions must lie in the open interval (0, 1); a fraction of
    /// exactly 0 or 1 would leave a partition empty, which the two-stage
    /// split does not support.
    pub fn validate(&self) -> Result<()> {
        if !(self.train_holdout > 0.0 && self.train_holdout < 1.0) {
            return Err(RepartirError::InvalidFraction {
                field: "train_holdout",
                value: self.train_holdout,
            });
        }
        if !(self.val_fraction > 0.0 && self.val_fraction < 1.0) {
            return Err(RepartirError::InvalidFraction {
                field: "val_fraction",
                value: self.val_fraction,
            });
        }
        if self.batch_size == 0 {
            return Err(RepartirError::InvalidBatchSize { value: self.batch_size });
        }
        Ok(())
    }
}
