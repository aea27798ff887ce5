//! repartir — deterministic CSV dataset splitting and batch loading
//!
//! Loads a tabular dataset from a CSV file, partitions it into
//! train/test/validation sets with a two-stage seeded split, materializes
//! each partition as dense `f32` arrays, and exposes batch-iterable
//! loaders over them.
//!
//! # Example
//!
//! ```rust,no_run
//! use repartir::{DatasetSplitter, SplitConfig};
//!
//! let splitter = DatasetSplitter::from_csv("arm.csv", SplitConfig::default())?;
//!
//! println!(
//!     "{} train / {} test / {} val rows on {}",
//!     splitter.train_loader.len(),
//!     splitter.test_loader.len(),
//!     splitter.val_loader.len(),
//!     splitter.device(),
//! );
//!
//! for batch in splitter.train_loader.iter() {
//!     let _ = (batch.inputs, batch.targets);
//! }
//! # Ok::<(), repartir::RepartirError>(())
//! ```
//!
//! # Determinism
//!
//! Every random decision (both split stages and the train loader's
//! per-pass shuffle) derives from the configured seed; the same file and
//! config always reproduce bit-identical partitions.

pub mod config;
pub mod device;
pub mod error;
pub mod loader;
pub mod split;
pub mod splitter;
pub mod table;

pub use config::SplitConfig;
pub use device::{ComputeDevice, Placement};
pub use error::{RepartirError, Result};
pub use loader::{Batch, BatchLoader, Batches, Partition};
pub use splitter::DatasetSplitter;
