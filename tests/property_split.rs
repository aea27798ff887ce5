//! Property tests for dataset splitting
//!
//! Ensures the splitter satisfies its structural invariants for arbitrary
//! tables and configurations:
//! - Row count conservation across the three partitions
//! - Pairwise disjointness and full coverage of source rows
//! - Input/target row alignment within every partition
//! - Bit-identical results for a fixed file and seed
//! - Batch shape: all full except possibly the last

use proptest::prelude::*;
use repartir::{BatchLoader, DatasetSplitter, Placement, SplitConfig};
use std::collections::HashSet;
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

// =============================================================================
// Strategy Helpers
// =============================================================================

/// Write a CSV where cell (i, c) holds `i * 1000 + c`, making every value
/// traceable to its source row and column.
fn write_table(dir: &TempDir, rows: usize, cols: usize) -> PathBuf {
    let path = dir.path().join("table.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    let header: Vec<String> = (0..cols).map(|c| format!("c{c}")).collect();
    writeln!(file, "{}", header.join(",")).unwrap();
    for i in 0..rows {
        let row: Vec<String> = (0..cols).map(|c| (i * 1000 + c).to_string()).collect();
        writeln!(file, "{}", row.join(",")).unwrap();
    }
    path
}

fn row_ids(loader: &BatchLoader) -> Vec<usize> {
    loader
        .partition()
        .inputs()
        .column(0)
        .iter()
        .map(|&v| (v as usize) / 1000)
        .collect()
}

/// Fractions bounded away from the interval edges so neither stage can
/// round a partition down to nothing meaningful on tiny tables.
fn fraction() -> impl Strategy<Value = f64> {
    0.1f64..0.9
}

fn table_shape() -> impl Strategy<Value = (usize, usize)> {
    (2usize..120, 6usize..12)
}

// =============================================================================
// Structural Invariants
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_row_count_conservation(
        (rows, cols) in table_shape(),
        holdout in fraction(),
        val in fraction(),
        seed in 0u64..1000,
    ) {
        let dir = TempDir::new().unwrap();
        let path = write_table(&dir, rows, cols);
        let config = SplitConfig {
            train_holdout: holdout,
            val_fraction: val,
            seed,
            placement: Placement::Cpu,
            ..SplitConfig::default()
        };
        let splitter = DatasetSplitter::from_csv(&path, config).unwrap();

        prop_assert_eq!(
            splitter.train_loader.len() + splitter.test_loader.len() + splitter.val_loader.len(),
            rows
        );
    }

    #[test]
    fn prop_partitions_disjoint_and_cover(
        (rows, cols) in table_shape(),
        holdout in fraction(),
        val in fraction(),
        seed in 0u64..1000,
    ) {
        let dir = TempDir::new().unwrap();
        let path = write_table(&dir, rows, cols);
        let config = SplitConfig {
            train_holdout: holdout,
            val_fraction: val,
            seed,
            placement: Placement::Cpu,
            ..SplitConfig::default()
        };
        let splitter = DatasetSplitter::from_csv(&path, config).unwrap();

        let train: HashSet<_> = row_ids(&splitter.train_loader).into_iter().collect();
        let test: HashSet<_> = row_ids(&splitter.test_loader).into_iter().collect();
        let val_set: HashSet<_> = row_ids(&splitter.val_loader).into_iter().collect();

        prop_assert!(train.is_disjoint(&test));
        prop_assert!(train.is_disjoint(&val_set));
        prop_assert!(test.is_disjoint(&val_set));

        let mut all: HashSet<usize> = HashSet::new();
        all.extend(&train);
        all.extend(&test);
        all.extend(&val_set);
        prop_assert_eq!(all, (0..rows).collect::<HashSet<_>>());
    }

    #[test]
    fn prop_rows_stay_aligned(
        (rows, cols) in table_shape(),
        seed in 0u64..1000,
    ) {
        let dir = TempDir::new().unwrap();
        let path = write_table(&dir, rows, cols);
        let config =
            SplitConfig { seed, placement: Placement::Cpu, ..SplitConfig::default() };
        let splitter = DatasetSplitter::from_csv(&path, config).unwrap();

        for loader in [&splitter.train_loader, &splitter.test_loader, &splitter.val_loader] {
            let partition = loader.partition();
            for i in 0..partition.len() {
                let input_row = (partition.inputs()[[i, 0]] as usize) / 1000;
                let target_row = (partition.targets()[[i, 0]] as usize) / 1000;
                prop_assert_eq!(input_row, target_row);
            }
        }
    }

    #[test]
    fn prop_same_seed_reproduces_partitions(
        (rows, cols) in table_shape(),
        holdout in fraction(),
        val in fraction(),
        seed in 0u64..1000,
    ) {
        let dir = TempDir::new().unwrap();
        let path = write_table(&dir, rows, cols);
        let config = SplitConfig {
            train_holdout: holdout,
            val_fraction: val,
            seed,
            placement: Placement::Cpu,
            ..SplitConfig::default()
        };
        let a = DatasetSplitter::from_csv(&path, config).unwrap();
        let b = DatasetSplitter::from_csv(&path, config).unwrap();

        prop_assert_eq!(
            a.train_loader.partition().inputs(),
            b.train_loader.partition().inputs()
        );
        prop_assert_eq!(
            a.train_loader.partition().targets(),
            b.train_loader.partition().targets()
        );
        prop_assert_eq!(row_ids(&a.test_loader), row_ids(&b.test_loader));
        prop_assert_eq!(row_ids(&a.val_loader), row_ids(&b.val_loader));
    }

    #[test]
    fn prop_batch_shapes(
        (rows, cols) in table_shape(),
        batch_size in 1usize..40,
        seed in 0u64..1000,
    ) {
        let dir = TempDir::new().unwrap();
        let path = write_table(&dir, rows, cols);
        let config = SplitConfig {
            batch_size,
            seed,
            placement: Placement::Cpu,
            ..SplitConfig::default()
        };
        let splitter = DatasetSplitter::from_csv(&path, config).unwrap();

        for loader in [&splitter.train_loader, &splitter.test_loader, &splitter.val_loader] {
            let sizes: Vec<usize> = loader.iter().map(|b| b.size()).collect();
            prop_assert_eq!(sizes.len(), loader.num_batches());
            prop_assert_eq!(sizes.iter().sum::<usize>(), loader.len());

            // All batches full except possibly the last.
            for &size in sizes.iter().take(sizes.len().saturating_sub(1)) {
                prop_assert_eq!(size, batch_size);
            }
            if let Some(&last) = sizes.last() {
                let expected = match loader.len() % batch_size {
                    0 => batch_size,
                    partial => partial,
                };
                prop_assert_eq!(last, expected);
            }
        }
    }

    #[test]
    fn prop_eval_loaders_stable_across_traversals(
        (rows, cols) in table_shape(),
        seed in 0u64..1000,
    ) {
        let dir = TempDir::new().unwrap();
        let path = write_table(&dir, rows, cols);
        let config =
            SplitConfig { batch_size: 8, seed, placement: Placement::Cpu, ..SplitConfig::default() };
        let splitter = DatasetSplitter::from_csv(&path, config).unwrap();

        let order = |loader: &BatchLoader| -> Vec<f32> {
            loader.iter().flat_map(|b| b.inputs.column(0).to_vec()).collect()
        };
        prop_assert_eq!(order(&splitter.test_loader), order(&splitter.test_loader));
        prop_assert_eq!(order(&splitter.val_loader), order(&splitter.val_loader));
    }
}
