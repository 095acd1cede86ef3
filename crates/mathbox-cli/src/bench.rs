//! Random-matrix construction and multiplication timing.

use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use mathbox::Matrix;

/// Parameters for one bench run. Loadable from JSON; CLI flags override
/// individual fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Rows of the left matrix.
    pub left_rows: usize,
    /// Columns of the left matrix and rows of the right one.
    pub inner: usize,
    /// Columns of the right matrix.
    pub right_cols: usize,
    /// Seed for reproducible matrices; a fresh entropy seed when absent.
    pub seed: Option<u64>,
    /// Print the operands and their product.
    pub show_matrices: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            left_rows: 128,
            inner: 128,
            right_cols: 128,
            seed: None,
            show_matrices: false,
        }
    }
}

/// What a bench run did and how long the multiplication took.
#[derive(Debug, Clone)]
pub struct BenchReport {
    pub left_shape: (usize, usize),
    pub right_shape: (usize, usize),
    pub product_shape: (usize, usize),
    pub elapsed: Duration,
}

pub fn load_bench_config(path: &Path) -> Result<BenchConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read bench config {:?}", path))?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse bench config {:?}", path))
}

/// Builds a matrix of the given shape filled with uniform random integers
/// in `1..=10`, stored as `f64`.
pub fn random_matrix<R: Rng + ?Sized>(rng: &mut R, rows: usize, cols: usize) -> Result<Matrix> {
    let values = (0..rows * cols)
        .map(|_| rng.gen_range(1..=10) as f64)
        .collect();
    Matrix::from_vec(values, rows, cols).context("bench matrix dimensions must be positive")
}

/// Constructs the two operands, multiplies them, and reports the
/// wall-clock duration of the multiplication alone.
pub fn run_bench(config: &BenchConfig) -> Result<BenchReport> {
    let mut rng: StdRng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let left = random_matrix(&mut rng, config.left_rows, config.inner)?;
    let right = random_matrix(&mut rng, config.inner, config.right_cols)?;
    log::info!(
        "multiplying a {}x{} matrix by a {}x{} matrix",
        config.left_rows,
        config.inner,
        config.inner,
        config.right_cols
    );
    if config.show_matrices {
        println!("{}\n", left);
        println!("{}\n", right);
    }

    let started = Instant::now();
    let product = left.multiply(&right)?;
    let elapsed = started.elapsed();

    if config.show_matrices {
        println!("{}\n", product);
    }

    Ok(BenchReport {
        left_shape: left.shape(),
        right_shape: right.shape(),
        product_shape: product.shape(),
        elapsed,
    })
}
