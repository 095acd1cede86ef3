//! Integration tests for the bench configuration and runner.

use std::io::Write;

use rand::rngs::StdRng;
use rand::SeedableRng;

use mathbox_cli::bench::{load_bench_config, random_matrix, run_bench, BenchConfig};

// ---------------------------------------------------------------------------
// BenchConfig defaults & serialization
// ---------------------------------------------------------------------------

#[test]
fn default_config_is_square_and_unseeded() {
    let cfg = BenchConfig::default();
    assert!(cfg.left_rows > 0);
    assert_eq!(cfg.left_rows, cfg.inner);
    assert_eq!(cfg.inner, cfg.right_cols);
    assert!(cfg.seed.is_none());
    assert!(!cfg.show_matrices);
}

#[test]
fn config_round_trips_json() {
    let cfg = BenchConfig {
        left_rows: 3,
        inner: 4,
        right_cols: 5,
        seed: Some(11),
        show_matrices: true,
    };
    let json = serde_json::to_string(&cfg).unwrap();
    let back: BenchConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back.left_rows, 3);
    assert_eq!(back.inner, 4);
    assert_eq!(back.right_cols, 5);
    assert_eq!(back.seed, Some(11));
    assert!(back.show_matrices);
}

#[test]
fn config_loads_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bench.json");
    let mut file = std::fs::File::create(&path).unwrap();
    write!(
        file,
        r#"{{"left_rows": 2, "inner": 6, "right_cols": 3, "seed": 5, "show_matrices": false}}"#
    )
    .unwrap();

    let cfg = load_bench_config(&path).unwrap();
    assert_eq!(cfg.left_rows, 2);
    assert_eq!(cfg.inner, 6);
    assert_eq!(cfg.right_cols, 3);
    assert_eq!(cfg.seed, Some(5));
}

#[test]
fn malformed_config_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bench.json");
    std::fs::write(&path, "not json").unwrap();
    assert!(load_bench_config(&path).is_err());
}

// ---------------------------------------------------------------------------
// Random matrices & the runner
// ---------------------------------------------------------------------------

#[test]
fn random_matrix_has_requested_shape_and_value_range() {
    let mut rng = StdRng::seed_from_u64(21);
    let m = random_matrix(&mut rng, 6, 4).unwrap();
    assert_eq!(m.shape(), (6, 4));
    for value in m.as_slice() {
        assert!((1.0..=10.0).contains(value));
        assert_eq!(value.fract(), 0.0, "bench values are whole numbers");
    }
}

#[test]
fn random_matrix_rejects_zero_dimensions() {
    let mut rng = StdRng::seed_from_u64(21);
    assert!(random_matrix(&mut rng, 0, 4).is_err());
}

#[test]
fn seeded_random_matrices_are_reproducible() {
    let mut a = StdRng::seed_from_u64(77);
    let mut b = StdRng::seed_from_u64(77);
    assert_eq!(
        random_matrix(&mut a, 5, 5).unwrap(),
        random_matrix(&mut b, 5, 5).unwrap()
    );
}

#[test]
fn run_bench_reports_the_product_shape() {
    let cfg = BenchConfig {
        left_rows: 8,
        inner: 6,
        right_cols: 4,
        seed: Some(1),
        show_matrices: false,
    };
    let report = run_bench(&cfg).unwrap();
    assert_eq!(report.left_shape, (8, 6));
    assert_eq!(report.right_shape, (6, 4));
    assert_eq!(report.product_shape, (8, 4));
}
