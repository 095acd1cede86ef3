//! Integration tests for the without-replacement integer sampler.

use rand::rngs::StdRng;
use rand::SeedableRng;

use mathbox::sampling::sample_between;

#[test]
fn returns_exactly_the_requested_amount() {
    let mut rng = StdRng::seed_from_u64(7);
    for amount in [1, 5, 25, 100] {
        let sample = sample_between(&mut rng, amount, 1, 100);
        assert_eq!(sample.len(), amount);
    }
}

#[test]
fn values_are_distinct_ascending_and_in_range() {
    let mut rng = StdRng::seed_from_u64(42);
    let sample = sample_between(&mut rng, 10, -50, 50);
    for pair in sample.windows(2) {
        assert!(pair[0] < pair[1], "sample must be strictly ascending");
    }
    for value in &sample {
        assert!((-50..=50).contains(value));
    }
}

#[test]
fn full_range_draw_returns_every_value() {
    let mut rng = StdRng::seed_from_u64(3);
    let sample = sample_between(&mut rng, 11, 0, 10);
    assert_eq!(sample, (0..=10).collect::<Vec<i32>>());
}

#[test]
fn same_seed_draws_the_same_sample() {
    let mut a = StdRng::seed_from_u64(99);
    let mut b = StdRng::seed_from_u64(99);
    assert_eq!(
        sample_between(&mut a, 8, 1, 1000),
        sample_between(&mut b, 8, 1, 1000)
    );
}

#[test]
#[should_panic(expected = "amount must be positive")]
fn zero_amount_panics() {
    let mut rng = StdRng::seed_from_u64(0);
    let _ = sample_between(&mut rng, 0, 1, 10);
}

#[test]
#[should_panic(expected = "cannot draw")]
fn oversized_amount_panics() {
    let mut rng = StdRng::seed_from_u64(0);
    let _ = sample_between(&mut rng, 20, 1, 10);
}

#[test]
#[should_panic(expected = "empty or reversed")]
fn reversed_range_panics() {
    let mut rng = StdRng::seed_from_u64(0);
    let _ = sample_between(&mut rng, 1, 10, 1);
}
