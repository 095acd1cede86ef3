//! Without-replacement sampling of integers from a range.

use rand::Rng;

/// Draws `amount` distinct integers from `lower..=upper`, in ascending
/// order.
///
/// A single left-to-right pass accepts each candidate with probability
/// `remaining_needed / remaining_available` (selection sampling), which
/// weights every candidate so that exactly `amount` values survive by the
/// time the range is exhausted.
///
/// The range must be non-degenerate (`lower < upper`) and hold at least
/// `amount` values, and `amount` must be positive.
pub fn sample_between<R: Rng + ?Sized>(
    rng: &mut R,
    amount: usize,
    lower: i32,
    upper: i32,
) -> Vec<i32> {
    assert!(amount > 0, "sample amount must be positive");
    assert!(lower < upper, "sample range is empty or reversed");
    let range_size = (upper - lower + 1) as usize;
    assert!(
        range_size >= amount,
        "range {}..={} holds {} values, cannot draw {}",
        lower,
        upper,
        range_size,
        amount
    );

    let mut result = Vec::with_capacity(amount);
    for candidate in lower..=upper {
        if result.len() == amount {
            break;
        }
        let available = (upper - candidate + 1) as usize;
        let needed = amount - result.len();
        // Once needed == available every remaining candidate is accepted.
        let probability = if available > needed {
            needed as f64 / available as f64
        } else {
            1.0
        };
        if rng.gen::<f64>() <= probability {
            result.push(candidate);
        }
    }
    result
}
