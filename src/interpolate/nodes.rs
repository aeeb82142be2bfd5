use rand::Rng;

use crate::error::{InterpolationError, Result};

/// `n` evenly spaced points over `[min, max]`, both endpoints included.
///
/// One point gives `[min]`, zero points give an empty list.
pub fn linspace(min: f64, max: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![min],
        _ => {
            let last = (n - 1) as f64;
            // blend the bounds instead of stepping, max - min may overflow
            (0..n)
                .map(|i| match i {
                    0 => min,
                    i if i == n - 1 => max,
                    _ => {
                        let t = i as f64 / last;
                        min * (1.0 - t) + max * t
                    }
                })
                .collect()
        }
    }
}

/// Draws per requested node before giving up on a range that is too narrow.
const MAX_DRAWS_PER_NODE: usize = 64;

/// Draws `num_points` distinct nodes from `[min, max)` and returns them sorted.
///
/// Fails when the range holds too few representable values to reach
/// `num_points` distinct nodes within a bounded number of draws.
pub fn random_nodes<R: Rng>(
    rng: &mut R,
    num_points: usize,
    min: f64,
    max: f64,
) -> Result<Vec<f64>> {
    if !(min.is_finite() && max.is_finite() && min < max && (max - min).is_finite()) {
        return Err(InterpolationError::InvalidRange { min, max });
    }

    let max_draws = num_points.saturating_mul(MAX_DRAWS_PER_NODE);
    let mut x_values: Vec<f64> = Vec::with_capacity(num_points);
    let mut draws = 0;
    while x_values.len() < num_points {
        if draws == max_draws {
            return Err(InterpolationError::TooFewDistinctNodes {
                requested: num_points,
                found: x_values.len(),
            });
        }
        draws += 1;

        let x = rng.gen_range(min..max);
        if !x_values.contains(&x) {
            x_values.push(x);
        }
    }

    x_values.sort_by(f64::total_cmp);
    Ok(x_values)
}
