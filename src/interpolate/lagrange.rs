use tracing::warn;

use crate::error::{InterpolationError, Result};

/// Checks that `xs` and `ys` form a usable sample set: same length, at least
/// one node, every node finite, and no node repeated.
pub fn validate(xs: &[f64], ys: &[f64]) -> Result<()> {
    if xs.len() != ys.len() {
        warn!(xs = xs.len(), ys = ys.len(), "rejected sample set with mismatched lengths");
        return Err(InterpolationError::LengthMismatch {
            xs: xs.len(),
            ys: ys.len(),
        });
    }

    if xs.is_empty() {
        warn!("rejected empty sample set");
        return Err(InterpolationError::Empty);
    }

    if let Some((index, value)) = xs.iter().enumerate().find(|(_, x)| !x.is_finite()) {
        warn!(index, value = *value, "rejected sample set with non-finite node");
        return Err(InterpolationError::NonFiniteNode {
            index,
            value: *value,
        });
    }

    for (first, value) in xs.iter().enumerate() {
        if let Some(offset) = xs[first + 1..].iter().position(|other| other == value) {
            let second = first + 1 + offset;
            warn!(first, second, value = *value, "rejected sample set with duplicate node");
            return Err(InterpolationError::DuplicateNode {
                first,
                second,
                value: *value,
            });
        }
    }

    Ok(())
}

/*
    L_k(x) = (x - x_0)...(x - x_{k-1})(x - x_{k+1})...(x - x_n)
             ----------------------------------------------------
             (x_k - x_0)...(x_k - x_{k-1})(x_k - x_{k+1})...(x_k - x_n)

    xs = [1, 2, 3], k = 1 -> drop x_1 = 2 -> (x - 1)/(2 - 1) * (x - 3)/(2 - 3)

    With a single node there is nothing left to multiply and L_0(x) = 1.
*/
/// Value of the `k`-th Lagrange basis polynomial over the nodes `xs` at `x`.
pub fn basis(x: f64, k: usize, xs: &[f64]) -> Result<f64> {
    if k >= xs.len() {
        return Err(InterpolationError::IndexOutOfRange {
            index: k,
            len: xs.len(),
        });
    }
    Ok(basis_unchecked(x, k, xs))
}

// k < xs.len()
fn basis_unchecked(x: f64, k: usize, xs: &[f64]) -> f64 {
    let x_k = xs[k];
    xs.iter()
        .enumerate()
        .filter(|(j, _)| *j != k)
        .map(|(_, x_j)| (x - x_j) / (x_k - x_j))
        .product()
}

/// Value at `x` of the unique polynomial of degree below `xs.len()` that
/// passes through every `(xs[i], ys[i])`.
///
/// Every query recomputes all basis values, so a call costs O(n^2).
pub fn evaluate(x: f64, xs: &[f64], ys: &[f64]) -> Result<f64> {
    validate(xs, ys)?;
    Ok(evaluate_unchecked(x, xs, ys))
}

// Callers must have run `validate` on the same xs and ys
pub(crate) fn evaluate_unchecked(x: f64, xs: &[f64], ys: &[f64]) -> f64 {
    ys.iter()
        .enumerate()
        .map(|(k, y_k)| y_k * basis_unchecked(x, k, xs))
        .sum()
}
