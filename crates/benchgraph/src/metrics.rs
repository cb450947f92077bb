//! Derived comparison metrics over timing series.
//!
//! All kernels are pure, element-wise functions over equal-length series.
//! They allocate one output vector and never mutate their inputs.
//!
//! # Formulas
//!
//! ```text
//! relative_ratio[i] = baseline[i] / candidate[i]    (> 1 means candidate is faster)
//! per_unit_cost[i]  = times[i] / input_sizes[i]     (seconds per element)
//! ```
//!
//! # Zero denominators
//!
//! Division by zero is intentionally not guarded. A zero entry in a
//! denominator series reflects an upstream measurement artifact and
//! propagates as `inf` (or `NaN` for `0/0`) in the output, unchanged.
//!
//! # Example
//!
//! ```
//! use benchgraph::metrics::relative_ratio;
//!
//! let vanilla = vec![2.0_f64, 4.0, 8.0];
//! let cpu = vec![1.0_f64, 1.0, 2.0];
//! let speedup = relative_ratio(&vanilla, &cpu).unwrap();
//! assert_eq!(speedup, vec![2.0, 4.0, 4.0]);
//! ```

use crate::error::{Error, Result};
use crate::traits::SeriesElement;

/// Checks that two series zipped element-wise have equal lengths.
///
/// # Errors
///
/// Returns `Error::ShapeMismatch` naming `context` if the lengths differ.
pub fn ensure_same_length(context: &str, left: usize, right: usize) -> Result<()> {
    if left == right {
        Ok(())
    } else {
        Err(Error::ShapeMismatch {
            context: context.to_string(),
            left,
            right,
        })
    }
}

/// Computes the relative-speed ratio of `candidate` against `baseline`.
///
/// `ratio[i] = baseline[i] / candidate[i]`; values above 1 mean the
/// candidate completed faster than the baseline. The same kernel serves
/// both the vanilla-baseline and the specialized-baseline metric families,
/// differing only in which series is passed as `baseline`.
///
/// # Errors
///
/// Returns `Error::ShapeMismatch` if the series lengths differ.
pub fn relative_ratio<T: SeriesElement>(baseline: &[T], candidate: &[T]) -> Result<Vec<T>> {
    ensure_same_length("relative ratio", baseline.len(), candidate.len())?;

    Ok(baseline
        .iter()
        .zip(candidate.iter())
        .map(|(&b, &c)| b / c)
        .collect())
}

/// Computes per-input-unit cost: `cost[i] = times[i] / input_sizes[i]`.
///
/// Independent of any baseline; applied to every series in a run.
///
/// # Errors
///
/// - `Error::ShapeMismatch` if `times` and `input_sizes` differ in length.
/// - `Error::NumericConversion` if an input size cannot be represented
///   in `T`.
///
/// # Example
///
/// ```
/// use benchgraph::metrics::per_unit_cost;
///
/// let vanilla = vec![2.0_f64, 4.0, 8.0];
/// let sizes = vec![1_u64, 10, 100];
/// let cost = per_unit_cost(&vanilla, &sizes).unwrap();
/// assert_eq!(cost, vec![2.0, 0.4, 0.08]);
/// ```
pub fn per_unit_cost<T: SeriesElement>(times: &[T], input_sizes: &[u64]) -> Result<Vec<T>> {
    ensure_same_length("per-unit cost", times.len(), input_sizes.len())?;

    times
        .iter()
        .zip(input_sizes.iter())
        .map(|(&t, &n)| Ok(t / T::from_u64(n)?))
        .collect()
}
