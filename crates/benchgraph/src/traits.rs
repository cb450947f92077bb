//! Core traits for benchgraph numeric operations.
//!
//! The primary trait is [`SeriesElement`], a common interface for numeric
//! operations on timing series, abstracting over `f32` and `f64`. Metric
//! kernels in [`crate::metrics`] are generic over this trait.

use num_traits::{Float, NumCast};

use crate::error::{Error, Result};

/// A trait for types that can be used as elements in a timing series.
///
/// Extends `num_traits::Float` with checked conversions from the integer
/// types that appear as independent variables (input sizes).
///
/// # Example
///
/// ```
/// use benchgraph::traits::SeriesElement;
///
/// fn halve<T: SeriesElement>(data: &[T]) -> benchgraph::error::Result<Vec<T>> {
///     let two = T::from_usize(2)?;
///     Ok(data.iter().map(|&x| x / two).collect())
/// }
///
/// let halved = halve(&[4.0_f64, 6.0]).unwrap();
/// assert!((halved[0] - 2.0).abs() < 1e-10);
/// ```
pub trait SeriesElement: Float + NumCast + Copy + Default + Send + Sync + 'static {
    /// Creates a series element from a `usize` value.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be
    /// represented in this type.
    #[inline]
    fn from_usize(value: usize) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "usize to series element",
        })
    }

    /// Creates a series element from a `u64` input-size value.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be
    /// represented in this type.
    #[inline]
    fn from_u64(value: u64) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "u64 to series element",
        })
    }
}

impl SeriesElement for f32 {}
impl SeriesElement for f64 {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_usize_f64() {
        let x = f64::from_usize(42).unwrap();
        assert!((x - 42.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_from_u64_f32() {
        let x = f32::from_u64(1000).unwrap();
        assert!((x - 1000.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_from_u64_large_value_still_converts() {
        // f64 can represent large u64 values approximately; NumCast accepts.
        let x = f64::from_u64(u64::MAX).unwrap();
        assert!(x > 0.0);
    }
}
