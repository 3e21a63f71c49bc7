//! Input abstraction for datasets.
//!
//! This module defines the [`DatasetInput`] trait which allows `set_data`
//! and `with_data` to accept standard slices, vectors, and 1-D ndarray
//! inputs interchangeably.

use ndarray::{ArrayBase, Data, Ix1};
use num_traits::PrimInt;

use crate::primitives::errors::StatsError;

/// Trait for types that can supply a dataset to the statistics engine.
pub trait DatasetInput<T: PrimInt> {
    /// Convert the input to a contiguous slice.
    fn as_dataset_slice(&self) -> Result<&[T], StatsError>;
}

impl<T: PrimInt> DatasetInput<T> for [T] {
    fn as_dataset_slice(&self) -> Result<&[T], StatsError> {
        Ok(self)
    }
}

impl<T: PrimInt> DatasetInput<T> for Vec<T> {
    fn as_dataset_slice(&self) -> Result<&[T], StatsError> {
        Ok(self.as_slice())
    }
}

impl<T: PrimInt, S> DatasetInput<T> for ArrayBase<S, Ix1>
where
    S: Data<Elem = T>,
{
    fn as_dataset_slice(&self) -> Result<&[T], StatsError> {
        self.as_slice().ok_or_else(|| {
            StatsError::InvalidInput("ndarray input must be contiguous in memory".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array2};

    #[test]
    fn slices_and_vecs_convert_losslessly() {
        let data = vec![1, 2, 3];
        assert_eq!(data.as_dataset_slice().unwrap(), &[1, 2, 3]);
        assert_eq!(data[..].as_dataset_slice().unwrap(), &[1, 2, 3]);
    }

    #[test]
    fn contiguous_array_converts() {
        let data = array![4_i64, 5, 6];
        assert_eq!(data.as_dataset_slice().unwrap(), &[4, 5, 6]);
    }

    #[test]
    fn non_contiguous_view_is_rejected() {
        let grid = Array2::from_shape_vec((2, 2), vec![1_i64, 2, 3, 4]).unwrap();
        // A column view has stride 2 and no backing contiguous slice
        let column = grid.column(0);
        assert!(matches!(
            column.as_dataset_slice(),
            Err(StatsError::InvalidInput(_))
        ));
    }
}
