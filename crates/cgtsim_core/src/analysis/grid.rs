//! Row-major grid storage for sweep results.

use serde::Serialize;

/// Two-dimensional result grid with scenarios as rows and realisation rates
/// as columns
///
/// Stores values in row-major order: all rates for the first scenario, then
/// all rates for the second, and so on.
#[derive(Debug, Clone, Serialize)]
pub struct SweepGrid<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> SweepGrid<T> {
    /// Wrap row-major data whose length is known to be `rows * cols`
    pub(crate) fn from_parts(rows: usize, cols: usize, data: Vec<T>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { data, rows, cols }
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.data.get(row * self.cols + col)
    }

    /// Set the value at the given cell; false when out of bounds
    pub fn set(&mut self, row: usize, col: usize, value: T) -> bool {
        if row >= self.rows || col >= self.cols {
            return false;
        }
        self.data[row * self.cols + col] = value;
        true
    }

    /// One scenario's cells across all realisation rates
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[T]> {
        if row >= self.rows {
            return None;
        }
        Some(&self.data[row * self.cols..(row + 1) * self.cols])
    }

    #[must_use]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Iterate over ((row, col), value) pairs in row-major order
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &T)> {
        let cols = self.cols;
        self.data
            .iter()
            .enumerate()
            .map(move |(flat, value)| ((flat / cols, flat % cols), value))
    }
}

impl<T: Clone> SweepGrid<T> {
    /// Create a grid with every cell set to `fill`
    #[must_use]
    pub fn new(rows: usize, cols: usize, fill: T) -> Self {
        Self {
            data: vec![fill; rows * cols],
            rows,
            cols,
        }
    }
}
