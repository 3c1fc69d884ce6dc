/*!
 * Claim Matrix
 * Rectangular process x resource storage, shape fixed at construction
 */

use super::types::{StateError, StateResult};
use crate::core::types::{ProcessId, ResourceId, Units};
use serde::{Deserialize, Serialize};

/// Row-major n x m matrix of unit counts
///
/// Rows are processes, columns are resource types. The shape is checked
/// once when the matrix is built so indexing never sees a ragged row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<Vec<Units>>", try_from = "Vec<Vec<Units>>")]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<Units>,
}

impl Matrix {
    /// Create a zero-filled matrix
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0; rows * cols],
        }
    }

    /// Build from nested rows, requiring every row to have `width` entries
    pub fn from_rows(name: &str, rows: Vec<Vec<Units>>, width: usize) -> StateResult<Self> {
        let mut data = Vec::with_capacity(rows.len() * width);
        for (index, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(StateError::RaggedMatrix {
                    matrix: name.to_string(),
                    row: index,
                    expected: width,
                    actual: row.len(),
                });
            }
            data.extend_from_slice(row);
        }

        Ok(Self {
            rows: rows.len(),
            cols: width,
            data,
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Units of `resource` in the row of `process`
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[inline]
    pub fn get(&self, process: ProcessId, resource: ResourceId) -> Units {
        self.data[process * self.cols + resource]
    }

    #[inline]
    pub(crate) fn set(&mut self, process: ProcessId, resource: ResourceId, units: Units) {
        self.data[process * self.cols + resource] = units;
    }

    /// Row slice for one process
    ///
    /// # Panics
    ///
    /// Panics if `process >= self.rows()`.
    #[inline]
    pub fn row(&self, process: ProcessId) -> &[Units] {
        let start = process * self.cols;
        &self.data[start..start + self.cols]
    }

    #[inline]
    pub(crate) fn row_mut(&mut self, process: ProcessId) -> &mut [Units] {
        let start = process * self.cols;
        &mut self.data[start..start + self.cols]
    }

    /// Iterate rows in process order
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Units]> + '_ {
        (0..self.rows).map(move |process| self.row(process))
    }

    /// Sum of one column, `None` on overflow
    pub fn column_sum(&self, resource: ResourceId) -> Option<Units> {
        self.iter_rows()
            .try_fold(0 as Units, |total, row| total.checked_add(row[resource]))
    }

    /// Copy out as nested rows
    pub fn to_rows(&self) -> Vec<Vec<Units>> {
        self.iter_rows().map(<[Units]>::to_vec).collect()
    }
}

impl From<Matrix> for Vec<Vec<Units>> {
    fn from(matrix: Matrix) -> Self {
        matrix.to_rows()
    }
}

impl TryFrom<Vec<Vec<Units>>> for Matrix {
    type Error = StateError;

    fn try_from(rows: Vec<Vec<Units>>) -> Result<Self, Self::Error> {
        let width = rows.first().map_or(0, Vec::len);
        Self::from_rows("matrix", rows, width)
    }
}
