//! A [`BitMatrix`] paired with per-column names and popcounts, kept in
//! lock-step on every mutation.
//!
//! `BitMatrix` itself knows nothing about names or counts; `CoverMatrix` is
//! the single place that touches all three together, so there is exactly one
//! method to forget to update them in (there is no second code path that
//! decrements `count` without also splicing `hdr`, because both happen
//! inside the same `insert_col`/`remove_col`).
//!
//! Column removal (via `remove_col`, used by the solver's `reduce` step)
//! shifts every later column's index down, so an index captured before a
//! removal is not safe to reuse afterward. `orig` tracks each column's index
//! as of the matrix's full, never-reduced construction, and survives
//! reduction unchanged; it's how the solver maps a (possibly reduced)
//! working matrix's column back to a fixed-width solution matrix's column
//! without going through the column's name, which is not unique when a
//! piece occurs more than once.

use crate::bitmatrix::BitMatrix;
use crate::error::CoreError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverMatrix {
    bits: BitMatrix,
    hdr: Vec<String>,
    count: Vec<u32>,
    orig: Vec<usize>,
}

impl CoverMatrix {
    /// Creates an empty (0-row) matrix with the given column names. Column
    /// `j`'s original index is `j`.
    pub fn new(hdr: Vec<String>) -> Self {
        let n = hdr.len();
        Self {
            bits: BitMatrix::new(0, n),
            count: vec![0; n],
            orig: (0..n).collect(),
            hdr,
        }
    }

    pub fn rows_len(&self) -> usize {
        self.bits.rows_len()
    }

    pub fn cols_len(&self) -> usize {
        self.bits.cols_len()
    }

    pub fn name(&self, j: usize) -> Result<&str, CoreError> {
        self.hdr
            .get(j)
            .map(String::as_str)
            .ok_or(CoreError::ColOutOfRange {
                j,
                n: self.hdr.len(),
            })
    }

    pub fn count(&self, j: usize) -> Result<u32, CoreError> {
        self.count
            .get(j)
            .copied()
            .ok_or(CoreError::ColOutOfRange {
                j,
                n: self.count.len(),
            })
    }

    /// Column `j`'s index as of this matrix's full, never-reduced
    /// construction — stable across `remove_col`, unlike `j` itself.
    pub fn orig_col(&self, j: usize) -> Result<usize, CoreError> {
        self.orig
            .get(j)
            .copied()
            .ok_or(CoreError::ColOutOfRange {
                j,
                n: self.orig.len(),
            })
    }

    pub fn get(&self, i: usize, j: usize) -> Result<bool, CoreError> {
        self.bits.get(i, j)
    }

    pub fn row_words(&self, i: usize) -> Result<&[u32], CoreError> {
        self.bits.row_words(i)
    }

    /// Appends an empty column named `name` to the right of the matrix. Only
    /// valid while the matrix is still under initial construction (before
    /// any `remove_col`), since the new column's original index is taken to
    /// be its current position.
    pub fn push_col(&mut self, name: impl Into<String>) -> Result<(), CoreError> {
        let j = self.cols_len();
        self.bits.insert_col(j)?;
        self.hdr.insert(j, name.into());
        self.count.insert(j, 0);
        self.orig.insert(j, j);
        Ok(())
    }

    pub fn remove_col(&mut self, j: usize) -> Result<(), CoreError> {
        self.bits.remove_col(j)?;
        self.hdr.remove(j);
        self.count.remove(j);
        self.orig.remove(j);
        Ok(())
    }

    /// Inserts a zero row at `i` (`i` may equal `rows_len()` to append).
    pub fn insert_row(&mut self, i: usize) -> Result<(), CoreError> {
        self.bits.insert_row(i)
    }

    /// Removes row `i`, decrementing the count of every column it covered.
    pub fn remove_row(&mut self, i: usize) -> Result<(), CoreError> {
        for j in 0..self.cols_len() {
            if self.bits.get(i, j)? {
                self.count[j] -= 1;
            }
        }
        self.bits.remove_row(i)
    }

    /// Sets cell `(i, j)` to 1 and increments `count[j]` if it wasn't already
    /// set (setting an already-set cell is a no-op on the count).
    pub fn set_one(&mut self, i: usize, j: usize) -> Result<(), CoreError> {
        if !self.bits.get(i, j)? {
            self.count[j] += 1;
        }
        self.bits.set(i, j, true)
    }
}
