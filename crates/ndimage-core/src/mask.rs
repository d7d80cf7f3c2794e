//! Per-row column windows
//!
//! A row-window mask selects, for every image row, the half-open column range
//! `starts[r]..ends[r]`. This is the compact form a viewer produces when it
//! rasterizes a convex ROI outline against the pixel grid.

use crate::error::{Error, Result};
use std::ops::Range;

/// Borrowed per-row `[start, end)` column windows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaskWindows<'a> {
    starts: &'a [usize],
    ends: &'a [usize],
}

impl<'a> MaskWindows<'a> {
    /// Pair up per-row start and end columns.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMask`] if the sequences differ in length or any
    /// row has `start > end`.
    pub fn new(starts: &'a [usize], ends: &'a [usize]) -> Result<Self> {
        if starts.len() != ends.len() {
            return Err(Error::InvalidMask(format!(
                "{} window starts but {} window ends",
                starts.len(),
                ends.len()
            )));
        }
        if let Some((row, (s, e))) = starts
            .iter()
            .zip(ends)
            .enumerate()
            .find(|(_, (s, e))| s > e)
        {
            return Err(Error::InvalidMask(format!(
                "row {row} window starts at column {s} after it ends at column {e}"
            )));
        }
        Ok(Self { starts, ends })
    }

    /// Check the windows cover exactly `rows` rows and stay within `cols` columns.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMask`] describing the first violation.
    pub fn validate_for(&self, rows: usize, cols: usize) -> Result<()> {
        if self.starts.len() != rows {
            return Err(Error::InvalidMask(format!(
                "{} mask rows for an image with {rows} rows",
                self.starts.len()
            )));
        }
        if let Some((row, end)) = self.ends.iter().enumerate().find(|(_, &e)| e > cols) {
            return Err(Error::InvalidMask(format!(
                "row {row} window ends at column {end}, past the image width {cols}"
            )));
        }
        Ok(())
    }

    /// Number of rows described
    #[inline]
    pub fn len(&self) -> usize {
        self.starts.len()
    }

    /// True when no rows are described
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }

    /// Column window for `row`
    #[inline]
    pub fn window(&self, row: usize) -> Range<usize> {
        self.starts[row]..self.ends[row]
    }

    /// Iterate the per-row column windows in row order
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Range<usize>> + 'a {
        self.starts.iter().zip(self.ends).map(|(&s, &e)| s..e)
    }

    /// Total number of selected elements
    pub fn selected_count(&self) -> usize {
        self.iter().map(|w| w.len()).sum()
    }

    /// First selected column of each row
    pub fn starts(&self) -> &'a [usize] {
        self.starts
    }

    /// One past the last selected column of each row
    pub fn ends(&self) -> &'a [usize] {
        self.ends
    }
}
