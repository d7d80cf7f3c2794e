//! Bounds-checked strided 2-D views
//!
//! A [`StridedImage`] borrows a flat slice and describes a 2-D array inside it
//! through an origin element and per-axis element strides. Strides may be
//! larger than the row width (windowed views), swapped (transposed views) or
//! negative (flipped views). The whole addressed rectangle is checked against
//! the slice once at construction, so scans never leave the borrowed data.

use crate::error::{Error, Result};
use std::ops::Range;

/// Read-only strided view over a 2-D array of samples
#[derive(Debug, Clone, Copy)]
pub struct StridedImage<'a, T> {
    data: &'a [T],
    origin: usize,
    rows: usize,
    cols: usize,
    row_stride: isize,
    col_stride: isize,
}

impl<'a, T: Copy> StridedImage<'a, T> {
    /// View `data` as a contiguous row-major `rows x cols` image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLayout`] if `data` holds fewer than
    /// `rows * cols` elements.
    pub fn from_slice(data: &'a [T], rows: usize, cols: usize) -> Result<Self> {
        let row_stride = isize::try_from(cols)
            .map_err(|_| Error::InvalidLayout(format!("{cols} columns overflow a stride")))?;
        Self::with_strides(data, 0, (rows, cols), (row_stride, 1))
    }

    /// View `data` with explicit element strides.
    ///
    /// `origin` is the index in `data` of element (0, 0); element (r, c) lives
    /// at `origin + r * row_stride + c * col_stride`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLayout`] if any addressed element falls outside
    /// `data`, or the address arithmetic overflows.
    pub fn with_strides(
        data: &'a [T],
        origin: usize,
        (rows, cols): (usize, usize),
        (row_stride, col_stride): (isize, isize),
    ) -> Result<Self> {
        check_bounds(data.len(), origin, (rows, cols), (row_stride, col_stride))?;
        Ok(Self {
            data,
            origin,
            rows,
            cols,
            row_stride,
            col_stride,
        })
    }

    /// View `data` with strides given in bytes, as buffer protocols report them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLayout`] if a stride is not a whole number of
    /// elements, or for the reasons listed on [`Self::with_strides`].
    pub fn with_byte_strides(
        data: &'a [T],
        origin: usize,
        shape: (usize, usize),
        (row_bytes, col_bytes): (isize, isize),
    ) -> Result<Self> {
        let size = std::mem::size_of::<T>() as isize;
        if size == 0 || row_bytes % size != 0 || col_bytes % size != 0 {
            return Err(Error::InvalidLayout(format!(
                "byte strides ({row_bytes}, {col_bytes}) are not multiples of the {size} byte element size"
            )));
        }
        Self::with_strides(data, origin, shape, (row_bytes / size, col_bytes / size))
    }

    /// Number of rows
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// `(row_stride, col_stride)` in elements
    #[inline]
    pub fn strides(&self) -> (isize, isize) {
        (self.row_stride, self.col_stride)
    }

    /// Total number of logical elements
    #[inline]
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    /// True if the view has no rows or no columns
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Element at (row, col), or `None` outside the view
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        (row < self.rows && col < self.cols).then(|| self.at(row, col))
    }

    /// Element at (row, col). Callers guarantee the position is inside the view.
    #[inline]
    pub(crate) fn at(&self, row: usize, col: usize) -> T {
        self.data[self.offset(row, col)]
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        (self.origin as isize + row as isize * self.row_stride + col as isize * self.col_stride)
            as usize
    }

    /// Columns `cols` of row `row` as a slice, when the view is unit-stride
    /// along columns. Returns `None` for any other column stride.
    #[inline]
    pub fn row_slice(&self, row: usize, cols: Range<usize>) -> Option<&'a [T]> {
        if self.col_stride != 1 || cols.is_empty() {
            return None;
        }
        let start = self.offset(row, cols.start);
        Some(&self.data[start..start + cols.len()])
    }

    /// Iterate columns `cols` of row `row` in increasing column order.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `cols` lie outside the view.
    #[inline]
    pub fn row_span(&self, row: usize, cols: Range<usize>) -> RowSpan<'a, T> {
        assert!(
            row < self.rows && cols.start <= cols.end && cols.end <= self.cols,
            "row {row} columns {cols:?} outside a {}x{} view",
            self.rows,
            self.cols
        );
        RowSpan {
            data: self.data,
            next: self.origin as isize
                + row as isize * self.row_stride
                + cols.start as isize * self.col_stride,
            stride: self.col_stride,
            remaining: cols.len(),
        }
    }

    /// Swap the row and column axes without touching the data
    pub fn transposed(self) -> Self {
        Self {
            rows: self.cols,
            cols: self.rows,
            row_stride: self.col_stride,
            col_stride: self.row_stride,
            ..self
        }
    }

    /// Reverse the row order, producing a negative row stride
    pub fn flipped_rows(self) -> Self {
        if self.is_empty() {
            return self;
        }
        Self {
            origin: self.offset(self.rows - 1, 0),
            row_stride: -self.row_stride,
            ..self
        }
    }

    /// Sub-view covering `rows` x `cols` of this view.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLayout`] if either range is reversed or extends
    /// past the view.
    pub fn window(self, rows: Range<usize>, cols: Range<usize>) -> Result<Self> {
        if rows.start > rows.end || rows.end > self.rows || cols.start > cols.end || cols.end > self.cols {
            return Err(Error::InvalidLayout(format!(
                "window rows {rows:?} cols {cols:?} exceeds a {}x{} view",
                self.rows, self.cols
            )));
        }
        let origin = if rows.is_empty() || cols.is_empty() {
            self.origin
        } else {
            self.offset(rows.start, cols.start)
        };
        Ok(Self {
            origin,
            rows: rows.len(),
            cols: cols.len(),
            ..self
        })
    }
}

/// Iterator over a run of columns within one row of a [`StridedImage`]
#[derive(Debug, Clone)]
pub struct RowSpan<'a, T> {
    data: &'a [T],
    next: isize,
    stride: isize,
    remaining: usize,
}

impl<T: Copy> Iterator for RowSpan<'_, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.remaining == 0 {
            return None;
        }
        let value = self.data[self.next as usize];
        self.remaining -= 1;
        if self.remaining > 0 {
            self.next += self.stride;
        }
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: Copy> ExactSizeIterator for RowSpan<'_, T> {}

/// Lowest and highest element index addressed by a strided rectangle must both
/// fall inside `len`. The extremes of an affine index map over a rectangle sit
/// at its corners, so checking the per-axis extents is sufficient.
fn check_bounds(
    len: usize,
    origin: usize,
    (rows, cols): (usize, usize),
    (row_stride, col_stride): (isize, isize),
) -> Result<()> {
    if rows == 0 || cols == 0 {
        return if origin <= len {
            Ok(())
        } else {
            Err(Error::InvalidLayout(format!(
                "origin {origin} lies past a buffer holding {len} elements"
            )))
        };
    }

    let overflow = || Error::InvalidLayout("strided address arithmetic overflows".to_string());
    let extent = |n: usize, stride: isize| -> Result<(isize, isize)> {
        let reach = isize::try_from(n - 1)
            .ok()
            .and_then(|steps| steps.checked_mul(stride))
            .ok_or_else(overflow)?;
        Ok(if reach < 0 { (reach, 0) } else { (0, reach) })
    };

    let (row_lo, row_hi) = extent(rows, row_stride)?;
    let (col_lo, col_hi) = extent(cols, col_stride)?;
    let origin = isize::try_from(origin).map_err(|_| overflow())?;
    let lowest = origin
        .checked_add(row_lo)
        .and_then(|v| v.checked_add(col_lo))
        .ok_or_else(overflow)?;
    let highest = origin
        .checked_add(row_hi)
        .and_then(|v| v.checked_add(col_hi))
        .ok_or_else(overflow)?;

    if lowest < 0 || highest as usize >= len {
        return Err(Error::out_of_bounds(lowest, highest, len));
    }
    Ok(())
}
