//! Core types for histogram output

use ndimage_core::{Error, Extrema, Result};

/// Caller-owned histogram counts, possibly strided
///
/// Bin `i` lives at `data[origin + i * stride]`. The kernels only ever
/// increment; counts wrap on overflow.
#[derive(Debug)]
pub struct HistogramBins<'a> {
    data: &'a mut [u32],
    origin: usize,
    stride: isize,
    len: usize,
}

impl<'a> HistogramBins<'a> {
    /// Contiguous bins covering all of `data`
    pub fn from_slice(data: &'a mut [u32]) -> Self {
        let len = data.len();
        Self {
            data,
            origin: 0,
            stride: 1,
            len,
        }
    }

    /// `len` bins starting at `origin`, `stride` elements apart.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLayout`] if any bin falls outside `data`.
    pub fn with_stride(data: &'a mut [u32], origin: usize, len: usize, stride: isize) -> Result<Self> {
        if len > 0 {
            let reach = isize::try_from(len - 1)
                .ok()
                .and_then(|steps| steps.checked_mul(stride))
                .ok_or_else(|| Error::InvalidLayout("histogram stride overflows".to_string()))?;
            let last = isize::try_from(origin)
                .ok()
                .and_then(|o| o.checked_add(reach))
                .ok_or_else(|| Error::InvalidLayout("histogram stride overflows".to_string()))?;
            let (lowest, highest) = if reach < 0 {
                (last, origin as isize)
            } else {
                (origin as isize, last)
            };
            if lowest < 0 || highest as usize >= data.len() {
                return Err(Error::out_of_bounds(lowest, highest, data.len()));
            }
        }
        Ok(Self {
            data,
            origin,
            stride,
            len,
        })
    }

    /// Number of bins
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    fn slot(&self, bin: usize) -> usize {
        (self.origin as isize + bin as isize * self.stride) as usize
    }

    /// Count one more value in `bin`.
    ///
    /// # Panics
    ///
    /// Panics if `bin >= self.len()`.
    #[inline]
    pub fn increment(&mut self, bin: usize) {
        assert!(bin < self.len, "bin {bin} outside a {} bin histogram", self.len);
        let slot = self.slot(bin);
        self.data[slot] = self.data[slot].wrapping_add(1);
    }

    /// Count in `bin`, or `None` past the end
    pub fn get(&self, bin: usize) -> Option<u32> {
        (bin < self.len).then(|| self.data[self.slot(bin)])
    }

    /// Iterate counts in bin order
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        (0..self.len).map(move |bin| self.data[self.slot(bin)])
    }

    /// Sum of all counts, widened so wrapped bins are the only loss
    pub fn total(&self) -> u64 {
        self.iter().map(u64::from).sum()
    }

    pub fn to_vec(&self) -> Vec<u32> {
        self.iter().collect()
    }
}

/// Owned result of [`image_histogram`](crate::image_histogram)
#[derive(Debug, Clone, PartialEq)]
pub struct ImageHistogram<T> {
    /// Extrema of the selected pixels, `None` if nothing was selected
    pub extrema: Option<Extrema<T>>,
    /// Value range the bins span, `None` if it could not be determined
    pub range: Option<(T, T)>,
    /// Bin counts
    pub counts: Vec<u32>,
}

impl<T> ImageHistogram<T> {
    /// Number of bins
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of counted pixels
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| u64::from(c)).sum()
    }
}
