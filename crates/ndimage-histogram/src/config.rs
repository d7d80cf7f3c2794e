//! Configuration types for histogram accumulation

use ndimage_core::{Error, IntegerSample, Result};

/// Number of significant bits an integer image actually uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceDepth {
    /// Every bit of the element type carries data
    #[default]
    Full,
    /// 16-bit storage holding 12-bit camera data
    TwelveBit,
}

impl SourceDepth {
    /// Significant bits for samples of type `T` at this depth.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedType`] for [`SourceDepth::TwelveBit`] with
    /// anything other than `u16` samples.
    pub fn significant_bits<T: IntegerSample>(self) -> Result<u32> {
        match self {
            SourceDepth::Full => Ok(T::BITS),
            SourceDepth::TwelveBit if T::BITS == 16 => Ok(12),
            SourceDepth::TwelveBit => Err(Error::UnsupportedType(format!(
                "twelve-bit depth is only valid for uint16 images, got {}",
                T::ELEMENT_TYPE
            ))),
        }
    }

    /// `TwelveBit` when the caller declares 12 significant bits
    pub fn from_twelve_bit_flag(is_twelve_bit: bool) -> Self {
        if is_twelve_bit {
            SourceDepth::TwelveBit
        } else {
            SourceDepth::Full
        }
    }
}

/// What a ranged histogram does with values outside its range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowBins {
    /// Out-of-range values are not counted
    #[default]
    Excluded,
    /// Bin 0 counts values below the range and the final bin values above it
    Counted,
}

impl OverflowBins {
    /// `Counted` when the caller asks for overflow bins
    pub fn from_flag(with_overflow_bins: bool) -> Self {
        if with_overflow_bins {
            OverflowBins::Counted
        } else {
            OverflowBins::Excluded
        }
    }

    /// Bins reserved for out-of-range values
    #[inline]
    pub fn extra_bins(self) -> usize {
        match self {
            OverflowBins::Excluded => 0,
            OverflowBins::Counted => 2,
        }
    }

    /// Smallest output length that leaves at least one regular bin
    #[inline]
    pub fn min_len(self) -> usize {
        self.extra_bins() + 1
    }
}

/// Options for [`image_histogram`](crate::image_histogram)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramOptions<T> {
    /// Lower and upper histogram bounds; missing bounds are filled from the
    /// data extrema (floats) or the source depth (integers). Integer images
    /// with neither bound get a direct shift-mapped histogram.
    pub range: (Option<T>, Option<T>),
    /// Bin count; defaults to 256 for `u8` and 1024 otherwise
    pub n_bins: Option<usize>,
    /// Significant bits of integer data; defaults to the full type width
    pub source_bits: Option<u32>,
}

impl<T> Default for HistogramOptions<T> {
    fn default() -> Self {
        Self {
            range: (None, None),
            n_bins: None,
            source_bits: None,
        }
    }
}

impl<T> HistogramOptions<T> {
    pub fn with_range(mut self, min: T, max: T) -> Self {
        self.range = (Some(min), Some(max));
        self
    }

    pub fn with_bins(mut self, n_bins: usize) -> Self {
        self.n_bins = Some(n_bins);
        self
    }

    pub fn with_source_bits(mut self, bits: u32) -> Self {
        self.source_bits = Some(bits);
        self
    }
}
