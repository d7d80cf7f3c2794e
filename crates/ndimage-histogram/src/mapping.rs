//! Bin mapping policies
//!
//! Two ways of turning a sample into a bin index:
//!
//! - [`DirectMapping`]: `value >> shift` for unsigned integer images, where the
//!   bin count is a power of two and the shift drops the low bits
//! - [`RangedMapping`]: proportional placement of `[min, max]` into `n` bins
//!   for any sample type, optionally with underflow and overflow bins
//!   ([`OverflowMapping`])

use crate::config::SourceDepth;
use crate::traits::BinMap;
use ndimage_core::{ElementType, Error, IntegerSample, Result, Sample};

/// Bin count a display histogram uses for each element type
pub const fn canonical_bin_count(element_type: ElementType) -> usize {
    match element_type {
        ElementType::U8 => 256,
        _ => 1024,
    }
}

/// `value >> shift`, clamped into `n_bins`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectMapping {
    shift: u32,
    n_bins: usize,
}

impl DirectMapping {
    /// Canonical mapping for `T` at the given source depth: 256 bins for
    /// `u8`, otherwise 1024 bins over the significant bits.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedType`] for a twelve-bit depth on anything
    /// but `u16`.
    pub fn for_sample<T: IntegerSample>(depth: SourceDepth) -> Result<Self> {
        let bits = depth.significant_bits::<T>()?;
        Self::with_bins::<T>(bits, canonical_bin_count(T::ELEMENT_TYPE))
    }

    /// `n_bins` bins over data with `significant_bits` bits of precision,
    /// e.g. 65536 bins at 16 bits for an exact `u16` histogram.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `n_bins` is not a power of two,
    /// `significant_bits` exceeds the width of `T`, or there are more bins
    /// than distinct significant values.
    pub fn with_bins<T: IntegerSample>(significant_bits: u32, n_bins: usize) -> Result<Self> {
        if !n_bins.is_power_of_two() {
            return Err(Error::InvalidParameter(format!(
                "direct histograms need a power of two bin count, got {n_bins}"
            )));
        }
        let bin_bits = n_bins.trailing_zeros();
        if significant_bits > T::BITS || significant_bits < bin_bits {
            return Err(Error::InvalidParameter(format!(
                "{n_bins} bins cannot map {significant_bits} significant bits of {}",
                T::ELEMENT_TYPE
            )));
        }
        Ok(Self {
            shift: significant_bits - bin_bits,
            n_bins,
        })
    }

    #[inline]
    pub fn shift(&self) -> u32 {
        self.shift
    }

    #[inline]
    pub fn n_bins(&self) -> usize {
        self.n_bins
    }
}

impl<T: IntegerSample> BinMap<T> for DirectMapping {
    #[inline]
    fn bin(&self, value: T) -> Option<usize> {
        // Values above the declared depth land in the top bin
        Some(value.shifted_index(self.shift).min(self.n_bins - 1))
    }

    #[inline]
    fn output_len(&self) -> usize {
        self.n_bins
    }
}

/// Where a sample falls relative to a histogram range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Below,
    Bin(usize),
    Above,
    /// NaN compares unordered with every bound
    Unordered,
}

/// Proportional placement of `[min, max]` into `n_bins` bins
///
/// In-range values map to `floor((value - min) * n_bins / (max - min))`.
/// `max` itself, and anything rounding up to `n_bins`, lands in the last bin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangedMapping<T> {
    min: T,
    max: T,
    min_f: f64,
    factor: f64,
    last: usize,
}

impl<T: Sample> RangedMapping<T> {
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `n_bins` is zero, or the bounds
    /// are reversed or unordered (NaN).
    pub fn new(min: T, max: T, n_bins: usize) -> Result<Self> {
        if n_bins == 0 {
            return Err(Error::InvalidParameter(
                "ranged histograms need at least one bin".to_string(),
            ));
        }
        // Written as a negation so NaN bounds are rejected too
        if !(min <= max) {
            return Err(Error::InvalidParameter(format!(
                "histogram range [{min:?}, {max:?}] is empty or unordered"
            )));
        }
        let min_f = min.as_f64();
        Ok(Self {
            min,
            max,
            min_f,
            factor: n_bins as f64 / (max.as_f64() - min_f),
            last: n_bins - 1,
        })
    }

    #[inline]
    pub fn range(&self) -> (T, T) {
        (self.min, self.max)
    }

    #[inline]
    pub fn n_bins(&self) -> usize {
        self.last + 1
    }

    /// Locate `value` against the range
    #[inline]
    pub fn place(&self, value: T) -> Placement {
        if value < self.min {
            Placement::Below
        } else if value > self.max {
            Placement::Above
        } else if value >= self.max {
            Placement::Bin(self.last)
        } else if value >= self.min {
            let bin = ((value.as_f64() - self.min_f) * self.factor) as usize;
            Placement::Bin(bin.min(self.last))
        } else {
            Placement::Unordered
        }
    }

    /// The same range with underflow and overflow bins around it
    pub fn with_overflow(self) -> OverflowMapping<T> {
        OverflowMapping(self)
    }
}

impl<T: Sample> BinMap<T> for RangedMapping<T> {
    #[inline]
    fn bin(&self, value: T) -> Option<usize> {
        match self.place(value) {
            Placement::Bin(bin) => Some(bin),
            _ => None,
        }
    }

    #[inline]
    fn output_len(&self) -> usize {
        self.n_bins()
    }
}

/// Ranged mapping over `n + 2` bins: 0 counts values below the range,
/// `1..=n` are the regular bins and `n + 1` counts values above it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverflowMapping<T>(RangedMapping<T>);

impl<T: Sample> BinMap<T> for OverflowMapping<T> {
    #[inline]
    fn bin(&self, value: T) -> Option<usize> {
        match self.0.place(value) {
            Placement::Below => Some(0),
            Placement::Bin(bin) => Some(bin + 1),
            Placement::Above => Some(self.0.last + 2),
            Placement::Unordered => None,
        }
    }

    #[inline]
    fn output_len(&self) -> usize {
        self.0.n_bins() + 2
    }
}
