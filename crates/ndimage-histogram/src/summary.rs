//! One-call display histogram
//!
//! [`image_histogram`] picks the histogram a viewer wants for an image: a
//! direct histogram over the source bit depth for integer images with no
//! explicit range, otherwise a ranged histogram whose missing bounds come from
//! the data (floats) or the source depth (integers).

use crate::config::{HistogramOptions, OverflowBins};
use crate::mapping::{canonical_bin_count, DirectMapping};
use crate::ops::{hist_min_max, ranged_hist};
use crate::types::{HistogramBins, ImageHistogram};
use ndimage_core::{min_max, Error, IntegerSample, Region, Result, Sample, StridedImage};
use num_traits::{Bounded, NumCast};

/// Samples [`image_histogram`] knows how to summarize
pub trait HistogramSample: Sample {
    fn summarize(
        image: &StridedImage<'_, Self>,
        region: &Region<'_>,
        options: &HistogramOptions<Self>,
    ) -> Result<ImageHistogram<Self>>;
}

macro_rules! impl_histogram_sample {
    ($summary:ident: $($t:ty),*) => {$(
        impl HistogramSample for $t {
            #[inline]
            fn summarize(
                image: &StridedImage<'_, Self>,
                region: &Region<'_>,
                options: &HistogramOptions<Self>,
            ) -> Result<ImageHistogram<Self>> {
                $summary(image, region, options)
            }
        }
    )*};
}

impl_histogram_sample!(integer_summary: u8, u16, u32, u64);
impl_histogram_sample!(float_summary: f32, f64);

/// Extrema and histogram of the pixels `region` selects from `image`.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] for a zero or (direct mode) non power
/// of two bin count, a source depth wider than the type, or a reversed range.
///
/// # Example
///
/// ```
/// use ndimage_core::{Region, StridedImage};
/// use ndimage_histogram::{image_histogram, HistogramOptions};
///
/// let data = [0u16, 64, 65535, 128];
/// let image = StridedImage::from_slice(&data, 2, 2).unwrap();
/// let summary = image_histogram(&image, &Region::Full, &HistogramOptions::default()).unwrap();
///
/// assert_eq!(summary.len(), 1024);
/// assert_eq!(&summary.counts[..3], &[1, 1, 1]);
/// assert_eq!(summary.counts[1023], 1);
/// ```
pub fn image_histogram<T: HistogramSample>(
    image: &StridedImage<'_, T>,
    region: &Region<'_>,
    options: &HistogramOptions<T>,
) -> Result<ImageHistogram<T>> {
    T::summarize(image, region, options)
}

fn integer_summary<T: IntegerSample>(
    image: &StridedImage<'_, T>,
    region: &Region<'_>,
    options: &HistogramOptions<T>,
) -> Result<ImageHistogram<T>> {
    let n_bins = options
        .n_bins
        .unwrap_or_else(|| canonical_bin_count(T::ELEMENT_TYPE));
    let bits = options.source_bits.unwrap_or(T::BITS);
    let depth_max = depth_max::<T>(bits)?;
    let mut counts = vec![0u32; n_bins];

    match options.range {
        (None, None) => {
            let mapping = DirectMapping::with_bins::<T>(bits, n_bins)?;
            let extrema =
                hist_min_max(image, region, &mut HistogramBins::from_slice(&mut counts), mapping)?;
            Ok(ImageHistogram {
                extrema,
                range: Some((<T as Bounded>::min_value(), depth_max)),
                counts,
            })
        }
        (lo, hi) => {
            let range = (lo.unwrap_or_else(<T as Bounded>::min_value), hi.unwrap_or(depth_max));
            let extrema = min_max(image, region)?;
            ranged_hist(
                image,
                region,
                &mut HistogramBins::from_slice(&mut counts),
                range,
                OverflowBins::Excluded,
            )?;
            Ok(ImageHistogram {
                extrema,
                range: Some(range),
                counts,
            })
        }
    }
}

fn float_summary<T: Sample>(
    image: &StridedImage<'_, T>,
    region: &Region<'_>,
    options: &HistogramOptions<T>,
) -> Result<ImageHistogram<T>> {
    let n_bins = options
        .n_bins
        .unwrap_or_else(|| canonical_bin_count(T::ELEMENT_TYPE));
    let extrema = min_max(image, region)?;
    let lo = options.range.0.or(extrema.map(|e| e.min));
    let hi = options.range.1.or(extrema.map(|e| e.max));
    let mut counts = vec![0u32; n_bins];

    // Without pixels there is nothing to default a missing bound from
    let range = match (lo, hi) {
        (Some(lo), Some(hi)) => {
            ranged_hist(
                image,
                region,
                &mut HistogramBins::from_slice(&mut counts),
                (lo, hi),
                OverflowBins::Excluded,
            )?;
            Some((lo, hi))
        }
        _ => None,
    };
    Ok(ImageHistogram {
        extrema,
        range,
        counts,
    })
}

/// Largest value representable in `bits` significant bits of `T`
fn depth_max<T: IntegerSample>(bits: u32) -> Result<T> {
    if bits == 0 || bits > T::BITS {
        return Err(Error::InvalidParameter(format!(
            "{bits} significant bits is not a valid depth for {}",
            T::ELEMENT_TYPE
        )));
    }
    let max = u64::MAX >> (64 - bits);
    Ok(<T as NumCast>::from(max).unwrap_or_else(<T as Bounded>::max_value))
}
