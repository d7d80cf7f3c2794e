//! Histogram accumulation kernels
//!
//! Every kernel validates its region and output length first, then makes one
//! pass over the selected pixels. Counts are added to whatever the output
//! already holds, so callers zero it beforehand.

use crate::config::OverflowBins;
use crate::mapping::{DirectMapping, RangedMapping};
use crate::traits::BinMap;
use crate::types::HistogramBins;
use ndimage_core::{Error, Extrema, IntegerSample, Region, Result, Sample, StridedImage};

/// Count every selected pixel `map` assigns a bin to
#[inline]
pub fn accumulate<T, M>(
    image: &StridedImage<'_, T>,
    region: &Region<'_>,
    bins: &mut HistogramBins<'_>,
    map: &M,
) -> Result<()>
where
    T: Sample,
    M: BinMap<T>,
{
    region.validate_for(image)?;
    if bins.len() != map.output_len() {
        return Err(Error::exact_length("hist", map.output_len(), bins.len()));
    }
    region.for_each(image, |v| {
        if let Some(bin) = map.bin(v) {
            bins.increment(bin);
        }
    });
    Ok(())
}

/// Direct-mapped histogram and extrema of an integer image in one pass.
///
/// Returns `Ok(None)` and leaves `bins` untouched when the region selects no
/// pixels.
///
/// # Errors
///
/// Returns [`Error::Length`] if `bins` does not hold exactly
/// `mapping.n_bins()` bins, or [`Error::InvalidMask`] if `region` does not fit
/// `image`.
///
/// # Example
///
/// ```
/// use ndimage_core::{Region, StridedImage};
/// use ndimage_histogram::{hist_min_max, DirectMapping, HistogramBins, SourceDepth};
///
/// let data = [10u8, 250, 10, 0, 10, 255];
/// let image = StridedImage::from_slice(&data, 2, 3).unwrap();
/// let mut counts = vec![0u32; 256];
/// let mapping = DirectMapping::for_sample::<u8>(SourceDepth::Full).unwrap();
///
/// let extrema = hist_min_max(
///     &image,
///     &Region::Full,
///     &mut HistogramBins::from_slice(&mut counts),
///     mapping,
/// )
/// .unwrap()
/// .unwrap();
///
/// assert_eq!(extrema.as_array(), [0, 255]);
/// assert_eq!(counts[10], 3);
/// ```
pub fn hist_min_max<T: IntegerSample>(
    image: &StridedImage<'_, T>,
    region: &Region<'_>,
    bins: &mut HistogramBins<'_>,
    mapping: DirectMapping,
) -> Result<Option<Extrema<T>>> {
    region.validate_for(image)?;
    if bins.len() != mapping.n_bins() {
        return Err(Error::exact_length("hist", mapping.n_bins(), bins.len()));
    }
    let Some(first) = region.first(image) else {
        return Ok(None);
    };
    let mut extrema = Extrema::seeded(first);
    region.for_each(image, |v| {
        extrema.update(v);
        if let Some(bin) = mapping.bin(v) {
            bins.increment(bin);
        }
    });
    Ok(Some(extrema))
}

/// Proportionally mapped histogram of `[range.0, range.1]`.
///
/// With [`OverflowBins::Excluded`] all of `bins` are regular bins; with
/// [`OverflowBins::Counted`] the first and last entries count values below and
/// above the range and the regular bins sit between them.
///
/// # Errors
///
/// Returns [`Error::Length`] if `bins` is too short for at least one regular
/// bin, [`Error::InvalidParameter`] for a reversed or NaN range, or
/// [`Error::InvalidMask`] if `region` does not fit `image`.
pub fn ranged_hist<T: Sample>(
    image: &StridedImage<'_, T>,
    region: &Region<'_>,
    bins: &mut HistogramBins<'_>,
    range: (T, T),
    overflow: OverflowBins,
) -> Result<()> {
    if bins.len() < overflow.min_len() {
        return Err(Error::min_length("hist", overflow.min_len(), bins.len()));
    }
    let mapping = RangedMapping::new(range.0, range.1, bins.len() - overflow.extra_bins())?;
    match overflow {
        OverflowBins::Excluded => accumulate(image, region, bins, &mapping),
        OverflowBins::Counted => accumulate(image, region, bins, &mapping.with_overflow()),
    }
}
