//! Buffer-level statistics operations
//!
//! Each operation validates every argument before it touches an output, picks
//! the sample type from the image's element type, and delegates to the typed
//! kernels. Rejected calls are logged at debug level and return the error;
//! outputs are left exactly as they were.

use crate::buffer::{Buffer, BufferMut};
use crate::mask::Mask;
use ndimage_core::{ElementType, Error, Region, Result, Sample};
use ndimage_histogram::{DirectMapping, OverflowBins, SourceDepth};
use tracing::{debug, instrument, trace};

/// Store the minimum and maximum of `im` into the 2-element `min_max`.
///
/// An image with no pixels leaves `min_max` untouched.
///
/// # Errors
///
/// Fails if `im` is not 2-D, `min_max` is not a 1-D buffer of exactly two
/// elements of the image's element type, or either layout is unusable.
#[instrument(level = "trace", skip_all, fields(element_type = %im.element_type(), shape = ?im.shape()))]
pub fn min_max(im: &Buffer<'_>, min_max: &mut BufferMut<'_>) -> Result<()> {
    logged("min_max", extrema_call(im, None, min_max))
}

/// Store the minimum and maximum of the pixels `mask` selects from `im`.
///
/// A mask selecting no pixels leaves `min_max` untouched.
///
/// # Errors
///
/// As [`min_max`], plus a bitmap mask must be 2-D `uint8` and row windows
/// must match the image.
#[instrument(level = "trace", skip_all, fields(element_type = %im.element_type(), shape = ?im.shape()))]
pub fn masked_min_max(im: &Buffer<'_>, mask: &Mask<'_>, min_max: &mut BufferMut<'_>) -> Result<()> {
    logged("masked_min_max", extrema_call(im, Some(mask), min_max))
}

/// Accumulate a histogram of `im` over `[range[0], range[1]]` into `hist`.
///
/// With `with_overflow_bins`, `hist[0]` counts values below the range and the
/// last entry values above it; the regular bins sit between them.
///
/// # Errors
///
/// Fails if `im` is not 2-D, `range` is not 2 elements of the image's element
/// type, `hist` is not 1-D `uint32` with room for a regular bin, or the range
/// is reversed.
#[instrument(
    level = "trace",
    skip_all,
    fields(element_type = %im.element_type(), shape = ?im.shape(), with_overflow_bins = with_overflow_bins)
)]
pub fn ranged_hist(
    im: &Buffer<'_>,
    range: &Buffer<'_>,
    hist: &mut BufferMut<'_>,
    with_overflow_bins: bool,
) -> Result<()> {
    logged("ranged_hist", ranged_call(im, None, range, hist, with_overflow_bins))
}

/// [`ranged_hist`] restricted to the pixels `mask` selects
#[instrument(
    level = "trace",
    skip_all,
    fields(element_type = %im.element_type(), shape = ?im.shape(), with_overflow_bins = with_overflow_bins)
)]
pub fn masked_ranged_hist(
    im: &Buffer<'_>,
    mask: &Mask<'_>,
    range: &Buffer<'_>,
    hist: &mut BufferMut<'_>,
    with_overflow_bins: bool,
) -> Result<()> {
    logged(
        "masked_ranged_hist",
        ranged_call(im, Some(mask), range, hist, with_overflow_bins),
    )
}

/// Accumulate a direct histogram of an integer image into `hist` and store its
/// extrema into `min_max`, in one pass.
///
/// `hist` must hold 256 bins for `uint8` images and 1024 otherwise.
/// `is_twelve_bit` declares `uint16` data with 12 significant bits.
///
/// # Errors
///
/// Fails for floating point images, `is_twelve_bit` with anything but
/// `uint16`, a wrong histogram length, or any of the conditions listed on
/// [`min_max`].
#[instrument(
    level = "trace",
    skip_all,
    fields(element_type = %im.element_type(), shape = ?im.shape(), is_twelve_bit = is_twelve_bit)
)]
pub fn hist_min_max(
    im: &Buffer<'_>,
    hist: &mut BufferMut<'_>,
    min_max: &mut BufferMut<'_>,
    is_twelve_bit: bool,
) -> Result<()> {
    logged("hist_min_max", direct_call(im, None, hist, min_max, is_twelve_bit))
}

/// [`hist_min_max`] restricted to the pixels `mask` selects
#[instrument(
    level = "trace",
    skip_all,
    fields(element_type = %im.element_type(), shape = ?im.shape(), is_twelve_bit = is_twelve_bit)
)]
pub fn masked_hist_min_max(
    im: &Buffer<'_>,
    mask: &Mask<'_>,
    hist: &mut BufferMut<'_>,
    min_max: &mut BufferMut<'_>,
    is_twelve_bit: bool,
) -> Result<()> {
    logged(
        "masked_hist_min_max",
        direct_call(im, Some(mask), hist, min_max, is_twelve_bit),
    )
}

fn logged(op: &'static str, result: Result<()>) -> Result<()> {
    if let Err(error) = &result {
        debug!(op, %error, "rejected statistics call");
    }
    result
}

/// Region for an optional mask, checked against the image shape
fn region_for<'m, T: Sample>(
    mask: Option<&Mask<'m>>,
    image: &ndimage_core::StridedImage<'_, T>,
) -> Result<Region<'m>> {
    let region = match mask {
        Some(mask) => mask.region()?,
        None => Region::Full,
    };
    region.validate_for(image)?;
    Ok(region)
}

fn check_extrema_output(im: &Buffer<'_>, min_max: &BufferMut<'_>) -> Result<()> {
    min_max.expect_ndim("min_max", 1)?;
    if min_max.len() != 2 {
        return Err(Error::exact_length("min_max", 2, min_max.len()));
    }
    if min_max.element_type() != im.element_type() {
        return Err(Error::type_mismatch(
            "im",
            im.element_type(),
            "min_max",
            min_max.element_type(),
        ));
    }
    Ok(())
}

fn check_histogram_output(hist: &BufferMut<'_>) -> Result<()> {
    hist.expect_ndim("hist", 1)?;
    hist.expect_type("hist", ElementType::U32)
}

fn extrema_call(im: &Buffer<'_>, mask: Option<&Mask<'_>>, out: &mut BufferMut<'_>) -> Result<()> {
    im.expect_ndim("im", 2)?;
    check_extrema_output(im, out)?;
    crate::dispatch_element_type!(im.element_type(), T => {
        let image = im.image::<T>("im")?;
        let region = region_for(mask, &image)?;
        match ndimage_core::min_max(&image, &region)? {
            Some(extrema) => out.store::<T>("min_max", &extrema.as_array()),
            None => {
                trace!("no pixels selected, min_max left unchanged");
                Ok(())
            }
        }
    })
}

fn ranged_call(
    im: &Buffer<'_>,
    mask: Option<&Mask<'_>>,
    range: &Buffer<'_>,
    hist: &mut BufferMut<'_>,
    with_overflow_bins: bool,
) -> Result<()> {
    im.expect_ndim("im", 2)?;
    if range.element_type() != im.element_type() {
        return Err(Error::type_mismatch(
            "im",
            im.element_type(),
            "range",
            range.element_type(),
        ));
    }
    range.expect_ndim("range", 1)?;
    if range.len() != 2 {
        return Err(Error::exact_length("range", 2, range.len()));
    }
    check_histogram_output(hist)?;
    let overflow = OverflowBins::from_flag(with_overflow_bins);
    if hist.len() < overflow.min_len() {
        return Err(Error::min_length("hist", overflow.min_len(), hist.len()));
    }

    crate::dispatch_element_type!(im.element_type(), T => {
        let image = im.image::<T>("im")?;
        let bounds = range.vector::<T>("range")?;
        let region = region_for(mask, &image)?;
        let (Some(lo), Some(hi)) = (bounds.get(0, 0), bounds.get(0, 1)) else {
            return Err(Error::exact_length("range", 2, range.len()));
        };
        let mut bins = hist.histogram_bins("hist")?;
        ndimage_histogram::ranged_hist(&image, &region, &mut bins, (lo, hi), overflow)
    })
}

fn direct_call(
    im: &Buffer<'_>,
    mask: Option<&Mask<'_>>,
    hist: &mut BufferMut<'_>,
    min_max: &mut BufferMut<'_>,
    is_twelve_bit: bool,
) -> Result<()> {
    im.expect_ndim("im", 2)?;
    check_histogram_output(hist)?;
    check_extrema_output(im, min_max)?;
    let depth = SourceDepth::from_twelve_bit_flag(is_twelve_bit);

    crate::dispatch_integer_type!(im.element_type(), T => {
        let mapping = DirectMapping::for_sample::<T>(depth)?;
        if hist.len() != mapping.n_bins() {
            return Err(Error::exact_length("hist", mapping.n_bins(), hist.len()));
        }
        let image = im.image::<T>("im")?;
        let region = region_for(mask, &image)?;
        // Fail before the scan writes any bins
        min_max.check_writable::<T>("min_max")?;
        let extrema = {
            let mut bins = hist.histogram_bins("hist")?;
            ndimage_histogram::hist_min_max(&image, &region, &mut bins, mapping)?
        };
        match extrema {
            Some(extrema) => min_max.store::<T>("min_max", &extrema.as_array()),
            None => {
                trace!("no pixels selected, min_max left unchanged");
                Ok(())
            }
        }
    }, _ => Err(Error::UnsupportedType(format!(
        "only uint8, uint16, uint32, and uint64 im buffers are supported, got {}",
        im.element_type()
    ))))
}
