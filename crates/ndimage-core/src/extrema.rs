//! Minimum and maximum over a selected region

use crate::error::Result;
use crate::numeric::Sample;
use crate::scan::Region;
use crate::strided::StridedImage;

/// Smallest and largest value seen by a scan
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extrema<T> {
    pub min: T,
    pub max: T,
}

impl<T: Sample> Extrema<T> {
    /// Extrema of a single value
    #[inline]
    pub fn seeded(value: T) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    /// Fold one more value in.
    ///
    /// A value can only lower the minimum or raise the maximum, never both.
    /// Unordered values (NaN) compare false against everything and are ignored
    /// unless they were the seed.
    #[inline]
    pub fn update(&mut self, value: T) {
        if value < self.min {
            self.min = value;
        } else if value > self.max {
            self.max = value;
        }
    }

    /// `[min, max]`
    #[inline]
    pub fn as_array(&self) -> [T; 2] {
        [self.min, self.max]
    }
}

/// Minimum and maximum of the elements `region` selects from `image`.
///
/// Returns `Ok(None)` when the region selects no elements.
///
/// # Errors
///
/// Returns [`Error::InvalidMask`](crate::Error::InvalidMask) if `region` does
/// not fit `image`.
///
/// # Example
///
/// ```
/// use ndimage_core::{min_max, Region, StridedImage};
///
/// let data = [10u8, 250, 10, 0, 10, 255];
/// let image = StridedImage::from_slice(&data, 2, 3).unwrap();
/// let extrema = min_max(&image, &Region::Full).unwrap().unwrap();
/// assert_eq!((extrema.min, extrema.max), (0, 255));
/// ```
pub fn min_max<T: Sample>(
    image: &StridedImage<'_, T>,
    region: &Region<'_>,
) -> Result<Option<Extrema<T>>> {
    region.validate_for(image)?;
    let Some(first) = region.first(image) else {
        return Ok(None);
    };
    let mut extrema = Extrema::seeded(first);
    region.for_each(image, |v| extrema.update(v));
    Ok(Some(extrema))
}
