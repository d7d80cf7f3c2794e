//! Region selection and scanning
//!
//! [`Region`] decides which elements of a [`StridedImage`] a statistic looks
//! at. All kernels visit the selected elements through [`Region::try_for_each`]
//! in row-major order, so unmasked, row-window and bitmap-masked statistics
//! share a single traversal.

use crate::error::{Error, Result};
use crate::mask::MaskWindows;
use crate::strided::StridedImage;
use std::ops::ControlFlow;

/// Elements of an image selected for a statistic
#[derive(Debug, Clone, Copy, Default)]
pub enum Region<'a> {
    /// Every element
    #[default]
    Full,
    /// Columns `starts[r]..ends[r]` of every row `r`
    Windows(MaskWindows<'a>),
    /// Elements whose nearest bitmap cell is nonzero.
    ///
    /// The bitmap may be smaller or larger than the image; image position
    /// (r, c) samples bitmap cell `(r * mask_rows / rows, c * mask_cols / cols)`.
    Bitmap(StridedImage<'a, u8>),
}

impl<'a> Region<'a> {
    /// Check this region can be applied to `image`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMask`] if row windows do not match the image
    /// shape, or a bitmap is empty while the image is not.
    pub fn validate_for<T: Copy>(&self, image: &StridedImage<'_, T>) -> Result<()> {
        match self {
            Region::Full => Ok(()),
            Region::Windows(windows) => windows.validate_for(image.rows(), image.cols()),
            Region::Bitmap(bitmap) => {
                if bitmap.is_empty() && !image.is_empty() {
                    Err(Error::InvalidMask(format!(
                        "an empty {}x{} bitmap cannot mask a {}x{} image",
                        bitmap.rows(),
                        bitmap.cols(),
                        image.rows(),
                        image.cols()
                    )))
                } else {
                    Ok(())
                }
            }
        }
    }

    /// Visit every selected element in row-major order, stopping early when
    /// `f` breaks.
    ///
    /// The region must already have passed [`Self::validate_for`] against
    /// `image`.
    pub fn try_for_each<T, B, F>(&self, image: &StridedImage<'_, T>, mut f: F) -> ControlFlow<B>
    where
        T: Copy,
        F: FnMut(T) -> ControlFlow<B>,
    {
        match self {
            Region::Full => {
                let cols = image.cols();
                for row in 0..image.rows() {
                    scan_span(image, row, 0..cols, &mut f)?;
                }
            }
            Region::Windows(windows) => {
                for (row, span) in windows.iter().enumerate() {
                    scan_span(image, row, span, &mut f)?;
                }
            }
            Region::Bitmap(bitmap) => {
                let (rows, cols) = image.shape();
                let (mask_rows, mask_cols) = bitmap.shape();
                for row in 0..rows {
                    let mask_row = nearest(row, rows, mask_rows);
                    for col in 0..cols {
                        if bitmap.at(mask_row, nearest(col, cols, mask_cols)) != 0 {
                            f(image.at(row, col))?;
                        }
                    }
                }
            }
        }
        ControlFlow::Continue(())
    }

    /// Visit every selected element in row-major order
    #[inline]
    pub fn for_each<T, F>(&self, image: &StridedImage<'_, T>, mut f: F)
    where
        T: Copy,
        F: FnMut(T),
    {
        let _ = self.try_for_each::<T, (), _>(image, |v| {
            f(v);
            ControlFlow::Continue(())
        });
    }

    /// First selected element in row-major order
    pub fn first<T: Copy>(&self, image: &StridedImage<'_, T>) -> Option<T> {
        match self.try_for_each(image, ControlFlow::Break) {
            ControlFlow::Break(v) => Some(v),
            ControlFlow::Continue(()) => None,
        }
    }

    /// Number of selected elements
    pub fn count<T: Copy>(&self, image: &StridedImage<'_, T>) -> usize {
        match self {
            Region::Full => image.len(),
            Region::Windows(windows) => windows.selected_count(),
            Region::Bitmap(_) => {
                let mut n = 0;
                self.for_each(image, |_| n += 1);
                n
            }
        }
    }
}

#[inline]
fn scan_span<T, B, F>(
    image: &StridedImage<'_, T>,
    row: usize,
    span: std::ops::Range<usize>,
    f: &mut F,
) -> ControlFlow<B>
where
    T: Copy,
    F: FnMut(T) -> ControlFlow<B>,
{
    match image.row_slice(row, span.clone()) {
        Some(values) => values.iter().try_for_each(|&v| f(v)),
        None => image.row_span(row, span).try_for_each(f),
    }
}

/// Nearest-neighbour index of `i` out of `n` in an axis of length `m`
#[inline]
fn nearest(i: usize, n: usize, m: usize) -> usize {
    (i as u64 * m as u64 / n as u64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATA: [u8; 6] = [10, 250, 10, 0, 10, 255];

    fn image() -> StridedImage<'static, u8> {
        StridedImage::from_slice(&DATA, 2, 3).unwrap()
    }

    fn collect(region: &Region<'_>, image: &StridedImage<'_, u8>) -> Vec<u8> {
        let mut out = Vec::new();
        region.for_each(image, |v| out.push(v));
        out
    }

    #[test]
    fn test_full_region() {
        let image = image();
        assert_eq!(collect(&Region::Full, &image), DATA.to_vec());
        assert_eq!(Region::Full.count(&image), 6);
        assert_eq!(Region::Full.first(&image), Some(10));
    }

    #[test]
    fn test_window_region() {
        let image = image();
        let starts = [1, 0];
        let ends = [3, 0];
        let region = Region::Windows(MaskWindows::new(&starts, &ends).unwrap());
        region.validate_for(&image).unwrap();
        assert_eq!(collect(&region, &image), vec![250, 10]);
        assert_eq!(region.count(&image), 2);
        assert_eq!(region.first(&image), Some(250));
    }

    #[test]
    fn test_first_skips_empty_leading_rows() {
        let image = image();
        let starts = [2, 0];
        let ends = [2, 1];
        let region = Region::Windows(MaskWindows::new(&starts, &ends).unwrap());
        assert_eq!(region.first(&image), Some(0));
    }

    #[test]
    fn test_empty_windows_select_nothing() {
        let image = image();
        let starts = [0, 3];
        let ends = [0, 3];
        let region = Region::Windows(MaskWindows::new(&starts, &ends).unwrap());
        assert_eq!(region.first(&image), None);
        assert_eq!(region.count(&image), 0);
    }

    #[test]
    fn test_window_validation() {
        let image = image();
        let starts = [0];
        let ends = [1];
        let region = Region::Windows(MaskWindows::new(&starts, &ends).unwrap());
        assert!(matches!(region.validate_for(&image), Err(Error::InvalidMask(_))));
    }

    #[test]
    fn test_bitmap_same_shape() {
        let image = image();
        let bits = [1u8, 0, 1, 0, 0, 7];
        let bitmap = StridedImage::from_slice(&bits, 2, 3).unwrap();
        let region = Region::Bitmap(bitmap);
        region.validate_for(&image).unwrap();
        assert_eq!(collect(&region, &image), vec![10, 10, 255]);
    }

    #[test]
    fn test_bitmap_resampled() {
        let data: Vec<u16> = (0..16).collect();
        let image = StridedImage::from_slice(&data, 4, 4).unwrap();
        // A 2x2 bitmap selecting only its upper-left cell covers the upper-left quadrant
        let bits = [1u8, 0, 0, 0];
        let bitmap = StridedImage::from_slice(&bits, 2, 2).unwrap();
        let region = Region::Bitmap(bitmap);
        let mut out = Vec::new();
        region.for_each(&image, |v| out.push(v));
        assert_eq!(out, vec![0, 1, 4, 5]);
    }

    #[test]
    fn test_empty_bitmap_rejected() {
        let image = image();
        let bits: [u8; 0] = [];
        let bitmap = StridedImage::from_slice(&bits, 0, 0).unwrap();
        assert!(Region::Bitmap(bitmap).validate_for(&image).is_err());
    }

    #[test]
    fn test_transposed_scan_order() {
        let image = image().transposed();
        assert_eq!(collect(&Region::Full, &image), vec![10, 0, 250, 10, 10, 255]);
    }
}
