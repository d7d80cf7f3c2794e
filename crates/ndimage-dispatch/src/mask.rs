//! Mask arguments for the masked operations

use crate::buffer::Buffer;
use ndimage_core::{ElementType, MaskWindows, Region, Result};

/// Pixel selection for a masked statistic
#[derive(Debug, Clone, Copy)]
pub enum Mask<'a> {
    /// Per-row `[start, end)` column windows
    Windows(MaskWindows<'a>),
    /// 2-D `uint8` (or bool) bitmap; nonzero selects
    Image(Buffer<'a>),
}

impl<'a> Mask<'a> {
    /// Typed region for this mask.
    ///
    /// # Errors
    ///
    /// Fails if a bitmap mask is not a 2-D `uint8` buffer.
    pub fn region(&self) -> Result<Region<'a>> {
        match self {
            Mask::Windows(windows) => Ok(Region::Windows(*windows)),
            Mask::Image(buffer) => {
                buffer.expect_ndim("mask", 2)?;
                buffer.expect_type("mask", ElementType::U8)?;
                Ok(Region::Bitmap(buffer.image::<u8>("mask")?))
            }
        }
    }
}

impl<'a> From<MaskWindows<'a>> for Mask<'a> {
    fn from(windows: MaskWindows<'a>) -> Self {
        Mask::Windows(windows)
    }
}
