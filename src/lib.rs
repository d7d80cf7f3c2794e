//! Extrema and intensity histograms over strided 2-D image buffers
//!
//! `ndimage-stats` computes the statistics an image viewer needs every frame
//! to scale a display: the minimum and maximum of an image, and its intensity
//! histogram, optionally restricted to a region of interest. It reads pixel
//! data in place, whatever the strides, for `u8`, `u16`, `u32`, `u64`, `f32`
//! and `f64` images.
//!
//! The workspace is split into three crates, all re-exported here:
//!
//! - [`ndimage_core`]: strided views, mask regions and extrema
//! - [`ndimage_histogram`]: direct and ranged histogram kernels
//! - [`ndimage_dispatch`]: validated operations over untyped buffers
//!
//! # Example
//!
//! ```rust
//! use ndimage_stats::prelude::*;
//!
//! let pixels = [10u8, 250, 10, 0, 10, 255];
//! let image = StridedImage::from_slice(&pixels, 2, 3).unwrap();
//!
//! let summary = image_histogram(&image, &Region::Full, &HistogramOptions::default()).unwrap();
//! assert_eq!(summary.extrema.unwrap().as_array(), [0, 255]);
//! assert_eq!(summary.counts[10], 3);
//! ```

pub use ndimage_core;
pub use ndimage_dispatch;
pub use ndimage_histogram;

pub use ndimage_core::{Error, Result};

/// Commonly used types and operations
pub mod prelude {
    pub use ndimage_core::{
        min_max, ElementType, Error, Extrema, IntegerSample, MaskWindows, Region, Result, Sample,
        StridedImage,
    };
    pub use ndimage_dispatch::{Buffer, BufferMut, Mask};
    pub use ndimage_histogram::{
        hist_min_max, image_histogram, ranged_hist, DirectMapping, HistogramBins,
        HistogramOptions, ImageHistogram, OverflowBins, RangedMapping, SourceDepth,
    };
}
