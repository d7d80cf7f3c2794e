//! Core types for image statistics over strided 2-D buffers
//!
//! This crate provides the typed foundation the histogram and dispatch crates
//! build on:
//!
//! 1. **Samples** - [`Sample`] and [`IntegerSample`] close the set of element
//!    types over `u8`, `u16`, `u32`, `u64`, `f32` and `f64`
//! 2. **Views** - [`StridedImage`] borrows arbitrarily strided 2-D data with
//!    its bounds checked once up front
//! 3. **Regions** - [`Region`] selects everything, per-row column windows, or
//!    a nearest-neighbour resampled bitmap
//! 4. **Extrema** - [`min_max`] reduces a region to its smallest and largest
//!    value
//!
//! # Example
//!
//! ```rust
//! use ndimage_core::{min_max, MaskWindows, Region, StridedImage};
//!
//! let data = [10u8, 250, 10, 0, 10, 255];
//! let image = StridedImage::from_slice(&data, 2, 3).unwrap();
//!
//! let starts = [1, 0];
//! let ends = [3, 0];
//! let region = Region::Windows(MaskWindows::new(&starts, &ends).unwrap());
//!
//! let extrema = min_max(&image, &region).unwrap().unwrap();
//! assert_eq!(extrema.as_array(), [10, 250]);
//! ```

pub mod element;
pub mod error;
pub mod extrema;
pub mod mask;
pub mod numeric;
pub mod scan;
pub mod strided;

pub use element::ElementType;
pub use error::{Error, Result};
pub use extrema::{min_max, Extrema};
pub use mask::MaskWindows;
pub use numeric::{IntegerSample, Sample};
pub use scan::Region;
pub use strided::{RowSpan, StridedImage};
