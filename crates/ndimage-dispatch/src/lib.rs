//! Validated statistics over untyped image buffers
//!
//! This crate is the entry point for callers that hold raw buffers rather
//! than typed slices: a display pipeline handing over whatever pixel format
//! the camera produced. Each operation checks dimensionality, lengths,
//! element types and layout up front, selects the sample type at runtime, and
//! runs the monomorphized kernels from `ndimage-core` and `ndimage-histogram`.
//!
//! | Operation | Output |
//! |---|---|
//! | [`min_max`] / [`masked_min_max`] | `[min, max]` in the image's element type |
//! | [`ranged_hist`] / [`masked_ranged_hist`] | proportional histogram of a value range |
//! | [`hist_min_max`] / [`masked_hist_min_max`] | direct histogram plus extrema |
//!
//! # Example
//!
//! ```rust
//! use ndimage_dispatch::{hist_min_max, Buffer, BufferMut};
//!
//! let pixels = [10u8, 250, 10, 0, 10, 255];
//! let im = Buffer::from_slice(&pixels, &[2, 3]).unwrap();
//!
//! let mut counts = vec![0u32; 256];
//! let mut extrema = [0u8; 2];
//! hist_min_max(
//!     &im,
//!     &mut BufferMut::from_slice(&mut counts, &[256]).unwrap(),
//!     &mut BufferMut::from_slice(&mut extrema, &[2]).unwrap(),
//!     false,
//! )
//! .unwrap();
//!
//! assert_eq!(extrema, [0, 255]);
//! assert_eq!(counts[10], 3);
//! ```

pub mod api;
pub mod buffer;
pub mod dispatch;
pub mod mask;

pub use api::{
    hist_min_max, masked_hist_min_max, masked_min_max, masked_ranged_hist, min_max, ranged_hist,
};
pub use buffer::{Buffer, BufferMut, MAX_NDIM};
pub use mask::Mask;

pub use ndimage_core::{ElementType, Error, MaskWindows, Result};
