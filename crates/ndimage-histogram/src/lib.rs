//! Intensity histograms over strided image views
//!
//! This crate accumulates `u32` bin counts for the pixels a
//! [`Region`](ndimage_core::Region) selects from a
//! [`StridedImage`](ndimage_core::StridedImage). Two mapping policies are
//! available:
//!
//! - **Direct** ([`DirectMapping`]): `value >> shift` for unsigned integer
//!   images, computed together with the image extrema in a single pass
//!   ([`hist_min_max`])
//! - **Ranged** ([`RangedMapping`]): proportional placement of an arbitrary
//!   `[min, max]` range for any sample type, with optional underflow and
//!   overflow bins ([`ranged_hist`])
//!
//! # Examples
//!
//! ## Ranged histogram with overflow bins
//!
//! ```rust
//! use ndimage_core::{Region, StridedImage};
//! use ndimage_histogram::{ranged_hist, HistogramBins, OverflowBins};
//!
//! let data = [5u16, 40, 100, 250];
//! let image = StridedImage::from_slice(&data, 2, 2).unwrap();
//!
//! // 10 regular bins plus one underflow and one overflow bin
//! let mut counts = vec![0u32; 12];
//! ranged_hist(
//!     &image,
//!     &Region::Full,
//!     &mut HistogramBins::from_slice(&mut counts),
//!     (10, 100),
//!     OverflowBins::Counted,
//! )
//! .unwrap();
//!
//! assert_eq!(counts[0], 1); // 5 is below the range
//! assert_eq!(counts[10], 1); // 100 lands in the last regular bin
//! assert_eq!(counts[11], 1); // 250 is above the range
//! ```
//!
//! ## Display histogram
//!
//! ```rust
//! use ndimage_core::{Region, StridedImage};
//! use ndimage_histogram::{image_histogram, HistogramOptions};
//!
//! let data = [0.0f32, 0.25, 0.5, 1.0];
//! let image = StridedImage::from_slice(&data, 2, 2).unwrap();
//! let summary = image_histogram(&image, &Region::Full, &HistogramOptions::default()).unwrap();
//!
//! assert_eq!(summary.range, Some((0.0, 1.0)));
//! assert_eq!(summary.total(), 4);
//! ```

pub mod config;
pub mod mapping;
pub mod ops;
pub mod summary;
pub mod traits;
pub mod types;

pub use config::{HistogramOptions, OverflowBins, SourceDepth};
pub use mapping::{canonical_bin_count, DirectMapping, OverflowMapping, Placement, RangedMapping};
pub use ops::{accumulate, hist_min_max, ranged_hist};
pub use summary::{image_histogram, HistogramSample};
pub use traits::BinMap;
pub use types::{HistogramBins, ImageHistogram};

pub use ndimage_core::{Error, Result};
