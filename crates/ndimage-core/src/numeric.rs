//! Sample trait hierarchy for typed pixel buffers
//!
//! This module ties the compile-time element types the kernels are generic
//! over to their runtime [`ElementType`] tags.
//!
//! # Design Philosophy
//!
//! - **Pure type constraints**: no computation beyond lossless casts
//! - **Closed set**: exactly the six element kinds a display pipeline feeds in
//! - **Zero-copy**: every sample is `Pod` so raw buffers can be reinterpreted

use crate::element::ElementType;
use bytemuck::Pod;
use num_traits::{Bounded, NumCast};
use std::fmt::Debug;

/// A pixel sample type the statistics kernels can scan
pub trait Sample: Pod + PartialOrd + Bounded + NumCast + Debug + Send + Sync + 'static {
    /// Runtime tag for this type
    const ELEMENT_TYPE: ElementType;

    /// Widen to f64 for proportional bin mapping
    fn as_f64(self) -> f64;
}

/// Unsigned integer samples, which additionally support direct shift binning
pub trait IntegerSample: Sample + Ord {
    /// Width of the type in bits
    const BITS: u32;

    /// `self >> shift` as a bin index; shifting out every bit yields 0
    fn shifted_index(self, shift: u32) -> usize;
}

macro_rules! impl_integer_sample {
    ($($t:ty => $variant:ident),* $(,)?) => {$(
        impl Sample for $t {
            const ELEMENT_TYPE: ElementType = ElementType::$variant;

            #[inline]
            fn as_f64(self) -> f64 {
                self as f64
            }
        }

        impl IntegerSample for $t {
            const BITS: u32 = <$t>::BITS;

            #[inline]
            fn shifted_index(self, shift: u32) -> usize {
                self.checked_shr(shift).unwrap_or(0) as usize
            }
        }
    )*};
}

impl_integer_sample!(u8 => U8, u16 => U16, u32 => U32, u64 => U64);

impl Sample for f32 {
    const ELEMENT_TYPE: ElementType = ElementType::F32;

    #[inline]
    fn as_f64(self) -> f64 {
        self as f64
    }
}

impl Sample for f64 {
    const ELEMENT_TYPE: ElementType = ElementType::F64;

    #[inline]
    fn as_f64(self) -> f64 {
        self
    }
}
