//! Element type dispatch
//!
//! The `dispatch_element_type!` and `dispatch_integer_type!` macros turn a
//! runtime [`ElementType`](ndimage_core::ElementType) into a concrete sample
//! type and run a block monomorphized for it.
//!
//! # Usage
//!
//! ```
//! use ndimage_core::ElementType;
//! use ndimage_dispatch::dispatch_element_type;
//!
//! fn element_size(element_type: ElementType) -> usize {
//!     dispatch_element_type!(element_type, T => { std::mem::size_of::<T>() })
//! }
//!
//! assert_eq!(element_size(ElementType::U16), 2);
//! assert_eq!(element_size(ElementType::F64), 8);
//! ```

/// Run `$body` with `$T` bound to the sample type for `$element_type`
///
/// - `U8` -> `u8`
/// - `U16` -> `u16`
/// - `U32` -> `u32`
/// - `U64` -> `u64`
/// - `F32` -> `f32`
/// - `F64` -> `f64`
#[macro_export]
macro_rules! dispatch_element_type {
    ($element_type:expr, $T:ident => $body:block) => {
        match $element_type {
            $crate::ElementType::U8 => {
                type $T = u8;
                $body
            }
            $crate::ElementType::U16 => {
                type $T = u16;
                $body
            }
            $crate::ElementType::U32 => {
                type $T = u32;
                $body
            }
            $crate::ElementType::U64 => {
                type $T = u64;
                $body
            }
            $crate::ElementType::F32 => {
                type $T = f32;
                $body
            }
            $crate::ElementType::F64 => {
                type $T = f64;
                $body
            }
        }
    };
}

/// Run `$body` with `$T` bound to the unsigned integer type for
/// `$element_type`, or evaluate `$fallback` for floating point types
#[macro_export]
macro_rules! dispatch_integer_type {
    ($element_type:expr, $T:ident => $body:block, _ => $fallback:expr) => {
        match $element_type {
            $crate::ElementType::U8 => {
                type $T = u8;
                $body
            }
            $crate::ElementType::U16 => {
                type $T = u16;
                $body
            }
            $crate::ElementType::U32 => {
                type $T = u32;
                $body
            }
            $crate::ElementType::U64 => {
                type $T = u64;
                $body
            }
            $crate::ElementType::F32 | $crate::ElementType::F64 => $fallback,
        }
    };
}
