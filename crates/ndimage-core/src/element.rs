//! Runtime element type tags
//!
//! [`ElementType`] names the six sample kinds the statistics kernels are
//! instantiated for. It is the runtime counterpart of the compile-time
//! [`Sample`](crate::Sample) trait and is what untyped buffers carry.

use crate::error::{Error, Result};
use std::fmt;

/// Element types supported by the statistics kernels
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ElementType {
    /// 8-bit unsigned integer
    U8 = 0,
    /// 16-bit unsigned integer
    U16 = 1,
    /// 32-bit unsigned integer
    U32 = 2,
    /// 64-bit unsigned integer
    U64 = 3,
    /// 32-bit floating point
    F32 = 4,
    /// 64-bit floating point
    F64 = 5,
}

impl ElementType {
    /// All supported element types, narrowest integer first
    pub const ALL: [ElementType; 6] = [
        Self::U8,
        Self::U16,
        Self::U32,
        Self::U64,
        Self::F32,
        Self::F64,
    ];

    /// Size of one element in bytes
    #[inline]
    pub const fn size_in_bytes(self) -> usize {
        match self {
            Self::U8 => 1,
            Self::U16 => 2,
            Self::U32 | Self::F32 => 4,
            Self::U64 | Self::F64 => 8,
        }
    }

    /// Returns true for the floating point types
    #[inline]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }

    /// Returns true for the unsigned integer types
    #[inline]
    pub const fn is_integer(self) -> bool {
        !self.is_float()
    }

    /// Short lowercase name, matching numpy dtype names
    pub const fn name(self) -> &'static str {
        match self {
            Self::U8 => "uint8",
            Self::U16 => "uint16",
            Self::U32 => "uint32",
            Self::U64 => "uint64",
            Self::F32 => "float32",
            Self::F64 => "float64",
        }
    }

    /// Canonical buffer-protocol format character
    pub const fn format_code(self) -> char {
        match self {
            Self::U8 => 'B',
            Self::U16 => 'H',
            Self::U32 => 'I',
            Self::U64 => 'Q',
            Self::F32 => 'f',
            Self::F64 => 'd',
        }
    }

    /// Parse a buffer-protocol (PEP 3118 / `struct` module) format string.
    ///
    /// A single little-endian or native byte-order prefix (`@`, `=` or `<`) is
    /// accepted. `?` (bool) is read as `U8`. `L` uses native size when bare or
    /// `@`-prefixed, 8 bytes on the LP64 platforms image viewers run on, and
    /// the standard 4 bytes after `=` or `<`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedType`] for signed, complex, half precision,
    /// big-endian or otherwise unrecognized formats.
    pub fn from_format(format: &str) -> Result<Self> {
        let (standard_size, code) = match format.strip_prefix(&['=', '<'][..]) {
            Some(code) => (true, code),
            None => (false, format.strip_prefix('@').unwrap_or(format)),
        };
        match code {
            "B" | "?" => Ok(Self::U8),
            "H" => Ok(Self::U16),
            "I" => Ok(Self::U32),
            "L" if standard_size => Ok(Self::U32),
            "L" | "Q" => Ok(Self::U64),
            "f" => Ok(Self::F32),
            "d" => Ok(Self::F64),
            _ => Err(Error::UnsupportedType(format!(
                "buffer format {format:?}: only uint8, uint16, uint32, uint64, float32, and float64 buffers are supported"
            ))),
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes() {
        let sizes: Vec<usize> = ElementType::ALL.iter().map(|t| t.size_in_bytes()).collect();
        assert_eq!(sizes, vec![1, 2, 4, 8, 4, 8]);
    }

    #[test]
    fn test_from_format() {
        assert_eq!(ElementType::from_format("B").unwrap(), ElementType::U8);
        assert_eq!(ElementType::from_format("?").unwrap(), ElementType::U8);
        assert_eq!(ElementType::from_format("<H").unwrap(), ElementType::U16);
        assert_eq!(ElementType::from_format("=I").unwrap(), ElementType::U32);
        assert_eq!(ElementType::from_format("Q").unwrap(), ElementType::U64);
        assert_eq!(ElementType::from_format("@f").unwrap(), ElementType::F32);
        assert_eq!(ElementType::from_format("d").unwrap(), ElementType::F64);
        assert_eq!(ElementType::from_format("L").unwrap(), ElementType::U64);
        assert_eq!(ElementType::from_format("@L").unwrap(), ElementType::U64);

        for t in ElementType::ALL {
            let code = t.format_code().to_string();
            assert_eq!(ElementType::from_format(&code).unwrap(), t);
        }
    }

    #[test]
    fn test_standard_size_unsigned_long() {
        for code in ["<L", "=L"] {
            let t = ElementType::from_format(code).unwrap();
            assert_eq!(t, ElementType::U32, "{code:?}");
            assert_eq!(t.size_in_bytes(), 4);
        }
    }

    #[test]
    fn test_from_format_rejects_unsupported() {
        for bad in ["b", "h", "i", "q", "e", "Zf", ">H", "", "BB"] {
            let err = ElementType::from_format(bad).unwrap_err();
            assert!(matches!(err, Error::UnsupportedType(_)), "{bad:?}");
        }
    }

    #[test]
    fn test_kind_predicates() {
        assert!(ElementType::F32.is_float());
        assert!(ElementType::F64.is_float());
        assert!(ElementType::U64.is_integer());
        assert!(!ElementType::U8.is_float());
        assert_eq!(ElementType::U16.to_string(), "uint16");
    }
}
