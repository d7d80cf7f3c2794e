//! Untyped buffer descriptors
//!
//! [`Buffer`] and [`BufferMut`] describe an n-dimensional array inside a byte
//! slice the way buffer protocols do: an element type, a shape and per-axis
//! byte strides, plus the byte offset of the first element. The whole
//! addressed extent is bounds-checked on construction. Typed access goes
//! through `bytemuck`, which also checks alignment, so nothing is ever copied.

use ndimage_core::{ElementType, Error, Result, Sample, StridedImage};
use ndimage_histogram::HistogramBins;

/// Most dimensions a buffer descriptor can carry
pub const MAX_NDIM: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    offset: usize,
    element_type: ElementType,
    ndim: usize,
    shape: [usize; MAX_NDIM],
    strides: [isize; MAX_NDIM],
}

impl Layout {
    fn new(
        byte_len: usize,
        offset: usize,
        element_type: ElementType,
        shape: &[usize],
        byte_strides: &[isize],
    ) -> Result<Self> {
        if shape.len() != byte_strides.len() {
            return Err(Error::InvalidLayout(format!(
                "{} dimensions but {} strides",
                shape.len(),
                byte_strides.len()
            )));
        }
        if shape.len() > MAX_NDIM {
            return Err(Error::InvalidLayout(format!(
                "buffers may have at most {MAX_NDIM} dimensions, got {}",
                shape.len()
            )));
        }

        let mut layout = Self {
            offset,
            element_type,
            ndim: shape.len(),
            shape: [0; MAX_NDIM],
            strides: [0; MAX_NDIM],
        };
        layout.shape[..shape.len()].copy_from_slice(shape);
        layout.strides[..shape.len()].copy_from_slice(byte_strides);
        layout.check_bounds(byte_len)?;
        Ok(layout)
    }

    fn check_bounds(&self, byte_len: usize) -> Result<()> {
        if self.shape().contains(&0) {
            return if self.offset <= byte_len {
                Ok(())
            } else {
                Err(Error::InvalidLayout(format!(
                    "offset {} lies past a {byte_len} byte buffer",
                    self.offset
                )))
            };
        }

        let overflow = || Error::InvalidLayout("buffer extent overflows".to_string());
        let offset = isize::try_from(self.offset).map_err(|_| overflow())?;
        let size = self.element_type.size_in_bytes() as isize;
        let (mut lowest, mut highest) = (offset, offset);
        for (&n, &stride) in self.shape().iter().zip(self.strides()) {
            let reach = isize::try_from(n - 1)
                .ok()
                .and_then(|steps| steps.checked_mul(stride))
                .ok_or_else(overflow)?;
            if reach < 0 {
                lowest = lowest.checked_add(reach).ok_or_else(overflow)?;
            } else {
                highest = highest.checked_add(reach).ok_or_else(overflow)?;
            }
        }
        let end = highest.checked_add(size).ok_or_else(overflow)?;
        if lowest < 0 || end as usize > byte_len {
            return Err(Error::InvalidLayout(format!(
                "buffer addresses bytes {lowest}..{end} of a {byte_len} byte allocation"
            )));
        }
        Ok(())
    }

    fn shape(&self) -> &[usize] {
        &self.shape[..self.ndim]
    }

    fn strides(&self) -> &[isize] {
        &self.strides[..self.ndim]
    }

    fn len(&self) -> usize {
        self.shape().iter().product()
    }

    fn expect_ndim(&self, name: &'static str, ndim: usize) -> Result<()> {
        if self.ndim != ndim {
            return Err(Error::dimensionality(name, ndim, self.ndim));
        }
        Ok(())
    }

    fn expect_type(&self, name: &'static str, expected: ElementType) -> Result<()> {
        if self.element_type != expected {
            return Err(Error::UnexpectedType {
                name,
                expected,
                actual: self.element_type,
            });
        }
        Ok(())
    }

    /// Element index of the first element and the per-axis element strides
    fn element_steps<T: Sample>(&self, name: &'static str) -> Result<(usize, [isize; MAX_NDIM])> {
        let size = std::mem::size_of::<T>();
        if self.offset % size != 0 {
            return Err(Error::InvalidLayout(format!(
                "{name} offset {} is not a multiple of the {size} byte element size",
                self.offset
            )));
        }
        let mut steps = [0isize; MAX_NDIM];
        for (step, &stride) in steps.iter_mut().zip(self.strides()) {
            if stride % size as isize != 0 {
                return Err(Error::InvalidLayout(format!(
                    "{name} stride {stride} is not a multiple of the {size} byte element size"
                )));
            }
            *step = stride / size as isize;
        }
        Ok((self.offset / size, steps))
    }
}

/// Row-major byte strides for a contiguous array
fn contiguous_strides(shape: &[usize], size: usize) -> Result<Vec<isize>> {
    let mut strides = vec![0isize; shape.len()];
    let mut step = size;
    for (stride, &n) in strides.iter_mut().zip(shape).rev() {
        *stride = isize::try_from(step)
            .map_err(|_| Error::InvalidLayout("contiguous stride overflows".to_string()))?;
        step = step
            .checked_mul(n)
            .ok_or_else(|| Error::InvalidLayout("contiguous extent overflows".to_string()))?;
    }
    Ok(strides)
}

fn cast_error<T: Sample>(name: &'static str, err: bytemuck::PodCastError) -> Error {
    Error::InvalidLayout(format!(
        "{name} bytes cannot be viewed as {}: {err:?}",
        T::ELEMENT_TYPE
    ))
}

/// Whole elements of `bytes` as `T`, checking alignment
fn typed<'b, T: Sample>(bytes: &'b [u8], name: &'static str) -> Result<&'b [T]> {
    let whole = bytes.len() - bytes.len() % std::mem::size_of::<T>();
    // An empty slice's dangling pointer need not be aligned for `T`
    if whole == 0 {
        return Ok(&[]);
    }
    bytemuck::try_cast_slice(&bytes[..whole]).map_err(|e| cast_error::<T>(name, e))
}

fn typed_mut<'b, T: Sample>(bytes: &'b mut [u8], name: &'static str) -> Result<&'b mut [T]> {
    let whole = bytes.len() - bytes.len() % std::mem::size_of::<T>();
    if whole == 0 {
        return Ok(&mut []);
    }
    bytemuck::try_cast_slice_mut(&mut bytes[..whole]).map_err(|e| cast_error::<T>(name, e))
}

/// Read-only untyped array descriptor
#[derive(Debug, Clone, Copy)]
pub struct Buffer<'a> {
    bytes: &'a [u8],
    layout: Layout,
}

impl<'a> Buffer<'a> {
    /// Describe an array of `element_type` inside `bytes`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLayout`] if shape and strides disagree in
    /// length, there are more than [`MAX_NDIM`] dimensions, or any element
    /// falls outside `bytes`.
    pub fn new(
        bytes: &'a [u8],
        offset: usize,
        element_type: ElementType,
        shape: &[usize],
        byte_strides: &[isize],
    ) -> Result<Self> {
        let layout = Layout::new(bytes.len(), offset, element_type, shape, byte_strides)?;
        Ok(Self { bytes, layout })
    }

    /// Contiguous row-major array over a typed slice
    pub fn from_slice<T: Sample>(data: &'a [T], shape: &[usize]) -> Result<Self> {
        let strides = contiguous_strides(shape, std::mem::size_of::<T>())?;
        Self::new(bytemuck::cast_slice(data), 0, T::ELEMENT_TYPE, shape, &strides)
    }

    /// Arbitrarily strided array over a typed slice; offset and strides in bytes
    pub fn strided<T: Sample>(
        data: &'a [T],
        byte_offset: usize,
        shape: &[usize],
        byte_strides: &[isize],
    ) -> Result<Self> {
        Self::new(bytemuck::cast_slice(data), byte_offset, T::ELEMENT_TYPE, shape, byte_strides)
    }

    #[inline]
    pub fn element_type(&self) -> ElementType {
        self.layout.element_type
    }

    #[inline]
    pub fn ndim(&self) -> usize {
        self.layout.ndim
    }

    #[inline]
    pub fn shape(&self) -> &[usize] {
        self.layout.shape()
    }

    #[inline]
    pub fn byte_strides(&self) -> &[isize] {
        self.layout.strides()
    }

    /// Number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.layout.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn expect_ndim(&self, name: &'static str, ndim: usize) -> Result<()> {
        self.layout.expect_ndim(name, ndim)
    }

    pub(crate) fn expect_type(&self, name: &'static str, expected: ElementType) -> Result<()> {
        self.layout.expect_type(name, expected)
    }

    /// Typed 2-D view of this buffer.
    ///
    /// # Errors
    ///
    /// Fails if the buffer is not 2-D, holds a different element type, or is
    /// misaligned for `T`.
    pub fn image<T: Sample>(&self, name: &'static str) -> Result<StridedImage<'a, T>> {
        self.layout.expect_ndim(name, 2)?;
        self.layout.expect_type(name, T::ELEMENT_TYPE)?;
        let shape = self.layout.shape();
        if self.layout.len() == 0 {
            return StridedImage::from_slice(&[], shape[0], shape[1]);
        }
        let (origin, steps) = self.layout.element_steps::<T>(name)?;
        StridedImage::with_strides(
            typed(self.bytes, name)?,
            origin,
            (shape[0], shape[1]),
            (steps[0], steps[1]),
        )
    }

    /// Typed view of a 1-D buffer as a single-row image.
    ///
    /// # Errors
    ///
    /// Fails if the buffer is not 1-D, holds a different element type, or is
    /// misaligned for `T`.
    pub fn vector<T: Sample>(&self, name: &'static str) -> Result<StridedImage<'a, T>> {
        self.layout.expect_ndim(name, 1)?;
        self.layout.expect_type(name, T::ELEMENT_TYPE)?;
        if self.layout.len() == 0 {
            return StridedImage::from_slice(&[], 1, 0);
        }
        let (origin, steps) = self.layout.element_steps::<T>(name)?;
        StridedImage::with_strides(
            typed(self.bytes, name)?,
            origin,
            (1, self.layout.shape[0]),
            (0, steps[0]),
        )
    }
}

/// Writable untyped array descriptor
#[derive(Debug)]
pub struct BufferMut<'a> {
    bytes: &'a mut [u8],
    layout: Layout,
}

impl<'a> BufferMut<'a> {
    /// Describe a writable array of `element_type` inside `bytes`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Buffer::new`].
    pub fn new(
        bytes: &'a mut [u8],
        offset: usize,
        element_type: ElementType,
        shape: &[usize],
        byte_strides: &[isize],
    ) -> Result<Self> {
        let layout = Layout::new(bytes.len(), offset, element_type, shape, byte_strides)?;
        Ok(Self { bytes, layout })
    }

    /// Contiguous row-major array over a typed slice
    pub fn from_slice<T: Sample>(data: &'a mut [T], shape: &[usize]) -> Result<Self> {
        let strides = contiguous_strides(shape, std::mem::size_of::<T>())?;
        Self::new(bytemuck::cast_slice_mut(data), 0, T::ELEMENT_TYPE, shape, &strides)
    }

    /// Arbitrarily strided array over a typed slice; offset and strides in bytes
    pub fn strided<T: Sample>(
        data: &'a mut [T],
        byte_offset: usize,
        shape: &[usize],
        byte_strides: &[isize],
    ) -> Result<Self> {
        Self::new(
            bytemuck::cast_slice_mut(data),
            byte_offset,
            T::ELEMENT_TYPE,
            shape,
            byte_strides,
        )
    }

    /// Read-only view of the same array
    pub fn as_buffer(&self) -> Buffer<'_> {
        Buffer {
            bytes: &*self.bytes,
            layout: self.layout,
        }
    }

    #[inline]
    pub fn element_type(&self) -> ElementType {
        self.layout.element_type
    }

    #[inline]
    pub fn ndim(&self) -> usize {
        self.layout.ndim
    }

    #[inline]
    pub fn shape(&self) -> &[usize] {
        self.layout.shape()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.layout.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn expect_ndim(&self, name: &'static str, ndim: usize) -> Result<()> {
        self.layout.expect_ndim(name, ndim)
    }

    pub(crate) fn expect_type(&self, name: &'static str, expected: ElementType) -> Result<()> {
        self.layout.expect_type(name, expected)
    }

    /// This 1-D `u32` buffer as histogram bins.
    ///
    /// # Errors
    ///
    /// Fails if the buffer is not 1-D `u32`, or is misaligned.
    pub fn histogram_bins(&mut self, name: &'static str) -> Result<HistogramBins<'_>> {
        self.layout.expect_ndim(name, 1)?;
        self.layout.expect_type(name, ElementType::U32)?;
        let (origin, steps) = self.layout.element_steps::<u32>(name)?;
        let len = self.layout.shape[0];
        HistogramBins::with_stride(typed_mut(self.bytes, name)?, origin, len, steps[0])
    }

    /// Check that [`Self::store`] can write `T` values without storing anything.
    pub(crate) fn check_writable<T: Sample>(&mut self, name: &'static str) -> Result<()> {
        self.layout.expect_ndim(name, 1)?;
        self.layout.expect_type(name, T::ELEMENT_TYPE)?;
        self.layout.element_steps::<T>(name)?;
        typed_mut::<T>(self.bytes, name).map(|_| ())
    }

    /// Write `values` into this 1-D buffer in index order.
    ///
    /// # Errors
    ///
    /// Fails if the buffer is not 1-D, holds a different element type, has a
    /// different length than `values`, or is misaligned.
    pub fn store<T: Sample>(&mut self, name: &'static str, values: &[T]) -> Result<()> {
        self.layout.expect_ndim(name, 1)?;
        self.layout.expect_type(name, T::ELEMENT_TYPE)?;
        if self.layout.shape[0] != values.len() {
            return Err(Error::exact_length(name, values.len(), self.layout.shape[0]));
        }
        let (origin, steps) = self.layout.element_steps::<T>(name)?;
        let data = typed_mut::<T>(self.bytes, name)?;
        for (i, &value) in values.iter().enumerate() {
            data[(origin as isize + i as isize * steps[0]) as usize] = value;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contiguous_buffer() {
        let data: Vec<u16> = (0..12).collect();
        let buffer = Buffer::from_slice(&data, &[3, 4]).unwrap();
        assert_eq!(buffer.element_type(), ElementType::U16);
        assert_eq!(buffer.shape(), &[3, 4]);
        assert_eq!(buffer.byte_strides(), &[8, 2]);
        let image = buffer.image::<u16>("im").unwrap();
        assert_eq!(image.get(2, 1), Some(9));
    }

    #[test]
    fn test_transposed_byte_strides() {
        let data: Vec<f32> = (0..6).map(|i| i as f32).collect();
        let buffer = Buffer::strided(&data, 0, &[3, 2], &[4, 12]).unwrap();
        let image = buffer.image::<f32>("im").unwrap();
        assert_eq!(image.get(0, 1), Some(3.0));
        assert_eq!(image.get(2, 0), Some(2.0));
    }

    #[test]
    fn test_flipped_buffer() {
        let data: Vec<u8> = (0..6).collect();
        let buffer = Buffer::strided(&data, 3, &[2, 3], &[-3, 1]).unwrap();
        let image = buffer.image::<u8>("im").unwrap();
        assert_eq!(image.get(0, 0), Some(3));
        assert_eq!(image.get(1, 2), Some(2));
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let data = [0u32; 4];
        assert!(matches!(
            Buffer::strided(&data, 0, &[2, 3], &[8, 4]),
            Err(Error::InvalidLayout(_))
        ));
        assert!(Buffer::strided(&data, 0, &[2, 2], &[-8, 4]).is_err());
        assert!(Buffer::strided(&data, 0, &[1, 1, 1, 1, 1], &[4; 5]).is_err());
        assert!(Buffer::strided(&data, 0, &[2], &[4, 4]).is_err());
    }

    #[test]
    fn test_wrong_type_or_rank() {
        let data = [0u8; 4];
        let buffer = Buffer::from_slice(&data, &[2, 2]).unwrap();
        assert!(matches!(
            buffer.image::<u16>("im"),
            Err(Error::UnexpectedType { .. })
        ));
        assert!(matches!(
            buffer.vector::<u8>("range"),
            Err(Error::Dimensionality { .. })
        ));
    }

    #[test]
    fn test_odd_stride_rejected() {
        let data = [0u16; 8];
        let bytes: &[u8] = bytemuck::cast_slice(&data);
        let buffer = Buffer::new(bytes, 0, ElementType::U16, &[2, 2], &[5, 2]).unwrap();
        assert!(matches!(buffer.image::<u16>("im"), Err(Error::InvalidLayout(_))));
    }

    #[test]
    fn test_vector_view() {
        let data = [1.5f64, 9.0, 2.5, 7.0];
        let buffer = Buffer::strided(&data, 8, &[2], &[16]).unwrap();
        let vector = buffer.vector::<f64>("range").unwrap();
        assert_eq!(vector.cols(), 2);
        assert_eq!(vector.get(0, 0), Some(9.0));
        assert_eq!(vector.get(0, 1), Some(7.0));
    }

    #[test]
    fn test_store_strided() {
        let mut data = [0u64; 5];
        {
            let mut out = BufferMut::strided(&mut data, 8, &[2], &[24]).unwrap();
            out.store("min_max", &[3u64, 11]).unwrap();
            assert!(out.store("min_max", &[1u64, 2, 3]).is_err());
            assert!(out.store("min_max", &[1u32, 2]).is_err());
        }
        assert_eq!(data, [0, 3, 0, 0, 11]);
    }

    #[test]
    fn test_histogram_bins_view() {
        let mut counts = [0u32; 6];
        {
            let mut out = BufferMut::strided(&mut counts, 4, &[3], &[8]).unwrap();
            let mut bins = out.histogram_bins("hist").unwrap();
            bins.increment(2);
        }
        assert_eq!(counts, [0, 0, 0, 0, 0, 1]);

        let mut wrong = [0u16; 4];
        let mut out = BufferMut::from_slice(&mut wrong, &[4]).unwrap();
        assert!(matches!(
            out.histogram_bins("hist"),
            Err(Error::UnexpectedType { .. })
        ));
    }

    #[test]
    fn test_empty_buffer() {
        let data: [f32; 0] = [];
        let buffer = Buffer::from_slice(&data, &[0, 3]).unwrap();
        assert!(buffer.is_empty());
        let image = buffer.image::<f32>("im").unwrap();
        assert!(image.is_empty());
    }

    #[test]
    fn test_empty_bytes_view() {
        let buffer = Buffer::new(&[], 0, ElementType::U16, &[0, 4], &[8, 2]).unwrap();
        let image = buffer.image::<u16>("im").unwrap();
        assert_eq!(image.shape(), (0, 4));
        assert!(image.is_empty());

        let vector = Buffer::new(&[], 0, ElementType::F64, &[0], &[8]).unwrap();
        assert!(vector.vector::<f64>("range").unwrap().is_empty());
    }

    #[test]
    fn test_as_buffer_reads_same_array() {
        let mut data = [4u32, 8, 15, 16, 23, 42];
        let out = BufferMut::strided(&mut data, 4, &[2, 2], &[12, 4]).unwrap();
        let view = out.as_buffer();
        assert_eq!(view.shape(), out.shape());
        let image = view.image::<u32>("im").unwrap();
        assert_eq!(image.get(0, 0), Some(8));
        assert_eq!(image.get(1, 1), Some(42));
    }
}
