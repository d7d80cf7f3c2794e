//! Core traits for bin mapping

/// Maps a sample to the index of the bin that counts it
///
/// Implementations are chosen once per histogram call; the accumulation loop
/// is monomorphized over the mapper so no policy branch runs per pixel.
pub trait BinMap<T> {
    /// Bin index for `value`, or `None` if the value is not counted
    fn bin(&self, value: T) -> Option<usize>;

    /// Number of output bins the mapper can address
    fn output_len(&self) -> usize;
}
