use super::Bgra8888;
use crate::tga::constants::BYTES_PER_PIXEL;

/// Iterates over raw BGRA8888 data one pixel at a time.
///
/// The iterator is lazy and reads the slice front to back; trailing bytes that do not
/// form a whole pixel are not yielded.
#[inline]
pub fn pixels(data: &[u8]) -> impl Iterator<Item = Bgra8888> + '_ {
    data.chunks_exact(BYTES_PER_PIXEL)
        .map(|chunk| Bgra8888::from_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
}

/// Counts the pixels in raw BGRA8888 data that have color but no alpha.
///
/// # Arguments
///
/// * `data` - Pixel data, 4 bytes per pixel. A trailing partial pixel is ignored.
///
/// # Returns
///
/// The number of pixels for which [`Bgra8888::has_color_without_alpha`] holds.
#[inline]
pub fn count_color_without_alpha(data: &[u8]) -> u64 {
    pixels(data)
        .filter(Bgra8888::has_color_without_alpha)
        .count() as u64
}
