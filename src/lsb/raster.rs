use crate::lsb::CHANNELS;
use image::{Rgba, RgbaImage};

/// A two-dimensional grid of RGBA pixels that payloads can be hidden in.
///
/// Implemented for [`RgbaImage`]; any other pixel store can be adapted by providing
/// pixel access by coordinates.
pub trait Raster {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Returns the `[r, g, b, a]` channels of the pixel at `(x, y)`.
    fn get_pixel(&self, x: u32, y: u32) -> [u8; 4];

    /// Replaces the pixel at `(x, y)`.
    fn put_pixel(&mut self, x: u32, y: u32, pixel: [u8; 4]);
}

impl Raster for RgbaImage {
    fn width(&self) -> u32 {
        RgbaImage::width(self)
    }

    fn height(&self) -> u32 {
        RgbaImage::height(self)
    }

    fn get_pixel(&self, x: u32, y: u32) -> [u8; 4] {
        RgbaImage::get_pixel(self, x, y).0
    }

    fn put_pixel(&mut self, x: u32, y: u32, pixel: [u8; 4]) {
        RgbaImage::put_pixel(self, x, y, Rgba(pixel));
    }
}

/// Returns how many payload bits `raster` can hold.
///
/// # Examples
///
/// ```
/// use image::{Rgba, RgbaImage};
/// use steglsb::lsb;
///
/// let mut image = RgbaImage::from_pixel(3, 3, Rgba([0, 0, 0, 255]));
/// image.put_pixel(1, 1, Rgba([0, 0, 0, 0]));
///
/// assert_eq!(24, lsb::capacity(&image));
/// ```
pub fn capacity<R: Raster + ?Sized>(raster: &R) -> usize {
    scan(raster.width(), raster.height())
        .filter(|&(x, y)| !is_transparent(&raster.get_pixel(x, y)))
        .count()
        * CHANNELS
}

/// Yields pixel coordinates with `x` as the outer loop and `y` as the inner one.
pub(crate) fn scan(width: u32, height: u32) -> impl Iterator<Item = (u32, u32)> {
    (0..width).flat_map(move |x| (0..height).map(move |y| (x, y)))
}

pub(crate) fn is_transparent(pixel: &[u8; 4]) -> bool {
    pixel[3] == 0
}
