//! Owned interleaved 3-channel 8-bit image in B-G-R channel order.
//!
//! Channel order matters: the glow compositor writes its warm tint into the
//! red channel at interleaved index 2, and the grayscale conversion weights
//! assume the same layout. Rows are tightly packed (`stride == w * 3`).

use crate::error::{HalationError, Result};
use crate::image::ImageU8;

/// Bytes per pixel.
const PIXEL_BYTES: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BgrImage {
    w: usize,
    h: usize,
    stride: usize,
    data: Vec<u8>,
}

impl BgrImage {
    /// Construct a zero-filled (all-black) image of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            stride: w * PIXEL_BYTES,
            data: vec![0u8; w * h * PIXEL_BYTES],
        }
    }

    /// Wrap an interleaved B-G-R byte buffer. The buffer length must be
    /// exactly `w * h * 3` and both dimensions must be at least 1.
    pub fn from_raw(w: usize, h: usize, data: Vec<u8>) -> Result<Self> {
        if w == 0 || h == 0 {
            return Err(HalationError::InvalidImage(format!(
                "dimensions must be at least 1x1, got {w}x{h}"
            )));
        }
        let expected = w * h * PIXEL_BYTES;
        if data.len() != expected {
            return Err(HalationError::InvalidImage(format!(
                "buffer holds {} bytes, {w}x{h} interleaved BGR needs {expected}",
                data.len()
            )));
        }
        Ok(Self {
            w,
            h,
            stride: w * PIXEL_BYTES,
            data,
        })
    }

    /// Image width in pixels
    #[inline]
    pub fn width(&self) -> usize {
        self.w
    }

    /// Image height in pixels
    #[inline]
    pub fn height(&self) -> usize {
        self.h
    }

    /// Interleaved row `y`, `w * 3` bytes.
    #[inline]
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.stride]
    }

    #[inline]
    pub fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.stride;
        let end = start + self.stride;
        &mut self.data[start..end]
    }

    /// Pixel at (x, y) as `[b, g, r]`.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        let i = y * self.stride + x * PIXEL_BYTES;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, bgr: [u8; 3]) {
        let i = y * self.stride + x * PIXEL_BYTES;
        self.data[i..i + PIXEL_BYTES].copy_from_slice(&bgr);
    }

    /// Whole buffer as one contiguous byte slice.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the image and return the raw interleaved bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Convert to grayscale with BT.601 luma weights
    /// (`0.299 R + 0.587 G + 0.114 B`, rounded).
    pub fn to_grayscale(&self) -> ImageU8 {
        let mut gray = ImageU8::new(self.w, self.h);
        for y in 0..self.h {
            let src = self.row(y);
            let start = y * gray.stride;
            let dst = &mut gray.data[start..start + self.w];
            for (px, out) in src.chunks_exact(PIXEL_BYTES).zip(dst.iter_mut()) {
                let luma =
                    0.114f32 * px[0] as f32 + 0.587f32 * px[1] as f32 + 0.299f32 * px[2] as f32;
                *out = luma.round() as u8;
            }
        }
        gray
    }
}
