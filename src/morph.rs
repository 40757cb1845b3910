//! Square-element dilation used to thicken the detected edge lines.
//!
//! A `size × size` structuring element of ones is separable into a
//! horizontal and a vertical running-maximum pass. The anchor sits at
//! `(size / 2, size / 2)`, so taps span `-(size / 2) ..= size - 1 - size / 2`
//! (asymmetric for even sizes). Taps falling outside the image are skipped,
//! which for a 0/255 map means the border never invents edges.

use crate::image::{ImageU8, ImageView, ImageViewMut};

/// Dilate with a square structuring element of side `size`, one iteration.
/// `size == 1` is the identity.
pub fn dilate_square(src: &ImageU8, size: usize) -> ImageU8 {
    assert!(size >= 1, "structuring element must be at least 1x1");
    let w = src.w;
    let h = src.h;
    if size == 1 || w == 0 || h == 0 {
        return src.clone();
    }

    let lo = -((size / 2) as isize);
    let hi = (size - 1 - size / 2) as isize;

    // Horizontal maximum.
    let mut horiz = ImageU8::new(w, h);
    for (y, src_row) in src.rows().enumerate() {
        let dst_row = horiz.row_mut(y);
        for (x, out) in dst_row.iter_mut().enumerate() {
            let from = (x as isize + lo).max(0) as usize;
            let to = (x as isize + hi).min(w as isize - 1) as usize;
            let mut best = 0u8;
            for &v in &src_row[from..=to] {
                best = best.max(v);
            }
            *out = best;
        }
    }

    // Vertical maximum.
    let mut dst = ImageU8::new(w, h);
    for y in 0..h {
        let from = (y as isize + lo).max(0) as usize;
        let to = (y as isize + hi).min(h as isize - 1) as usize;
        let dst_row = dst.row_mut(y);
        for yy in from..=to {
            let src_row = horiz.row(yy);
            for (out, &v) in dst_row.iter_mut().zip(src_row) {
                *out = (*out).max(v);
            }
        }
    }

    dst
}
