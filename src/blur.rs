//! Separable Gaussian blur on 8-bit single-channel images.
//!
//! Two kernel flavors feed the glow mask stage:
//!
//! - [`GAUSSIAN_5TAP`], the fixed `[1, 4, 6, 4, 1] / 16` kernel used to
//!   pre-smooth the grayscale image before edge detection. Its size never
//!   depends on the configured glow radius.
//! - [`GaussianTaps`], sampled from `exp(-(i - c)² / (2σ²))` and normalized,
//!   used for the wide glow blur where the kernel size and sigma come from
//!   `blur_radius`.
//!
//! Both passes clamp indices at the borders (replicate). The horizontal pass
//! keeps an f32 intermediate; rounding to u8 happens once at the final write.

use crate::image::{ImageF32, ImageU8, ImageView, ImageViewMut};

/// Trait implemented by separable 1D filters.
pub trait SeparableFilter {
    /// Return the 1D taps (in left-to-right order). The kernel is assumed to
    /// be symmetric around its centre, but the implementation does not rely
    /// on it.
    fn taps(&self) -> &[f32];
}

/// Simple wrapper around a static filter kernel.
#[derive(Clone, Copy, Debug)]
pub struct StaticSeparableFilter {
    taps: &'static [f32],
}

impl StaticSeparableFilter {
    pub const fn new(taps: &'static [f32]) -> Self {
        Self { taps }
    }
}

impl SeparableFilter for StaticSeparableFilter {
    #[inline]
    fn taps(&self) -> &[f32] {
        self.taps
    }
}

/// Normalised 5-tap Gaussian filter `[1, 4, 6, 4, 1] / 16`.
pub const GAUSSIAN_5TAP: StaticSeparableFilter =
    StaticSeparableFilter::new(&[0.0625, 0.25, 0.375, 0.25, 0.0625]);

/// Gaussian kernel sampled for a given odd size and sigma, normalized to
/// unit sum.
#[derive(Clone, Debug)]
pub struct GaussianTaps {
    taps: Vec<f32>,
}

impl GaussianTaps {
    pub fn new(ksize: usize, sigma: f32) -> Self {
        assert!(ksize % 2 == 1 && ksize >= 1, "kernel size must be odd");
        assert!(sigma > 0.0, "sigma must be positive");
        let center = (ksize / 2) as f32;
        let denom = 2.0 * sigma * sigma;
        let mut taps: Vec<f32> = (0..ksize)
            .map(|i| {
                let d = i as f32 - center;
                (-(d * d) / denom).exp()
            })
            .collect();
        let sum: f32 = taps.iter().sum();
        for tap in &mut taps {
            *tap /= sum;
        }
        Self { taps }
    }
}

impl SeparableFilter for GaussianTaps {
    #[inline]
    fn taps(&self) -> &[f32] {
        &self.taps
    }
}

/// Blur an 8-bit image with a separable filter, replicating border pixels.
pub fn blur_u8<F: SeparableFilter>(src: &ImageU8, filter: &F) -> ImageU8 {
    let taps = filter.taps();
    assert!(!taps.is_empty(), "filter must provide at least one tap");
    let radius = taps.len() / 2;
    let w = src.w;
    let h = src.h;
    let mut dst = ImageU8::new(w, h);
    if w == 0 || h == 0 {
        return dst;
    }

    // Horizontal pass into an f32 intermediate.
    let mut horiz = ImageF32::new(w, h);
    for (y, src_row) in src.rows().enumerate() {
        let out_row = horiz.row_mut(y);
        for (x, out_px) in out_row.iter_mut().enumerate() {
            let mut acc = 0.0f32;
            for (k, &tap) in taps.iter().enumerate() {
                let sx = clamp_index(x as isize + k as isize - radius as isize, w);
                acc += tap * src_row[sx] as f32;
            }
            *out_px = acc;
        }
    }

    // Vertical pass; round to u8 once here.
    let mut acc = vec![0.0f32; w];
    for y in 0..h {
        acc.fill(0.0);
        for (k, &tap) in taps.iter().enumerate() {
            let sy = clamp_index(y as isize + k as isize - radius as isize, h);
            let src_row = horiz.row(sy);
            for (a, &v) in acc.iter_mut().zip(src_row) {
                *a += tap * v;
            }
        }
        let dst_row = dst.row_mut(y);
        for (out_px, &v) in dst_row.iter_mut().zip(acc.iter()) {
            *out_px = v.round().clamp(0.0, 255.0) as u8;
        }
    }

    dst
}

fn clamp_index(idx: isize, upper: usize) -> usize {
    if upper == 0 {
        return 0;
    }
    if idx < 0 {
        0
    } else if (idx as usize) >= upper {
        upper - 1
    } else {
        idx as usize
    }
}
