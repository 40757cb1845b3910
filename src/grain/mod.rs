//! Monochrome film grain.
//!
//! One noise draw per pixel lands on all three channels, so the grain reads
//! as luminance texture rather than chroma speckle. Near black and white the
//! draw is attenuated, fading to zero at the extremes; pure blacks and pure
//! whites stay untouched.
//!
//! Every row is seeded independently from the base seed, which keeps the
//! output byte-identical whether rows are grained serially or in parallel.

mod noise;

pub use noise::{mix_seed, NoiseSource, XorShift32};

use crate::image::BgrImage;
use log::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Noise amplitude in intensity levels for a given strength.
///
/// The floor of 1 keeps a faint dither alive even at strength zero; the cap
/// of 80 bounds the worst case well below full scale.
pub fn grain_amplitude(strength: f32) -> i32 {
    ((strength * 255.0).round() as i32).clamp(1, 80)
}

/// Attenuate a draw near the ends of the intensity range. Integer division
/// truncates toward zero, same for positive and negative draws.
fn scale_noise(n: i32, v: i32) -> i32 {
    if v < 40 {
        n * v / 80
    } else if v > 190 {
        n * (255 - v) / 80
    } else {
        n
    }
}

fn grain_row<R: NoiseSource + ?Sized>(row: &mut [u8], amplitude: i32, rng: &mut R) {
    for px in row.chunks_exact_mut(3) {
        let n = rng.next_in(amplitude);
        for v in px {
            let value = *v as i32;
            *v = (value + scale_noise(n, value)).clamp(0, 255) as u8;
        }
    }
}

/// Add grain in place, one independent noise stream per row.
pub fn add_grain(image: &mut BgrImage, strength: f32, seed: u32) {
    let row_bytes = image.width() * 3;
    if row_bytes == 0 || image.height() == 0 {
        return;
    }
    let amplitude = grain_amplitude(strength);
    debug!("grain: amplitude={amplitude} seed={seed:#010x}");

    #[cfg(feature = "parallel")]
    {
        image
            .as_mut_slice()
            .par_chunks_mut(row_bytes)
            .enumerate()
            .for_each(|(y, row)| {
                let mut rng = XorShift32::new(mix_seed(seed, y as u32));
                grain_row(row, amplitude, &mut rng);
            });
    }
    #[cfg(not(feature = "parallel"))]
    {
        for (y, row) in image.as_mut_slice().chunks_mut(row_bytes).enumerate() {
            let mut rng = XorShift32::new(mix_seed(seed, y as u32));
            grain_row(row, amplitude, &mut rng);
        }
    }
}

/// Serial variant that drains a caller-supplied noise source row by row.
pub fn add_grain_with(image: &mut BgrImage, strength: f32, noise: &mut dyn NoiseSource) {
    let row_bytes = image.width() * 3;
    if row_bytes == 0 || image.height() == 0 {
        return;
    }
    let amplitude = grain_amplitude(strength);
    for row in image.as_mut_slice().chunks_mut(row_bytes) {
        grain_row(row, amplitude, noise);
    }
}

#[deprecated(since = "0.2.0", note = "renamed to `add_grain`")]
pub fn add_monochrome_grain(image: &mut BgrImage, strength: f32, seed: u32) {
    add_grain(image, strength, seed);
}
