//! Non-maximum suppression and double-threshold hysteresis.
//!
//! For each interior pixel the gradient direction is quantized into one of
//! four sectors (horizontal, vertical, two diagonals) and the magnitude must
//! beat its two neighbors along that direction to survive. Survivors above
//! the high threshold seed an 8-connected flood fill that promotes survivors
//! above the low threshold into the final binary map.
//!
//! Border handling: the outermost 1-pixel frame never becomes an edge, which
//! also removes out-of-bounds checks from the neighbor lookups.

use super::grad::Grad;
use crate::image::{ImageU8, ImageView};

const TAN_22_5_DEG: f32 = 0.41421356237;

const NEIGH_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

const WEAK: u8 = 1;
const STRONG: u8 = 2;

/// Classify gradient responses into a binary edge map (0 or 255 per cell).
///
/// `low` and `high` are the hysteresis thresholds on the L1 magnitude; both
/// comparisons are strict (`mag > high` seeds, `mag > low` may join).
pub fn hysteresis_edges(grad: &Grad, low: f32, high: f32) -> ImageU8 {
    let w = grad.mag.w;
    let h = grad.mag.h;
    let mut edges = ImageU8::new(w, h);
    if w < 3 || h < 3 {
        return edges;
    }

    let mut labels = vec![0u8; w * h];
    let mut stack: Vec<usize> = Vec::with_capacity(256);

    for y in 1..h - 1 {
        let mag_prev = grad.mag.row(y - 1);
        let mag_row = grad.mag.row(y);
        let mag_next = grad.mag.row(y + 1);
        let gx_row = grad.gx.row(y);
        let gy_row = grad.gy.row(y);

        for x in 1..w - 1 {
            let mag = mag_row[x];
            if mag <= low {
                continue;
            }

            let gx = gx_row[x];
            let gy = gy_row[x];
            let abs_gx = gx.abs();
            let abs_gy = gy.abs();
            let same_sign = (gx >= 0.0 && gy >= 0.0) || (gx <= 0.0 && gy <= 0.0);

            let (leading, trailing) = if abs_gx >= abs_gy {
                if abs_gy <= abs_gx * TAN_22_5_DEG {
                    (mag_row[x - 1], mag_row[x + 1])
                } else if same_sign {
                    (mag_prev[x + 1], mag_next[x - 1])
                } else {
                    (mag_prev[x - 1], mag_next[x + 1])
                }
            } else if abs_gx <= abs_gy * TAN_22_5_DEG {
                (mag_prev[x], mag_next[x])
            } else if same_sign {
                (mag_prev[x + 1], mag_next[x - 1])
            } else {
                (mag_prev[x - 1], mag_next[x + 1])
            };

            // Strict against the leading neighbor, tie-tolerant against the
            // trailing one: plateau ridges two pixels wide keep exactly one.
            if mag <= leading || mag < trailing {
                continue;
            }

            let idx = y * w + x;
            if mag > high {
                labels[idx] = STRONG;
                stack.push(idx);
            } else {
                labels[idx] = WEAK;
            }
        }
    }

    while let Some(idx) = stack.pop() {
        edges.data[idx] = 255;
        let x = idx % w;
        let y = idx / w;
        for (dx, dy) in NEIGH_OFFSETS {
            let xn = x as isize + dx;
            let yn = y as isize + dy;
            if xn < 1 || yn < 1 || xn >= (w as isize) - 1 || yn >= (h as isize) - 1 {
                continue;
            }
            let neighbor_idx = yn as usize * w + xn as usize;
            if labels[neighbor_idx] == WEAK {
                labels[neighbor_idx] = STRONG;
                stack.push(neighbor_idx);
            }
        }
    }

    edges
}
