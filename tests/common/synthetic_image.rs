use halation::image::BgrImage;

/// Fill a frame with one color.
pub fn solid_bgr(width: usize, height: usize, bgr: [u8; 3]) -> BgrImage {
    let mut img = BgrImage::new(width, height);
    for y in 0..height {
        for x in 0..width {
            img.set_pixel(x, y, bgr);
        }
    }
    img
}

/// Left half `left`, right half `right`; one clean vertical contrast step.
pub fn split_bgr(width: usize, height: usize, left: [u8; 3], right: [u8; 3]) -> BgrImage {
    let mut img = BgrImage::new(width, height);
    for y in 0..height {
        for x in 0..width {
            img.set_pixel(x, y, if x < width / 2 { left } else { right });
        }
    }
    img
}

/// High-contrast checkerboard; every cell boundary is an edge.
pub fn checkerboard_bgr(width: usize, height: usize, cell: usize) -> BgrImage {
    assert!(cell > 0, "cell size must be positive");
    let mut img = BgrImage::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let val = if (x / cell + y / cell) % 2 == 0 {
                32u8
            } else {
                220u8
            };
            img.set_pixel(x, y, [val, val, val]);
        }
    }
    img
}
