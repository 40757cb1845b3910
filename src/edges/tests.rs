use super::{detect_edges, sobel_gradients};
use crate::image::ImageU8;

fn step_image(width: usize, height: usize, split_x: usize, left: u8, right: u8) -> ImageU8 {
    let mut img = ImageU8::new(width, height);
    for y in 0..height {
        for x in 0..width {
            img.set(x, y, if x < split_x { left } else { right });
        }
    }
    img
}

#[test]
fn sobel_magnitude_peaks_at_step() {
    let img = step_image(16, 8, 8, 0, 100);
    let grad = sobel_gradients(&img);
    // Columns left and right of the transition both carry 4 * delta.
    assert_eq!(grad.mag.get(7, 4), 400.0);
    assert_eq!(grad.mag.get(8, 4), 400.0);
    assert_eq!(grad.mag.get(4, 4), 0.0);
    assert_eq!(grad.gy.get(7, 4), 0.0);
}

#[test]
fn vertical_step_yields_single_edge_column() {
    let img = step_image(32, 32, 16, 0, 200);
    let edges = detect_edges(&img, 50.0, 100.0);

    for y in 1..31 {
        assert_eq!(edges.get(15, y), 255, "expected edge at (15, {y})");
    }
    // Tied plateau keeps exactly one of the two step columns.
    assert_eq!(edges.count_nonzero(), 30);

    // The outer frame never carries edges.
    for x in 0..32 {
        assert_eq!(edges.get(x, 0), 0);
        assert_eq!(edges.get(x, 31), 0);
    }
    for y in 0..32 {
        assert_eq!(edges.get(0, y), 0);
        assert_eq!(edges.get(31, y), 0);
    }
}

#[test]
fn flat_image_has_no_edges() {
    let img = ImageU8::new(16, 16);
    let edges = detect_edges(&img, 50.0, 100.0);
    assert_eq!(edges.count_nonzero(), 0);
}

#[test]
fn weak_responses_need_a_strong_anchor() {
    let width = 20;
    let height = 40;
    let split_x = 10;

    // Top half: strong step (magnitude 800); bottom half: weak step
    // (magnitude 80) that only passes the low threshold.
    let mut img = ImageU8::new(width, height);
    for y in 0..height {
        let amplitude = if y < 20 { 200 } else { 20 };
        for x in split_x..width {
            img.set(x, y, amplitude);
        }
    }
    let edges = detect_edges(&img, 50.0, 400.0);
    assert_eq!(
        edges.get(split_x - 1, 30),
        255,
        "weak edge connected to a strong edge must survive"
    );

    // The same weak step alone stays below the high threshold everywhere
    // and must produce nothing.
    let weak_only = step_image(width, height, split_x, 0, 20);
    let edges = detect_edges(&weak_only, 50.0, 400.0);
    assert_eq!(edges.count_nonzero(), 0);
}

#[test]
fn degenerate_images_produce_empty_maps() {
    let tiny = ImageU8::new(2, 2);
    let edges = detect_edges(&tiny, 10.0, 20.0);
    assert_eq!(edges.count_nonzero(), 0);
    assert_eq!(edges.w, 2);
    assert_eq!(edges.h, 2);
}
