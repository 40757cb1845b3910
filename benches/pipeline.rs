use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use std::hint::black_box;

use halation::glow::glow_mask;
use halation::grain::add_grain;
use halation::image::BgrImage;
use halation::tone::ToneCurve;
use halation::{HalationFilter, HalationParams};

/// Checkerboard with a horizontal brightness ramp: plenty of edges for the
/// glow stage plus smooth regions for the tone curve and grain.
fn synthetic_frame(w: usize, h: usize) -> BgrImage {
    let mut img = BgrImage::new(w, h);
    for y in 0..h {
        for x in 0..w {
            let cell = if (x / 40 + y / 40) % 2 == 0 { 40 } else { 195 };
            let v = (cell + x * 60 / w) as u8;
            img.set_pixel(x, y, [v, v, v]);
        }
    }
    img
}

fn bench_process(c: &mut Criterion) {
    let mut group = c.benchmark_group("halation");
    group.significance_level(0.1).sample_size(20);

    for (w, h) in [(640usize, 480usize), (1280usize, 720usize)] {
        let frame = synthetic_frame(w, h);
        let filter = HalationFilter::new(HalationParams {
            grain_seed: Some(7),
            ..HalationParams::default()
        })
        .unwrap();
        group.bench_with_input(
            BenchmarkId::new("process", format!("{w}x{h}")),
            &frame,
            |b, frame| b.iter(|| filter.process(black_box(frame)).unwrap()),
        );
    }
    group.finish();
}

fn bench_stages(c: &mut Criterion) {
    let frame = synthetic_frame(1280, 720);
    let params = HalationParams::default();
    let tone = ToneCurve::new(params.s_curve_strength);
    let tone_mapped = tone.apply(&frame);

    let mut group = c.benchmark_group("stages");
    group.significance_level(0.1).sample_size(20);

    group.bench_function("tone_curve_1280x720", |b| {
        b.iter(|| tone.apply(black_box(&frame)))
    });
    group.bench_function("glow_mask_1280x720", |b| {
        b.iter(|| glow_mask(black_box(&tone_mapped), black_box(&params)))
    });
    group.bench_function("grain_1280x720", |b| {
        b.iter_batched(
            || tone_mapped.clone(),
            |mut img| {
                add_grain(&mut img, 0.03, 7);
                img
            },
            BatchSize::LargeInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_process, bench_stages);
criterion_main!(benches);
