use halation::config::demo::load_config;
use halation::image::io::{
    load_bgr_image, save_bgr_image, save_grayscale_f32, save_grayscale_u8, write_json_file,
};
use halation::{HalationFilter, HalationReport};
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let image = load_bgr_image(&config.input)?;
    let params = config.params.resolve(image.width(), image.height());
    let filter = HalationFilter::new(params).map_err(|e| e.to_string())?;
    let report = filter
        .process_with_diagnostics(&image)
        .map_err(|e| e.to_string())?;

    save_bgr_image(&report.result.image, &config.output.image)?;
    println!(
        "Saved halated image to {} ({}x{})",
        config.output.image.display(),
        image.width(),
        image.height()
    );

    if let Some(path) = &config.output.mask {
        save_grayscale_f32(&report.result.glow_mask, path)?;
        println!("Saved glow mask to {}", path.display());
    }
    if let Some(path) = &config.output.edges {
        save_grayscale_u8(&report.result.edges, path)?;
        println!("Saved edge map to {}", path.display());
    }
    if let Some(path) = &config.output.trace_json {
        write_json_file(path, &report.trace)?;
        println!("Saved pipeline trace to {}", path.display());
    }

    print_summary(&report);
    Ok(())
}

fn print_summary(report: &HalationReport) {
    let trace = &report.trace;
    println!("\nPipeline summary");
    println!(
        "  tone: strength={:.2} lut=[{}..{}]",
        trace.tone.strength, trace.tone.lut_first, trace.tone.lut_last
    );
    println!(
        "  mask: edge_pixels={} max={:.3} blur={} dilation={} thresholds={:.0}/{:.0}",
        trace.mask.edge_pixels,
        trace.mask.mask_max,
        trace.mask.blur_radius,
        trace.mask.dilation_size,
        trace.mask.canny_low,
        trace.mask.canny_high
    );
    println!(
        "  grain: amplitude={} seed={:#010x}",
        trace.grain.amplitude, trace.grain.seed
    );
    println!("\nTimings (ms):");
    for stage in &trace.timings.stages {
        println!("  {}: {:.3}", stage.label, stage.elapsed_ms);
    }
    println!("  total: {:.3}", trace.timings.total_ms);
}

fn usage() -> String {
    "Usage: halation_demo <config.json>".to_string()
}
