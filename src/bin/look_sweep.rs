use halation::config::sweep::{load_config, SweepConfig};
use halation::image::io::{load_bgr_image, save_bgr_image};
use halation::image::BgrImage;
use halation::{FilmLook, HalationFilter, HalationParams};
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
    std::fs::create_dir_all(&config.output_dir).map_err(|e| {
        format!(
            "Failed to create output dir {}: {e}",
            config.output_dir.display()
        )
    })?;

    for look in FilmLook::all() {
        render(&image, &config, look.name(), look.label(), look.params())?;
    }
    if config.include_adaptive {
        let params = HalationParams::adaptive(image.width(), image.height());
        render(&image, &config, "adaptive", "Resolution-adaptive", params)?;
    }
    Ok(())
}

fn render(
    image: &BgrImage,
    config: &SweepConfig,
    name: &str,
    label: &str,
    mut params: HalationParams,
) -> Result<(), String> {
    if let Some(seed) = config.grain_seed {
        params.grain_seed = Some(seed);
    }
    let filter = HalationFilter::new(params).map_err(|e| e.to_string())?;
    let result = filter.process(image).map_err(|e| e.to_string())?;
    let path = config.output_dir.join(format!("{name}.png"));
    save_bgr_image(&result.image, &path)?;
    println!(
        "{label}: {:.2} ms -> {}",
        result.latency_ms,
        path.display()
    );
    Ok(())
}

fn usage() -> String {
    "Usage: look_sweep <config.json>".to_string()
}
