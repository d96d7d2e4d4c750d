mod scenes;

use crate::scenes::ScenesType;
use clap::Parser;
use env_logger::Env;
use log::{error, info};
use mistrace::camera::Camera;
use mistrace::film::Ppm;
use mistrace::integrator::RenderMode;
use mistrace::render::{render, RenderSettings};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Renders a Cornell box with the chosen light transport estimator.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Options {
    #[arg(long, value_enum, default_value_t = ScenesType::Cornell)]
    scene: ScenesType,

    /// bsdf, mixture, nee or mis
    #[arg(short, long, default_value_t = RenderMode::Mis)]
    mode: RenderMode,

    /// Image width in pixels; the height follows the scene's aspect ratio.
    #[arg(short, long)]
    width: Option<usize>,

    /// Samples per pixel, reduced to a square number.
    #[arg(long, default_value_t = 150)]
    spp: usize,

    #[arg(long, default_value_t = 50)]
    max_depth: u32,

    /// Worker threads; all cores when omitted.
    #[arg(short, long)]
    threads: Option<usize>,

    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Output file, .ppm or .png.
    #[arg(short, long, default_value = "image.ppm")]
    output: PathBuf,

    /// A P3 ppm to compare the result with; the mean squared error is logged.
    #[arg(short, long)]
    reference: Option<PathBuf>,

    #[arg(long)]
    no_progress: bool,
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let options = Options::parse();
    if let Err(msg) = run(&options) {
        error!("{}", msg);
        std::process::exit(1);
    }
}

fn run(options: &Options) -> Result<(), String> {
    let start_time = Instant::now();
    if !output_dir_exists(&options.output) {
        return Err(format!(
            "output directory does not exist: {}",
            options.output.display()
        ));
    }
    let reference = match &options.reference {
        Some(path) => Some(
            Ppm::open(path).map_err(|e| format!("failed to read {}: {}", path.display(), e))?,
        ),
        None => None,
    };
    let (scene, mut camera_settings) = scenes::get(options.scene);
    if let Some(width) = options.width {
        if width == 0 {
            return Err("image width must be positive".to_string());
        }
        camera_settings.image_width = width;
    }
    let camera = Camera::new(&camera_settings);
    info!(
        "scene {:?} constructed ({:.3} secs elapsed)",
        options.scene,
        start_time.elapsed().as_secs_f64()
    );

    let defaults = RenderSettings::default();
    let settings = RenderSettings {
        samples_per_pixel: options.spp,
        max_depth: options.max_depth,
        mode: options.mode,
        threads: options.threads.unwrap_or(defaults.threads),
        seed: options.seed,
        show_progress: !options.no_progress,
    };
    let film = render(&scene, &camera, &settings);
    film.save(&options.output)
        .map_err(|e| format!("failed to write {}: {}", options.output.display(), e))?;
    info!(
        "saved {} ({:.3} secs elapsed)",
        options.output.display(),
        start_time.elapsed().as_secs_f64()
    );
    if let (Some(reference), Some(path)) = (&reference, &options.reference) {
        let mse = film.to_ppm().mse(reference).ok_or_else(|| {
            format!(
                "{} is {}x{}, the render is {}x{}",
                path.display(),
                reference.width(),
                reference.height(),
                film.width(),
                film.height()
            )
        })?;
        info!("mse against {}: {:.6}", path.display(), mse);
    }
    Ok(())
}

fn output_dir_exists(path: &Path) -> bool {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.is_dir(),
        _ => true,
    }
}
