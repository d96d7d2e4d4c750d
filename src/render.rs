use crate::aliases::{RandGen, Vec3};
use crate::camera::Camera;
use crate::film::Film;
use crate::integrator::{radiance, RenderMode};
use crate::scene::Scene;
use indicatif::{ProgressBar, ProgressStyle};
use itertools::iproduct;
use log::{debug, info};
use rand::SeedableRng;
use std::time::Instant;

#[derive(Clone, Debug)]
pub struct RenderSettings {
    /// Reduced to the largest square not above it.
    pub samples_per_pixel: usize,
    pub max_depth: u32,
    pub mode: RenderMode,
    pub threads: usize,
    pub seed: u64,
    pub show_progress: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        RenderSettings {
            samples_per_pixel: 150,
            max_depth: 50,
            mode: RenderMode::default(),
            threads: std::thread::available_parallelism().map_or(1, |n| n.get()),
            seed: 0,
            show_progress: false,
        }
    }
}

/// The side of the grid of strata: floor(sqrt(samples_per_pixel)), at least 1.
pub fn sqrt_spp(samples_per_pixel: usize) -> usize {
    let fits = |n: usize| n.checked_mul(n).map_or(false, |sq| sq <= samples_per_pixel);
    let mut n = (samples_per_pixel as f64).sqrt() as usize;
    while n > 0 && !fits(n) {
        n -= 1;
    }
    while fits(n + 1) {
        n += 1;
    }
    n.max(1)
}

/// Random stream of a row; independent of which worker renders the row.
fn row_rng(seed: u64, row: usize) -> RandGen {
    RandGen::seed_from_u64(seed ^ (row as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

struct Tracer<'a> {
    scene: &'a Scene,
    camera: &'a Camera,
    mode: RenderMode,
    max_depth: u32,
    sqrt_spp: usize,
}

impl<'a> Tracer<'a> {
    /// Average of one jittered sample per stratum of pixel (i, j).
    fn pixel(&self, i: usize, j: usize, rng: &mut RandGen) -> Vec3 {
        let mut sum = Vec3::zeros();
        for (s_j, s_i) in iproduct!(0..self.sqrt_spp, 0..self.sqrt_spp) {
            let ray = self.camera.get_ray(i, j, s_i, s_j, self.sqrt_spp, rng);
            sum += radiance(self.mode, &ray, self.scene, self.max_depth, rng);
        }
        sum / (self.sqrt_spp * self.sqrt_spp) as f64
    }
    fn row(&self, j: usize, rng: &mut RandGen) -> Vec<Vec3> {
        (0..self.camera.image_width())
            .map(|i| self.pixel(i, j, rng))
            .collect()
    }
}

/// Renders the scene seen from `camera`. Blocks until every pixel is done.
///
/// Rows are dealt round-robin to `settings.threads` workers. Each row has its
/// own random stream derived from `settings.seed`, so the result does not
/// depend on the number of workers.
pub fn render(scene: &Scene, camera: &Camera, settings: &RenderSettings) -> Film {
    let start_time = Instant::now();
    let (width, height) = (camera.image_width(), camera.image_height());
    let sqrt_spp = sqrt_spp(settings.samples_per_pixel);
    if sqrt_spp * sqrt_spp != settings.samples_per_pixel {
        debug!(
            "samples per pixel reduced from {} to {}",
            settings.samples_per_pixel,
            sqrt_spp * sqrt_spp
        );
    }
    let threads = settings.threads.clamp(1, height);
    info!(
        "rendering {}x{}, {} spp, max depth {}, mode {}, {} threads",
        width,
        height,
        sqrt_spp * sqrt_spp,
        settings.max_depth,
        settings.mode,
        threads
    );
    let tracer = Tracer {
        scene,
        camera,
        mode: settings.mode,
        max_depth: settings.max_depth,
        sqrt_spp,
    };
    let progress = if settings.show_progress {
        let bar = ProgressBar::new(height as u64);
        if let Ok(style) = ProgressStyle::with_template("{elapsed_precise} [{bar:40}] {pos}/{len} rows") {
            bar.set_style(style);
        }
        bar
    } else {
        ProgressBar::hidden()
    };

    let mut film = Film::new(width, height);
    let (tx, rx) = crossbeam::channel::unbounded::<(usize, Vec<Vec3>)>();
    let result = crossbeam::scope(|scope| {
        for worker in 0..threads {
            let tx = tx.clone();
            let tracer = &tracer;
            scope.spawn(move |_| {
                for j in (worker..height).step_by(threads) {
                    let mut rng = row_rng(settings.seed, j);
                    if tx.send((j, tracer.row(j, &mut rng))).is_err() {
                        return;
                    }
                }
                debug!("worker {} finished", worker);
            });
        }
        // the receiving loop ends once every worker has dropped its sender
        drop(tx);
        for (j, row) in rx.iter() {
            film.set_row(j, &row);
            progress.inc(1);
        }
    });
    if let Err(panic) = result {
        std::panic::resume_unwind(panic);
    }
    progress.finish_and_clear();
    info!(
        "completed ({:.3} secs elapsed)",
        start_time.elapsed().as_secs_f64()
    );
    film
}
